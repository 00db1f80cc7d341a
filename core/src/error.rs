//! Error types for the item API client.
//!
//! # Design
//! `ApiError` is what every outward operation returns. Decoding failures get
//! their own `DecodeError` enum so callers can tell "the server answered with
//! something we cannot read" apart from transport and status failures, and so
//! the decoder can be used on its own. Decode errors carry the JSON path of
//! the offending value (`items[2].price`).

use thiserror::Error;

/// Errors returned by `ItemClient`, `ItemService` and the transports.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The configured base URL cannot have paths appended to it.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// A path variable that would not survive as its own path segment.
    #[error("invalid path variable '{0}': empty, '.' and '..' are not allowed")]
    InvalidPathVariable(String),

    /// Connection refused, timeout, or any other failure below HTTP.
    #[error("transport error: {0}")]
    Transport(#[from] ureq::Error),

    /// The server returned a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body did not have the expected shape.
    #[error("decoding failed: {0}")]
    Decode(#[from] DecodeError),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// Errors produced while turning a response body into `ItemDto` values.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("expected a JSON object at '{path}'")]
    NotAnObject { path: String },

    #[error("missing field '{path}'")]
    MissingField { path: String },

    #[error("field '{path}' is not {expected}")]
    WrongType { path: String, expected: &'static str },
}
