//! Blocking client for the item API served on `http://localhost:7070`.
//!
//! # Overview
//! Four calls: fetch one item by query, fetch the item list, POST credentials
//! to fetch one item by path variable, and the exchange call that POSTs
//! credentials with an `X-Authorization` token and gets the item list back.
//!
//! # Design
//! - `ItemClient` is stateless and does no I/O: `build_*` produces an
//!   `HttpRequest`, `parse_*` consumes an `HttpResponse`.
//! - `Transport` executes requests; `UreqTransport` is the blocking one.
//! - `ItemService` composes the two and logs URI and status via `log`.
//! - `decode` maps JSON to `ItemDto` field by field, never through a derive.

pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod http;
pub mod service;
pub mod transport;
pub mod types;

pub use client::ItemClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use decode::{decode_item, decode_items};
pub use error::{ApiError, DecodeError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::ItemService;
pub use transport::{Transport, UreqTransport};
pub use types::{Credentials, ItemDto, Price};
