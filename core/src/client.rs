//! Stateless HTTP request builder and response parser for the item API.
//!
//! # Design
//! `ItemClient` holds only a parsed base URL and carries no mutable state
//! between calls. Each API operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. `ItemService` glues the two halves to a transport.

use url::{form_urlencoded, Url};

use crate::decode::{decode_item, decode_items};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Credentials, ItemDto};

pub const GET_CALL_OBJ_PATH: &str = "/api/server/get-call-obj";
pub const GET_CALL_LIST_PATH: &str = "/api/server/get-call-list";
pub const POST_CALL_PATH: &str = "/api/server/post-call";
pub const EXCHANGE_CALL_PATH: &str = "/api/server/exchange-call";

/// Header carrying the caller's token on the exchange call.
pub const AUTHORIZATION_HEADER: &str = "X-Authorization";

/// Synchronous, stateless client for the item API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct ItemClient {
    base_url: Url,
}

impl ItemClient {
    /// Fails if `base_url` is not an absolute URL that paths can be appended to.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            });
        }
        Ok(Self { base_url: parsed })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `path` (plus an optional extra segment) against the base URL.
    ///
    /// Segments are appended to whatever path the base already has, and each
    /// one is percent-encoded on its own. `variable` always lands as exactly
    /// one extra segment; values that URL normalization would drop or collapse
    /// (`""`, `"."`, `".."`) are rejected.
    pub fn endpoint(&self, path: &str, variable: Option<&str>) -> Result<Url, ApiError> {
        if let Some(variable) = variable {
            if matches!(variable, "" | "." | "..") {
                return Err(ApiError::InvalidPathVariable(variable.to_string()));
            }
        }
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(path.split('/').filter(|s| !s.is_empty()));
            if let Some(variable) = variable {
                segments.push(variable);
            }
        }
        Ok(url)
    }

    /// The query value is percent-encoded with spaces as `%20`, not `+`.
    pub fn build_get_call_object(&self, query: &str) -> Result<HttpRequest, ApiError> {
        let mut url = self.endpoint(GET_CALL_OBJ_PATH, None)?;
        url.set_query(Some(&format!("query={}", encode_query_value(query))));
        Ok(HttpRequest {
            method: HttpMethod::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn build_get_call_list(&self) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Get,
            url: self.endpoint(GET_CALL_LIST_PATH, None)?.into(),
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn build_post_call(
        &self,
        query: &str,
        credentials: &Credentials,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(credentials).map_err(ApiError::Serialization)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.endpoint(POST_CALL_PATH, Some(query))?.into(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_exchange_call(
        &self,
        token: &str,
        credentials: &Credentials,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(credentials).map_err(ApiError::Serialization)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.endpoint(EXCHANGE_CALL_PATH, None)?.into(),
            headers: vec![
                ("content-type".to_string(), "application/json".to_string()),
                (AUTHORIZATION_HEADER.to_string(), token.to_string()),
            ],
            body: Some(body),
        })
    }

    pub fn parse_get_call_object(&self, response: HttpResponse) -> Result<ItemDto, ApiError> {
        check_status(&response)?;
        Ok(decode_item(&response.body)?)
    }

    pub fn parse_get_call_list(&self, response: HttpResponse) -> Result<Vec<ItemDto>, ApiError> {
        check_status(&response)?;
        Ok(decode_items(&response.body)?)
    }

    pub fn parse_post_call(&self, response: HttpResponse) -> Result<ItemDto, ApiError> {
        check_status(&response)?;
        Ok(decode_item(&response.body)?)
    }

    pub fn parse_exchange_call(&self, response: HttpResponse) -> Result<Vec<ItemDto>, ApiError> {
        check_status(&response)?;
        Ok(decode_items(&response.body)?)
    }
}

/// Form encoding, except a space becomes `%20`. A literal `+` in the input is
/// already `%2B` at this point, so every `+` left is a space.
fn encode_query_value(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Any non-2xx status becomes `ApiError::HttpError`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
