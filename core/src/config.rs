//! Client settings.
//!
//! # Design
//! `ClientConfig` is plain data built in code; the library reads no files or
//! environment variables. `ItemService::new` turns `base_url` into an
//! `ItemClient` and `timeout` into the ureq agent's global timeout.

use std::time::Duration;

/// Address of the item server used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:7070";

/// Settings for `ItemService`.
///
/// `timeout` of `None` leaves ureq's defaults in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
