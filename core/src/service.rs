//! The four outward item API calls, each one blocking round trip.

use log::{debug, info};

use crate::client::ItemClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::{Credentials, ItemDto};

/// `ItemClient` bound to a `Transport`.
///
/// Failures are returned as-is: no retries and no fallback values.
#[derive(Debug, Clone)]
pub struct ItemService<T = UreqTransport> {
    client: ItemClient,
    transport: T,
}

impl ItemService<UreqTransport> {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self {
            client: ItemClient::new(&config.base_url)?,
            transport: UreqTransport::new(config.timeout),
        })
    }
}

impl<T: Transport> ItemService<T> {
    pub fn with_transport(client: ItemClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &ItemClient {
        &self.client
    }

    /// GET `/api/server/get-call-obj?query=..`, decoded as one item.
    pub fn get_call_object(&self, query: &str) -> Result<ItemDto, ApiError> {
        let response = self.send(self.client.build_get_call_object(query)?)?;
        self.client.parse_get_call_object(response)
    }

    /// GET `/api/server/get-call-list`, decoded from its `items` array.
    pub fn get_call_list(&self) -> Result<Vec<ItemDto>, ApiError> {
        let response = self.send(self.client.build_get_call_list()?)?;
        debug!("body = {}", response.body);
        self.client.parse_get_call_list(response)
    }

    /// POST `credentials` to `/api/server/post-call/{query}`.
    pub fn post_call(&self, query: &str, credentials: &Credentials) -> Result<ItemDto, ApiError> {
        let response = self.send(self.client.build_post_call(query, credentials)?)?;
        self.client.parse_post_call(response)
    }

    /// POST `credentials` to `/api/server/exchange-call` with `token` in the
    /// `X-Authorization` header.
    pub fn exchange_call(
        &self,
        token: &str,
        credentials: &Credentials,
    ) -> Result<Vec<ItemDto>, ApiError> {
        let response = self.send(self.client.build_exchange_call(token, credentials)?)?;
        debug!("body = {}", response.body);
        self.client.parse_exchange_call(response)
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        info!("{} uri = {}", request.method, request.url);
        let response = self.transport.execute(&request)?;
        info!("statusCode = {}", response.status);
        Ok(response)
    }
}
