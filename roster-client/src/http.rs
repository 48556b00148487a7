//! reqwest-backed transport

use async_trait::async_trait;
use reqwest::{Client, Method};
use roster_core::{RosterError, RosterResult};
use serde_json::Value;
use tracing::debug;

use crate::request::{HttpMethod, RequestDescriptor};
use crate::transport::Transport;
use crate::wire::ApiErrorBody;

/// HTTP transport over a shared reqwest client.
///
/// Holds no credential state of its own; every credential travels in the
/// descriptor's headers.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Build a transport around an existing reqwest client, e.g. one with
    /// custom TLS or proxy settings.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: &RequestDescriptor) -> RosterResult<Value> {
        debug!(url = %request.url, method = ?request.method, "executing request");

        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| RosterError::Transport {
            message: e.to_string(),
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| RosterError::Transport {
            message: e.to_string(),
        })?;

        if status.is_success() {
            serde_json::from_str(&text).map_err(|_| RosterError::ResponseParsing)
        } else if let Ok(body) = serde_json::from_str::<ApiErrorBody>(&text) {
            Err(RosterError::Api {
                code: body.code,
                message: body.message,
            })
        } else {
            Err(RosterError::ResponseParsing)
        }
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport").finish()
    }
}
