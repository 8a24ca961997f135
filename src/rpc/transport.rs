use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use super::envelope::{RpcRequest, RpcResponse};
use super::redaction::{redact_body, redact_params};
use crate::core::errors::ClientError;

/// Sends JSON-RPC envelopes to a node.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one envelope and returns the decoded reply.
    async fn send(&self, request: &RpcRequest) -> Result<RpcResponse, ClientError>;

    /// Builds an envelope, sends it and unwraps the `result` field.
    ///
    /// A JSON `null` result is returned as `Value::Null`; an `error` object
    /// or a reply without `result` is an error.
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, ClientError> {
        let request = RpcRequest::new(method, params);
        debug!(method, params = %redact_params(&request.params), "rpc call");

        let response = self.send(&request).await?;
        if let Some(err) = response.error {
            return Err(ClientError::Rpc { code: err.code, message: err.message });
        }
        response.result.ok_or_else(|| ClientError::MissingResult(method.to_string()))
    }
}

/// HTTP POST transport bound to a single endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    url: reqwest::Url,
}

impl HttpTransport {
    pub fn new(endpoint: &str) -> Result<Self, ClientError> {
        Self::build(endpoint, Client::builder())
    }

    pub fn with_timeout(endpoint: &str, timeout: Duration) -> Result<Self, ClientError> {
        Self::build(endpoint, Client::builder().timeout(timeout))
    }

    fn build(endpoint: &str, builder: reqwest::ClientBuilder) -> Result<Self, ClientError> {
        let endpoint = endpoint.trim();
        let url = reqwest::Url::parse(endpoint).map_err(|e| ClientError::InvalidUrl {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;
        let client = builder
            .build()
            .map_err(|e| ClientError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        info!("Using node endpoint: {}", url);
        Ok(Self { client, url })
    }

    pub fn endpoint(&self) -> &str {
        self.url.as_str()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &RpcRequest) -> Result<RpcResponse, ClientError> {
        // `.json()` sets Content-Type: application/json
        let resp = self.client.post(self.url.clone()).json(request).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(ClientError::HttpStatus {
                status: status.as_u16(),
                body: redact_body(&body),
            });
        }

        let reply: RpcResponse = serde_json::from_str(&body)?;
        Ok(reply)
    }
}
