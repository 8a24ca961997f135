// In-memory transport that replays scripted replies and records every request.
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Arc;

use super::envelope::{RpcErrorObject, RpcRequest, RpcResponse, JSON_RPC_VERSION, REQUEST_ID};
use super::transport::Transport;
use crate::core::errors::ClientError;

/// One scripted reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// `{"result": value}`
    Result(Value),
    /// `{"error": {code, message}}`
    Error { code: i64, message: String },
    /// Transport-level failure.
    Fail(String),
}

/// Scripted transport. Clones share the same script and request log.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    requests: Arc<Mutex<Vec<RpcRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, reply: MockReply) -> &Self {
        self.replies.lock().push_back(reply);
        self
    }

    pub fn push_result(&self, value: Value) -> &Self {
        self.push(MockReply::Result(value))
    }

    pub fn push_error(&self, code: i64, message: &str) -> &Self {
        self.push(MockReply::Error { code, message: message.to_string() })
    }

    pub fn push_failure(&self, reason: &str) -> &Self {
        self.push(MockReply::Fail(reason.to_string()))
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<RpcRequest> {
        self.requests.lock().clone()
    }

    /// Method names received so far, in order.
    pub fn methods(&self) -> Vec<String> {
        self.requests.lock().iter().map(|r| r.method.clone()).collect()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &RpcRequest) -> Result<RpcResponse, ClientError> {
        self.requests.lock().push(request.clone());

        let reply = self
            .replies
            .lock()
            .pop_front()
            .ok_or_else(|| {
                ClientError::Transport(format!("no scripted reply for {}", request.method))
            })?;

        let mut response = RpcResponse {
            id: Some(Value::from(REQUEST_ID)),
            jsonrpc: Some(JSON_RPC_VERSION.to_string()),
            ..Default::default()
        };
        match reply {
            MockReply::Result(value) => response.result = Some(value),
            MockReply::Error { code, message } => {
                response.error = Some(RpcErrorObject { code, message, data: None })
            }
            MockReply::Fail(reason) => return Err(ClientError::Transport(reason)),
        }
        Ok(response)
    }
}
