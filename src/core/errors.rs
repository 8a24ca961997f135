use thiserror::Error;

/// Error type for node RPC and fee operations.
///
/// Public node operations collapse these into `None` after logging; the
/// variants stay visible for callers that use the strict `request`/`call` API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured endpoint is not a valid URL.
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    /// Network or HTTP client failure.
    #[error("Transport error: {0}")]
    Transport(String),
    /// The node answered with a non-success HTTP status.
    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    /// The node returned a JSON-RPC error object.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },
    /// The reply carried neither `result` nor `error`.
    #[error("RPC reply for '{0}' has no result")]
    MissingResult(String),
    /// The reply could not be decoded.
    #[error("Deserialization error: {0}")]
    Deserialization(String),
    /// Configuration errors.
    #[error("Configuration error: {0}")]
    Config(String),
    /// Unit or number conversion failures.
    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl ClientError {
    /// Network unreachable, bad status or unreadable body.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ClientError::Transport(_)
                | ClientError::HttpStatus { .. }
                | ClientError::Deserialization(_)
        )
    }

    /// The node itself refused the call.
    pub fn is_rpc(&self) -> bool {
        matches!(self, ClientError::Rpc { .. } | ClientError::MissingResult(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Deserialization(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Deserialization(err.to_string())
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_rpc_error() {
        let err = ClientError::Rpc { code: -32601, message: "Method not found".to_string() };
        assert_eq!(format!("{}", err), "RPC error -32601: Method not found");
    }

    #[test]
    fn test_classification() {
        assert!(ClientError::Transport("refused".into()).is_transport());
        assert!(ClientError::HttpStatus { status: 502, body: String::new() }.is_transport());
        assert!(!ClientError::Transport("refused".into()).is_rpc());
        assert!(ClientError::MissingResult("eth_gasPrice".into()).is_rpc());
        assert!(!ClientError::Config("bad".into()).is_transport());
    }

    #[test]
    fn test_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ClientError = json_err.into();
        assert!(matches!(err, ClientError::Deserialization(_)));
    }
}
