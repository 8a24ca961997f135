//! Result extension helpers
//!
//! Node operations report failures as "no data" instead of raising. These
//! helpers do the conversion in one place so every swallowed error is logged.

use std::fmt::Display;

pub trait ResultExt<T> {
    /// Converts to `Option`, logging the error with `context` on failure.
    fn ok_or_log(self, context: &str) -> Option<T>;

    /// Returns the value, or logs and falls back to `default`.
    fn unwrap_or_log(self, default: T, context: &str) -> T;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn ok_or_log(self, context: &str) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!("{} failed: {}", context, e);
                None
            }
        }
    }

    fn unwrap_or_log(self, default: T, context: &str) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("{} failed: {}", context, e);
                default
            }
        }
    }
}

impl<T> ResultExt<T> for Option<T> {
    fn ok_or_log(self, context: &str) -> Option<T> {
        if self.is_none() {
            tracing::debug!("{} returned no data", context);
        }
        self
    }

    fn unwrap_or_log(self, default: T, context: &str) -> T {
        match self {
            Some(v) => v,
            None => {
                tracing::warn!("{} returned no data, using default", context);
                default
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ClientError;

    #[test]
    fn test_ok_or_log_swallows_error() {
        let res: Result<u8, ClientError> = Err(ClientError::Transport("down".into()));
        assert_eq!(res.ok_or_log("eth_gasPrice"), None);
        let ok: Result<u8, ClientError> = Ok(7);
        assert_eq!(ok.ok_or_log("eth_gasPrice"), Some(7));
    }

    #[test]
    fn test_unwrap_or_log_default() {
        let none: Option<Vec<String>> = None;
        assert!(none.unwrap_or_log(Vec::new(), "parity_localTransactions").is_empty());
        let res: Result<u8, String> = Err("boom".into());
        assert_eq!(res.unwrap_or_log(3, "ctx"), 3);
    }
}
