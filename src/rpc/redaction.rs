// Keeps account passwords out of logs.
use serde_json::Value;
use std::env;

fn secrets_allowed() -> bool {
    env::var("DEV_PRINT_SECRETS").ok().as_deref() == Some("1")
}

/// Render RPC params for logging unless DEV_PRINT_SECRETS=1 is set.
/// By default only the param count is shown.
pub fn redact_params(params: &[Value]) -> String {
    if secrets_allowed() {
        return Value::Array(params.to_vec()).to_string();
    }
    format!("<redacted params={}>", params.len())
}

/// Redact a reply body unless DEV_PRINT_SECRETS=1 is set.
pub fn redact_body(s: &str) -> String {
    if secrets_allowed() {
        return s.to_string();
    }
    format!("<redacted len={}>", s.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_redacts_by_default() {
        if secrets_allowed() {
            return;
        }
        assert_eq!(redact_params(&[json!("0xabc"), json!("hunter2")]), "<redacted params=2>");
        assert_eq!(redact_body("secret"), "<redacted len=6>");
    }
}
