//! Domain layer: configuration and value types (no I/O).

mod config;
mod value;

pub use config::{GatewayConfig, SEND_BULK_MAX_RECIPIENTS};
pub use value::{AccountName, AccountPassword, MessageId, RequestTimeout, SenderId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_new_defaults_request_timeout_to_zero() {
        let config = GatewayConfig::new("https://example.invalid", "acc", "pass", "sender");
        assert_eq!(config.request_timeout.value(), 0);
        assert_eq!(config.account_name.as_str(), "acc");
        assert_eq!(config.account_password.as_str(), "pass");
        assert_eq!(config.sender_id.as_str(), "sender");

        let config = config.with_request_timeout(45);
        assert_eq!(config.request_timeout, RequestTimeout::new(45));
    }

    #[test]
    fn config_accepts_empty_credentials() {
        let config = GatewayConfig::new("", "", "", "");
        assert_eq!(config.account_name.as_str(), "");
        assert_eq!(config.sender_id.as_str(), "");
    }

    #[test]
    fn config_deserializes_with_optional_request_timeout() {
        let json = r#"
        {
          "base_url": "https://www.josms.net",
          "account_name": "acc",
          "account_password": "pass",
          "sender_id": "Sender"
        }
        "#;
        let config: GatewayConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.base_url, "https://www.josms.net");
        assert_eq!(config.request_timeout.value(), 0);

        let json = r#"
        {
          "base_url": "https://www.josms.net",
          "account_name": "acc",
          "account_password": "pass",
          "sender_id": "Sender",
          "request_timeout": 30
        }
        "#;
        let config: GatewayConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.request_timeout.value(), 30);
    }

    #[test]
    fn password_debug_is_redacted() {
        let config = GatewayConfig::new("https://example.invalid", "acc", "hunter2", "sender");
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"), "{debug}");
        assert!(debug.contains("AccountPassword(***)"), "{debug}");
    }

    #[test]
    fn field_names_match_gateway_parameters() {
        assert_eq!(AccountName::FIELD, "AccName");
        assert_eq!(AccountPassword::FIELD, "AccPass");
        assert_eq!(SenderId::FIELD, "senderid");
        assert_eq!(RequestTimeout::FIELD, "requesttimeout");
    }

    #[test]
    fn message_id_compares_with_str() {
        let id = MessageId::new("12345");
        assert_eq!(id, "12345");
        assert_eq!(id.to_string(), "12345");
        assert_eq!(id.into_string(), "12345".to_owned());
    }
}
