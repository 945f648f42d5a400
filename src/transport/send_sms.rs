use crate::domain::{
    AccountName, AccountPassword, GatewayConfig, MessageId, RequestTimeout, SenderId,
};
use crate::transport::message::sanitize_message;
use crate::transport::{FormatError, RESPONSE_SEPARATOR};

/// General single-recipient messages.
pub const SEND_PATH: &str = "/SMSServices/Clients/Prof/RestSingleSMS_General/SendSMS";
/// OTP traffic goes through a separate sub-service with the same parameters.
pub const SEND_OTP_PATH: &str = "/SMSServices/Clients/Prof/RestSingleSMS/SendSMS";
pub const SEND_BULK_PATH: &str = "/sms/api/SendBulkMessages.cfm";

const NUMBERS_FIELD: &str = "numbers";
const MESSAGE_FIELD: &str = "msg";

/// Query for the single-recipient endpoints (general and OTP).
pub fn encode_send_query(
    config: &GatewayConfig,
    number: &str,
    message: &str,
) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();
    push_common(&mut params, config, number.to_owned(), message);
    params
}

/// Query for the bulk endpoint: numbers are comma-joined as given, without dedup or limits.
pub fn encode_send_bulk_query<S: AsRef<str>>(
    config: &GatewayConfig,
    numbers: &[S],
    message: &str,
) -> Vec<(String, String)> {
    let numbers = numbers
        .iter()
        .map(AsRef::<str>::as_ref)
        .collect::<Vec<_>>()
        .join(",");

    let mut params = Vec::<(String, String)>::new();
    push_common(&mut params, config, numbers, message);
    params.push((
        RequestTimeout::FIELD.to_owned(),
        config.request_timeout.value().to_string(),
    ));
    params
}

fn push_common(
    params: &mut Vec<(String, String)>,
    config: &GatewayConfig,
    numbers: String,
    message: &str,
) {
    params.push((
        AccountName::FIELD.to_owned(),
        config.account_name.as_str().to_owned(),
    ));
    params.push((
        AccountPassword::FIELD.to_owned(),
        config.account_password.as_str().to_owned(),
    ));
    params.push((SenderId::FIELD.to_owned(), config.sender_id.as_str().to_owned()));
    params.push((NUMBERS_FIELD.to_owned(), numbers));
    params.push((MESSAGE_FIELD.to_owned(), sanitize_message(message)));
}

/// Parse a `<prefix> = <value>` response line into the message id.
///
/// The id is the segment between the first and the second separator; anything after a
/// second ` = ` is dropped. The value is returned untrimmed.
pub fn decode_message_id_response(body: &[u8]) -> Result<MessageId, FormatError> {
    let text = String::from_utf8_lossy(body);
    let value = text.split(RESPONSE_SEPARATOR).nth(1).map(str::to_owned);
    match value {
        Some(value) => Ok(MessageId::new(value)),
        None => Err(FormatError::MissingSeparator {
            body: text.into_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GatewayConfig {
        GatewayConfig::new("https://example.invalid", "acc", "pass", "Sender")
            .with_request_timeout(30)
    }

    #[test]
    fn encode_send_query_has_gateway_parameter_names() {
        let params = encode_send_query(&config(), "962790000000", "hello");
        assert_eq!(
            params,
            vec![
                ("AccName".to_owned(), "acc".to_owned()),
                ("AccPass".to_owned(), "pass".to_owned()),
                ("senderid".to_owned(), "Sender".to_owned()),
                ("numbers".to_owned(), "962790000000".to_owned()),
                ("msg".to_owned(), "hello".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_send_query_sanitizes_message_and_keeps_number_verbatim() {
        let params = encode_send_query(&config(), " +962 79&", "100% & more");
        assert!(params.contains(&("numbers".to_owned(), " +962 79&".to_owned())));
        assert!(params.contains(&("msg".to_owned(), "100%25 %26 more".to_owned())));
    }

    #[test]
    fn encode_send_bulk_query_joins_numbers_and_adds_timeout() {
        let params = encode_send_bulk_query(&config(), &["12345", "67890", "12345"], "hi");
        assert_eq!(
            params,
            vec![
                ("AccName".to_owned(), "acc".to_owned()),
                ("AccPass".to_owned(), "pass".to_owned()),
                ("senderid".to_owned(), "Sender".to_owned()),
                ("numbers".to_owned(), "12345,67890,12345".to_owned()),
                ("msg".to_owned(), "hi".to_owned()),
                ("requesttimeout".to_owned(), "30".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_send_bulk_query_allows_empty_numbers() {
        let numbers: Vec<String> = Vec::new();
        let params = encode_send_bulk_query(&config(), &numbers, "hi");
        assert!(params.contains(&("numbers".to_owned(), String::new())));
    }

    #[test]
    fn decode_returns_value_after_separator() {
        let id = decode_message_id_response(b"message_id = 12345").unwrap();
        assert_eq!(id, "12345");
    }

    #[test]
    fn decode_takes_second_segment_only() {
        let id = decode_message_id_response(b"id = 1 = 2").unwrap();
        assert_eq!(id, "1");
    }

    #[test]
    fn decode_does_not_trim_value() {
        let id = decode_message_id_response(b"id = 77\r\n").unwrap();
        assert_eq!(id, "77\r\n");

        let id = decode_message_id_response(b"id = ").unwrap();
        assert_eq!(id, "");
    }

    #[test]
    fn decode_requires_spaced_separator() {
        let bodies: [&[u8]; 4] = [b"invalid_response", b"id=1", b"id =1", b""];
        for body in bodies {
            assert!(matches!(
                decode_message_id_response(body),
                Err(FormatError::MissingSeparator { .. })
            ));
        }
    }
}
