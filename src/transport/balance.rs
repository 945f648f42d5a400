use crate::domain::{AccountName, AccountPassword, GatewayConfig};
use crate::transport::FormatError;

pub const BALANCE_PATH: &str = "/SMS/API/GetBalance";

pub fn encode_balance_query(config: &GatewayConfig) -> Vec<(String, String)> {
    vec![
        (
            AccountName::FIELD.to_owned(),
            config.account_name.as_str().to_owned(),
        ),
        (
            AccountPassword::FIELD.to_owned(),
            config.account_password.as_str().to_owned(),
        ),
    ]
}

/// Parse a balance body: a base-10 integer, optionally wrapped in one pair of `"`.
///
/// Exactly one quote is stripped from each end when present. Whitespace is not trimmed.
pub fn decode_balance_response(body: &[u8]) -> Result<i64, FormatError> {
    let text = String::from_utf8_lossy(body);
    let text: &str = &text;
    let unquoted = text.strip_prefix('"').unwrap_or(text);
    let unquoted = unquoted.strip_suffix('"').unwrap_or(unquoted);

    unquoted
        .parse::<i64>()
        .map_err(|source| FormatError::InvalidBalance {
            body: text.to_owned(),
            source,
        })
}
