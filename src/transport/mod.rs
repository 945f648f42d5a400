//! Transport layer: endpoint paths, query parameters and response-body grammar.

mod balance;
mod message;
mod send_sms;

use std::num::ParseIntError;

use url::Url;

pub use balance::{BALANCE_PATH, decode_balance_response, encode_balance_query};
pub use send_sms::{
    SEND_BULK_PATH, SEND_OTP_PATH, SEND_PATH, decode_message_id_response, encode_send_bulk_query,
    encode_send_query,
};

/// Separator between the prefix and the value of a send response line.
pub const RESPONSE_SEPARATOR: &str = " = ";

/// Response body did not match the grammar expected for the operation.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// Send-style body without the ` = ` separator.
    #[error("invalid response format: expected `<prefix> = <value>`, got {body:?}")]
    MissingSeparator { body: String },

    /// Balance body that is not a base-10 integer once unquoted.
    #[error("invalid balance {body:?}: {source}")]
    InvalidBalance {
        body: String,
        #[source]
        source: ParseIntError,
    },
}

/// Append `path` to `base_url` and encode `params` as the query string.
pub fn endpoint_url(
    base_url: &str,
    path: &str,
    params: &[(String, String)],
) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(&format!("{base_url}{path}"))?;
    url.query_pairs_mut().extend_pairs(params);
    Ok(url)
}
