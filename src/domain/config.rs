use serde::Deserialize;

use crate::domain::value::{AccountName, AccountPassword, RequestTimeout, SenderId};

/// Gateway's documented recipient limit for a single bulk send.
///
/// Not enforced by the client; callers split larger lists themselves.
pub const SEND_BULK_MAX_RECIPIENTS: usize = 120;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Everything the client needs to talk to one JoSMS account.
///
/// Construct it with [`GatewayConfig::new`] or deserialize it from any serde format:
///
/// ```json
/// {
///   "base_url": "https://www.josms.net",
///   "account_name": "account",
///   "account_password": "secret",
///   "sender_id": "Sender",
///   "request_timeout": 30
/// }
/// ```
///
/// `request_timeout` defaults to `0` when omitted. No field is validated.
pub struct GatewayConfig {
    /// Gateway origin without a trailing slash, e.g. `https://www.josms.net`.
    pub base_url: String,
    pub account_name: AccountName,
    pub account_password: AccountPassword,
    pub sender_id: SenderId,
    #[serde(default)]
    pub request_timeout: RequestTimeout,
}

impl GatewayConfig {
    pub fn new(
        base_url: impl Into<String>,
        account_name: impl Into<String>,
        account_password: impl Into<String>,
        sender_id: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            account_name: AccountName::new(account_name),
            account_password: AccountPassword::new(account_password),
            sender_id: SenderId::new(sender_id),
            request_timeout: RequestTimeout::default(),
        }
    }

    /// Set the gateway-side timeout hint sent with bulk messages.
    pub fn with_request_timeout(mut self, request_timeout: u32) -> Self {
        self.request_timeout = RequestTimeout::new(request_timeout);
        self
    }
}
