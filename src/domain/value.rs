use std::fmt;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
/// JoSMS account name (`AccName`).
///
/// Opaque: no validation is performed, an empty value is simply rejected by the gateway.
pub struct AccountName(String);

impl AccountName {
    /// Query parameter name used by JoSMS (`AccName`).
    pub const FIELD: &'static str = "AccName";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the account name as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
/// JoSMS account password (`AccPass`).
///
/// `Debug` output is redacted so the value never ends up in logs.
pub struct AccountPassword(String);

impl AccountPassword {
    /// Query parameter name used by JoSMS (`AccPass`).
    pub const FIELD: &'static str = "AccPass";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccountPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccountPassword(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
/// Provider-assigned sender id (`senderid`), shown as the message origin.
///
/// The same configured value is used for general, OTP and bulk traffic.
pub struct SenderId(String);

impl SenderId {
    /// Query parameter name used by JoSMS (`senderid`).
    pub const FIELD: &'static str = "senderid";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the sender id as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(transparent)]
/// Gateway-side timeout hint (`requesttimeout`), in the gateway's own units.
///
/// Only sent by bulk sends. This is not a local HTTP timeout.
pub struct RequestTimeout(u32);

impl RequestTimeout {
    /// Query parameter name used by JoSMS (`requesttimeout`).
    pub const FIELD: &'static str = "requesttimeout";

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Message id returned by the send endpoints.
///
/// Holds the raw value segment of the gateway's `<prefix> = <value>` response line,
/// without any trimming.
pub struct MessageId(String);

impl MessageId {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw message id.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for MessageId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for MessageId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
