//! Typed Rust client for the JoSMS gateway HTTP API.
//!
//! The crate is split the usual way: a domain layer of plain value types, a
//! transport layer that knows the gateway's wire quirks (endpoint paths, query
//! parameter names, the `key = value` response lines), and a small client layer
//! that issues one GET request per call.
//!
//! ```rust,no_run
//! use josms::{GatewayConfig, JoSmsClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), josms::JoSmsError> {
//!     let config = GatewayConfig::new("https://www.josms.net", "account", "secret", "Sender");
//!     let client = JoSmsClient::new(config);
//!
//!     let balance = client.balance().await?;
//!     let id = client.send("962790000000", "hello").await?;
//!     println!("balance: {balance}, message id: {id}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BoxError, BoxFuture, HttpError, HttpResponse, HttpTransport, JoSmsClient, JoSmsClientBuilder,
    JoSmsError, ReqwestTransport,
};
pub use domain::{
    AccountName, AccountPassword, GatewayConfig, MessageId, RequestTimeout,
    SEND_BULK_MAX_RECIPIENTS, SenderId,
};
pub use transport::FormatError;
