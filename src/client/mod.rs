//! Client layer: builds gateway requests and maps responses to typed results.

mod http;

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

pub use http::{BoxError, BoxFuture, HttpError, HttpResponse, HttpTransport, ReqwestTransport};

use crate::domain::{GatewayConfig, MessageId};
use crate::transport::{
    BALANCE_PATH, FormatError, SEND_BULK_PATH, SEND_OTP_PATH, SEND_PATH, decode_balance_response,
    decode_message_id_response, encode_balance_query, encode_send_bulk_query, encode_send_query,
    endpoint_url,
};

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`JoSmsClient`].
///
/// `Network`, `Read` and `Format` are the per-call failures; each means the operation did
/// not reliably complete. The client stays usable after any of them.
pub enum JoSmsError {
    /// The request could not be sent or no response was received (DNS, TLS, timeouts, etc).
    #[error("network error: {0}")]
    Network(#[source] BoxError),

    /// The response body could not be read completely.
    #[error("read error: {0}")]
    Read(#[source] BoxError),

    /// The response body does not match the grammar expected for the operation.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// The configured base URL cannot be turned into an endpoint URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// [`JoSmsClientBuilder::build`] could not construct the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] BoxError),
}

impl From<HttpError> for JoSmsError {
    fn from(value: HttpError) -> Self {
        match value {
            HttpError::Request(err) => Self::Network(err),
            HttpError::Body(err) => Self::Read(err),
        }
    }
}

#[derive(Clone)]
enum TransportChoice {
    Reqwest {
        timeout: Option<Duration>,
        user_agent: Option<String>,
    },
    Client(reqwest::Client),
    Custom(Arc<dyn HttpTransport>),
}

#[derive(Clone)]
/// Builder for [`JoSmsClient`].
///
/// Use this to set a local HTTP timeout or user-agent, to reuse an existing
/// [`reqwest::Client`], or to plug in a custom [`HttpTransport`]. The last transport-related
/// call wins; `timeout` and `user_agent` only apply when the builder creates the
/// `reqwest::Client` itself.
pub struct JoSmsClientBuilder {
    config: GatewayConfig,
    transport: TransportChoice,
}

impl JoSmsClientBuilder {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config,
            transport: TransportChoice::Reqwest {
                timeout: None,
                user_agent: None,
            },
        }
    }

    /// Set a local timeout for the whole HTTP request.
    ///
    /// Unrelated to [`GatewayConfig::request_timeout`], which is only sent to the gateway.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        match &mut self.transport {
            TransportChoice::Reqwest { timeout: slot, .. } => *slot = Some(timeout),
            other => {
                *other = TransportChoice::Reqwest {
                    timeout: Some(timeout),
                    user_agent: None,
                }
            }
        }
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        let user_agent = user_agent.into();
        match &mut self.transport {
            TransportChoice::Reqwest {
                user_agent: slot, ..
            } => *slot = Some(user_agent),
            other => {
                *other = TransportChoice::Reqwest {
                    timeout: None,
                    user_agent: Some(user_agent),
                }
            }
        }
        self
    }

    /// Send requests through an existing [`reqwest::Client`].
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.transport = TransportChoice::Client(client);
        self
    }

    /// Send requests through a custom transport.
    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = TransportChoice::Custom(Arc::new(transport));
        self
    }

    /// Build a [`JoSmsClient`].
    pub fn build(self) -> Result<JoSmsClient, JoSmsError> {
        let http: Arc<dyn HttpTransport> = match self.transport {
            TransportChoice::Reqwest {
                timeout,
                user_agent,
            } => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| JoSmsError::HttpClient(Box::new(err)))?;
                Arc::new(ReqwestTransport::new(client))
            }
            TransportChoice::Client(client) => Arc::new(ReqwestTransport::new(client)),
            TransportChoice::Custom(transport) => transport,
        };

        Ok(JoSmsClient {
            config: self.config,
            http,
        })
    }
}

#[derive(Clone)]
/// High-level JoSMS gateway client.
///
/// Every operation issues exactly one GET request and reads the whole body. HTTP status
/// codes are not inspected: a non-2xx response is logged and its body parsed like any
/// other. Nothing is retried.
///
/// Endpoints, relative to [`GatewayConfig::base_url`]:
/// - `/SMS/API/GetBalance` for [`JoSmsClient::balance`]
/// - `/SMSServices/Clients/Prof/RestSingleSMS_General/SendSMS` for [`JoSmsClient::send`]
/// - `/SMSServices/Clients/Prof/RestSingleSMS/SendSMS` for [`JoSmsClient::send_otp`]
/// - `/sms/api/SendBulkMessages.cfm` for [`JoSmsClient::send_bulk`]
pub struct JoSmsClient {
    config: GatewayConfig,
    http: Arc<dyn HttpTransport>,
}

impl JoSmsClient {
    /// Create a client with a default `reqwest` transport.
    ///
    /// For more customization, use [`JoSmsClient::builder`].
    pub fn new(config: GatewayConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::default())
    }

    /// Create a client sending requests through `transport`.
    pub fn with_transport(config: GatewayConfig, transport: impl HttpTransport + 'static) -> Self {
        Self {
            config,
            http: Arc::new(transport),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(config: GatewayConfig) -> JoSmsClientBuilder {
        JoSmsClientBuilder::new(config)
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Current account balance.
    ///
    /// The gateway answers with an integer, optionally wrapped in double quotes.
    ///
    /// Errors:
    /// - [`JoSmsError::Network`] / [`JoSmsError::Read`] for transport failures,
    /// - [`JoSmsError::Format`] when the unquoted body is not an integer.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn balance(&self) -> Result<i64, JoSmsError> {
        let params = encode_balance_query(&self.config);
        let body = self.get(BALANCE_PATH, params).await?;
        let balance = decode_balance_response(&body)?;
        debug!(balance, "balance received");
        Ok(balance)
    }

    /// Send a general message to one number.
    ///
    /// `number` is passed through verbatim; `message` has `%` and `&` escaped before
    /// query encoding. Returns the value part of the gateway's `<prefix> = <value>` line.
    #[tracing::instrument(level = "debug", skip(self, message))]
    pub async fn send(&self, number: &str, message: &str) -> Result<MessageId, JoSmsError> {
        let params = encode_send_query(&self.config, number, message);
        self.send_message(SEND_PATH, params).await
    }

    /// Send a one-time passcode to one number.
    ///
    /// Same parameters and response handling as [`JoSmsClient::send`], routed to the
    /// gateway's OTP endpoint.
    #[tracing::instrument(level = "debug", skip(self, otp))]
    pub async fn send_otp(&self, number: &str, otp: &str) -> Result<MessageId, JoSmsError> {
        let params = encode_send_query(&self.config, number, otp);
        self.send_message(SEND_OTP_PATH, params).await
    }

    /// Send one message to several numbers in a single request.
    ///
    /// Numbers are comma-joined as given. The gateway accepts at most
    /// [`SEND_BULK_MAX_RECIPIENTS`](crate::SEND_BULK_MAX_RECIPIENTS) recipients; this is not
    /// checked here, and an empty slice still issues a request.
    #[tracing::instrument(level = "debug", skip(self, numbers, message), fields(recipients = numbers.len()))]
    pub async fn send_bulk<S: AsRef<str>>(
        &self,
        numbers: &[S],
        message: &str,
    ) -> Result<MessageId, JoSmsError> {
        let params = encode_send_bulk_query(&self.config, numbers, message);
        self.send_message(SEND_BULK_PATH, params).await
    }

    async fn send_message(
        &self,
        path: &'static str,
        params: Vec<(String, String)>,
    ) -> Result<MessageId, JoSmsError> {
        let body = self.get(path, params).await?;
        let message_id = decode_message_id_response(&body)?;
        debug!(message_id = message_id.as_str(), "message accepted");
        Ok(message_id)
    }

    async fn get(
        &self,
        path: &'static str,
        params: Vec<(String, String)>,
    ) -> Result<Vec<u8>, JoSmsError> {
        // The full URL carries credentials; only the path is logged.
        let url = endpoint_url(&self.config.base_url, path, &params)?;
        debug!(endpoint = path, "sending gateway request");

        let response = self.http.get(&url).await?;
        if (200..=299).contains(&response.status) {
            debug!(status = response.status, bytes = response.body.len(), "gateway responded");
        } else {
            warn!(
                status = response.status,
                endpoint = path,
                "gateway returned non-success status, parsing body anyway"
            );
        }

        Ok(response.body)
    }
}
