//! HTTP seam used by the client: one GET per call, full body returned.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;

use url::Url;

pub type BoxError = Box<dyn StdError + Send + Sync>;
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Status and fully-read body of a gateway response.
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
/// Failure reported by an [`HttpTransport`].
pub enum HttpError {
    /// The request could not be sent or no response head was received.
    #[error("request failed: {0}")]
    Request(#[source] BoxError),

    /// The response body could not be read to the end.
    #[error("failed to read response body: {0}")]
    Body(#[source] BoxError),
}

/// Performs GET requests for [`JoSmsClient`](crate::JoSmsClient).
///
/// The URL already carries the encoded query string. Implementations must read the
/// whole body before resolving and must not inspect the status code; the client
/// decides what to do with it.
pub trait HttpTransport: Send + Sync {
    fn get<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, Result<HttpResponse, HttpError>>;
}

#[derive(Debug, Clone, Default)]
/// [`HttpTransport`] backed by a [`reqwest::Client`].
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, Result<HttpResponse, HttpError>> {
        // reqwest errors carry the request URL, which holds `AccPass`.
        Box::pin(async move {
            let response = self
                .client
                .get(url.clone())
                .send()
                .await
                .map_err(|err| HttpError::Request(Box::new(err.without_url())))?;
            let status = response.status().as_u16();
            let body = response
                .bytes()
                .await
                .map_err(|err| HttpError::Body(Box::new(err.without_url())))?;
            Ok(HttpResponse {
                status,
                body: body.to_vec(),
            })
        })
    }
}
