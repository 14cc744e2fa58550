//! The http layer underneath [`crate::client::WalletApiClient`].

use std::time::Duration;

use reqwest::Method;
use tracing::debug;
use url::Url;

use crate::error::WalletApiError;

#[cfg(test)]
use mockall::automock;

/// An outbound request. Parameters travel in the query string of `url`, the body is always empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
}

/// A response whose body has been read to the end.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

#[cfg_attr(test, automock)]
pub trait HttpTransport {
    /// Sends the request and blocks until the full response body has been received.
    fn execute(&self, request: &ApiRequest) -> Result<RawResponse, WalletApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Transport without a client side timeout.
    pub fn new() -> Result<Self, WalletApiError> {
        Self::with_timeout(None)
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, WalletApiError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute(&self, request: &ApiRequest) -> Result<RawResponse, WalletApiError> {
        let resp = self
            .client
            .request(request.method.clone(), request.url.clone())
            .send()?;
        let status = resp.status().as_u16();
        // consumes the response, the connection goes back to the pool once the body is read
        let body = resp.bytes()?;
        debug!("{} {} -> {status}", request.method, request.url);
        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}
