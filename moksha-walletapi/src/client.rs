use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument};
use url::Url;

use crate::{
    config::ClientConfig,
    endpoint::Endpoint,
    error::WalletApiError,
    model::{
        BalanceResult, InvoiceParams, InvoiceResult, PayParams, PayResult, ReceiveParams,
        ReceiveResult, SendParams, SendResult,
    },
    transport::{ApiRequest, HttpTransport, ReqwestTransport},
};

/// Blocking client for the wallet api. Every call is a single request/response round trip.
#[derive(Debug, Clone)]
pub struct WalletApiClient<T: HttpTransport = ReqwestTransport> {
    base_url: Url,
    transport: T,
    strict_status: bool,
}

impl WalletApiClient<ReqwestTransport> {
    pub fn new(base_url: &str) -> Result<Self, WalletApiError> {
        let base_url = parse_base_url(base_url)?;
        Ok(Self {
            base_url,
            transport: ReqwestTransport::new()?,
            strict_status: false,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, WalletApiError> {
        let base_url = parse_base_url(&config.base_url)?;
        Ok(Self {
            base_url,
            transport: ReqwestTransport::with_timeout(config.timeout())?,
            strict_status: config.strict_status,
        })
    }
}

impl<T: HttpTransport> WalletApiClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Result<Self, WalletApiError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            transport,
            strict_status: false,
        })
    }

    /// Reject non-2xx responses with [`WalletApiError::HttpStatus`]. Off by default: the
    /// body of any response is decoded regardless of its status.
    pub fn with_strict_status(mut self, strict_status: bool) -> Self {
        self.strict_status = strict_status;
        self
    }

    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds the request for `endpoint` with `params` encoded into the query string.
    pub fn request_for<P: Serialize>(
        &self,
        endpoint: Endpoint,
        params: &P,
    ) -> Result<ApiRequest, WalletApiError> {
        let mut url = self.endpoint_url(endpoint)?;
        let query = serde_urlencoded::to_string(params)?;
        if !query.is_empty() {
            url.set_query(Some(&query));
        }
        Ok(ApiRequest {
            method: endpoint.method(),
            url,
        })
    }

    #[instrument(level = "debug", skip(self), err)]
    pub fn balance(&self) -> Result<BalanceResult, WalletApiError> {
        let request = ApiRequest {
            method: Endpoint::Balance.method(),
            url: self.endpoint_url(Endpoint::Balance)?,
        };
        self.execute(&request)
    }

    #[instrument(level = "debug", skip(self), err)]
    pub fn send(&self, params: &SendParams) -> Result<SendResult, WalletApiError> {
        self.execute(&self.request_for(Endpoint::Send, params)?)
    }

    #[instrument(level = "debug", skip(self), err)]
    pub fn receive(&self, params: &ReceiveParams) -> Result<ReceiveResult, WalletApiError> {
        self.execute(&self.request_for(Endpoint::Receive, params)?)
    }

    #[instrument(level = "debug", skip(self), err)]
    pub fn invoice(&self, params: &InvoiceParams) -> Result<InvoiceResult, WalletApiError> {
        self.execute(&self.request_for(Endpoint::Invoice, params)?)
    }

    #[instrument(level = "debug", skip(self), err)]
    pub fn pay(&self, params: &PayParams) -> Result<PayResult, WalletApiError> {
        self.execute(&self.request_for(Endpoint::Pay, params)?)
    }

    fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, WalletApiError> {
        Ok(self.base_url.join(endpoint.path())?)
    }

    fn execute<R: DeserializeOwned>(&self, request: &ApiRequest) -> Result<R, WalletApiError> {
        debug!("{} {}", request.method, request.url);
        let response = self.transport.execute(request)?;

        if self.strict_status && !response.is_success() {
            return Err(WalletApiError::HttpStatus {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        Ok(serde_json::from_slice::<R>(&response.body)?)
    }
}

fn parse_base_url(base_url: &str) -> Result<Url, WalletApiError> {
    let url = Url::parse(base_url)?;
    if url.cannot_be_a_base() {
        return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase.into());
    }
    Ok(url)
}
