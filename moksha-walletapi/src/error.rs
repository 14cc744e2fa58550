use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalletApiError {
    #[error("InvalidUrlError - {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("TransportError - {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("DecodeError - {0}")]
    Decode(#[from] serde_json::Error),

    #[error("EncodeError - {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    #[error("HttpStatusError - {status}: {body}")]
    HttpStatus { status: u16, body: String },
}

impl From<reqwest::Error> for WalletApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}
