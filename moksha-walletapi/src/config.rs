use std::time::Duration;

use clap::Parser;

pub const DEFAULT_WALLET_API_URL: &str = "http://127.0.0.1:4448";

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
pub struct ClientConfig {
    /// Base url of the wallet api
    #[clap(long = "url", env = "WALLET_API_URL", default_value = DEFAULT_WALLET_API_URL)]
    pub base_url: String,

    /// Request timeout in seconds. No timeout if not set
    #[clap(long = "timeout", env = "WALLET_API_TIMEOUT")]
    pub timeout_secs: Option<u64>,

    /// Fail on non-2xx responses instead of decoding their body
    #[clap(long, env = "WALLET_API_STRICT_STATUS")]
    pub strict_status: bool,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub const fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    pub const fn with_strict_status(mut self, strict_status: bool) -> Self {
        self.strict_status = strict_status;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_WALLET_API_URL.to_owned(),
            timeout_secs: None,
            strict_status: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::Parser;

    use super::{ClientConfig, DEFAULT_WALLET_API_URL};

    #[test]
    fn test_parse_args() {
        let config = ClientConfig::parse_from([
            "test",
            "--url",
            "http://localhost:8000",
            "--timeout",
            "5",
            "--strict-status",
        ]);
        assert_eq!(
            config,
            ClientConfig::new("http://localhost:8000")
                .with_timeout_secs(5)
                .with_strict_status(true)
        );
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_WALLET_API_URL);
        assert_eq!(config.timeout(), None);
        assert!(!config.strict_status);
    }
}
