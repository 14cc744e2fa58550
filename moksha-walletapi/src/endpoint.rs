use std::fmt::Display;

use reqwest::Method;

/// Routes of the wallet api
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Balance,
    Send,
    Receive,
    Invoice,
    Pay,
}

impl Endpoint {
    /// Absolute path of the route. Joining it onto the base url replaces any path of the base url.
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Balance => "/balance",
            Self::Send => "/send",
            Self::Receive => "/receive",
            Self::Invoice => "/invoice",
            Self::Pay => "/pay",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Self::Balance => Method::GET,
            Self::Send | Self::Receive | Self::Invoice | Self::Pay => Method::POST,
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
