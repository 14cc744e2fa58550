//! Client for the REST api of a cashu wallet.
//!
//! ```no_run
//! use moksha_walletapi::{client::WalletApiClient, model::SendParams};
//!
//! let client = WalletApiClient::new("http://127.0.0.1:4448")?;
//! let balance = client.balance()?;
//! let sent = client.send(&SendParams::new(1).with_nosplit(true))?;
//! println!("{} -> {}", balance.balance, sent.token);
//! # Ok::<(), moksha_walletapi::error::WalletApiError>(())
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod model;
pub mod transport;
