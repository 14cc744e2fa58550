//! Request parameters and response bodies of the cashu wallet REST api.
//!
//! Parameter structs are serialized into the query string of the request. Optional fields that
//! are `None` are left out of the query entirely, the wallet api treats a missing key differently
//! from an empty value.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull};

/// `keysets` and `mints` are empty when the wallet omits them or sends `null`.
#[serde_as]
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct BalanceResult {
    pub balance: u64,
    /// keyset-id -> keyset metadata as returned by the wallet
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub keysets: HashMap<String, serde_json::Value>,
    /// mint-url -> mint metadata as returned by the wallet
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub mints: HashMap<String, serde_json::Value>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct SendParams {
    pub amount: u64,
    /// nostr pubkey of the recipient
    pub nostr: Option<String>,
    pub lock: Option<String>,
    pub mint: Option<String>,
    pub nosplit: Option<bool>,
}

impl SendParams {
    pub fn new(amount: u64) -> Self {
        Self {
            amount,
            ..Default::default()
        }
    }

    pub fn with_nostr(mut self, nostr: impl Into<String>) -> Self {
        self.nostr = Some(nostr.into());
        self
    }

    pub fn with_lock(mut self, lock: impl Into<String>) -> Self {
        self.lock = Some(lock.into());
        self
    }

    pub fn with_mint(mut self, mint: impl Into<String>) -> Self {
        self.mint = Some(mint.into());
        self
    }

    pub const fn with_nosplit(mut self, nosplit: bool) -> Self {
        self.nosplit = Some(nosplit);
        self
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SendResult {
    pub balance: u64,
    pub token: String,
    #[serde(default)]
    pub npub: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct ReceiveParams {
    pub token: String,
    pub lock: Option<String>,
    pub nostr: Option<bool>,
    pub all: Option<bool>,
}

impl ReceiveParams {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Default::default()
        }
    }

    pub fn with_lock(mut self, lock: impl Into<String>) -> Self {
        self.lock = Some(lock.into());
        self
    }

    pub const fn with_nostr(mut self, nostr: bool) -> Self {
        self.nostr = Some(nostr);
        self
    }

    pub const fn with_all(mut self, all: bool) -> Self {
        self.all = Some(all);
        self
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ReceiveResult {
    pub initial_balance: u64,
    pub balance: u64,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct InvoiceParams {
    pub amount: u64,
    /// payment hash of an invoice that has already been paid
    pub hash: Option<String>,
    pub mint: Option<String>,
    /// split the minted tokens into this denomination
    pub split: Option<u64>,
}

impl InvoiceParams {
    pub fn new(amount: u64) -> Self {
        Self {
            amount,
            ..Default::default()
        }
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    pub fn with_mint(mut self, mint: impl Into<String>) -> Self {
        self.mint = Some(mint.into());
        self
    }

    pub const fn with_split(mut self, split: u64) -> Self {
        self.split = Some(split);
        self
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Invoice {
    pub amount: u64,
    /// bolt11 payment request
    pub pr: String,
    pub hash: String,
    pub payment_hash: String,
    pub preimage: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct InvoiceResult {
    pub amount: u64,
    pub hash: String,
    pub invoice: Invoice,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct PayParams {
    /// bolt11 invoice to pay
    pub invoice: String,
    pub mint: Option<String>,
}

impl PayParams {
    pub fn new(invoice: impl Into<String>) -> Self {
        Self {
            invoice: invoice.into(),
            mint: None,
        }
    }

    pub fn with_mint(mut self, mint: impl Into<String>) -> Self {
        self.mint = Some(mint.into());
        self
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PayResult {
    pub amount: u64,
    pub fee: u64,
    pub amount_with_fee: u64,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn query(params: &impl Serialize) -> anyhow::Result<String> {
        Ok(serde_urlencoded::to_string(params)?)
    }

    #[test]
    fn test_required_fields_only() -> anyhow::Result<()> {
        assert_eq!(query(&SendParams::new(21))?, "amount=21");
        assert_eq!(query(&ReceiveParams::new("cashuAey"))?, "token=cashuAey");
        assert_eq!(query(&InvoiceParams::new(1_000))?, "amount=1000");
        assert_eq!(query(&PayParams::new("lnbc1"))?, "invoice=lnbc1");
        Ok(())
    }

    #[test]
    fn test_send_all_fields() -> anyhow::Result<()> {
        let params = SendParams::new(64)
            .with_nostr("npub1abc")
            .with_lock("P2SH:abc")
            .with_mint("http://127.0.0.1:3338")
            .with_nosplit(false);
        assert_eq!(
            query(&params)?,
            "amount=64&nostr=npub1abc&lock=P2SH%3Aabc&mint=http%3A%2F%2F127.0.0.1%3A3338&nosplit=false"
        );
        Ok(())
    }

    #[test]
    fn test_receive_all_fields() -> anyhow::Result<()> {
        let params = ReceiveParams::new("cashuA")
            .with_lock("P2SH:xyz")
            .with_nostr(true)
            .with_all(false);
        assert_eq!(
            query(&params)?,
            "token=cashuA&lock=P2SH%3Axyz&nostr=true&all=false"
        );
        Ok(())
    }

    #[test]
    fn test_invoice_all_fields() -> anyhow::Result<()> {
        let params = InvoiceParams::new(100)
            .with_hash("deadbeef")
            .with_mint("mint")
            .with_split(8);
        assert_eq!(query(&params)?, "amount=100&hash=deadbeef&mint=mint&split=8");
        Ok(())
    }

    #[test]
    fn test_pay_with_mint() -> anyhow::Result<()> {
        let params = PayParams::new("lnbc 1").with_mint("m");
        assert_eq!(query(&params)?, "invoice=lnbc+1&mint=m");
        Ok(())
    }

    #[test]
    fn test_deserialize_balance() -> anyhow::Result<()> {
        let body = json!({
            "balance": 42,
            "keysets": {"00ffd48b8f": {"balance": 42, "available": 42}},
            "mints": {"http://localhost:3338": {"keysets": ["00ffd48b8f"]}}
        });
        let result: BalanceResult = serde_json::from_value(body)?;
        assert_eq!(result.balance, 42);
        assert_eq!(result.keysets.len(), 1);
        assert_eq!(
            result.mints["http://localhost:3338"]["keysets"][0],
            "00ffd48b8f"
        );
        Ok(())
    }

    #[test]
    fn test_deserialize_balance_null_maps() -> anyhow::Result<()> {
        let result: BalanceResult =
            serde_json::from_str(r#"{"balance":5,"keysets":null,"mints":null}"#)?;
        assert_eq!(result.balance, 5);
        assert!(result.keysets.is_empty());
        assert!(result.mints.is_empty());

        let result: BalanceResult = serde_json::from_str(r#"{"balance":7}"#)?;
        assert_eq!(result.balance, 7);
        assert!(result.keysets.is_empty());
        Ok(())
    }

    #[test]
    fn test_deserialize_send_without_npub() -> anyhow::Result<()> {
        let result: SendResult = serde_json::from_str(r#"{"balance":10,"token":"cashuA"}"#)?;
        assert_eq!(
            result,
            SendResult {
                balance: 10,
                token: "cashuA".to_owned(),
                npub: None,
            }
        );
        Ok(())
    }

    #[test]
    fn test_deserialize_invoice() -> anyhow::Result<()> {
        let body = json!({
            "amount": 100,
            "hash": "abc",
            "invoice": {
                "amount": 100,
                "pr": "lnbc1u1p",
                "hash": "abc",
                "payment_hash": "def",
                "preimage": "012"
            }
        });
        let result: InvoiceResult = serde_json::from_value(body)?;
        assert_eq!(result.invoice.pr, "lnbc1u1p");
        assert_eq!(result.invoice.payment_hash, "def");
        Ok(())
    }

    #[test]
    fn test_deserialize_negative_fee() {
        let result =
            serde_json::from_str::<PayResult>(r#"{"amount":1,"fee":-1,"amount_with_fee":0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_pay_missing_field() {
        let result = serde_json::from_str::<PayResult>(r#"{"amount":1,"fee":0}"#);
        assert!(result.is_err());
    }
}
