//! Balance domain: per-user wallet aggregation across fiat and crypto tables.
//!
//! Wallets are keyed by [`WalletKey`] (source + currency), so a fiat and a
//! crypto wallet that share a currency code stay separate entries.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::display::balance_text;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

pub use wire::{CryptoWalletRow, FiatWalletRow};

// ─── WalletSource / WalletKey ────────────────────────────────────────────────

/// Which wallet table an entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WalletSource {
    /// `user_wallets`
    Fiat,
    /// `crypto_wallets`
    Crypto,
}

impl WalletSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletSource::Fiat => "fiat",
            WalletSource::Crypto => "crypto",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "fiat" => Some(WalletSource::Fiat),
            "crypto" => Some(WalletSource::Crypto),
            _ => None,
        }
    }
}

/// Identity of a wallet entry: source table plus currency.
///
/// Serializes as `"<source>:<currency>"`, e.g. `"crypto:BTC"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WalletKey {
    pub source: WalletSource,
    pub currency: String,
}

impl WalletKey {
    pub fn new(source: WalletSource, currency: &str) -> Self {
        Self {
            source,
            currency: currency.to_string(),
        }
    }
}

impl fmt::Display for WalletKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source.as_str(), self.currency)
    }
}

impl Serialize for WalletKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for WalletKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let (source, currency) = s
            .split_once(':')
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid wallet key: {}", s)))?;
        let source = WalletSource::from_str(source)
            .ok_or_else(|| serde::de::Error::custom(format!("Unknown wallet source: {}", source)))?;
        Ok(WalletKey::new(source, currency))
    }
}

// ─── WalletBalance ───────────────────────────────────────────────────────────

/// Kind of asset a wallet holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletType {
    Fiat,
    Crypto,
}

/// One wallet's balances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub currency: String,
    pub balance: Decimal,
    pub available: Decimal,
    pub frozen: Decimal,
    #[serde(rename = "type")]
    pub wallet_type: WalletType,
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

// ─── UserBalances ────────────────────────────────────────────────────────────

/// A user's wallets and their summed balance.
///
/// `error` is set only on a failed fetch, in which case the wallets are empty
/// and the total is zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserBalances {
    pub wallets: BTreeMap<WalletKey, WalletBalance>,
    pub total_balance: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UserBalances {
    /// Merge both wallet tables. Within one table a later row for the same
    /// currency replaces the earlier one.
    pub fn merge(fiat: Vec<FiatWalletRow>, crypto: Vec<CryptoWalletRow>) -> Self {
        let mut wallets = BTreeMap::new();

        for row in fiat {
            let entry = row.into_balance();
            wallets.insert(WalletKey::new(WalletSource::Fiat, &entry.currency), entry);
        }
        for row in crypto {
            let entry = row.into_balance();
            wallets.insert(WalletKey::new(WalletSource::Crypto, &entry.currency), entry);
        }

        let total_balance = wallets.values().map(|w| w.balance).sum();
        Self {
            wallets,
            total_balance,
            error: None,
        }
    }

    /// Zero-value result carrying the failure.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Default::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Wallets holding `currency`, from either source.
    pub fn for_currency<'a>(
        &'a self,
        currency: &'a str,
    ) -> impl Iterator<Item = (&'a WalletKey, &'a WalletBalance)> + 'a {
        self.wallets
            .iter()
            .filter(move |(key, _)| key.currency == currency)
    }

    /// `$1,234.5`-style summary of the total; `$0` when empty.
    pub fn balance_text(&self) -> String {
        balance_text(self.total_balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn fiat(json: serde_json::Value) -> FiatWalletRow {
        serde_json::from_value(json).unwrap()
    }

    fn crypto(json: serde_json::Value) -> CryptoWalletRow {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_merge_keeps_sources_apart() {
        let balances = UserBalances::merge(
            vec![fiat(serde_json::json!({"currency": "USDT", "balance": 100, "available": 90, "frozen": 10}))],
            vec![crypto(serde_json::json!({"currency": "USDT", "balance": 50, "address": "0xabc", "network": "TRC20"}))],
        );
        assert_eq!(balances.wallets.len(), 2);
        assert_eq!(balances.total_balance, d("150"));
        assert_eq!(balances.for_currency("USDT").count(), 2);

        let on_chain = &balances.wallets[&WalletKey::new(WalletSource::Crypto, "USDT")];
        assert_eq!(on_chain.wallet_type, WalletType::Crypto);
        assert_eq!(on_chain.network.as_deref(), Some("TRC20"));
    }

    #[test]
    fn test_later_row_wins_within_a_source() {
        let balances = UserBalances::merge(
            vec![
                fiat(serde_json::json!({"currency": "EUR", "balance": 5})),
                fiat(serde_json::json!({"currency": "EUR", "balance": 7.25})),
            ],
            vec![],
        );
        assert_eq!(balances.wallets.len(), 1);
        assert_eq!(balances.total_balance, d("7.25"));
    }

    #[test]
    fn test_row_defaults() {
        let balances = UserBalances::merge(
            vec![fiat(serde_json::json!({"balance": null}))],
            vec![
                crypto(serde_json::json!({"symbol": "ETH", "balance": "1.5"})),
                crypto(serde_json::json!({"balance": 0.1})),
            ],
        );
        let usd = &balances.wallets[&WalletKey::new(WalletSource::Fiat, "USD")];
        assert_eq!(usd.balance, Decimal::ZERO);
        assert_eq!(usd.wallet_type, WalletType::Fiat);
        assert!(balances.wallets.contains_key(&WalletKey::new(WalletSource::Crypto, "ETH")));
        assert!(balances.wallets.contains_key(&WalletKey::new(WalletSource::Crypto, "BTC")));
        assert_eq!(balances.total_balance, d("1.6"));
    }

    #[test]
    fn test_wallet_key_serializes_as_string() {
        let balances = UserBalances::merge(
            vec![fiat(serde_json::json!({"currency": "USD", "balance": 1000}))],
            vec![],
        );
        let json = serde_json::to_value(&balances).unwrap();
        assert!(json["wallets"].get("fiat:USD").is_some());

        let back: UserBalances = serde_json::from_value(json).unwrap();
        assert_eq!(back, balances);
        assert_eq!(balances.balance_text(), "$1,000");
    }

    #[test]
    fn test_failed_is_zero() {
        let failed = UserBalances::failed("HTTP 500");
        assert!(failed.is_error());
        assert!(failed.wallets.is_empty());
        assert_eq!(failed.total_balance, Decimal::ZERO);
        assert_eq!(failed.balance_text(), "$0");
    }
}
