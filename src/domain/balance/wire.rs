//! Wire types for the two wallet tables.

use super::{WalletBalance, WalletType};
use crate::shared::serde_util::lenient_decimal;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const DEFAULT_FIAT_CURRENCY: &str = "USD";
const DEFAULT_CRYPTO_CURRENCY: &str = "BTC";

/// A row of `user_wallets`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FiatWalletRow {
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub balance: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub available: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub frozen: Decimal,
    #[serde(default, rename = "type")]
    pub wallet_type: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl FiatWalletRow {
    pub fn into_balance(self) -> WalletBalance {
        let wallet_type = match self.wallet_type.as_deref() {
            Some("crypto") => WalletType::Crypto,
            _ => WalletType::Fiat,
        };
        WalletBalance {
            currency: non_empty(self.currency).unwrap_or_else(|| DEFAULT_FIAT_CURRENCY.to_string()),
            balance: self.balance,
            available: self.available,
            frozen: self.frozen,
            wallet_type,
            last_updated: self.updated_at,
            address: None,
            network: None,
        }
    }
}

/// A row of `crypto_wallets`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CryptoWalletRow {
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub balance: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub available: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub frozen: Decimal,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl CryptoWalletRow {
    pub fn into_balance(self) -> WalletBalance {
        let currency = non_empty(self.currency)
            .or_else(|| non_empty(self.symbol))
            .unwrap_or_else(|| DEFAULT_CRYPTO_CURRENCY.to_string());
        WalletBalance {
            currency,
            balance: self.balance,
            available: self.available,
            frozen: self.frozen,
            wallet_type: WalletType::Crypto,
            last_updated: self.updated_at,
            address: self.address,
            network: self.network,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
