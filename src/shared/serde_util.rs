//! Custom serde helpers for backend wire formats.

/// Deserializes a numeric column into `Decimal`, accepting JSON numbers,
/// numeric strings, or `null` (treated as zero).
///
/// Wallet tables return `numeric` columns as plain JSON numbers, and rows
/// created before a column existed carry `null`.
pub mod lenient_decimal {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use std::str::FromStr;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<serde_json::Value>::deserialize(deserializer)?;
        match value {
            None | Some(serde_json::Value::Null) => Ok(Decimal::ZERO),
            Some(serde_json::Value::Number(n)) => parse(&n.to_string()),
            Some(serde_json::Value::String(s)) => parse(&s),
            Some(other) => Err(serde::de::Error::custom(format!(
                "Expected a number, got: {}",
                other
            ))),
        }
    }

    fn parse<E: serde::de::Error>(raw: &str) -> Result<Decimal, E> {
        Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .map_err(|e| E::custom(format!("Invalid decimal {}: {}", raw, e)))
    }
}
