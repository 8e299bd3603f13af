//! Display formatting for amounts shown on admin screens.

use rust_decimal::Decimal;

/// Adds thousands separators and trims trailing fractional zeros.
pub fn with_separators(value: Decimal) -> String {
    let formatted = value.normalize().to_string();
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let mut parts = unsigned.splitn(2, '.');
    let integer = parts.next().unwrap_or("0");
    let fraction = parts.next();

    let grouped = integer
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Dollar-prefixed balance summary; anything not positive renders as `$0`.
pub fn balance_text(total: Decimal) -> String {
    if total > Decimal::ZERO {
        format!("${}", with_separators(total))
    } else {
        "$0".to_string()
    }
}
