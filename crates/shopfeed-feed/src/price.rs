//! Decomposition of `"<amount> <currency>"` price strings.
//!
//! Only the shape Google Merchant feeds actually emit is recognised: a run of
//! digits and dots, optional whitespace, then a three-letter ISO 4217 code.
//! Thousands separators and comma decimals are deliberately not interpreted;
//! such values pass through untouched.

use std::sync::LazyLock;

use regex::Regex;

static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^([\d.]+)\s*([A-Z]{3})$").expect("valid price regex"));

/// Result of reading one price field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Price<'a> {
    /// The field was absent, empty, or whitespace-only.
    Missing,
    /// Amount exactly as written, currency code upper-cased.
    Parsed { amount: &'a str, currency: String },
    /// Non-empty text that does not look like `<amount> <currency>`.
    Unrecognized(&'a str),
}

impl Price<'_> {
    /// Renders the value written to the `Price` column.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Price::Missing => String::new(),
            Price::Parsed { amount, currency } => format!("{amount} {currency}"),
            Price::Unrecognized(raw) => (*raw).to_string(),
        }
    }
}

/// Parses a raw price field. `raw` is trimmed before matching.
///
/// `"14.00 eur"` yields `Parsed { amount: "14.00", currency: "EUR" }`;
/// `"14.00"` yields `Unrecognized("14.00")`.
#[must_use]
pub fn parse_price(raw: Option<&str>) -> Price<'_> {
    let Some(text) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Price::Missing;
    };

    match PRICE_RE.captures(text) {
        Some(caps) => match (caps.get(1), caps.get(2)) {
            (Some(amount), Some(currency)) => Price::Parsed {
                amount: amount.as_str(),
                currency: currency.as_str().to_uppercase(),
            },
            _ => Price::Unrecognized(text),
        },
        None => Price::Unrecognized(text),
    }
}

#[cfg(test)]
#[path = "price_test.rs"]
mod tests;
