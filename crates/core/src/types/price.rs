//! Type-safe price representation using decimal arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// Amounts are stored in the currency's standard unit (dollars, not cents)
/// and serialized as exact decimal strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    /// Amount in the currency's standard unit.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create an NZD price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self {
            amount: Decimal::new(cents, 2),
            currency_code: CurrencyCode::NZD,
        }
    }
}

impl std::fmt::Display for Price {
    /// Format for display, e.g. `$298.00`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    NZD,
    AUD,
    USD,
}

impl CurrencyCode {
    /// Currency symbol used for display formatting.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::NZD | Self::AUD | Self::USD => "$",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let price = Price::from_cents(29800);
        assert_eq!(price.amount, Decimal::new(298, 0));
        assert_eq!(price.currency_code, CurrencyCode::NZD);
    }

    #[test]
    fn test_display_two_decimal_places() {
        assert_eq!(Price::from_cents(29800).to_string(), "$298.00");
        assert_eq!(Price::from_cents(26850).to_string(), "$268.50");
        assert_eq!(Price::from_cents(5).to_string(), "$0.05");
    }

    #[test]
    fn test_serializes_amount_as_string() {
        let json = serde_json::to_value(Price::from_cents(29800)).expect("serializes");
        assert_eq!(json["amount"], "298.00");
        assert_eq!(json["currencyCode"], "NZD");
    }
}
