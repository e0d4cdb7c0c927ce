//! Money type for catalog and cart prices.
//!
//! The storefront only sells in Mexican pesos, so amounts carry no currency
//! tag. Values are stored as integer centavos to avoid floating-point drift
//! when quantities and subtotals are summed.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// ISO code printed after quoted amounts.
pub const CURRENCY_CODE: &str = "MXN";

/// A peso amount stored in centavos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// Zero pesos.
    pub const ZERO: Money = Money { cents: 0 };

    /// Create a value from centavos.
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a value from a decimal peso amount.
    ///
    /// Non-finite input is treated as zero.
    ///
    /// ```
    /// use storefront::money::Money;
    /// assert_eq!(Money::from_decimal(189.5).cents(), 18950);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        if !amount.is_finite() {
            return Self::ZERO;
        }
        Self::from_cents((amount * 100.0).round() as i64)
    }

    /// Interpret an arbitrary JSON value as a price.
    ///
    /// Numbers and numeric strings are accepted. Anything else (missing,
    /// null, booleans, garbage text) is a zero price.
    pub fn from_json_value(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Number(n) => n.as_f64().map(Self::from_decimal).unwrap_or_default(),
            serde_json::Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Self::ZERO;
                }
                trimmed
                    .parse::<f64>()
                    .map(Self::from_decimal)
                    .unwrap_or_default()
            }
            _ => Self::ZERO,
        }
    }

    /// Amount in centavos.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Convert to a decimal peso value.
    pub fn to_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Multiply by a quantity, saturating on overflow.
    pub fn times(&self, qty: u32) -> Money {
        Money::from_cents(self.cents.saturating_mul(i64::from(qty)))
    }

    /// Format with es-MX conventions: `,` groups thousands, `.` separates
    /// exactly two fraction digits.
    ///
    /// ```
    /// use storefront::money::Money;
    /// assert_eq!(Money::from_cents(123_456_78).format_es_mx(), "123,456.78");
    /// ```
    pub fn format_es_mx(&self) -> String {
        let abs = self.cents.unsigned_abs();
        let whole = (abs / 100).to_string();
        let fraction = abs % 100;

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        let sign = if self.cents < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, grouped, fraction)
    }

    /// Format as a display string (e.g. "$1,250.00").
    pub fn display(&self) -> String {
        if self.cents < 0 {
            format!("-${}", Money::from_cents(self.cents.saturating_neg()).format_es_mx())
        } else {
            format!("${}", self.format_es_mx())
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::from_cents(self.cents.saturating_add(other.cents))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, qty: u32) -> Money {
        self.times(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

// Catalog files carry prices as plain decimal numbers.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Money::from_json_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(49.99).cents(), 4999);
        assert_eq!(Money::from_decimal(10.0).cents(), 1000);
        assert_eq!(Money::from_decimal(f64::NAN), Money::ZERO);
    }

    #[test]
    fn test_lenient_price_values() {
        assert_eq!(Money::from_json_value(&json!(189)).cents(), 18900);
        assert_eq!(Money::from_json_value(&json!("245.50")).cents(), 24550);
        assert_eq!(Money::from_json_value(&json!(" 12 ")).cents(), 1200);
        assert_eq!(Money::from_json_value(&json!("consultar")), Money::ZERO);
        assert_eq!(Money::from_json_value(&json!(null)), Money::ZERO);
        assert_eq!(Money::from_json_value(&json!(true)), Money::ZERO);
    }

    #[test]
    fn test_deserialize_inside_struct() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(default)]
            price: Money,
        }

        let row: Row = serde_json::from_str(r#"{"price": "99.9"}"#).unwrap();
        assert_eq!(row.price.cents(), 9990);

        let row: Row = serde_json::from_str(r#"{}"#).unwrap();
        assert!(row.price.is_zero());
    }

    #[test]
    fn test_format_es_mx() {
        assert_eq!(Money::ZERO.format_es_mx(), "0.00");
        assert_eq!(Money::from_cents(2000).format_es_mx(), "20.00");
        assert_eq!(Money::from_cents(123450).format_es_mx(), "1,234.50");
        assert_eq!(Money::from_cents(100_000_000).format_es_mx(), "1,000,000.00");
        assert_eq!(Money::from_cents(-123450).format_es_mx(), "-1,234.50");
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(4999).display(), "$49.99");
        assert_eq!(Money::from_cents(-500).display(), "-$5.00");
    }

    #[test]
    fn test_times_and_sum() {
        let price = Money::from_cents(1000);
        assert_eq!((price * 3).cents(), 3000);

        let total: Money = vec![price, price * 2].into_iter().sum();
        assert_eq!(total.cents(), 3000);
    }
}
