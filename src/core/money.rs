//! Money normalizer: every declared-value input becomes an exact integer
//! amount of minor units (cents) plus an optional currency code.

use crate::utils::error::{Result, ShippingError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An upper-case, three-letter currency code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn parse(code: &str) -> Result<Self> {
        let code = code.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ShippingError::invalid_input(
                "currency",
                format!("{:?} is not a three-letter currency code", code),
            ));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = ShippingError;

    fn try_from(value: String) -> Result<Self> {
        CurrencyCode::parse(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Capability of a value that carries its own currency.
pub trait HasCurrency {
    fn currency(&self) -> Option<&CurrencyCode>;
}

/// A money value already expressed in minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub cents: i64,
    pub currency: Option<CurrencyCode>,
}

impl Money {
    pub fn new(cents: i64, currency: Option<CurrencyCode>) -> Self {
        Self { cents, currency }
    }
}

impl HasCurrency for Money {
    fn currency(&self) -> Option<&CurrencyCode> {
        self.currency.as_ref()
    }
}

/// Declared-value input in any of the forms callers use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MoneyInput {
    Integer(i64),
    Decimal(f64),
    Text(String),
    Money(Money),
}

impl MoneyInput {
    fn currency(&self) -> Option<&CurrencyCode> {
        match self {
            MoneyInput::Money(money) => money.currency(),
            _ => None,
        }
    }
}

impl From<Money> for MoneyInput {
    fn from(value: Money) -> Self {
        MoneyInput::Money(value)
    }
}

impl From<f64> for MoneyInput {
    fn from(value: f64) -> Self {
        MoneyInput::Decimal(value)
    }
}

impl From<i64> for MoneyInput {
    fn from(value: i64) -> Self {
        MoneyInput::Integer(value)
    }
}

impl From<i32> for MoneyInput {
    fn from(value: i32) -> Self {
        MoneyInput::Integer(i64::from(value))
    }
}

impl From<&str> for MoneyInput {
    fn from(value: &str) -> Self {
        MoneyInput::Text(value.to_string())
    }
}

impl From<String> for MoneyInput {
    fn from(value: String) -> Self {
        MoneyInput::Text(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NormalizedMoney {
    pub minor_units: Option<i64>,
    pub currency: Option<CurrencyCode>,
}

/// Normalizes a declared value.
///
/// Decimal numbers and text containing a `.` are major units and are rounded
/// to the nearest minor unit. Text without a `.` is read as minor units
/// already (`"500"` is 500 cents). The explicit `currency` option wins over
/// any currency the value carries.
pub fn normalize(raw: Option<&MoneyInput>, currency: Option<&str>) -> Result<NormalizedMoney> {
    let explicit = currency.map(CurrencyCode::parse).transpose()?;

    let Some(raw) = raw else {
        return Ok(NormalizedMoney {
            minor_units: None,
            currency: explicit,
        });
    };

    let minor_units = minor_units_from(raw)?;
    let currency = explicit.or_else(|| raw.currency().cloned());

    Ok(NormalizedMoney {
        minor_units: Some(minor_units),
        currency,
    })
}

fn minor_units_from(raw: &MoneyInput) -> Result<i64> {
    match raw {
        MoneyInput::Money(money) => Ok(money.cents),
        MoneyInput::Integer(value) => Ok(*value),
        MoneyInput::Decimal(value) => round_major(*value),
        MoneyInput::Text(text) => {
            let text = text.trim();
            if text.contains('.') {
                let value: f64 = text.parse().map_err(|_| unparseable(text))?;
                round_major(value)
            } else {
                text.parse::<i64>().map_err(|_| unparseable(text))
            }
        }
    }
}

fn round_major(value: f64) -> Result<i64> {
    let cents = (value * 100.0).round();
    if !cents.is_finite() || cents.abs() >= i64::MAX as f64 {
        return Err(ShippingError::invalid_input(
            "value",
            format!("{} cannot be represented in minor units", value),
        ));
    }
    Ok(cents as i64)
}

fn unparseable(text: &str) -> ShippingError {
    ShippingError::invalid_input("value", format!("{:?} is not a money amount", text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minor(raw: impl Into<MoneyInput>) -> Option<i64> {
        normalize(Some(&raw.into()), None).unwrap().minor_units
    }

    #[test]
    fn test_absent_value() {
        assert_eq!(normalize(None, None).unwrap(), NormalizedMoney::default());
    }

    #[test]
    fn test_decimal_and_text_forms() {
        assert_eq!(minor(19.99), Some(1999));
        assert_eq!(minor("19.99"), Some(1999));
        assert_eq!(minor("500"), Some(500));
        assert_eq!(minor(" 0.5 "), Some(50));
        assert_eq!(minor(1250_i64), Some(1250));
    }

    #[test]
    fn test_money_object_brings_currency() {
        let usd = CurrencyCode::parse("usd").unwrap();
        let money = Money::new(4999, Some(usd.clone()));
        let normalized = normalize(Some(&money.into()), None).unwrap();
        assert_eq!(normalized.minor_units, Some(4999));
        assert_eq!(normalized.currency, Some(usd));
    }

    #[test]
    fn test_explicit_currency_wins() {
        let money = Money::new(100, Some(CurrencyCode::parse("USD").unwrap()));
        let normalized = normalize(Some(&money.into()), Some("cad")).unwrap();
        assert_eq!(normalized.currency.unwrap().as_str(), "CAD");
    }

    #[test]
    fn test_plain_numbers_have_no_currency() {
        let normalized = normalize(Some(&"19.99".into()), None).unwrap();
        assert_eq!(normalized.currency, None);
    }

    #[test]
    fn test_unparseable_text_rejected() {
        assert!(normalize(Some(&"abc".into()), None).is_err());
        assert!(normalize(Some(&"1.2.3".into()), None).is_err());
        assert!(normalize(Some(&f64::NAN.into()), None).is_err());
    }

    #[test]
    fn test_invalid_currency_rejected() {
        assert!(CurrencyCode::parse("EURO").is_err());
        assert!(CurrencyCode::parse("U$D").is_err());
        assert!(normalize(None, Some("12")).is_err());
    }
}
