//! Measurement resolver: turns caller input into typed quantities.
//!
//! Input that already knows its unit is trusted as is. Bare numbers are read
//! in the unit system's default unit (grams/centimetres for metric,
//! ounces/inches for imperial).

use crate::domain::units::{Length, Mass, Quantity, UnitSystem};
use crate::utils::error::{Result, ShippingError};
use crate::utils::validation::validate_measure;

/// Raw weight or dimension input as a caller may supply it.
#[derive(Debug, Clone, PartialEq)]
pub enum RawQuantity<Q> {
    Typed(Q),
    Number(f64),
    /// Text such as `"12"`, `"12.5 cm"` or `"4lb"`.
    Text(String),
    Blank,
}

impl<Q: Quantity> RawQuantity<Q> {
    pub fn is_blank(&self) -> bool {
        match self {
            RawQuantity::Blank => true,
            RawQuantity::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }

    /// Resolves to a typed quantity, or `None` for blank input.
    pub fn resolve(&self, system: UnitSystem, field: &str) -> Result<Option<Q>> {
        let quantity = match self {
            RawQuantity::Blank => return Ok(None),
            RawQuantity::Typed(q) => q.clone(),
            RawQuantity::Number(n) => Q::from_parts(*n, Q::default_unit(system)),
            RawQuantity::Text(text) => match parse_text::<Q>(text, system, field)? {
                Some(q) => q,
                None => return Ok(None),
            },
        };
        validate_measure(field, quantity.amount())?;
        Ok(Some(quantity))
    }
}

fn parse_text<Q: Quantity>(text: &str, system: UnitSystem, field: &str) -> Result<Option<Q>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    if let Ok(amount) = text.parse::<f64>() {
        return Ok(Some(Q::from_parts(amount, Q::default_unit(system))));
    }

    // The unit token starts after the last digit, so exponents like `1e3` stay
    // with the number.
    let split = text
        .rfind(|c: char| c.is_ascii_digit() || c == '.')
        .map_or(0, |index| index + 1);
    let (number, token) = text.split_at(split);
    let amount: f64 = number
        .trim()
        .parse()
        .map_err(|_| ShippingError::unresolvable_unit(field, text))?;

    match Q::unit_from_token(token.trim()) {
        Some(unit) => Ok(Some(Q::from_parts(amount, unit))),
        None => Err(ShippingError::unresolvable_unit(
            field,
            format!("{} (not a {} unit)", text, Q::KIND),
        )),
    }
}

impl From<Mass> for RawQuantity<Mass> {
    fn from(value: Mass) -> Self {
        RawQuantity::Typed(value)
    }
}

impl From<Length> for RawQuantity<Length> {
    fn from(value: Length) -> Self {
        RawQuantity::Typed(value)
    }
}

impl<Q> From<f64> for RawQuantity<Q> {
    fn from(value: f64) -> Self {
        RawQuantity::Number(value)
    }
}

impl<Q> From<i32> for RawQuantity<Q> {
    fn from(value: i32) -> Self {
        RawQuantity::Number(f64::from(value))
    }
}

impl<Q> From<&str> for RawQuantity<Q> {
    fn from(value: &str) -> Self {
        RawQuantity::Text(value.to_string())
    }
}

impl<Q> From<String> for RawQuantity<Q> {
    fn from(value: String) -> Self {
        RawQuantity::Text(value)
    }
}

impl<Q, T> From<Option<T>> for RawQuantity<Q>
where
    T: Into<RawQuantity<Q>>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawQuantity::Blank)
    }
}

pub fn resolve_weight(raw: &RawQuantity<Mass>, system: UnitSystem) -> Result<Mass> {
    raw.resolve(system, "weight")?
        .ok_or_else(|| ShippingError::invalid_input("weight", "a weight is required"))
}

/// Resolves every non-blank dimension; blanks are dropped before counting.
pub fn resolve_dimensions(raw: &[RawQuantity<Length>], system: UnitSystem) -> Result<Vec<Length>> {
    let mut resolved = Vec::with_capacity(raw.len().max(3));
    for (index, value) in raw.iter().enumerate().filter(|(_, value)| !value.is_blank()) {
        if let Some(length) = value.resolve(system, &format!("dimensions[{}]", index))? {
            resolved.push(length);
        }
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::units::{LengthUnit, MassUnit};

    #[test]
    fn test_bare_numbers_follow_unit_system() {
        let metric = resolve_weight(&RawQuantity::from(100), UnitSystem::Metric).unwrap();
        assert_eq!(metric, Mass::grams(100.0));

        let imperial = resolve_weight(&RawQuantity::from(100), UnitSystem::Imperial).unwrap();
        assert_eq!(imperial, Mass::ounces(100.0));
    }

    #[test]
    fn test_typed_input_passes_through() {
        let raw = RawQuantity::from(Mass::pounds(2.5));
        let resolved = resolve_weight(&raw, UnitSystem::Metric).unwrap();
        assert_eq!(resolved.unit, MassUnit::Pounds);
        assert_eq!(resolved.amount, 2.5);
    }

    #[test]
    fn test_text_with_unit_token() {
        let raw: RawQuantity<Length> = "12.5 in".into();
        let resolved = raw.resolve(UnitSystem::Metric, "dimensions[0]").unwrap();
        assert_eq!(resolved, Some(Length::new(12.5, LengthUnit::Inches)));

        let bare: RawQuantity<Length> = " 7 ".into();
        let resolved = bare.resolve(UnitSystem::Imperial, "dimensions[0]").unwrap();
        assert_eq!(resolved, Some(Length::inches(7.0)));
    }

    #[test]
    fn test_text_with_wrong_dimension_is_unresolvable() {
        let raw: RawQuantity<Length> = "4 kg".into();
        let err = raw.resolve(UnitSystem::Metric, "dimensions[1]").unwrap_err();
        assert!(matches!(err, ShippingError::UnresolvableUnit { .. }));

        let raw: RawQuantity<Mass> = "heavy".into();
        assert!(matches!(
            resolve_weight(&raw, UnitSystem::Metric),
            Err(ShippingError::UnresolvableUnit { .. })
        ));
    }

    #[test]
    fn test_negative_and_missing_weight_rejected() {
        assert!(matches!(
            resolve_weight(&RawQuantity::from(-1), UnitSystem::Metric),
            Err(ShippingError::InvalidInput { .. })
        ));
        assert!(matches!(
            resolve_weight(&RawQuantity::Blank, UnitSystem::Metric),
            Err(ShippingError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_exponent_notation_in_text() {
        let raw: RawQuantity<Mass> = "1e3".into();
        assert_eq!(resolve_weight(&raw, UnitSystem::Metric).unwrap(), Mass::grams(1000.0));

        let raw: RawQuantity<Mass> = "1e3 g".into();
        assert_eq!(resolve_weight(&raw, UnitSystem::Imperial).unwrap(), Mass::grams(1000.0));

        let raw: RawQuantity<Length> = "2.5e1cm".into();
        let resolved = raw.resolve(UnitSystem::Imperial, "dimensions[0]").unwrap();
        assert_eq!(resolved, Some(Length::centimetres(25.0)));
    }

    #[test]
    fn test_blank_detection() {
        assert!(RawQuantity::<Mass>::Blank.is_blank());
        assert!(RawQuantity::<Mass>::from("   ").is_blank());
        assert!(RawQuantity::<Mass>::from(None::<f64>).is_blank());
        assert!(!RawQuantity::<Mass>::from(0.0).is_blank());
        assert!(!RawQuantity::<Mass>::from("0").is_blank());
    }

    #[test]
    fn test_blank_dimensions_are_dropped() {
        let raw: Vec<RawQuantity<Length>> = vec![
            RawQuantity::Blank,
            "".into(),
            10.into(),
            None::<f64>.into(),
            "20".into(),
        ];
        let resolved = resolve_dimensions(&raw, UnitSystem::Metric).unwrap();
        assert_eq!(resolved, vec![Length::centimetres(10.0), Length::centimetres(20.0)]);
    }
}
