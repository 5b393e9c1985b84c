use crate::utils::error::{Result, ShippingError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Governs which default unit an untyped (bare number) measurement is read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl FromStr for UnitSystem {
    type Err = ShippingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            other => Err(ShippingError::invalid_input(
                "units",
                format!("unknown unit system {:?}", other),
            )),
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => f.write_str("metric"),
            UnitSystem::Imperial => f.write_str("imperial"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MassUnit {
    Grams,
    Kilograms,
    Ounces,
    Pounds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Millimetres,
    Centimetres,
    Metres,
    Inches,
    Feet,
}

impl MassUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            MassUnit::Grams => "g",
            MassUnit::Kilograms => "kg",
            MassUnit::Ounces => "oz",
            MassUnit::Pounds => "lb",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "g" | "gram" | "grams" => Some(MassUnit::Grams),
            "kg" | "kgs" | "kilogram" | "kilograms" => Some(MassUnit::Kilograms),
            "oz" | "ounce" | "ounces" => Some(MassUnit::Ounces),
            "lb" | "lbs" | "pound" | "pounds" => Some(MassUnit::Pounds),
            _ => None,
        }
    }
}

impl LengthUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Millimetres => "mm",
            LengthUnit::Centimetres => "cm",
            LengthUnit::Metres => "m",
            LengthUnit::Inches => "in",
            LengthUnit::Feet => "ft",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "mm" | "millimetre" | "millimetres" | "millimeter" | "millimeters" => {
                Some(LengthUnit::Millimetres)
            }
            "cm" | "centimetre" | "centimetres" | "centimeter" | "centimeters" => {
                Some(LengthUnit::Centimetres)
            }
            "m" | "metre" | "metres" | "meter" | "meters" => Some(LengthUnit::Metres),
            "in" | "inch" | "inches" => Some(LengthUnit::Inches),
            "ft" | "foot" | "feet" => Some(LengthUnit::Feet),
            _ => None,
        }
    }
}

/// Capability of a value that knows its own unit. Values exposing a unit are
/// trusted as given and never reinterpreted by the unit system.
pub trait HasUnit {
    type Unit: Copy + PartialEq + fmt::Debug;

    fn amount(&self) -> f64;
    fn unit(&self) -> Self::Unit;
}

/// A typed physical quantity the measurement resolver can build from raw input.
pub trait Quantity: HasUnit + Clone + fmt::Debug {
    /// Human name of the dimension, used in error messages.
    const KIND: &'static str;

    fn from_parts(amount: f64, unit: Self::Unit) -> Self;
    fn default_unit(system: UnitSystem) -> Self::Unit;
    fn unit_from_token(token: &str) -> Option<Self::Unit>;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mass {
    pub amount: f64,
    pub unit: MassUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Length {
    pub amount: f64,
    pub unit: LengthUnit,
}

impl Mass {
    pub fn new(amount: f64, unit: MassUnit) -> Self {
        Self { amount, unit }
    }

    pub fn grams(amount: f64) -> Self {
        Self::new(amount, MassUnit::Grams)
    }

    pub fn ounces(amount: f64) -> Self {
        Self::new(amount, MassUnit::Ounces)
    }

    pub fn pounds(amount: f64) -> Self {
        Self::new(amount, MassUnit::Pounds)
    }

    pub fn kilograms(amount: f64) -> Self {
        Self::new(amount, MassUnit::Kilograms)
    }
}

impl Length {
    pub fn new(amount: f64, unit: LengthUnit) -> Self {
        Self { amount, unit }
    }

    pub fn centimetres(amount: f64) -> Self {
        Self::new(amount, LengthUnit::Centimetres)
    }

    pub fn inches(amount: f64) -> Self {
        Self::new(amount, LengthUnit::Inches)
    }
}

impl HasUnit for Mass {
    type Unit = MassUnit;

    fn amount(&self) -> f64 {
        self.amount
    }

    fn unit(&self) -> MassUnit {
        self.unit
    }
}

impl HasUnit for Length {
    type Unit = LengthUnit;

    fn amount(&self) -> f64 {
        self.amount
    }

    fn unit(&self) -> LengthUnit {
        self.unit
    }
}

impl Quantity for Mass {
    const KIND: &'static str = "mass";

    fn from_parts(amount: f64, unit: MassUnit) -> Self {
        Mass::new(amount, unit)
    }

    fn default_unit(system: UnitSystem) -> MassUnit {
        match system {
            UnitSystem::Metric => MassUnit::Grams,
            UnitSystem::Imperial => MassUnit::Ounces,
        }
    }

    fn unit_from_token(token: &str) -> Option<MassUnit> {
        MassUnit::from_token(token)
    }
}

impl Quantity for Length {
    const KIND: &'static str = "length";

    fn from_parts(amount: f64, unit: LengthUnit) -> Self {
        Length::new(amount, unit)
    }

    fn default_unit(system: UnitSystem) -> LengthUnit {
        match system {
            UnitSystem::Metric => LengthUnit::Centimetres,
            UnitSystem::Imperial => LengthUnit::Inches,
        }
    }

    fn unit_from_token(token: &str) -> Option<LengthUnit> {
        LengthUnit::from_token(token)
    }
}

impl fmt::Display for Mass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit.symbol())
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit.symbol())
    }
}
