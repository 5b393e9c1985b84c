//! The package value: resolved weight and axes plus the derived measures
//! carriers price on (girth, volume, volumetric and billable weight).

use crate::adapters::units::StandardUnits;
use crate::config::PackageOptions;
use crate::core::dimensions::normalize_dimensions;
use crate::core::geometry::{self, Measure, Shape};
use crate::core::measurement::{resolve_dimensions, resolve_weight, RawQuantity};
use crate::core::money::{self, CurrencyCode};
use crate::domain::ports::UnitConverter;
use crate::domain::units::{Length, LengthUnit, Mass, MassUnit, UnitSystem};
use crate::utils::error::{Result, ShippingError};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

/// Cubic centimetres per gram of volumetric weight.
pub const VOLUMETRIC_DIVISOR: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightKind {
    #[default]
    Actual,
    /// Also called dimensional weight.
    Volumetric,
    Billable,
}

impl FromStr for WeightKind {
    type Err = ShippingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "actual" => Ok(WeightKind::Actual),
            "volumetric" | "dimensional" => Ok(WeightKind::Volumetric),
            "billable" => Ok(WeightKind::Billable),
            other => Err(ShippingError::invalid_input(
                "weight kind",
                format!("unknown weight kind {:?}", other),
            )),
        }
    }
}

pub struct Package {
    weight: Mass,
    dimensions: Vec<Length>,
    unit_system: UnitSystem,
    value: Option<i64>,
    currency: Option<CurrencyCode>,
    shape: Shape,
    gift: bool,
    converter: Arc<dyn UnitConverter>,
    centimetres: OnceLock<Vec<f64>>,
    inches: OnceLock<Vec<f64>>,
    volumetric: OnceLock<Mass>,
}

impl Package {
    /// Builds a package using the standard unit conversion factors.
    ///
    /// ```
    /// use shipquote::{Package, PackageOptions, UnitSystem};
    ///
    /// let package = Package::new(100.0, [10.0, 20.0, 30.0], &PackageOptions::default()).unwrap();
    /// assert_eq!(package.unit_system(), UnitSystem::Metric);
    /// assert_eq!(package.centimetres(), &[10.0, 20.0, 30.0]);
    /// ```
    pub fn new<W, D>(weight: W, dimensions: D, options: &PackageOptions) -> Result<Self>
    where
        W: Into<RawQuantity<Mass>>,
        D: IntoIterator,
        D::Item: Into<RawQuantity<Length>>,
    {
        Self::with_converter(weight, dimensions, options, Arc::new(StandardUnits))
    }

    pub fn with_converter<W, D>(
        weight: W,
        dimensions: D,
        options: &PackageOptions,
        converter: Arc<dyn UnitConverter>,
    ) -> Result<Self>
    where
        W: Into<RawQuantity<Mass>>,
        D: IntoIterator,
        D::Item: Into<RawQuantity<Length>>,
    {
        let unit_system = options.units;
        let weight = resolve_weight(&weight.into(), unit_system)?;
        let raw_dimensions: Vec<RawQuantity<Length>> =
            dimensions.into_iter().map(Into::into).collect();
        let dimensions =
            normalize_dimensions(resolve_dimensions(&raw_dimensions, unit_system)?, unit_system);
        let declared = money::normalize(options.value.as_ref(), options.currency.as_deref())?;

        tracing::debug!(
            weight = %weight,
            axes = dimensions.len(),
            units = %unit_system,
            shape = ?options.shape(),
            "package constructed"
        );

        Ok(Self {
            weight,
            dimensions,
            unit_system,
            value: declared.minor_units,
            currency: declared.currency,
            shape: options.shape(),
            gift: options.gift,
            converter,
            centimetres: OnceLock::new(),
            inches: OnceLock::new(),
            volumetric: OnceLock::new(),
        })
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    pub fn dimensions(&self) -> &[Length] {
        &self.dimensions
    }

    /// Declared value in minor units.
    pub fn value(&self) -> Option<i64> {
        self.value
    }

    pub fn currency(&self) -> Option<&CurrencyCode> {
        self.currency.as_ref()
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn is_cylinder(&self) -> bool {
        self.shape == Shape::Cylinder
    }

    pub fn is_gift(&self) -> bool {
        self.gift
    }

    pub fn weight(&self, kind: WeightKind) -> Mass {
        match kind {
            WeightKind::Actual => self.weight,
            WeightKind::Volumetric => *self.volumetric.get_or_init(|| self.compute_volumetric()),
            WeightKind::Billable => {
                let actual = self.weight;
                let volumetric = self.weight(WeightKind::Volumetric);
                if self.in_grams(&volumetric) > self.in_grams(&actual) {
                    volumetric
                } else {
                    actual
                }
            }
        }
    }

    fn compute_volumetric(&self) -> Mass {
        let box_volume = self.centimetres_of(Measure::BoxVolume).unwrap_or(0.0);
        let grams = Mass::grams(box_volume / VOLUMETRIC_DIVISOR);
        match self.unit_system {
            UnitSystem::Metric => grams,
            UnitSystem::Imperial => self.converter.convert_mass(&grams, MassUnit::Pounds),
        }
    }

    fn in_grams(&self, mass: &Mass) -> f64 {
        self.converter.convert_mass(mass, MassUnit::Grams).amount
    }

    pub fn grams(&self, kind: WeightKind) -> f64 {
        self.weight_in(kind, MassUnit::Grams)
    }

    pub fn kilograms(&self, kind: WeightKind) -> f64 {
        self.weight_in(kind, MassUnit::Kilograms)
    }

    pub fn pounds(&self, kind: WeightKind) -> f64 {
        self.weight_in(kind, MassUnit::Pounds)
    }

    pub fn ounces(&self, kind: WeightKind) -> f64 {
        self.weight_in(kind, MassUnit::Ounces)
    }

    fn weight_in(&self, kind: WeightKind, unit: MassUnit) -> f64 {
        self.converter.convert_mass(&self.weight(kind), unit).amount
    }

    /// All axes in centimetres, `[height, width, length]`.
    pub fn centimetres(&self) -> &[f64] {
        self.centimetres
            .get_or_init(|| self.axes_in(LengthUnit::Centimetres))
    }

    /// All axes in inches, `[height, width, length]`.
    pub fn inches(&self) -> &[f64] {
        self.inches.get_or_init(|| self.axes_in(LengthUnit::Inches))
    }

    pub fn centimetres_of(&self, measure: Measure) -> Option<f64> {
        geometry::measure(self.centimetres(), self.shape, measure)
    }

    pub fn inches_of(&self, measure: Measure) -> Option<f64> {
        geometry::measure(self.inches(), self.shape, measure)
    }

    /// A named axis or derived measure in an arbitrary length unit. Areas and
    /// volumes come out in the matching squared/cubed unit.
    pub fn dimension_value(&self, measure: Measure, unit: LengthUnit) -> Option<f64> {
        match unit {
            LengthUnit::Centimetres => self.centimetres_of(measure),
            LengthUnit::Inches => self.inches_of(measure),
            other => geometry::measure(&self.axes_in(other), self.shape, measure),
        }
    }

    fn axes_in(&self, unit: LengthUnit) -> Vec<f64> {
        self.dimensions
            .iter()
            .map(|axis| self.converter.convert_length(axis, unit).amount)
            .collect()
    }

    pub fn summary(&self) -> PackageSummary {
        PackageSummary {
            units: self.unit_system,
            shape: self.shape,
            gift: self.gift,
            weight: self.weight(WeightKind::Actual),
            volumetric_weight: self.weight(WeightKind::Volumetric),
            billable_weight: self.weight(WeightKind::Billable),
            billable_grams: self.grams(WeightKind::Billable),
            centimetres: self.centimetres().to_vec(),
            inches: self.inches().to_vec(),
            girth_cm: self.centimetres_of(Measure::Girth).unwrap_or(0.0),
            volume_cm3: self.centimetres_of(Measure::Volume).unwrap_or(0.0),
            value: self.value,
            currency: self.currency.clone(),
        }
    }
}

impl fmt::Debug for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Package")
            .field("weight", &self.weight)
            .field("dimensions", &self.dimensions)
            .field("unit_system", &self.unit_system)
            .field("value", &self.value)
            .field("currency", &self.currency)
            .field("shape", &self.shape)
            .field("gift", &self.gift)
            .finish_non_exhaustive()
    }
}

impl Serialize for Package {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.summary().serialize(serializer)
    }
}

/// Snapshot of a package's derived measures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageSummary {
    pub units: UnitSystem,
    pub shape: Shape,
    pub gift: bool,
    pub weight: Mass,
    pub volumetric_weight: Mass,
    pub billable_weight: Mass,
    pub billable_grams: f64,
    pub centimetres: Vec<f64>,
    pub inches: Vec<f64>,
    pub girth_cm: f64,
    pub volume_cm3: f64,
    pub value: Option<i64>,
    pub currency: Option<CurrencyCode>,
}
