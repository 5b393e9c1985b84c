#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::ShippingConfig;

use crate::core::geometry::Shape;
use crate::core::money::MoneyInput;
use crate::domain::units::UnitSystem;
use serde::{Deserialize, Serialize};

/// Options for constructing a [`Package`](crate::core::package::Package).
///
/// Passed explicitly on every construction; there is no process-wide default.
/// Use [`ShippingConfig::package_options`] to seed one from a config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageOptions {
    pub units: UnitSystem,
    pub value: Option<MoneyInput>,
    pub currency: Option<String>,
    #[serde(alias = "tube")]
    pub cylinder: bool,
    pub gift: bool,
}

impl PackageOptions {
    pub fn units(mut self, units: UnitSystem) -> Self {
        self.units = units;
        self
    }

    pub fn value(mut self, value: impl Into<MoneyInput>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn cylinder(mut self, cylinder: bool) -> Self {
        self.cylinder = cylinder;
        self
    }

    pub fn tube(self, tube: bool) -> Self {
        self.cylinder(tube)
    }

    pub fn gift(mut self, gift: bool) -> Self {
        self.gift = gift;
        self
    }

    pub fn shape(&self) -> Shape {
        if self.cylinder {
            Shape::Cylinder
        } else {
            Shape::Box
        }
    }
}
