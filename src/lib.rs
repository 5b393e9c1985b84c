pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HttpTransport, StandardUnits};
pub use config::{PackageOptions, ShippingConfig};
pub use core::geometry::{Measure, Shape};
pub use core::measurement::RawQuantity;
pub use core::money::{
    normalize as normalize_money, CurrencyCode, Money, MoneyInput, NormalizedMoney,
};
pub use core::normalize::{normalize_currency, service_name_for_code};
pub use core::package::{Package, PackageSummary, WeightKind};
pub use core::quote::QuoteEngine;
pub use domain::model::{
    Amount, DeliveryRange, Location, PackageRate, Rate, RateFields, RateRequest, RateResponse,
    ShipmentEvent, TrackingFields, TrackingResponse,
};
pub use domain::ports::{Carrier, Transport, UnitConverter};
pub use domain::units::{Length, LengthUnit, Mass, MassUnit, UnitSystem};
pub use utils::error::{Result, ShippingError};
