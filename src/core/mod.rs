pub mod dimensions;
pub mod geometry;
pub mod measurement;
pub mod money;
pub mod normalize;
pub mod package;
pub mod quote;

pub use crate::domain::model::{
    Amount, DeliveryRange, Location, PackageRate, Rate, RateFields, RateRequest, RateResponse,
    ShipmentEvent, TrackingFields, TrackingResponse,
};
pub use crate::domain::ports::{Carrier, Transport, UnitConverter};
pub use crate::utils::error::Result;
