use crate::domain::model::{RateRequest, RateResponse, TrackingResponse};
use crate::domain::units::{Length, LengthUnit, Mass, MassUnit};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Quantity conversion service. Converting never fails: every supported unit
/// has a fixed factor to every other unit of the same dimension.
pub trait UnitConverter: Send + Sync {
    fn convert_mass(&self, mass: &Mass, target: MassUnit) -> Mass;
    fn convert_length(&self, length: &Length, target: LengthUnit) -> Length;
}

/// Carries an already-serialized request document to a carrier endpoint and
/// hands back the unparsed response text.
pub trait Transport: Send + Sync {
    fn post(
        &self,
        path: &str,
        body: &str,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// A carrier adapter: serializes requests in its own wire dialect and parses
/// responses into the canonical model.
#[async_trait]
pub trait Carrier: Send + Sync {
    fn name(&self) -> &str;
    async fn find_rates(&self, request: &RateRequest) -> Result<RateResponse>;
    async fn find_tracking_info(&self, tracking_number: &str) -> Result<TrackingResponse>;
}
