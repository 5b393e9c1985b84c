use crate::core::normalize::{normalize_currency, service_name_for_code};
use crate::core::package::Package;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

const DEFAULT_FAILURE_MESSAGE: &str = "carrier request failed";

/// A carrier-reported price. Carriers disagree on representation (UPS reports
/// integer minor units, FedEx reports decimals); the model keeps whichever the
/// carrier used rather than forcing one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Minor(i64),
    Decimal(f64),
}

impl Amount {
    pub fn as_f64(&self) -> f64 {
        match self {
            Amount::Minor(v) => *v as f64,
            Amount::Decimal(v) => *v,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Minor(v) => write!(f, "{}", v),
            Amount::Decimal(v) => write!(f, "{:.2}", v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRange {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub country: String,
    pub postal_code: Option<String>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub residential: bool,
}

impl Location {
    pub fn country(code: impl Into<String>) -> Self {
        Self {
            country: code.into(),
            ..Default::default()
        }
    }
}

/// Everything a carrier needs to price one shipment.
#[derive(Debug, Clone)]
pub struct RateRequest {
    pub origin: Location,
    pub destination: Location,
    pub packages: Vec<Arc<Package>>,
}

impl RateRequest {
    pub fn new(origin: Location, destination: Location, packages: Vec<Arc<Package>>) -> Self {
        Self {
            origin,
            destination,
            packages,
        }
    }
}

/// Raw fields a carrier adapter extracts from its response document.
#[derive(Debug, Clone)]
pub struct RateFields {
    pub carrier: String,
    pub service_code: String,
    /// Overrides the catalog lookup when the carrier reports a display name.
    pub service_name: Option<String>,
    pub price: Amount,
    pub total_price: Option<Amount>,
    pub currency: String,
    pub delivery_date: Option<String>,
    pub delivery_range: Option<DeliveryRange>,
    pub packages: Vec<Arc<Package>>,
    /// Per-package prices in package order; empty when the carrier only
    /// prices the shipment as a whole.
    pub package_prices: Vec<Amount>,
}

impl RateFields {
    pub fn new(
        carrier: impl Into<String>,
        service_code: impl Into<String>,
        price: Amount,
        currency: impl Into<String>,
        packages: Vec<Arc<Package>>,
    ) -> Self {
        Self {
            carrier: carrier.into(),
            service_code: service_code.into(),
            service_name: None,
            price,
            total_price: None,
            currency: currency.into(),
            delivery_date: None,
            delivery_range: None,
            packages,
            package_prices: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PackageRate {
    pub package: Arc<Package>,
    pub rate: Option<Amount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Rate {
    pub carrier: String,
    pub service_name: String,
    pub service_code: String,
    pub price: Amount,
    pub total_price: Amount,
    pub currency: String,
    pub delivery_date: Option<String>,
    pub delivery_range: Option<DeliveryRange>,
    pub packages: Vec<Arc<Package>>,
    pub package_rates: Vec<PackageRate>,
}

impl Rate {
    /// Builds a canonical rate: corrects legacy currency codes, resolves the
    /// service name and pairs every package with its (possibly absent) price.
    pub fn new(fields: RateFields) -> Self {
        let RateFields {
            carrier,
            service_code,
            service_name,
            price,
            total_price,
            currency,
            delivery_date,
            delivery_range,
            packages,
            package_prices,
        } = fields;

        let currency = normalize_currency(&carrier, &currency);
        let service_name = match service_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => service_name_for_code(&carrier, &service_code),
        };

        if package_prices.len() > packages.len() {
            tracing::warn!(
                carrier = %carrier,
                service = %service_code,
                prices = package_prices.len(),
                packages = packages.len(),
                "dropping per-package prices with no matching package"
            );
        }
        let mut prices = package_prices.into_iter();
        let package_rates = packages
            .iter()
            .map(|package| PackageRate {
                package: Arc::clone(package),
                rate: prices.next(),
            })
            .collect();

        let delivery_date = delivery_date.or_else(|| {
            delivery_range.map(|range| range.latest.format("%Y-%m-%d").to_string())
        });

        Self {
            carrier,
            service_name,
            service_code,
            price,
            total_price: total_price.unwrap_or(price),
            currency,
            delivery_date,
            delivery_range,
            packages,
            package_rates,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RateResponse {
    pub success: bool,
    pub message: String,
    pub params: HashMap<String, serde_json::Value>,
    pub raw_document: String,
    pub rates: Vec<Rate>,
}

impl RateResponse {
    /// Rates keep the carrier's order. A failed response never carries rates.
    pub fn new(
        success: bool,
        message: impl Into<String>,
        params: HashMap<String, serde_json::Value>,
        raw_document: impl Into<String>,
        rates: Vec<Rate>,
    ) -> Self {
        let mut message = message.into();
        let rates = if success {
            rates
        } else {
            if !rates.is_empty() {
                tracing::warn!(
                    discarded = rates.len(),
                    "discarding rates attached to a failed response"
                );
            }
            if message.trim().is_empty() {
                message = DEFAULT_FAILURE_MESSAGE.to_string();
            }
            Vec::new()
        };

        Self {
            success,
            message,
            params,
            raw_document: raw_document.into(),
            rates,
        }
    }

    pub fn failure(message: impl Into<String>, raw_document: impl Into<String>) -> Self {
        Self::new(false, message, HashMap::new(), raw_document, Vec::new())
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentEvent {
    pub time: DateTime<Utc>,
    pub location: String,
    pub message: String,
    pub status_code: String,
}

impl ShipmentEvent {
    pub fn new(
        time: DateTime<Utc>,
        location: impl Into<String>,
        message: impl Into<String>,
        status_code: impl Into<String>,
    ) -> Self {
        Self {
            time,
            location: location.into(),
            message: message.into(),
            status_code: status_code.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrackingFields {
    pub success: bool,
    pub message: String,
    pub params: HashMap<String, serde_json::Value>,
    pub raw_document: String,
    pub tracking_number: String,
    pub status: Option<String>,
    pub shipment_events: Vec<ShipmentEvent>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackingResponse {
    pub success: bool,
    pub message: String,
    pub params: HashMap<String, serde_json::Value>,
    pub raw_document: String,
    pub tracking_number: String,
    pub status: Option<String>,
    pub shipment_events: Vec<ShipmentEvent>,
}

impl TrackingResponse {
    /// Events are exposed oldest first whatever order the carrier used.
    pub fn new(fields: TrackingFields) -> Self {
        let TrackingFields {
            success,
            mut message,
            params,
            raw_document,
            tracking_number,
            status,
            mut shipment_events,
        } = fields;

        if success {
            sort_events(&mut shipment_events);
        } else {
            shipment_events.clear();
            if message.trim().is_empty() {
                message = DEFAULT_FAILURE_MESSAGE.to_string();
            }
        }

        Self {
            success,
            message,
            params,
            raw_document,
            tracking_number,
            status,
            shipment_events,
        }
    }

    pub fn from_events(events: Vec<ShipmentEvent>, status: Option<String>) -> Self {
        Self::new(TrackingFields {
            success: true,
            status,
            shipment_events: events,
            ..Default::default()
        })
    }

    pub fn failure(tracking_number: impl Into<String>, message: impl Into<String>) -> Self {
        Self::failure_with_document(tracking_number, message, String::new())
    }

    /// A failure that keeps whatever the carrier sent back.
    pub fn failure_with_document(
        tracking_number: impl Into<String>,
        message: impl Into<String>,
        raw_document: impl Into<String>,
    ) -> Self {
        Self::new(TrackingFields {
            success: false,
            message: message.into(),
            raw_document: raw_document.into(),
            tracking_number: tracking_number.into(),
            ..Default::default()
        })
    }

    pub fn latest_event(&self) -> Option<&ShipmentEvent> {
        self.shipment_events.last()
    }
}

/// Stable ascending sort by time; events sharing a timestamp keep the
/// carrier's relative order.
pub fn sort_events(events: &mut [ShipmentEvent]) {
    events.sort_by_key(|event| event.time);
}
