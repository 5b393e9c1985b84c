use crate::core::{Carrier, RateRequest, RateResponse, TrackingResponse};
use crate::utils::error::ShippingError;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Asks a caller-chosen set of carriers for rates at the same time.
///
/// One carrier failing never affects the others: errors come back as
/// `success = false` responses in that carrier's slot.
pub struct QuoteEngine {
    carriers: Vec<Arc<dyn Carrier>>,
}

impl QuoteEngine {
    pub fn new(carriers: Vec<Arc<dyn Carrier>>) -> Self {
        Self { carriers }
    }

    pub fn carriers(&self) -> impl Iterator<Item = &str> {
        self.carriers.iter().map(|carrier| carrier.name())
    }

    /// Returns one response per carrier, in the order the carriers were given.
    pub async fn find_rates(&self, request: RateRequest) -> Vec<(String, RateResponse)> {
        let request = Arc::new(request);
        let mut tasks = JoinSet::new();

        tracing::info!(
            carriers = self.carriers.len(),
            packages = request.packages.len(),
            "requesting rates"
        );

        for (index, carrier) in self.carriers.iter().enumerate() {
            let carrier = Arc::clone(carrier);
            let request = Arc::clone(&request);
            tasks.spawn(async move {
                let response = match carrier.find_rates(&request).await {
                    Ok(response) => response,
                    Err(e) => {
                        tracing::warn!(carrier = carrier.name(), error = %e, "rate request failed");
                        RateResponse::failure(e.to_string(), raw_document_of(&e))
                    }
                };
                (index, response)
            });
        }

        let mut slots: Vec<Option<RateResponse>> = vec![None; self.carriers.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, response)) => slots[index] = Some(response),
                Err(e) => tracing::error!(error = %e, "rate task did not complete"),
            }
        }

        self.carriers
            .iter()
            .zip(slots)
            .map(|(carrier, slot)| {
                let response = slot.unwrap_or_else(|| {
                    RateResponse::failure("rate request did not complete", String::new())
                });
                (carrier.name().to_string(), response)
            })
            .collect()
    }

    /// Tracks a shipment with the named carrier.
    pub async fn track(&self, carrier_name: &str, tracking_number: &str) -> TrackingResponse {
        let Some(carrier) = self
            .carriers
            .iter()
            .find(|carrier| carrier.name().eq_ignore_ascii_case(carrier_name))
        else {
            return TrackingResponse::failure(
                tracking_number,
                format!("no carrier named {:?} is configured", carrier_name),
            );
        };

        match carrier.find_tracking_info(tracking_number).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(carrier = carrier.name(), error = %e, "tracking request failed");
                TrackingResponse::failure_with_document(
                    tracking_number,
                    e.to_string(),
                    raw_document_of(&e),
                )
            }
        }
    }
}

/// The carrier's unparsed reply, when the error still carries one.
fn raw_document_of(error: &ShippingError) -> String {
    match error {
        ShippingError::HttpStatus { body, .. } => body.clone(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Location;
    use crate::utils::error::Result;
    use async_trait::async_trait;

    struct Offline;

    #[async_trait]
    impl Carrier for Offline {
        fn name(&self) -> &str {
            "Offline"
        }

        async fn find_rates(&self, _request: &RateRequest) -> Result<RateResponse> {
            Err(ShippingError::Carrier {
                carrier: "Offline".to_string(),
                message: "connection refused".to_string(),
            })
        }

        async fn find_tracking_info(&self, _tracking_number: &str) -> Result<TrackingResponse> {
            Err(ShippingError::Carrier {
                carrier: "Offline".to_string(),
                message: "connection refused".to_string(),
            })
        }
    }

    struct Maintenance;

    #[async_trait]
    impl Carrier for Maintenance {
        fn name(&self) -> &str {
            "Maintenance"
        }

        async fn find_rates(&self, _request: &RateRequest) -> Result<RateResponse> {
            Err(ShippingError::HttpStatus {
                status: 503,
                body: "<Error>maintenance window</Error>".to_string(),
            })
        }

        async fn find_tracking_info(&self, _tracking_number: &str) -> Result<TrackingResponse> {
            Err(ShippingError::HttpStatus {
                status: 404,
                body: "<Error>unknown tracking number</Error>".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_http_status_body_kept_as_raw_document() {
        let carriers: Vec<Arc<dyn Carrier>> = vec![Arc::new(Maintenance), Arc::new(Offline)];
        let engine = QuoteEngine::new(carriers);
        let request = RateRequest::new(Location::country("US"), Location::country("CA"), vec![]);
        let responses = engine.find_rates(request).await;

        let (_, rates) = &responses[0];
        assert!(!rates.success);
        assert!(rates.message.contains("503"));
        assert_eq!(rates.raw_document, "<Error>maintenance window</Error>");
        assert_eq!(responses[1].1.raw_document, "");

        let tracking = engine.track("Maintenance", "1Z999").await;
        assert!(!tracking.success);
        assert!(tracking.message.contains("404"));
        assert_eq!(tracking.raw_document, "<Error>unknown tracking number</Error>");
    }

    #[tokio::test]
    async fn test_carrier_error_becomes_failed_response() {
        let carriers: Vec<Arc<dyn Carrier>> = vec![Arc::new(Offline)];
        let engine = QuoteEngine::new(carriers);
        let request = RateRequest::new(Location::country("US"), Location::country("CA"), vec![]);
        let responses = engine.find_rates(request).await;

        assert_eq!(responses.len(), 1);
        let (name, response) = &responses[0];
        assert_eq!(name, "Offline");
        assert!(!response.success);
        assert!(response.message.contains("connection refused"));
        assert!(response.rates.is_empty());
    }

    #[tokio::test]
    async fn test_track_unknown_carrier() {
        let carriers: Vec<Arc<dyn Carrier>> = vec![Arc::new(Offline)];
        let engine = QuoteEngine::new(carriers);
        let response = engine.track("Pigeon", "123").await;
        assert!(!response.success);
        assert_eq!(response.tracking_number, "123");

        let response = engine.track("offline", "123").await;
        assert!(response.message.contains("connection refused"));
    }
}
