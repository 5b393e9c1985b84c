use crate::config::toml_config::TransportConfig;
use crate::config::ShippingConfig;
use crate::domain::ports::Transport;
use crate::utils::error::{Result, ShippingError};
use crate::utils::validation::{validate_required_field, validate_url};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;

/// Posts request documents to one carrier endpoint. No retries; the caller
/// decides what a failed call means.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
    headers: HashMap<String, String>,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let endpoint = endpoint.into();
        validate_url("transport.endpoint", &endpoint)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            headers: HashMap::new(),
        })
    }

    pub fn from_config(config: &ShippingConfig) -> Result<Self> {
        let transport: &TransportConfig = validate_required_field("transport", &config.transport)?;
        let mut http = Self::new(transport.endpoint.clone(), config.timeout())?;
        if let Some(headers) = &transport.headers {
            http.headers = headers.clone();
        }
        Ok(http)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    fn url_for(&self, path: &str) -> String {
        if path.is_empty() {
            self.endpoint.clone()
        } else {
            format!("{}/{}", self.endpoint, path.trim_start_matches('/'))
        }
    }
}

impl Transport for HttpTransport {
    async fn post(&self, path: &str, body: &str) -> Result<String> {
        let url = self.url_for(path);
        tracing::debug!("Posting {} bytes to {}", body.len(), url);

        let mut request = self.client.post(&url).body(body.to_string());
        for (name, value) in &self.headers {
            request = request.header(name, value);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("Carrier response status: {}", status);

        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "carrier endpoint rejected request");
            return Err(ShippingError::HttpStatus {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_endpoint() {
        assert!(HttpTransport::new("not a url", Duration::from_secs(1)).is_err());
    }

    #[test]
    fn test_url_joining() {
        let http = HttpTransport::new("https://rates.example.com/", Duration::from_secs(1)).unwrap();
        assert_eq!(http.url_for("/rate"), "https://rates.example.com/rate");
        assert_eq!(http.url_for(""), "https://rates.example.com");
    }

    #[test]
    fn test_from_config_requires_transport_section() {
        let config = ShippingConfig::default();
        assert!(matches!(
            HttpTransport::from_config(&config),
            Err(ShippingError::MissingConfig { .. })
        ));
    }
}
