//! Google Geocoding HTTP client
//!
//! One request/response translation path shared by both operations: build a
//! pre-encoded query string (keyed or signed per the configured auth mode),
//! issue a single GET, decode the JSON envelope, extract the first result.
//! The transport never interprets the HTTP status code; the envelope's own
//! `status` field is authoritative.

use std::time::Duration;

use async_trait::async_trait;
use domain::Coordinate;
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::config::{GeocodingAuth, GeocodingConfig};
use crate::error::GeocodingError;
use crate::models::GeocodeResponse;
use crate::signing;

/// Trait for geocoding clients
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve a free-text address to a coordinate
    async fn geocode(&self, address: &str) -> Result<Coordinate, GeocodingError>;

    /// Resolve a coordinate to a formatted address
    async fn reverse_geocode(&self, location: Coordinate) -> Result<String, GeocodingError>;
}

/// Google Maps Geocoding API client
///
/// Stateless apart from the owned configuration; each call is one round trip
/// with no retries. Safe to share across tasks.
#[derive(Debug)]
pub struct GoogleGeocoder {
    client: Client,
    config: GeocodingConfig,
    /// Path component of `base_url`, covered by premier signatures
    endpoint_path: String,
}

impl GoogleGeocoder {
    /// Create a new geocoder with the given configuration
    ///
    /// # Errors
    ///
    /// Returns [`GeocodingError::ConfigurationError`] if the configuration is
    /// invalid, the base URL does not parse, or the HTTP client cannot be
    /// initialized.
    pub fn new(config: GeocodingConfig) -> Result<Self, GeocodingError> {
        config.validate().map_err(GeocodingError::ConfigurationError)?;

        let endpoint_path = Url::parse(&config.base_url)
            .map_err(|e| GeocodingError::ConfigurationError(format!("invalid base_url: {e}")))?
            .path()
            .to_string();

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeocodingError::ConfigurationError(e.to_string()))?;

        Ok(Self {
            client,
            config,
            endpoint_path,
        })
    }

    /// Create a new geocoder with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, GeocodingError> {
        Self::new(GeocodingConfig::default())
    }

    /// Build the query string for a forward geocode request
    ///
    /// Parameter order is fixed: the premier signature covers the exact byte
    /// sequence of the unsigned query.
    fn forward_query(&self, address: &str) -> Result<String, GeocodingError> {
        match &self.config.auth {
            GeocodingAuth::None => Ok(format!("address={}", query_escape(address))),
            GeocodingAuth::ApiKey { key } => Ok(format!(
                "address={}&key={}",
                query_escape(address),
                query_escape(key)
            )),
            GeocodingAuth::Premier {
                client_id,
                secret_key,
            } => {
                if address.is_empty() {
                    return Err(GeocodingError::InvalidInput(
                        "address must not be empty".to_string(),
                    ));
                }
                let query = format!(
                    "language={}&address={}&client={client_id}",
                    self.config.language,
                    query_escape(address)
                );
                self.signed(query, secret_key)
            }
        }
    }

    /// Build the query string for a reverse geocode request
    fn reverse_query(&self, location: Coordinate) -> Result<String, GeocodingError> {
        let latlng = format!("{:.6},{:.6}", location.latitude(), location.longitude());
        match &self.config.auth {
            GeocodingAuth::None => {
                Ok(format!("language={}&latlng={latlng}", self.config.language))
            }
            GeocodingAuth::ApiKey { key } => Ok(format!(
                "language={}&latlng={latlng}&key={}",
                self.config.language,
                query_escape(key)
            )),
            GeocodingAuth::Premier {
                client_id,
                secret_key,
            } => {
                let query = format!(
                    "language={}&latlng={latlng}&client={client_id}",
                    self.config.language
                );
                self.signed(query, secret_key)
            }
        }
    }

    /// Append the premier signature to an unsigned query string
    fn signed(&self, query: String, secret_key: &str) -> Result<String, GeocodingError> {
        let signature = signing::sign(&self.endpoint_path, &query, secret_key)?;
        Ok(format!("{query}&signature={signature}"))
    }

    /// Issue a GET for the given pre-encoded query string and return the raw
    /// response body
    ///
    /// Any HTTP status is accepted; the envelope carries its own status.
    async fn request(&self, query: &str) -> Result<Vec<u8>, GeocodingError> {
        let url = format!("{}?{}", self.config.base_url, query);
        debug!(url = %url, "Requesting geocoding service");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| GeocodingError::RequestFailed(e.to_string()))?;

        Ok(body.to_vec())
    }
}

#[async_trait]
impl Geocoder for GoogleGeocoder {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Coordinate, GeocodingError> {
        let query = self.forward_query(address)?;
        let body = self.request(&query).await?;
        let response = decode(&body)?;
        extract_coordinate(&response)
    }

    #[instrument(skip(self), fields(lat = %location.latitude(), lng = %location.longitude()))]
    async fn reverse_geocode(&self, location: Coordinate) -> Result<String, GeocodingError> {
        let query = self.reverse_query(location)?;
        let body = self.request(&query).await?;
        let response = decode(&body)?;
        extract_address(response)
    }
}

/// Percent-encode a query parameter value (space becomes `+`)
fn query_escape(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

/// Parse the raw response body into the envelope
fn decode(data: &[u8]) -> Result<GeocodeResponse, GeocodingError> {
    serde_json::from_slice(data).map_err(|e| GeocodingError::ParseError(e.to_string()))
}

/// Take the first result's coordinate, or the zero-results sentinel
fn extract_coordinate(response: &GeocodeResponse) -> Result<Coordinate, GeocodingError> {
    let entry = response.results.first().ok_or(GeocodingError::ZeroResults)?;
    let location = &entry.geometry.location;
    Coordinate::new(location.lat, location.lng)
        .map_err(|e| GeocodingError::ParseError(e.to_string()))
}

/// Take the first result's formatted address, or surface the provider's own
/// status and error message
fn extract_address(response: GeocodeResponse) -> Result<String, GeocodingError> {
    let mut results = response.results;
    if results.is_empty() {
        return Err(GeocodingError::NoResults {
            status: response.status,
            message: response.error_message,
        });
    }
    Ok(results.swap_remove(0).formatted_address)
}
