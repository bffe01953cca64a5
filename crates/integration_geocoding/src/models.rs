//! Response envelope for the Google Geocoding API
//!
//! Only the fields the client consumes are modeled; everything else in the
//! provider response is ignored for forward compatibility. Top-level fields
//! default when absent so partially-matching documents still decode.

use serde::Deserialize;

/// Top-level envelope returned by the geocoding service
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    /// Provider status code, e.g. `OK` or `ZERO_RESULTS`
    #[serde(default)]
    pub status: String,

    /// Human-readable error detail, present on failures
    #[serde(default)]
    pub error_message: String,

    /// Matches in provider-defined order; the client never reorders them
    #[serde(default)]
    pub results: Vec<ResultEntry>,
}

/// One geocoding match
#[derive(Debug, Deserialize)]
pub(crate) struct ResultEntry {
    #[serde(default)]
    pub formatted_address: String,
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Geometry {
    pub location: Location,
}

/// Coordinate pair as sent by the provider. Some upstream mocks emit
/// capitalized keys, so both spellings are accepted.
#[derive(Debug, Deserialize)]
pub(crate) struct Location {
    #[serde(alias = "Lat")]
    pub lat: f64,
    #[serde(alias = "Lng")]
    pub lng: f64,
}
