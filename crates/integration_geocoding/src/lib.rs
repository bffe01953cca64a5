//! Google Maps Geocoding integration
//!
//! Client for the [Google Maps Geocoding API](https://developers.google.com/maps/documentation/geocoding):
//! forward geocoding (free-text address to coordinates) and reverse geocoding
//! (coordinates to a formatted address).
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with the other
//! integration crates. [`Geocoder`] defines the interface, implemented by
//! [`GoogleGeocoder`]. Authentication is a configuration variant
//! ([`GeocodingAuth`]): anonymous, standard API key, or premier (enterprise)
//! accounts that sign every request with HMAC-SHA1.
//!
//! Each call is a single round trip. The client performs no retries, no
//! caching, and holds no shared mutable state; overriding the endpoint for
//! tests means constructing a client with a different `base_url`.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{Geocoder, GeocodingConfig, GoogleGeocoder};
//!
//! let config = GeocodingConfig::default();
//! let client = GoogleGeocoder::new(config)?;
//!
//! let location = client.geocode("1 Infinite Loop, Cupertino").await?;
//! let address = client.reverse_geocode(location).await?;
//! ```

mod client;
mod config;
mod error;
mod models;
mod signing;

pub use client::{Geocoder, GoogleGeocoder};
pub use config::{GeocodingAuth, GeocodingConfig};
pub use error::GeocodingError;
