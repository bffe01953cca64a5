//! Geocoder configuration

use serde::{Deserialize, Serialize};

/// Authentication mode for the geocoding service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GeocodingAuth {
    /// Anonymous access, no credentials sent
    #[default]
    None,

    /// Standard API key, sent as the `key` query parameter
    ApiKey {
        /// The API key issued by the provider
        key: String,
    },

    /// Premier (enterprise) account. Every request carries the `client` id
    /// and an HMAC-SHA1 signature computed with the shared secret.
    Premier {
        /// Client id, e.g. `gme-acme`
        client_id: String,
        /// Shared secret, standard base64
        secret_key: String,
    },
}

/// Configuration for the geocoding client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL for the geocoding endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Response language requested from the provider
    #[serde(default = "default_language")]
    pub language: String,

    /// Authentication mode
    #[serde(default)]
    pub auth: GeocodingAuth,
}

fn default_base_url() -> String {
    "https://maps.googleapis.com/maps/api/geocode/json".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_language() -> String {
    "ja".to_string()
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            language: default_language(),
            auth: GeocodingAuth::None,
        }
    }
}

impl GeocodingConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.language.is_empty() {
            return Err("language must not be empty".to_string());
        }

        if let GeocodingAuth::Premier { client_id, .. } = &self.auth
            && client_id.is_empty()
        {
            return Err("premier client_id must not be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GeocodingConfig::default();
        assert_eq!(
            config.base_url,
            "https://maps.googleapis.com/maps/api/geocode/json"
        );
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.language, "ja");
        assert!(matches!(config.auth, GeocodingAuth::None));
    }

    #[test]
    fn testing_config() {
        let config = GeocodingConfig::for_testing();
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn validation_success() {
        assert!(GeocodingConfig::default().validate().is_ok());
    }

    #[test]
    fn validation_empty_base_url() {
        let config = GeocodingConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_zero_timeout() {
        let config = GeocodingConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_empty_language() {
        let config = GeocodingConfig {
            language: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_empty_premier_client_id() {
        let config = GeocodingConfig {
            auth: GeocodingAuth::Premier {
                client_id: String::new(),
                secret_key: "c2VjcmV0".to_string(),
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn serialization_roundtrip() {
        let config = GeocodingConfig {
            auth: GeocodingAuth::ApiKey {
                key: "test-key".to_string(),
            },
            ..Default::default()
        };
        let json = serde_json::to_string(&config).expect("serialize");
        let deserialized: GeocodingConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(deserialized.base_url, config.base_url);
        assert!(matches!(deserialized.auth, GeocodingAuth::ApiKey { .. }));
    }

    #[test]
    fn auth_defaults_to_none_when_absent() {
        let config: GeocodingConfig = serde_json::from_str("{}").expect("deserialize");
        assert!(matches!(config.auth, GeocodingAuth::None));
    }
}
