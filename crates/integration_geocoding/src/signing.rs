//! HMAC-SHA1 request signing for premier (enterprise) accounts
//!
//! The signature covers the endpoint path plus the exact unsigned query
//! string, so query parameter order matters to the caller.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::error::GeocodingError;

type HmacSha1 = Hmac<Sha1>;

/// Compute the premier request signature over `"<path>?<query>"`
///
/// The secret key is standard base64. The MAC is emitted as URL-safe base64
/// with `,` in place of `=` padding; the receiving service expects this exact
/// alphabet, which deviates from RFC 4648 on the padding byte only.
///
/// # Errors
///
/// Returns [`GeocodingError::InvalidKey`] if the secret key does not decode.
pub(crate) fn sign(path: &str, query: &str, secret_key: &str) -> Result<String, GeocodingError> {
    let key = STANDARD
        .decode(secret_key)
        .map_err(|e| GeocodingError::InvalidKey(e.to_string()))?;

    let mut mac =
        HmacSha1::new_from_slice(&key).map_err(|e| GeocodingError::InvalidKey(e.to_string()))?;
    mac.update(format!("{path}?{query}").as_bytes());
    let digest = mac.finalize().into_bytes();

    Ok(URL_SAFE.encode(digest).replace('=', ","))
}
