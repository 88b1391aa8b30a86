//! Inspection of access tokens issued by the authentication API.
//!
//! CareDesk never verifies these tokens (it does not hold the signing key);
//! it only reads `exp` to decide whether a refresh is due before calling the
//! upstream.

use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ExpiryClaims {
    exp: Option<i64>,
}

/// Read the `exp` claim without signature verification.
pub fn expires_at(token: &str) -> Option<i64> {
    let header = jsonwebtoken::decode_header(token).ok()?;
    let mut validation = Validation::new(header.alg);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    decode::<ExpiryClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .ok()
        .and_then(|data| data.claims.exp)
}

/// True when the token carries an `exp` that is at or before `now + leeway`.
///
/// Undecodable tokens and tokens without `exp` count as live; the upstream
/// gets the final say.
pub fn access_token_expired(token: &str, leeway_secs: i64) -> bool {
    match expires_at(token) {
        Some(exp) => exp <= chrono::Utc::now().timestamp() + leeway_secs,
        None => false,
    }
}
