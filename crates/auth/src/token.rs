//! Session-token validation seam.
//!
//! Credential issuance is an external concern; this module only defines the
//! boundary the web layer consumes, plus an HS256 implementation of it.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};

use crate::claims::{SessionClaims, TokenValidationError, validate_claims};

/// Authentication-provider boundary: resolve a bearer token to validated
/// session claims (user id, department, role names).
pub trait TokenValidator: Send + Sync {
    fn validate(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<SessionClaims, TokenValidationError>;
}

/// HS256 session-token validator.
pub struct Hs256TokenValidator {
    decoding: DecodingKey,
}

impl Hs256TokenValidator {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

impl TokenValidator for Hs256TokenValidator {
    fn validate(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<SessionClaims, TokenValidationError> {
        // The claims carry their own time window (validated below against the
        // caller's clock); jsonwebtoken checks only the signature here.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims = HashSet::new();

        let data = jsonwebtoken::decode::<SessionClaims>(token, &self.decoding, &validation)
            .map_err(|e| TokenValidationError::Malformed(e.to_string()))?;

        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}
