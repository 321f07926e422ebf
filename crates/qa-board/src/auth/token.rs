//! Signed session tokens.
//!
//! A token is an HS256 JWT carrying the holder's GitHub id and an
//! expiry one year out. Verification is side-effect-free; any signature,
//! format, or expiry problem yields `None`.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;

/// Token lifetime: one year.
const TOKEN_LIFETIME_SECS: i64 = 365 * 24 * 3600;

/// Claims embedded in a session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// GitHub id of the token holder.
    pub github_id: i64,

    /// Expiry as seconds since the Unix epoch.
    pub exp: i64,
}

/// Encodes and verifies session tokens with a shared secret.
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenCodec {
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a token for a GitHub id, expiring one year from now.
    pub fn issue(&self, github_id: i64) -> ApiResult<String> {
        let exp = chrono::Utc::now().timestamp() + TOKEN_LIFETIME_SECS;
        let claims = Claims { github_id, exp };
        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verify a token and return the embedded GitHub id.
    ///
    /// Returns `None` for a bad signature, a malformed token, or a past
    /// expiry. Callers collapse all of these into one rejection.
    #[must_use]
    pub fn verify(&self, token: &str) -> Option<i64> {
        match decode::<Claims>(token, &self.decoding, &Validation::default()) {
            Ok(data) => Some(data.claims.github_id),
            Err(err) => {
                tracing::debug!(error = %err, "Token verification failed");
                None
            }
        }
    }
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_then_verify() {
        let codec = TokenCodec::new("unit-test-secret");
        let token = codec.issue(42).unwrap();
        assert_eq!(codec.verify(&token), Some(42));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let codec = TokenCodec::new("unit-test-secret");
        let other = TokenCodec::new("another-secret");
        let token = codec.issue(42).unwrap();
        assert_eq!(other.verify(&token), None);
    }

    #[test]
    fn test_malformed_token_rejected() {
        let codec = TokenCodec::new("unit-test-secret");
        assert_eq!(codec.verify("not-a-jwt"), None);
        assert_eq!(codec.verify(""), None);
    }

    #[test]
    fn test_expired_token_rejected() {
        let codec = TokenCodec::new("unit-test-secret");
        // Expired an hour ago, well past the default validation leeway.
        let claims = Claims { github_id: 42, exp: chrono::Utc::now().timestamp() - 3600 };
        let token = encode(&Header::default(), &claims, &codec.encoding).unwrap();
        assert_eq!(codec.verify(&token), None);
    }
}
