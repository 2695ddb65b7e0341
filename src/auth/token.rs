use crate::config::Config;
use crate::error::AppError;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Represents the claims encoded within a JWT (JSON Web Token).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token: the account's unique identifier.
    pub sub: i32,
    /// Issuance timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// Issues and verifies bearer tokens.
///
/// The signing and verification keys are pre-computed once from the startup
/// configuration and the service is shared via app data; request-handling
/// code never reads the signing secret from the environment.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl_days: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::days(ttl_days),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.jwt_secret, config.token_ttl_days)
    }

    /// Issues a signed token for the given account id, expiring at the
    /// configured horizon from now.
    pub fn issue(&self, account_id: i32) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::Internal("Token expiry out of range".into()))?;

        let claims = Claims {
            sub: account_id,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("Failed to generate token: {}", e)))
    }

    /// Verifies a token's signature and expiry and decodes its claims.
    ///
    /// Any failure, whether the token is malformed, forged, or expired,
    /// yields the same `AppError::Unauthorized` so callers cannot probe
    /// which check failed.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test_secret_for_tokens", 30)
    }

    #[test]
    fn test_token_issuance_and_verification() {
        let account_id = 1;
        let token = service().issue(account_id).unwrap();
        let claims = service().verify(&token).unwrap();
        assert_eq!(claims.sub, account_id);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_expiration() {
        let svc = service();

        // Encode claims that expired two hours ago with the same secret,
        // well past the default leeway.
        let now = Utc::now();
        let claims_expired = Claims {
            sub: 2,
            iat: (now - Duration::hours(3)).timestamp(),
            exp: (now - Duration::hours(2)).timestamp(),
        };
        let expired_token = encode(
            &Header::default(),
            &claims_expired,
            &EncodingKey::from_secret("test_secret_for_tokens".as_bytes()),
        )
        .unwrap();

        match svc.verify(&expired_token) {
            Err(AppError::Unauthorized(msg)) => {
                assert_eq!(msg, "Invalid or expired token");
            }
            Ok(_) => panic!("Token should have been invalid due to expiration"),
            Err(e) => panic!("Unexpected error type for expired token: {:?}", e),
        }
    }

    #[test]
    fn test_invalid_token_signature() {
        // A token signed with a different secret must not verify, and the
        // failure must be indistinguishable from an expired one.
        let other = TokenService::new("a_completely_different_secret", 30);
        let token = other.issue(3).unwrap();

        match service().verify(&token) {
            Err(AppError::Unauthorized(msg)) => {
                assert_eq!(msg, "Invalid or expired token");
            }
            Ok(_) => panic!("Token should have been invalid due to signature mismatch"),
            Err(e) => panic!("Unexpected error type for invalid signature: {:?}", e),
        }
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        match service().verify("not-a-jwt-at-all") {
            Err(AppError::Unauthorized(_)) => {}
            Ok(_) => panic!("Malformed token should not verify"),
            Err(e) => panic!("Unexpected error type for malformed token: {:?}", e),
        }
    }
}
