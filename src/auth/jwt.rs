use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use uuid::Uuid;

use crate::{
    auth::claims::Claims,
    errors::{AppError, AppResult},
};

/// Validity window of an issued token when no explicit TTL is given.
pub const DEFAULT_TTL_MINUTES: i64 = 120;

/// Why a token failed to validate. The split stays internal: callers surface
/// both cases as the same unauthenticated outcome so a probing client learns
/// nothing from the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    Expired,
    Malformed,
}

#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_minutes: i64,
}

impl JwtService {
    pub fn new(secret: &SecretString, ttl_minutes: i64) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            validation: Validation::default(),
            ttl_minutes,
        }
    }

    pub fn issue(&self, subject: &Uuid) -> AppResult<String> {
        self.issue_with_ttl(subject, self.ttl_minutes)
    }

    pub fn issue_with_ttl(&self, subject: &Uuid, ttl_minutes: i64) -> AppResult<String> {
        let claims = Claims::new(subject, ttl_minutes);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to sign token: {}", e)))
    }

    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn jwt_service() -> JwtService {
        let config = Config::test_config();
        JwtService::new(&config.jwt_secret, DEFAULT_TTL_MINUTES)
    }

    #[test]
    fn test_issue_and_validate() {
        let service = jwt_service();
        let subject = Uuid::new_v4();

        let token = service.issue(&subject).unwrap();
        assert!(!token.is_empty());

        let claims = service.validate(&token).unwrap();
        assert_eq!(claims.sub, subject.to_string());
        assert_eq!(claims.exp - claims.iat, (DEFAULT_TTL_MINUTES * 60) as usize);
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let service = jwt_service();

        assert_eq!(
            service.validate("invalid.token.here").unwrap_err(),
            TokenError::Malformed
        );
    }

    #[test]
    fn test_expired_token_is_classified_as_expired() {
        let service = jwt_service();
        let subject = Uuid::new_v4();

        // Mint a token that expired two minutes ago, beyond the default leeway.
        let token = service.issue_with_ttl(&subject, -2).unwrap();

        assert_eq!(service.validate(&token).unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn test_token_from_other_secret_is_malformed() {
        let service = jwt_service();
        let other = JwtService::new(
            &SecretString::from("some_other_secret_key".to_string()),
            DEFAULT_TTL_MINUTES,
        );

        let token = other.issue(&Uuid::new_v4()).unwrap();
        assert_eq!(service.validate(&token).unwrap_err(), TokenError::Malformed);
    }
}
