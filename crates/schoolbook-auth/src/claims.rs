use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use schoolbook_core::AppError;

/// JWT claims for access tokens.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    /// User's email address at issue time
    pub email: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
    /// Unique token identifier, so two tokens issued in the same second differ
    pub jti: String,
}

impl Claims {
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.sub).map_err(|_| AppError::unauthorized("Invalid token subject."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_claims(sub: &str) -> Claims {
        Claims {
            sub: sub.to_string(),
            email: "test@example.com".to_string(),
            exp: 1234567890,
            iat: 1234567800,
            jti: "test-jti".to_string(),
        }
    }

    #[test]
    fn test_claims_serialize() {
        let serialized = serde_json::to_string(&sample_claims("user-id-123")).unwrap();
        assert!(serialized.contains(r#""sub":"user-id-123""#));
        assert!(serialized.contains(r#""email":"test@example.com""#));
        assert!(serialized.contains(r#""jti":"test-jti""#));
    }

    #[test]
    fn test_claims_deserialize() {
        let json = r#"{"sub":"user-id-456","email":"user@test.com","exp":9999999999,"iat":9999999900,"jti":"abc"}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.sub, "user-id-456");
        assert_eq!(claims.exp, 9999999999);
        assert_eq!(claims.jti, "abc");
    }

    #[test]
    fn test_user_id() {
        let id = Uuid::new_v4();
        assert_eq!(sample_claims(&id.to_string()).user_id().unwrap(), id);
    }

    #[test]
    fn test_user_id_rejects_malformed_subject() {
        let err = sample_claims("not-a-uuid").user_id().unwrap_err();
        assert_eq!(err.status.as_u16(), 401);
    }
}
