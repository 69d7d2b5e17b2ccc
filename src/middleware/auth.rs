use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use schoolbook_auth::{Claims, verify_token};
use schoolbook_core::AppError;

use crate::state::AppState;

const UNAUTHENTICATED: &str = "Unauthenticated.";

/// Extractor that validates the bearer token and provides its claims.
///
/// Tokens whose user has since been deleted are rejected.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        self.0.user_id()
    }
}

/// Pulls the token out of `Authorization: Bearer <token>`.
fn bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| AppError::unauthorized(UNAUTHENTICATED))?;

        let claims = verify_token(token, &state.jwt_config)?;
        let user_id = claims.user_id()?;

        if state.users.find_by_id(user_id).await?.is_none() {
            return Err(AppError::unauthorized(UNAUTHENTICATED));
        }

        Ok(AuthUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with_header(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = value {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_bearer_token() {
        let parts = parts_with_header(Some("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&parts), Some("abc.def.ghi"));

        let parts = parts_with_header(Some("bearer abc"));
        assert_eq!(bearer_token(&parts), Some("abc"));
    }

    #[test]
    fn test_bearer_token_rejects_other_schemes() {
        assert_eq!(bearer_token(&parts_with_header(Some("Basic dXNlcjpwYXNz"))), None);
        assert_eq!(bearer_token(&parts_with_header(Some("Bearer "))), None);
        assert_eq!(bearer_token(&parts_with_header(Some("abc"))), None);
        assert_eq!(bearer_token(&parts_with_header(None)), None);
    }

    #[test]
    fn test_auth_user_id() {
        let id = Uuid::new_v4();
        let auth_user = AuthUser(Claims {
            sub: id.to_string(),
            email: "jane@example.com".to_string(),
            exp: 0,
            iat: 0,
            jti: "jti".to_string(),
        });
        assert_eq!(auth_user.user_id().unwrap(), id);

        let auth_user = AuthUser(Claims {
            sub: "not-a-uuid".to_string(),
            ..auth_user.0
        });
        assert_eq!(auth_user.user_id().unwrap_err().status.as_u16(), 401);
    }
}
