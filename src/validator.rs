//! Request extractors that answer with the error envelope on rejection.
//!
//! - [`JsonBody`]: JSON body without validation, for handlers that validate in
//!   the service layer.
//! - [`ValidatedJson`]: JSON body validated with `validator` before the handler runs.
//! - [`ResourceId`]: `{id}` path segment that may not be a UUID.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;
use validator::Validate;

use schoolbook_core::errors::field_errors_from;
use schoolbook_core::{AppError, FieldErrors};

const DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

fn map_json_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            AppError::bad_request("Missing 'Content-Type: application/json' header.")
        }
        JsonRejection::JsonSyntaxError(_) => AppError::bad_request("Malformed JSON body."),
        JsonRejection::JsonDataError(err) => data_error(&err.body_text()),
        _ => AppError::bad_request("Invalid request body."),
    }
}

/// Wrong-typed fields become a field error on the offending field.
fn data_error(body_text: &str) -> AppError {
    let field = body_text
        .strip_prefix(DATA_ERROR_PREFIX)
        .and_then(|rest| rest.split_once(": "))
        .map(|(path, _)| path)
        .filter(|path| !path.is_empty() && !path.contains(' '));

    match field {
        Some(field) => {
            let mut errors = FieldErrors::new();
            errors.insert(
                field.to_string(),
                vec![format!("The {} field is invalid.", field)],
            );
            AppError::validation(errors)
        }
        None => AppError::bad_request("Invalid request body."),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(map_json_rejection)?;

        Ok(JsonBody(value))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(value) = JsonBody::<T>::from_request(req, state).await?;

        value
            .validate()
            .map_err(|errors| AppError::validation(field_errors_from(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

/// The `{id}` path segment; `None` when it is not a UUID.
#[derive(Debug, Clone, Copy)]
pub struct ResourceId(pub Option<Uuid>);

impl ResourceId {
    /// A malformed id can't match any record.
    pub fn or_not_found(self, message: &str) -> Result<Uuid, AppError> {
        self.0.ok_or_else(|| AppError::not_found(message))
    }
}

impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request("Invalid path parameter."))?;

        Ok(ResourceId(Uuid::parse_str(&raw).ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode};
    use schoolbook_models::CreateStuParentRequest;

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_validated_json_accepts_valid_body() {
        let ValidatedJson(dto) =
            ValidatedJson::<CreateStuParentRequest>::from_request(json_request(r#"{"name":"Ada"}"#), &())
                .await
                .unwrap();

        assert_eq!(dto.name.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn test_validated_json_reports_field_errors() {
        let err = ValidatedJson::<CreateStuParentRequest>::from_request(json_request("{}"), &())
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.field_errors().unwrap().contains_key("name"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let err = JsonBody::<CreateStuParentRequest>::from_request(json_request("{\"name\":"), &())
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"name":"Ada"}"#))
            .unwrap();

        let err = JsonBody::<CreateStuParentRequest>::from_request(req, &())
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_wrong_field_type_is_rejected() {
        let err = JsonBody::<CreateStuParentRequest>::from_request(json_request(r#"{"name":42}"#), &())
            .await
            .unwrap_err();

        assert!(err.status.is_client_error());
    }

    #[test]
    fn test_data_error_names_the_field() {
        let err = data_error(
            "Failed to deserialize the JSON body into the target type: name: invalid type: integer `42`, expected a string at line 1 column 10",
        );

        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            err.field_errors().unwrap()["name"],
            vec!["The name field is invalid.".to_string()]
        );
    }

    #[test]
    fn test_data_error_without_path() {
        let err = data_error("something unexpected");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_resource_id_or_not_found() {
        let id = Uuid::new_v4();
        assert_eq!(ResourceId(Some(id)).or_not_found("x").unwrap(), id);

        let err = ResourceId(None).or_not_found("User not found.").unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
