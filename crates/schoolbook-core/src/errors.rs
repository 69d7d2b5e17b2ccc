use std::collections::BTreeMap;

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use validator::ValidationErrors;

/// Per-field error messages, keyed by the request field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Message carried by an error envelope: plain text or a per-field error set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    Text(String),
    Fields(FieldErrors),
}

/// The single error type returned by handlers and services.
///
/// Every error renders as `{"status": false, "message": ..., "data": []}`.
/// Server-side failures keep their source for logging and are answered with a
/// generic message so internal detail never reaches the client.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: ErrorMessage,
    pub source: Option<Error>,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: ErrorMessage::Text(message.into()),
            source: None,
        }
    }

    pub fn validation(errors: FieldErrors) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: ErrorMessage::Fields(errors),
            source: None,
        }
    }

    /// A uniqueness conflict on a single field.
    pub fn conflict(field: &str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.to_string(), vec![message.into()]);
        Self {
            status: StatusCode::CONFLICT,
            message: ErrorMessage::Fields(errors),
            source: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: ErrorMessage::Text("Internal server error.".to_string()),
            source: Some(err.into()),
        }
    }

    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::internal(err)
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match &self.message {
            ErrorMessage::Fields(errors) => Some(errors),
            ErrorMessage::Text(_) => None,
        }
    }
}

/// Flattens `validator` output into the per-field error set.
pub fn field_errors_from(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let field = field.to_string();
            let messages = errors
                .iter()
                .map(|error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("The {} field is invalid.", field))
                })
                .collect();
            (field, messages)
        })
        .collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            match &self.source {
                Some(source) => tracing::error!(error = ?source, "request failed"),
                None => tracing::error!(status = %self.status, "request failed"),
            }
        }

        let body = Json(json!({
            "status": false,
            "message": self.message,
            "data": [],
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
