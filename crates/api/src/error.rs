use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use todo_core::error::CoreError;
use validator::ValidationErrors;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds the request-shape
/// failures detected before any service call. Implements [`IntoResponse`]
/// to produce `{"detail": ...}` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `todo_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The body deserialized but violates a field constraint.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// The body could not be read or deserialized as the expected JSON.
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),

    /// A path parameter is not a valid identifier.
    #[error("Malformed identifier: {0}")]
    MalformedIdentifier(#[from] PathRejection),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// One entry of a 422 `detail` list.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Where the problem is, e.g. `["body", "title"]`.
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, json!({ "detail": core.to_string() }))
                }
            },

            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "detail": validation_details(errors) }),
            ),

            AppError::MalformedBody(rejection) => {
                let status = match rejection {
                    JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                        StatusCode::UNPROCESSABLE_ENTITY
                    }
                    other => other.status(),
                };
                let detail = ErrorDetail {
                    loc: vec!["body".into()],
                    msg: rejection.body_text(),
                    kind: "json_invalid".into(),
                };
                (status, json!({ "detail": [detail] }))
            }

            AppError::MalformedIdentifier(rejection) => {
                let detail = ErrorDetail {
                    loc: vec!["path".into(), "id".into()],
                    msg: rejection.body_text(),
                    kind: "int_parsing".into(),
                };
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    json!({ "detail": [detail] }),
                )
            }
        };

        if status.is_client_error() {
            tracing::debug!(%status, error = %self, "Request rejected");
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Flatten `validator` field errors into `detail` entries, sorted by field.
fn validation_details(errors: &ValidationErrors) -> Vec<ErrorDetail> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let field = field.to_string();
            field_errors.iter().map(move |err| ErrorDetail {
                loc: vec!["body".into(), field.clone()],
                msg: err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid")),
                kind: err.code.to_string(),
            })
        })
        .collect()
}
