use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

mod schema;

pub type AppResult<T, E = AppError> = std::result::Result<T, E>;

/// Errors a handler can return instead of its regular response.
///
/// Every variant maps to a status code and a JSON body. Browsers only see these when
/// something bypasses the form's own constraints.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{field}: {message}")]
    ValidationError { field: &'static str, message: String },
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        let status_code = self.status_code();
        match self {
            Self::ValidationError { field, message } => (
                status_code,
                Json(schema::Error {
                    code: status_code.as_u16(),
                    message: "Invalid subscription form".to_owned(),
                    details: Some(vec![schema::ErrorDetails {
                        field: field.to_owned(),
                        message,
                    }]),
                }),
            )
                .into_response(),
        }
    }
}
