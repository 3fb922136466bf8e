use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalcError>;

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("Invalid input. Please enter valid numbers.")]
    InvalidNumber,

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid date format. Please use the format: yyyy-mm-dd.")]
    InvalidDate,

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Report generation is not implemented.")]
    ReportUnavailable,

    #[error("Failed to save data.")]
    Database(#[from] sqlx::Error),
}

impl CalcError {
    /// Validation failures are reported with 200 and `success: false`,
    /// the same way the browser form expects them.
    pub fn status(&self) -> StatusCode {
        match self {
            CalcError::InvalidNumber | CalcError::MissingField(_) | CalcError::InvalidDate => {
                StatusCode::OK
            }
            CalcError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            CalcError::ReportUnavailable => StatusCode::NOT_IMPLEMENTED,
            CalcError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for CalcError {
    fn from(rejection: JsonRejection) -> Self {
        CalcError::MalformedRequest(rejection.body_text())
    }
}

impl IntoResponse for CalcError {
    fn into_response(self) -> Response {
        if let CalcError::Database(e) = &self {
            tracing::error!("Database error: {}", e);
        }

        let body = Json(json!({
            "success": false,
            "message": self.to_string(),
        }));

        (self.status(), body).into_response()
    }
}
