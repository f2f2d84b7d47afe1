use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failures surfaced to the client. Every variant renders as a JSON body with
/// a `mensaje` field plus the matching status code; store errors keep their
/// detail in the log only.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Credenciales incorrectas")]
    Unauthorized,

    #[error("Ticket no encontrado")]
    TicketNotFound,

    #[error("Error interno del servidor")]
    Store(#[from] sqlx::Error),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    mensaje: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Store(e) = &self {
            tracing::error!(error = %e, "store operation failed");
        }

        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::TicketNotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ErrorBody {
                mensaje: self.to_string(),
            }),
        )
            .into_response()
    }
}
