//! Respuesta de timeout con el mismo envoltorio `{"message"}` que el resto
//! de errores; `TimeoutLayer` por sí solo devuelve un 408 sin cuerpo.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::utils::errors::ErrorResponse;

pub async fn timeout_envelope(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }

    tracing::warn!("⏱️ request timed out");
    (
        StatusCode::REQUEST_TIMEOUT,
        Json(ErrorResponse {
            message: "request timed out".to_string(),
        }),
    )
        .into_response()
}
