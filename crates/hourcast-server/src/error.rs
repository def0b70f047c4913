use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use hourcast_weather::{NormalizationError, WeatherError};
use thiserror::Error;

/// Request failures. The response body is the error message as plain text.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Missing zip parameter")]
    MissingZip,

    #[error("Expected exactly one zip parameter, got {0}")]
    MultipleZips(usize),

    #[error(transparent)]
    Weather(#[from] WeatherError),

    #[error(transparent)]
    Normalization(#[from] NormalizationError),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::MissingZip | ServerError::MultipleZips(_) => StatusCode::BAD_REQUEST,
            ServerError::Weather(_) | ServerError::Normalization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Report failed: {}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}
