//! Error types for the HTTP surface.
//!
//! Two expected failure kinds exist: validation failures on the create
//! request (400 with a structured error list) and not-found on the read
//! paths (404 with a fixed message). Anything else is an internal failure
//! surfaced as 500 and logged.

use crate::validation::FieldError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "Order not found";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The create request failed one or more field constraints.
    #[error("invalid input")]
    Validation(Vec<FieldError>),
    /// The requested order does not exist.
    #[error("Order not found")]
    NotFound,
    /// Unhandled failure below the HTTP layer.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Serialize)]
struct ValidationBody {
    errors: Vec<FieldError>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ValidationBody { errors })).into_response()
            }
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: NOT_FOUND_MESSAGE.to_string(),
                }),
            )
                .into_response(),
            ApiError::Internal(error) => {
                tracing::error!(?error, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let error = ApiError::Validation(vec![FieldError {
            field: "customerEmail".to_string(),
            message: "must not be blank".to_string(),
        }]);
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            ApiError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn internal_maps_to_500() {
        let error = ApiError::from(anyhow::anyhow!("store exploded"));
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
