use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::translate::ServiceError;

/// Errors surfaced by HTTP handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body rejected before translation runs
    #[error("{message}")]
    Validation {
        field: Option<&'static str>,
        kind: &'static str,
        message: String,
    },

    #[error(transparent)]
    Translation(#[from] ServiceError),
}

impl ApiError {
    pub fn validation(
        field: Option<&'static str>,
        kind: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::Validation {
            field,
            kind,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation { field, kind, message } => {
                let mut loc = vec!["body"];
                loc.extend(field);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({
                        "detail": [{
                            "loc": loc,
                            "type": kind,
                            "msg": message,
                        }]
                    })),
                )
                    .into_response()
            }
            ApiError::Translation(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"detail": err.to_string()})),
            )
                .into_response(),
        }
    }
}
