use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;
use tracing::{debug, error};

use crate::error::ApiError;
use crate::state::AppState;
use crate::translate::{TranslationRequest, TranslationResult};

const INPUT_FIELD: &str = "input_str";

pub async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TranslationResult>, ApiError> {
    let Json(payload) = payload
        .map_err(|rejection| ApiError::validation(None, "json_invalid", rejection.body_text()))?;
    let request = parse_request(&payload)?;

    debug!("Translating {} chars", request.input_str.chars().count());

    let translated_text = state
        .translator
        .translate(&request.input_str)
        .await
        .map_err(|e| {
            error!("Translation failed: {}", e);
            ApiError::from(e)
        })?;

    Ok(Json(TranslationResult { translated_text }))
}

/// Validate the body and coerce `input_str` to a string
fn parse_request(payload: &Value) -> Result<TranslationRequest, ApiError> {
    let fields = payload.as_object().ok_or_else(|| {
        ApiError::validation(
            None,
            "model_attributes_type",
            "Input should be a valid dictionary or object",
        )
    })?;

    let value = fields
        .get(INPUT_FIELD)
        .ok_or_else(|| ApiError::validation(Some(INPUT_FIELD), "missing", "Field required"))?;

    let input_str = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => {
            return Err(ApiError::validation(
                Some(INPUT_FIELD),
                "string_type",
                "Input should be a valid string",
            ))
        }
    };

    Ok(TranslationRequest { input_str })
}
