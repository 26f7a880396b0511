use async_trait::async_trait;
use serde::Serialize;

/// Request accepted by the translate endpoint, after coercion
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub input_str: String,
}

/// Successful translate response
#[derive(Debug, Clone, Serialize)]
pub struct TranslationResult {
    pub translated_text: String,
}

/// Failure while talking to the completion service
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("request to completion service failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("completion service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed completion response: {0}")]
    MalformedResponse(String),

    /// Error reported by the provider inside a successful HTTP reply
    #[error("{0}")]
    Provider(String),
}

/// Translator interface
///
/// Implementations perform exactly one round trip per call and hand back
/// whatever text the provider produced, unparsed.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `input_str` from English to Hindi
    async fn translate(&self, input_str: &str) -> Result<String, ServiceError>;
}
