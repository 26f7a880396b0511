use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::interface::{ServiceError, Translator};
use super::prompt::{build_messages, Message};
use crate::config::{ApiKey, OutputFormat, TranslatorConfig};

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Body of a 2xx reply. Some OpenAI-compatible servers report failures in-band.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CompletionBody {
    Completion { choices: Vec<Choice> },
    Failure { error: ProviderError },
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// OpenAI chat-completions translator
pub struct OpenAITranslator {
    client: Client,
    base_url: String,
    model: String,
    output_format: OutputFormat,
    api_key: ApiKey,
}

impl OpenAITranslator {
    pub fn new(config: &TranslatorConfig, api_key: ApiKey) -> Self {
        info!(
            "Initialized OpenAITranslator: model={}, base_url={}",
            config.model, config.base_url
        );
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            output_format: config.output_format,
            api_key,
        }
    }

    fn request_for(&self, input_str: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: build_messages(self.output_format, input_str),
            response_format: match self.output_format {
                OutputFormat::Json => Some(ResponseFormat { kind: "json_object" }),
                OutputFormat::Text => None,
            },
        }
    }
}

#[async_trait]
impl Translator for OpenAITranslator {
    async fn translate(&self, input_str: &str) -> Result<String, ServiceError> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(
            "Sending chat completion request: model={}, chars={}",
            self.model,
            input_str.chars().count()
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose())
            .json(&self.request_for(input_str))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Status { status, body });
        }

        let choices = match response
            .json::<CompletionBody>()
            .await
            .map_err(|e| ServiceError::MalformedResponse(e.to_string()))?
        {
            CompletionBody::Completion { choices } => choices,
            CompletionBody::Failure { error } => return Err(ServiceError::Provider(error.message)),
        };

        choices
            .into_iter()
            .next()
            .ok_or_else(|| ServiceError::MalformedResponse("no choices returned".to_string()))?
            .message
            .content
            .ok_or_else(|| {
                ServiceError::MalformedResponse("first choice has no content".to_string())
            })
    }
}
