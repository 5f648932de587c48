//! OpenAI Chat Completions API provider.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::{ConciergeError, Result};

use super::http::{bearer_headers, build_client, status_to_error};
use super::{CompletionProvider, CompletionRequest};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAiProvider {
    model: String,
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAiProvider {
    pub fn new(model: String, api_key: String, base_url: Option<String>) -> Result<Self> {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key,
            client: build_client()?,
        })
    }

    fn build_request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "messages": request.messages,
            "max_tokens": request.settings.max_tokens,
            "temperature": request.settings.temperature,
        })
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    fn provider_name(&self) -> &str {
        "openai"
    }

    fn model_id(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let body = self.build_request_body(request);
        let url = format!("{}/chat/completions", self.base_url);

        debug!(
            model = self.model.as_str(),
            messages = request.messages.len(),
            "OpenAI complete"
        );

        let resp = self
            .client
            .post(&url)
            .headers(bearer_headers(&self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let body_text = resp.text().await?;
        if !status.is_success() {
            return Err(status_to_error(status.as_u16(), &body_text));
        }

        parse_reply(&body_text)
    }
}

/// Extract `choices[0].message.content`, rejecting every other shape.
fn parse_reply(body: &str) -> Result<String> {
    let data: OpenAiChatResponse = serde_json::from_str(body)?;
    let choice = data
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ConciergeError::MalformedResponse("no choices in response".into()))?;
    let content = choice
        .message
        .content
        .ok_or_else(|| ConciergeError::MalformedResponse("first choice has no content".into()))?;
    if content.trim().is_empty() {
        return Err(ConciergeError::MalformedResponse(
            "first choice content is empty".into(),
        ));
    }
    Ok(content)
}

#[derive(Deserialize)]
struct OpenAiChatResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
}

#[derive(Deserialize)]
struct OpenAiMessage {
    content: Option<String>,
}
