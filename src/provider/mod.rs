//! Remote completion providers.

pub mod http;
pub mod openai;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::ResolverConfig;
use crate::error::{ConciergeError, Result};
use crate::types::{ConversationTurn, GenerationSettings};

/// A request sent to a completion provider: persona instruction first,
/// then history, then the new user turn.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub messages: Vec<ConversationTurn>,
    pub settings: GenerationSettings,
}

impl CompletionRequest {
    /// Assemble `[system, ...history, user]`.
    pub fn new(
        system_prompt: &str,
        history: &[ConversationTurn],
        utterance: &str,
        settings: GenerationSettings,
    ) -> Self {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ConversationTurn::system(system_prompt));
        messages.extend_from_slice(history);
        messages.push(ConversationTurn::user(utterance));
        Self { messages, settings }
    }
}

/// Core trait implemented by remote completion back ends.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name (e.g. "openai").
    fn provider_name(&self) -> &str;
    /// The model ID this provider instance serves.
    fn model_id(&self) -> &str;

    /// Produce the reply text for `request`. Allowed to fail; the resolver
    /// turns every failure into a local fallback.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}

/// Create the remote provider for `config`.
///
/// Fails with [`ConciergeError::Configuration`] when no credential is set.
pub fn create_provider(config: &ResolverConfig) -> Result<Arc<dyn CompletionProvider>> {
    let api_key = config
        .active_credential()
        .ok_or_else(|| ConciergeError::Configuration("Missing OPENAI_API_KEY".into()))?;
    let provider = openai::OpenAiProvider::new(
        config.model.clone(),
        api_key.to_string(),
        Some(config.base_url.clone()),
    )?;
    Ok(Arc::new(provider))
}
