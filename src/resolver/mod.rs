//! The conversational response resolver.
//!
//! [`ResponseResolver::resolve`] tries the remote completion provider when a
//! credential is configured and falls back to a keyword-matched canned reply
//! otherwise, or when the remote call fails for any reason. It never fails.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::ResolverConfig;
use crate::conversation::ConversationHistory;
use crate::error::{ConciergeError, FailureKind, Result};
use crate::fallback::{LocalResponder, Topic};
use crate::provider::{create_provider, CompletionProvider, CompletionRequest};
use crate::types::{ConversationTurn, GenerationSettings};
use crate::util::timeout::with_timeout;

/// Decides what the bot says.
///
/// Shared through `&self`/`Arc`. Concurrent `resolve` calls on one
/// instance are queued by the turn gate, so each remote request sees the
/// history left by the previous exchange. The history lock is never held
/// across an `.await`.
pub struct ResponseResolver {
    provider: Option<Arc<dyn CompletionProvider>>,
    settings: GenerationSettings,
    system_prompt: String,
    request_timeout: Duration,
    history: Mutex<ConversationHistory>,
    turn_gate: tokio::sync::Mutex<()>,
    responder: LocalResponder,
}

impl fmt::Debug for ResponseResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseResolver")
            .field("provider", &self.provider.as_ref().map(|p| p.provider_name()))
            .field("settings", &self.settings)
            .field("request_timeout", &self.request_timeout)
            .field("history_len", &self.lock_history().len())
            .finish_non_exhaustive()
    }
}

impl ResponseResolver {
    /// Build from config. The remote path is enabled only when a non-blank
    /// credential is present.
    pub fn new(config: ResolverConfig) -> Result<Self> {
        config.validate()?;
        let provider = match create_provider(&config) {
            Ok(provider) => Some(provider),
            Err(err) if err.kind() == FailureKind::ConfigurationAbsent => {
                debug!(reason = %err, "no remote credential; local fallback only");
                None
            }
            Err(err) => return Err(err),
        };
        Ok(Self::assemble(&config, provider))
    }

    /// Build with an explicit remote provider, regardless of credential.
    pub fn with_provider(
        config: ResolverConfig,
        provider: Arc<dyn CompletionProvider>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(&config, Some(provider)))
    }

    /// Replace the local responder (custom rules, catalog or seeded RNG).
    pub fn with_responder(mut self, responder: LocalResponder) -> Self {
        self.responder = responder;
        self
    }

    fn assemble(config: &ResolverConfig, provider: Option<Arc<dyn CompletionProvider>>) -> Self {
        Self {
            provider,
            settings: config.generation_settings(),
            system_prompt: config.system_prompt.clone(),
            request_timeout: config.request_timeout,
            history: Mutex::new(ConversationHistory::with_cap(config.history_cap)),
            turn_gate: tokio::sync::Mutex::new(()),
            responder: LocalResponder::default(),
        }
    }

    /// Produce a displayable reply for `utterance`. Never fails.
    ///
    /// History changes only when the remote call succeeds: the user turn and
    /// the assistant turn are appended together, then truncated to the cap.
    pub async fn resolve(&self, utterance: &str) -> String {
        if utterance.trim().is_empty() {
            debug!("empty utterance; skipping remote call");
            return self.local_fallback(utterance);
        }

        let Some(provider) = self.provider.as_deref() else {
            debug!(kind = %FailureKind::ConfigurationAbsent, "resolving locally");
            return self.local_fallback(utterance);
        };

        let _turn = self.turn_gate.lock().await;
        match self.remote_complete(provider, utterance).await {
            Ok(reply) => {
                self.lock_history().push_exchange(
                    ConversationTurn::user(utterance),
                    ConversationTurn::assistant(reply.as_str()),
                );
                reply
            }
            Err(err) => {
                let kind = err.kind();
                if kind.is_diagnostic() {
                    warn!(
                        provider = provider.provider_name(),
                        %kind,
                        error = %err,
                        "remote completion failed; using local fallback"
                    );
                } else {
                    debug!(
                        provider = provider.provider_name(),
                        %kind,
                        error = %err,
                        "remote path unavailable; using local fallback"
                    );
                }
                self.local_fallback(utterance)
            }
        }
    }

    /// One bounded remote call with `[system, ...history, user]`.
    async fn remote_complete(
        &self,
        provider: &dyn CompletionProvider,
        utterance: &str,
    ) -> Result<String> {
        let request = {
            let history = self.lock_history();
            CompletionRequest::new(&self.system_prompt, history.turns(), utterance, self.settings)
        };
        let reply = with_timeout(
            provider.provider_name(),
            self.request_timeout,
            provider.complete(&request),
        )
        .await?;
        if reply.trim().is_empty() {
            return Err(ConciergeError::MalformedResponse(format!(
                "{} returned an empty reply",
                provider.provider_name()
            )));
        }
        Ok(reply)
    }

    /// Keyword-matched canned reply. Ignores history.
    pub fn local_fallback(&self, utterance: &str) -> String {
        self.responder.reply(utterance)
    }

    /// The fallback topic `utterance` would select.
    pub fn classify(&self, utterance: &str) -> Topic {
        self.responder.classify(utterance)
    }

    /// Forget all prior turns. Idempotent.
    pub fn reset(&self) {
        self.lock_history().clear();
    }

    /// Snapshot of the history, oldest first.
    pub fn history(&self) -> Vec<ConversationTurn> {
        self.lock_history().turns().to_vec()
    }

    pub fn has_remote(&self) -> bool {
        self.provider.is_some()
    }

    fn lock_history(&self) -> MutexGuard<'_, ConversationHistory> {
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
