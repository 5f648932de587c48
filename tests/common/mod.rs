//! Shared test helpers and a scripted completion provider.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use concierge::config::ResolverConfig;
use concierge::error::ConciergeError;
use concierge::fallback::LocalResponder;
use concierge::provider::{CompletionProvider, CompletionRequest};
use concierge::resolver::ResponseResolver;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// What the provider does on its next call.
#[derive(Debug, Clone)]
pub enum Step {
    Reply(String),
    Status(u16),
    Malformed,
    Misconfigured,
}

/// Provider that records every request and plays back queued steps.
///
/// With an empty queue it answers `reply to <utterance>`.
#[derive(Default)]
pub struct CaptureProvider {
    steps: Mutex<VecDeque<Step>>,
    requests: Mutex<Vec<CompletionRequest>>,
    delay: Option<Duration>,
}

impl CaptureProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn queue(&self, step: Step) {
        self.steps.lock().unwrap().push_back(step);
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionProvider for CaptureProvider {
    fn provider_name(&self) -> &str {
        "capture"
    }

    fn model_id(&self) -> &str {
        "capture-model"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, ConciergeError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let step = self.steps.lock().unwrap().pop_front();
        match step {
            Some(Step::Reply(text)) => Ok(text),
            Some(Step::Status(status)) => Err(ConciergeError::api(status, "scripted failure")),
            Some(Step::Malformed) => Err(ConciergeError::MalformedResponse("scripted".into())),
            Some(Step::Misconfigured) => {
                Err(ConciergeError::Configuration("scripted missing setting".into()))
            }
            None => {
                let utterance = request
                    .messages
                    .last()
                    .map(|m| m.content().to_string())
                    .unwrap_or_default();
                Ok(format!("reply to {utterance}"))
            }
        }
    }
}

/// Resolver wired to `provider` with a seeded fallback RNG.
pub fn resolver_with(provider: Arc<CaptureProvider>, config: ResolverConfig) -> ResponseResolver {
    ResponseResolver::with_provider(config, provider)
        .expect("valid config")
        .with_responder(LocalResponder::default().with_rng(StdRng::seed_from_u64(11)))
}
