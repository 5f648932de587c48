//! Local reply selection with an injectable random source.

use std::fmt;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use super::catalog::FallbackCatalog;
use super::rules::{classify, default_rules, KeywordRule, Topic};

/// Picks a canned reply for an utterance.
///
/// Never looks at conversation history. The only state is the random
/// source, which tests replace with a seeded one.
pub struct LocalResponder {
    rules: Vec<KeywordRule>,
    catalog: FallbackCatalog,
    rng: Mutex<Box<dyn RngCore + Send>>,
}

impl fmt::Debug for LocalResponder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalResponder")
            .field("rules", &self.rules)
            .field("catalog", &self.catalog)
            .field("rng", &"..")
            .finish()
    }
}

impl Default for LocalResponder {
    fn default() -> Self {
        Self::new(default_rules(), FallbackCatalog::builtin())
    }
}

impl LocalResponder {
    pub fn new(rules: Vec<KeywordRule>, catalog: FallbackCatalog) -> Self {
        Self {
            rules,
            catalog,
            rng: Mutex::new(Box::new(StdRng::from_os_rng())),
        }
    }

    /// Replace the random source (e.g. `StdRng::seed_from_u64` in tests).
    pub fn with_rng(mut self, rng: impl RngCore + Send + 'static) -> Self {
        self.rng = Mutex::new(Box::new(rng));
        self
    }

    pub fn classify(&self, utterance: &str) -> Topic {
        classify(&self.rules, utterance)
    }

    pub fn catalog(&self) -> &FallbackCatalog {
        &self.catalog
    }

    /// Classify, then pick a candidate uniformly at random.
    pub fn reply(&self, utterance: &str) -> String {
        let topic = self.classify(utterance);
        let candidates = self.catalog.candidates(topic);
        if candidates.is_empty() {
            // Only reachable with a catalog built outside `FallbackCatalog::new`.
            return self.catalog.candidates(Topic::Default).first().cloned().unwrap_or_default();
        }
        let index = {
            let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            rng.random_range(0..candidates.len())
        };
        tracing::debug!(%topic, index, "local fallback reply");
        candidates[index].clone()
    }
}
