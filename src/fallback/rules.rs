//! Keyword rules and topic classification.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Classification bucket selecting a fallback catalog entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Topic {
    Greeting,
    Services,
    Pricing,
    Contact,
    Technology,
    Default,
}

/// A topic paired with the substrings that trigger it.
///
/// Triggers are stored lowercased; blank triggers are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    pub topic: Topic,
    pub triggers: Vec<String>,
}

impl KeywordRule {
    pub fn new<I, S>(topic: Topic, triggers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let triggers = triggers
            .into_iter()
            .map(|t| t.into().to_lowercase())
            .filter(|t| !t.trim().is_empty())
            .collect();
        Self { topic, triggers }
    }

    /// Whether any trigger occurs in `normalized` (already lowercased).
    pub fn matches(&self, normalized: &str) -> bool {
        self.triggers.iter().any(|t| normalized.contains(t.as_str()))
    }
}

/// Built-in rules in priority order. `Default` has no rule; it is the
/// result when nothing matches.
pub fn default_rules() -> Vec<KeywordRule> {
    vec![
        KeywordRule::new(Topic::Greeting, ["hello", "hi", "hey", "greetings"]),
        KeywordRule::new(
            Topic::Services,
            ["service", "services", "what do you do", "offer"],
        ),
        KeywordRule::new(
            Topic::Pricing,
            ["price", "cost", "expensive", "budget", "quote"],
        ),
        KeywordRule::new(
            Topic::Contact,
            ["contact", "email", "phone", "meeting", "call"],
        ),
        KeywordRule::new(
            Topic::Technology,
            ["technology", "tech", "framework", "language", "tool"],
        ),
    ]
}

/// First matching rule wins; plain substring containment, so "hi" also
/// matches inside "this".
pub fn classify(rules: &[KeywordRule], utterance: &str) -> Topic {
    let normalized = utterance.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&normalized))
        .map(|rule| rule.topic)
        .unwrap_or(Topic::Default)
}
