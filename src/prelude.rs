//! Convenience re-exports.

pub use crate::config::ResolverConfig;
pub use crate::conversation::ConversationHistory;
pub use crate::error::{ConciergeError, FailureKind, Result};
pub use crate::fallback::{FallbackCatalog, KeywordRule, LocalResponder, Topic};
pub use crate::provider::{CompletionProvider, CompletionRequest};
pub use crate::resolver::ResponseResolver;
pub use crate::types::{ConversationTurn, GenerationSettings, Role};
pub use crate::widget::{ChatWidget, Sender, TranscriptEntry};
