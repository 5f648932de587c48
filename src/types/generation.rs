//! Generation settings sent with every completion request.

use bon::Builder;
use serde::{Deserialize, Serialize};

/// Default reply budget in tokens.
pub const DEFAULT_MAX_REPLY_TOKENS: u32 = 150;
/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Settings controlling text generation.
#[derive(Debug, Clone, Copy, Builder, Serialize, Deserialize, PartialEq)]
pub struct GenerationSettings {
    #[builder(default = DEFAULT_MAX_REPLY_TOKENS)]
    pub max_tokens: u32,
    #[builder(default = DEFAULT_TEMPERATURE)]
    pub temperature: f64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_REPLY_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}
