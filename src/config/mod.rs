//! Resolver configuration (layered: defaults < config file < env < code).

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use bon::Builder;
use serde::Deserialize;

use crate::conversation::DEFAULT_HISTORY_CAP;
use crate::error::{ConciergeError, Result};
use crate::types::{GenerationSettings, DEFAULT_MAX_REPLY_TOKENS, DEFAULT_TEMPERATURE};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Persona instruction sent ahead of every remote conversation.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful AI assistant for Locomotive Express, \
a web development company. Be friendly, professional and helpful. Keep responses concise and \
relevant to web development, design and our services.";

/// Everything a [`ResponseResolver`](crate::resolver::ResponseResolver) is built from.
///
/// Only `credential` lacks a default; without it the resolver runs in
/// fallback-only mode.
#[derive(Clone, Builder)]
pub struct ResolverConfig {
    #[builder(into)]
    pub credential: Option<String>,
    #[builder(into, default = DEFAULT_BASE_URL.to_string())]
    pub base_url: String,
    #[builder(into, default = DEFAULT_MODEL.to_string())]
    pub model: String,
    #[builder(default = DEFAULT_MAX_REPLY_TOKENS)]
    pub max_reply_tokens: u32,
    #[builder(default = DEFAULT_TEMPERATURE)]
    pub temperature: f64,
    #[builder(default = DEFAULT_HISTORY_CAP)]
    pub history_cap: usize,
    #[builder(default = DEFAULT_REQUEST_TIMEOUT)]
    pub request_timeout: Duration,
    #[builder(into, default = DEFAULT_SYSTEM_PROMPT.to_string())]
    pub system_prompt: String,
}

impl fmt::Debug for ResolverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverConfig")
            .field("credential", &self.credential.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_reply_tokens", &self.max_reply_tokens)
            .field("temperature", &self.temperature)
            .field("history_cap", &self.history_cap)
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// On-disk shape; every key optional, unknown keys rejected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    credential: Option<String>,
    base_url: Option<String>,
    model: Option<String>,
    max_reply_tokens: Option<u32>,
    temperature: Option<f64>,
    history_cap: Option<usize>,
    request_timeout_secs: Option<u64>,
    system_prompt: Option<String>,
}

impl ResolverConfig {
    /// Load from environment variables, reading `.env` first if present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::default().merge_env(|key| std::env::var(key).ok())
    }

    /// Parse a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(raw)?;
        Ok(Self::default().merge_file(file))
    }

    /// Read a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&raw)
    }

    /// Overlay env vars on top of this config. `lookup` is `std::env::var`
    /// outside of tests.
    pub fn merge_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup("OPENAI_API_KEY") {
            self.credential = Some(key);
        }
        if let Some(url) = lookup("OPENAI_BASE_URL") {
            self.base_url = url;
        }
        if let Some(model) = lookup("CONCIERGE_MODEL") {
            self.model = model;
        }
        if let Some(tokens) = parse_var(&lookup, "CONCIERGE_MAX_TOKENS") {
            self.max_reply_tokens = tokens;
        }
        if let Some(temperature) = parse_var(&lookup, "CONCIERGE_TEMPERATURE") {
            self.temperature = temperature;
        }
        if let Some(cap) = parse_var(&lookup, "CONCIERGE_HISTORY_CAP") {
            self.history_cap = cap;
        }
        if let Some(secs) = parse_var(&lookup, "CONCIERGE_TIMEOUT_SECS") {
            self.request_timeout = Duration::from_secs(secs);
        }
        self
    }

    fn merge_file(mut self, file: FileConfig) -> Self {
        if file.credential.is_some() {
            self.credential = file.credential;
        }
        if let Some(url) = file.base_url {
            self.base_url = url;
        }
        if let Some(model) = file.model {
            self.model = model;
        }
        if let Some(tokens) = file.max_reply_tokens {
            self.max_reply_tokens = tokens;
        }
        if let Some(temperature) = file.temperature {
            self.temperature = temperature;
        }
        if let Some(cap) = file.history_cap {
            self.history_cap = cap;
        }
        if let Some(secs) = file.request_timeout_secs {
            self.request_timeout = Duration::from_secs(secs);
        }
        if let Some(prompt) = file.system_prompt {
            self.system_prompt = prompt;
        }
        self
    }

    /// The credential, treating blank values as absent.
    pub fn active_credential(&self) -> Option<&str> {
        self.credential
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn has_credential(&self) -> bool {
        self.active_credential().is_some()
    }

    /// Drop the credential so only the local fallback is used.
    pub fn offline(mut self) -> Self {
        self.credential = None;
        self
    }

    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            max_tokens: self.max_reply_tokens,
            temperature: self.temperature,
        }
    }

    /// Reject values the completion service would refuse anyway.
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(ConciergeError::Configuration("model id is empty".into()));
        }
        if self.base_url.trim().is_empty() {
            return Err(ConciergeError::Configuration("base URL is empty".into()));
        }
        if self.max_reply_tokens == 0 {
            return Err(ConciergeError::Configuration(
                "max_reply_tokens must be greater than zero".into(),
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConciergeError::Configuration(format!(
                "temperature {} is outside 0.0..=2.0",
                self.temperature
            )));
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable config value");
            None
        }
    }
}
