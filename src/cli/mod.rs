//! CLI front end for the resolver.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::ResolverConfig;
use crate::error::Result;

/// Website chat assistant
#[derive(Parser, Debug)]
#[command(name = "concierge", version, about = "Chat with the website assistant from a terminal")]
pub struct Cli {
    #[command(flatten)]
    pub overrides: ConfigArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive chat session (`/reset` clears history, `/quit` exits)
    Chat,
    /// Resolve a single message and print the reply
    Ask(AskArgs),
}

/// Arguments for `concierge ask`.
#[derive(Args, Debug)]
pub struct AskArgs {
    /// Message to send
    #[arg(required = true)]
    pub message: Vec<String>,
}

/// Flags layered over env and config file values.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Model id
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Temperature (0.0 - 2.0)
    #[arg(short, long, global = true)]
    pub temperature: Option<f64>,

    /// Max reply tokens
    #[arg(long, global = true)]
    pub max_tokens: Option<u32>,

    /// Ignore any credential and answer from the local catalog only
    #[arg(long, global = true)]
    pub offline: bool,
}

impl ConfigArgs {
    /// Config file (if any), then env, then these flags.
    pub fn load(&self) -> Result<ResolverConfig> {
        let base = match &self.config {
            Some(path) => ResolverConfig::from_file(path)?,
            None => ResolverConfig::default(),
        };
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let mut config = base.merge_env(|key| std::env::var(key).ok());

        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(t) = self.temperature {
            config.temperature = t;
        }
        if let Some(max) = self.max_tokens {
            config.max_reply_tokens = max;
        }
        if self.offline {
            config = config.offline();
        }
        Ok(config)
    }
}

/// What a line typed into `concierge chat` means.
#[derive(Debug, PartialEq, Eq)]
pub enum ChatInput<'a> {
    Quit,
    Reset,
    Message(&'a str),
}

impl<'a> ChatInput<'a> {
    pub fn parse(line: &'a str) -> Self {
        match line.trim() {
            "/quit" | "/exit" => Self::Quit,
            "/reset" => Self::Reset,
            other => Self::Message(other),
        }
    }
}
