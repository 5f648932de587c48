//! Chat widget state: open/closed flag and the rendered transcript.
//!
//! This is the only place UI mode lives; the resolver stays free of it.

use std::sync::Arc;

use serde::Serialize;
use strum::Display;

use crate::resolver::ResponseResolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptEntry {
    pub sender: Sender,
    pub text: String,
}

/// UI-side state for one chat window.
///
/// The transcript records everything shown, including fallback replies,
/// and is unbounded; the resolver's history is the bounded, remote-only view.
#[derive(Debug)]
pub struct ChatWidget {
    resolver: Arc<ResponseResolver>,
    open: bool,
    transcript: Vec<TranscriptEntry>,
}

impl ChatWidget {
    pub fn new(resolver: Arc<ResponseResolver>) -> Self {
        Self {
            resolver,
            open: false,
            transcript: Vec::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the open flag and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Send raw input. Blank input is ignored and yields `None`.
    pub async fn submit(&mut self, raw_input: &str) -> Option<String> {
        let message = raw_input.trim();
        if message.is_empty() {
            return None;
        }

        self.push(Sender::User, message);
        let reply = self.resolver.resolve(message).await;
        self.push(Sender::Bot, &reply);
        Some(reply)
    }

    fn push(&mut self, sender: Sender, text: &str) {
        self.transcript.push(TranscriptEntry {
            sender,
            text: text.to_string(),
        });
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Empty the transcript and the resolver's history.
    pub fn clear(&mut self) {
        self.transcript.clear();
        self.resolver.reset();
    }

    pub fn resolver(&self) -> &Arc<ResponseResolver> {
        &self.resolver
    }
}
