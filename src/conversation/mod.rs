//! Bounded conversation history.

use crate::types::ConversationTurn;

/// Default cap: 20 turns, i.e. 10 user/assistant exchanges.
pub const DEFAULT_HISTORY_CAP: usize = 20;

/// Ordered turns, oldest first, never longer than `cap`.
///
/// Appending past the cap drops the oldest turns (sliding window).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationHistory {
    turns: Vec<ConversationTurn>,
    cap: usize,
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::with_cap(DEFAULT_HISTORY_CAP)
    }
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cap(cap: usize) -> Self {
        Self {
            turns: Vec::new(),
            cap,
        }
    }

    /// Record one completed exchange, then truncate to the cap.
    pub fn push_exchange(&mut self, user: ConversationTurn, assistant: ConversationTurn) {
        self.turns.push(user);
        self.turns.push(assistant);
        self.truncate();
    }

    fn truncate(&mut self) {
        let excess = self.turns.len().saturating_sub(self.cap);
        if excess > 0 {
            self.turns.drain(..excess);
        }
    }

    /// All turns, oldest first.
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fill(history: &mut ConversationHistory, exchanges: usize) {
        for i in 0..exchanges {
            history.push_exchange(
                ConversationTurn::user(format!("q{i}")),
                ConversationTurn::assistant(format!("a{i}")),
            );
        }
    }

    #[test]
    fn keeps_everything_under_the_cap() {
        let mut history = ConversationHistory::new();
        fill(&mut history, 10);
        assert_eq!(history.len(), 20);
        assert_eq!(history.turns()[0].content(), "q0");
    }

    #[test]
    fn drops_oldest_exchange_past_the_cap() {
        let mut history = ConversationHistory::new();
        fill(&mut history, 11);

        assert_eq!(history.len(), 20);
        let contents: Vec<_> = history.turns().iter().map(|t| t.content()).collect();
        assert_eq!(contents.first(), Some(&"q1"));
        assert_eq!(contents.last(), Some(&"a10"));
        assert!(!contents.contains(&"q0"));
        assert!(!contents.contains(&"a0"));
    }

    #[test]
    fn odd_cap_drops_single_turns() {
        let mut history = ConversationHistory::with_cap(3);
        fill(&mut history, 2);
        let contents: Vec<_> = history.turns().iter().map(|t| t.content()).collect();
        assert_eq!(contents, vec!["a0", "q1", "a1"]);
    }

    #[test]
    fn zero_cap_keeps_nothing() {
        let mut history = ConversationHistory::with_cap(0);
        history.push_exchange(ConversationTurn::user("hello"), ConversationTurn::assistant("hi"));
        assert!(history.is_empty());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut history = ConversationHistory::new();
        fill(&mut history, 2);
        history.clear();
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.cap(), DEFAULT_HISTORY_CAP);
    }
}
