//! Per-session conversation: one log, one shared resolver.

use crate::resolver::{Resolution, Resolver};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One exchange. `response` is `None` only while the turn is being resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub timestamp: DateTime<Utc>,
    pub user_input: String,
    pub response: Option<String>,
}

/// Append-only list of turns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationLog {
    turns: Vec<ConversationTurn>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a turn with no response yet. Returns its index.
    fn open(&mut self, user_input: &str) -> usize {
        self.turns.push(ConversationTurn {
            timestamp: Utc::now(),
            user_input: user_input.to_string(),
            response: None,
        });
        self.turns.len() - 1
    }

    fn complete(&mut self, index: usize, response: &str) {
        if let Some(turn) = self.turns.get_mut(index) {
            turn.response = Some(response.to_string());
        }
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

pub struct Conversation {
    resolver: Arc<Resolver>,
    log: ConversationLog,
}

impl Conversation {
    pub fn new(resolver: Arc<Resolver>) -> Self {
        Self {
            resolver,
            log: ConversationLog::new(),
        }
    }

    /// Answer one input and record the turn.
    pub fn process(&mut self, user_input: &str) -> String {
        self.process_detailed(user_input).text
    }

    /// Like [`Conversation::process`], keeping the classification and strategy.
    pub fn process_detailed(&mut self, user_input: &str) -> Resolution {
        let input = user_input.trim();
        let index = self.log.open(input);
        let resolution = self.resolver.resolve(input);
        self.log.complete(index, &resolution.text);
        resolution
    }

    pub fn history(&self) -> &[ConversationTurn] {
        self.log.turns()
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn clear(&mut self) {
        self.log.clear();
    }

    pub fn turn_count(&self) -> usize {
        self.log.len()
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeStore;

    fn conversation() -> Conversation {
        let store = Arc::new(KnowledgeStore::builtin().unwrap());
        Conversation::new(Arc::new(Resolver::new(store)))
    }

    #[test]
    fn test_process_records_turn() {
        let mut conv = conversation();
        let answer = conv.process("  كيف أعالج مشاكل الذاكرة؟  ");

        assert_eq!(conv.turn_count(), 1);
        let turn = &conv.history()[0];
        assert_eq!(turn.user_input, "كيف أعالج مشاكل الذاكرة؟");
        assert_eq!(turn.response.as_deref(), Some(answer.as_str()));
    }

    #[test]
    fn test_empty_input_is_logged() {
        let mut conv = conversation();
        let answer = conv.process("   ");
        assert!(!answer.is_empty());
        assert_eq!(conv.history()[0].user_input, "");
        assert!(conv.history()[0].response.is_some());
    }

    #[test]
    fn test_history_is_ordered_and_clearable() {
        let mut conv = conversation();
        conv.process("تعريف الانتباه");
        conv.process("علاج الكتابة");
        let inputs: Vec<&str> = conv.history().iter().map(|t| t.user_input.as_str()).collect();
        assert_eq!(inputs, vec!["تعريف الانتباه", "علاج الكتابة"]);
        assert!(conv.history()[0].timestamp <= conv.history()[1].timestamp);

        conv.clear();
        assert_eq!(conv.turn_count(), 0);
        assert!(conv.log().is_empty());
    }

    #[test]
    fn test_sessions_share_resolver_not_log() {
        let store = Arc::new(KnowledgeStore::builtin().unwrap());
        let resolver = Arc::new(Resolver::new(store));
        let mut a = Conversation::new(resolver.clone());
        let mut b = Conversation::new(resolver);

        a.process("علاج الذاكرة");
        assert_eq!(a.turn_count(), 1);
        assert_eq!(b.turn_count(), 0);
        b.process("علاج الذاكرة");
        assert_eq!(a.history()[0].response, b.history()[0].response);
    }

    #[test]
    fn test_history_serializes() {
        let mut conv = conversation();
        conv.process("علاج الانتباه");
        let json = serde_json::to_string(conv.history()).unwrap();
        assert!(json.contains("\"user_input\":\"علاج الانتباه\""));
        assert!(json.contains("\"timestamp\""));
    }
}
