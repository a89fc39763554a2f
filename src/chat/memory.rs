//! Bounded conversation memory
//!
//! Memory keeps the running exchange that gets replayed to the model each
//! turn. The budget is expressed in tokens and enforced with a cheap
//! chars-per-token estimate; when the budget is exceeded the oldest
//! messages go first. The newest message always survives, even if it is
//! larger than the whole budget.

use crate::llm::ChatMessage;

/// Rough chars-per-token ratio for budget estimation
const CHARS_PER_TOKEN: usize = 4;

#[derive(Debug, Clone)]
pub struct ChatMemory {
    messages: Vec<ChatMessage>,
    token_limit: usize,
}

impl ChatMemory {
    pub fn new(token_limit: usize) -> Self {
        Self {
            messages: Vec::new(),
            token_limit,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Append a message, then drop oldest messages until the estimated
    /// token count fits the budget again
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
        while self.messages.len() > 1 && self.estimated_tokens() > self.token_limit {
            self.messages.remove(0);
        }
    }

    /// Estimated token count of everything held
    pub fn estimated_tokens(&self) -> usize {
        self.messages
            .iter()
            .map(|m| estimate_tokens(&m.content))
            .sum()
    }

    /// Render the exchange as `Role: text` lines for the condense prompt
    pub fn history_text(&self) -> String {
        let lines: Vec<String> = self
            .messages
            .iter()
            .map(|m| format!("{}: {}", display_role(&m.role), m.content))
            .collect();
        lines.join("\n")
    }
}

fn estimate_tokens(text: &str) -> usize {
    text.chars().count().div_ceil(CHARS_PER_TOKEN)
}

fn display_role(role: &str) -> &str {
    match role {
        "user" => "User",
        "assistant" => "Assistant",
        "system" => "System",
        other => other,
    }
}
