//! Session management for assessments and interactive chat

use std::sync::Arc;
use std::time::Duration;
use std::time::SystemTime;

use dashmap::DashMap;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::assessment::AssessmentSession;
use crate::assessment::QuestionBank;
use crate::chat::ChatMemory;

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// One transcript entry as shown by the history endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMessage {
    /// "user" or "assistant"
    pub role: String,
    pub content: String,
    pub timestamp: u64,
}

/// Chat session data.
///
/// The transcript holds what the user saw; the memory holds what the
/// model replays, with personalization prefixes and token trimming.
#[derive(Debug, Clone)]
pub struct ChatSession {
    pub session_id: String,
    pub memory: ChatMemory,
    pub transcript: Vec<SessionMessage>,
    pub created_at: u64,
    pub last_activity: u64,
}

impl ChatSession {
    #[must_use]
    pub fn new(memory: ChatMemory) -> Self {
        let now = now_secs();

        Self {
            session_id: Uuid::new_v4().to_string(),
            memory,
            transcript: Vec::new(),
            created_at: now,
            last_activity: now,
        }
    }

    pub fn add_message(&mut self, role: &str, content: String) {
        let timestamp = now_secs();

        self.transcript.push(SessionMessage {
            role: role.to_string(),
            content,
            timestamp,
        });

        self.last_activity = timestamp;

        // Keep the transcript bounded; the token-budgeted memory is
        // trimmed independently
        if self.transcript.len() > 100 {
            self.transcript.drain(0..2);
        }
    }

    #[must_use]
    pub fn is_expired(&self, timeout_secs: u64) -> bool {
        // saturating: the wall clock is allowed to step backwards
        now_secs().saturating_sub(self.last_activity) > timeout_secs
    }
}

/// An in-flight assessment keyed by session id
#[derive(Debug, Clone)]
pub struct AssessmentEntry {
    pub session_id: String,
    pub session: AssessmentSession,
    pub created_at: u64,
    pub last_activity: u64,
}

impl AssessmentEntry {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        let now = now_secs();

        Self {
            session_id: Uuid::new_v4().to_string(),
            session: AssessmentSession::new(bank),
            created_at: now,
            last_activity: now,
        }
    }

    pub fn touch(&mut self) {
        self.last_activity = now_secs();
    }

    #[must_use]
    pub fn is_expired(&self, timeout_secs: u64) -> bool {
        now_secs().saturating_sub(self.last_activity) > timeout_secs
    }
}

/// In-memory session registry with a background expiry sweep
pub struct SessionManager {
    chat_sessions: Arc<DashMap<String, ChatSession>>,
    assessment_sessions: Arc<DashMap<String, AssessmentEntry>>,
    session_timeout_secs: u64,
}

impl SessionManager {
    #[must_use]
    pub fn new(session_timeout_secs: u64) -> Self {
        let chat_sessions: Arc<DashMap<String, ChatSession>> = Arc::new(DashMap::new());
        let assessment_sessions: Arc<DashMap<String, AssessmentEntry>> = Arc::new(DashMap::new());

        // Background sweep for idle sessions
        let chat_clone = chat_sessions.clone();
        let assessment_clone = assessment_sessions.clone();
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Self::cleanup_expired_sessions(&chat_clone, &assessment_clone, session_timeout_secs);
            }
        });

        Self {
            chat_sessions,
            assessment_sessions,
            session_timeout_secs,
        }
    }

    #[must_use]
    pub fn timeout_secs(&self) -> u64 {
        self.session_timeout_secs
    }

    #[must_use]
    pub fn create_chat_session(&self, memory: ChatMemory) -> ChatSession {
        let session = ChatSession::new(memory);
        self.chat_sessions
            .insert(session.session_id.clone(), session.clone());
        session
    }

    #[must_use]
    pub fn get_chat_session(&self, session_id: &str) -> Option<ChatSession> {
        self.chat_sessions.get(session_id).map(|s| s.clone())
    }

    pub fn update_chat_session(&self, session: ChatSession) {
        self.chat_sessions
            .insert(session.session_id.clone(), session);
    }

    pub fn delete_chat_session(&self, session_id: &str) -> bool {
        self.chat_sessions.remove(session_id).is_some()
    }

    #[must_use]
    pub fn create_assessment_session(&self, bank: QuestionBank) -> AssessmentEntry {
        let entry = AssessmentEntry::new(bank);
        self.assessment_sessions
            .insert(entry.session_id.clone(), entry.clone());
        entry
    }

    #[must_use]
    pub fn get_assessment_session(&self, session_id: &str) -> Option<AssessmentEntry> {
        self.assessment_sessions.get(session_id).map(|s| s.clone())
    }

    pub fn update_assessment_session(&self, mut entry: AssessmentEntry) {
        entry.touch();
        self.assessment_sessions
            .insert(entry.session_id.clone(), entry);
    }

    pub fn delete_assessment_session(&self, session_id: &str) -> bool {
        self.assessment_sessions.remove(session_id).is_some()
    }

    #[must_use]
    pub fn session_count(&self) -> usize {
        self.chat_sessions.len() + self.assessment_sessions.len()
    }

    fn cleanup_expired_sessions(
        chat_sessions: &DashMap<String, ChatSession>,
        assessment_sessions: &DashMap<String, AssessmentEntry>,
        timeout_secs: u64,
    ) {
        let expired: Vec<String> = chat_sessions
            .iter()
            .filter(|entry| entry.value().is_expired(timeout_secs))
            .map(|entry| entry.key().clone())
            .collect();

        for session_id in expired {
            chat_sessions.remove(&session_id);
            tracing::info!("Cleaned up expired chat session: {}", session_id);
        }

        let expired: Vec<String> = assessment_sessions
            .iter()
            .filter(|entry| entry.value().is_expired(timeout_secs))
            .map(|entry| entry.key().clone())
            .collect();

        for session_id in expired {
            assessment_sessions.remove(&session_id);
            tracing::info!("Cleaned up expired assessment session: {}", session_id);
        }
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        // one hour, matching the chat config default
        Self::new(3600)
    }
}
