use crate::error::Result;
use crate::models::{Category, Message, SessionSummary, Temperature, TurnStatistics};
use chrono::{DateTime, Local};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Conversation state for one client run. Never written to disk.
///
/// Fields are private so that messages and turn statistics can only grow
/// together: after every mutation there are exactly two messages per
/// statistics record.
#[derive(Debug, Clone)]
pub struct Session {
    id: String,
    created_at: DateTime<Local>,
    messages: Vec<Message>,
    thread_id: Option<String>,
    turn_stats: Vec<TurnStatistics>,
    debug: bool,
    temperature: Temperature,
    category: Category,
    current_user: String,
    known_users: BTreeSet<String>,
}

impl Session {
    pub fn new(user_id: impl Into<String>, temperature: Temperature, category: Category) -> Self {
        let user_id = user_id.into();
        let mut known_users = BTreeSet::new();
        known_users.insert(user_id.clone());

        Self {
            id: Uuid::new_v4().to_string(),
            created_at: Local::now(),
            messages: Vec::new(),
            thread_id: None,
            turn_stats: Vec::new(),
            debug: false,
            temperature,
            category,
            current_user: user_id,
            known_users,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn thread_id(&self) -> Option<&str> {
        self.thread_id.as_deref()
    }

    pub fn turn_stats(&self) -> &[TurnStatistics] {
        &self.turn_stats
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn current_user(&self) -> &str {
        &self.current_user
    }

    pub fn known_users(&self) -> &BTreeSet<String> {
        &self.known_users
    }

    /// Record a completed turn: user message, assistant message, statistics.
    pub fn append_exchange(
        &mut self,
        user_text: impl Into<String>,
        assistant_text: impl Into<String>,
        stats: TurnStatistics,
    ) {
        if !stats.has_error {
            if let Some(thread_id) = &stats.thread_id {
                if self.thread_id.as_deref() != Some(thread_id.as_str()) {
                    tracing::debug!(thread_id = %thread_id, "conversation thread updated");
                }
                self.thread_id = Some(thread_id.clone());
            }
        }

        self.messages.push(Message::user(user_text));
        self.messages.push(Message::assistant(assistant_text));
        self.turn_stats.push(stats);
    }

    /// Start a new conversation. Identity and settings survive.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.turn_stats.clear();
        self.thread_id = None;
    }

    pub fn toggle_debug(&mut self) -> bool {
        self.debug = !self.debug;
        self.debug
    }

    pub fn set_debug(&mut self, enabled: bool) {
        self.debug = enabled;
    }

    pub fn set_temperature(&mut self, value: f32) -> Result<()> {
        self.temperature = Temperature::new(value)?;
        Ok(())
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    pub(crate) fn activate_user(&mut self, user_id: &str) {
        self.register_user(user_id);
        self.current_user = user_id.to_string();
    }

    /// Returns `true` when the identifier was not known yet.
    pub(crate) fn register_user(&mut self, user_id: &str) -> bool {
        self.known_users.insert(user_id.to_string())
    }

    pub fn last_response_time(&self) -> Option<f64> {
        self.turn_stats.last().map(|s| s.response_time)
    }

    pub fn average_response_time(&self) -> Option<f64> {
        if self.turn_stats.is_empty() {
            return None;
        }
        let total: f64 = self.turn_stats.iter().map(|s| s.response_time).sum();
        Some(total / self.turn_stats.len() as f64)
    }

    pub fn total_exchanges(&self) -> usize {
        self.messages.len() / 2
    }

    pub fn total_tool_calls(&self) -> u64 {
        self.turn_stats
            .iter()
            .map(|s| u64::from(s.tool_calls_count))
            .sum()
    }

    pub fn error_count(&self) -> usize {
        self.turn_stats.iter().filter(|s| s.has_error).count()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            total_exchanges: self.total_exchanges(),
            total_tool_calls: self.total_tool_calls(),
            error_count: self.error_count(),
            last_response_time: self.last_response_time(),
            average_response_time: self.average_response_time(),
        }
    }
}
