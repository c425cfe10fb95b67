use crate::api::{BackendClient, BackendReply, ChatRequest};
use crate::models::{Temperature, TurnStatistics};
use crate::session::Session;
use chrono::Local;

/// Shown instead of the raw failure so transport details never end up in
/// the conversation.
pub const FALLBACK_REPLY: &str =
    "Sorry, I couldn't get an answer from the assistant right now. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    pub reply: String,
    pub stats: TurnStatistics,
}

pub struct Orchestrator<'a> {
    client: &'a BackendClient,
}

impl<'a> Orchestrator<'a> {
    pub fn new(client: &'a BackendClient) -> Self {
        Self { client }
    }

    pub fn build_request(session: &Session, message: &str, temperature: Temperature) -> ChatRequest {
        ChatRequest {
            message: message.to_string(),
            user_id: session.current_user().to_string(),
            thread_id: session.thread_id().map(|t| t.to_string()),
            temperature: temperature.value(),
        }
    }

    /// Run one turn against the backend without touching the session.
    pub async fn send_turn(
        &self,
        session: &Session,
        message: &str,
        temperature: Temperature,
    ) -> TurnOutcome {
        let request = Self::build_request(session, message, temperature);
        let timed = self.client.chat(session.current_user(), &request).await;
        let response_time = timed.elapsed_secs();

        match timed.value {
            BackendReply::Success {
                response,
                thread_id,
                tool_calls_count,
            } => TurnOutcome {
                reply: response,
                stats: TurnStatistics {
                    response_time,
                    timestamp: Local::now(),
                    has_error: false,
                    tool_calls_count,
                    thread_id: thread_id.or(request.thread_id),
                    temperature: temperature.value(),
                    error_detail: None,
                },
            },
            BackendReply::Failure { message } => {
                tracing::warn!(error = %message, "chat turn failed");
                TurnOutcome {
                    reply: FALLBACK_REPLY.to_string(),
                    stats: TurnStatistics {
                        response_time,
                        timestamp: Local::now(),
                        has_error: true,
                        tool_calls_count: 0,
                        thread_id: request.thread_id,
                        temperature: temperature.value(),
                        error_detail: Some(message),
                    },
                }
            }
        }
    }

    /// Send `message` with the session temperature and record the exchange.
    pub async fn submit(&self, session: &mut Session, message: &str) -> TurnOutcome {
        let outcome = self
            .send_turn(session, message, session.temperature())
            .await;
        session.append_exchange(message, outcome.reply.clone(), outcome.stats.clone());
        outcome
    }
}
