use crate::api::HistoryMessage;
use crate::error::{ChatError, Result};
use crate::models::{Message, Product, Role};

pub const WELCOME_MESSAGE: &str =
    "👋 Welcome to Retail Assistant! Ask me anything to get personalized recommendations.";
pub const RECOMMENDATION_ERROR_NOTICE: &str = "❌ Error fetching recommendations.";
pub const DEFAULT_RESULT_SUMMARY: &str = "Recommended products";

/// Outcome of one turn's recommendation request.
#[derive(Debug, Clone)]
pub enum TurnOutcome {
    Results {
        results: Vec<Product>,
        summary: Option<String>,
    },
    Failed,
}

/// Proof that a turn was begun. Minted by `begin_turn`, consumed by
/// `resolve_turn`, and deliberately neither `Clone` nor `Copy`: a response
/// can only ever resolve the placeholder created by its own submit call,
/// regardless of arrival order at the transport layer.
#[derive(Debug)]
pub struct TurnTicket {
    placeholder_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TurnState {
    Idle,
    AwaitingResponse,
}

/// Ordered, append-only record of a session's messages.
///
/// Appends happen in submission order and ids increase monotonically, so the
/// display order is the conversation chronology. The only mutation that is
/// not a plain append is the single pending-placeholder removal when a turn
/// resolves.
pub struct MessageLog {
    messages: Vec<Message>,
    next_id: u64,
    state: TurnState,
}

impl MessageLog {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
            state: TurnState::Idle,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn is_awaiting_response(&self) -> bool {
        matches!(self.state, TurnState::AwaitingResponse)
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Seeds the welcome message into an empty log.
    pub fn seed_welcome(&mut self) {
        let id = self.take_id();
        self.messages
            .push(Message::text(id, Role::Assistant, WELCOME_MESSAGE));
    }

    /// Loads persisted history into the log. Entries with roles the core
    /// does not know are skipped rather than failing the whole hydrate.
    pub fn hydrate(&mut self, history: Vec<HistoryMessage>) {
        for entry in history {
            if let Some(role) = entry.role() {
                let id = self.take_id();
                self.messages
                    .push(Message::text(id, role, entry.content.unwrap_or_default()));
            }
        }
    }

    /// Starts a turn: appends the user message and exactly one pending
    /// placeholder, then moves to awaiting-response.
    ///
    /// The user append is never rolled back, even if the turn later fails; a
    /// sent message is a durable fact of the conversation. Rejects a second
    /// submit while a turn is in flight, so at most one placeholder exists
    /// at any instant.
    pub fn begin_turn(&mut self, text: &str) -> Result<TurnTicket> {
        if self.is_awaiting_response() {
            return Err(ChatError::TurnInProgress);
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyQuery);
        }

        let user_msg_id = self.take_id();
        self.messages
            .push(Message::text(user_msg_id, Role::User, text));

        let placeholder_id = self.take_id();
        self.messages.push(Message::pending_placeholder(placeholder_id));
        self.state = TurnState::AwaitingResponse;

        Ok(TurnTicket { placeholder_id })
    }

    /// Ends a turn: removes the placeholder named by the ticket and appends
    /// the resolved assistant message in its place, returning to idle. A
    /// failed turn resolves to a visible error notice, leaving the log open
    /// for further submits.
    pub fn resolve_turn(&mut self, ticket: TurnTicket, outcome: TurnOutcome) -> &Message {
        self.messages.retain(|m| m.id != ticket.placeholder_id);
        self.state = TurnState::Idle;

        let id = self.take_id();
        let message = match outcome {
            TurnOutcome::Results { results, summary } => Message::product_results(
                id,
                results,
                Some(summary.unwrap_or_else(|| DEFAULT_RESULT_SUMMARY.to_string())),
            ),
            TurnOutcome::Failed => {
                Message::text(id, Role::Assistant, RECOMMENDATION_ERROR_NOTICE)
            }
        };
        self.messages.push(message);
        self.messages.last().expect("message just appended")
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new()
    }
}
