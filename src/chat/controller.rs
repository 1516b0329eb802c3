use super::log::{MessageLog, TurnOutcome, DEFAULT_RESULT_SUMMARY};
use crate::api::RecommendRequest;
use crate::error::Result;
use crate::models::{Message, Role, Session};
use crate::recommend::RecommendationClient;
use crate::session::{SessionManager, SessionStore};
use colored::*;
use std::sync::Arc;

/// Drives one conversation view: session lifecycle, the message log, and the
/// recommendation collaborator, wired together for a submit-to-resolution
/// turn.
///
/// A controller cannot exist without a valid session, so every message
/// operation is gated on session creation having succeeded. The controller
/// exclusively owns its log; dropping it mid-turn drops the in-flight future
/// with it, and the late result has nothing left to mutate.
pub struct ChatController {
    manager: SessionManager,
    log: MessageLog,
    recommender: Arc<dyn RecommendationClient>,
    top_k: usize,
    verbose: bool,
}

impl ChatController {
    /// Creates a fresh session for `user_id` and seeds the welcome message.
    pub async fn start(
        store: Arc<dyn SessionStore>,
        recommender: Arc<dyn RecommendationClient>,
        user_id: &str,
        top_k: usize,
        verbose: bool,
    ) -> Result<Self> {
        let manager = SessionManager::start(store, user_id).await?;
        let mut log = MessageLog::new();
        log.seed_welcome();
        Ok(Self {
            manager,
            log,
            recommender,
            top_k,
            verbose,
        })
    }

    /// Binds to an existing session and hydrates the log from persisted
    /// history. A history fetch failure is non-fatal: the conversation
    /// proceeds with an empty log and a warning.
    pub async fn resume(
        store: Arc<dyn SessionStore>,
        recommender: Arc<dyn RecommendationClient>,
        session: Session,
        top_k: usize,
        verbose: bool,
    ) -> Result<Self> {
        let manager = SessionManager::attach(store, session);
        let mut log = MessageLog::new();

        match manager.resume().await {
            Ok(history) => log.hydrate(history),
            Err(e) => {
                eprintln!(
                    "{}",
                    format!("[rec] Warning: {}", e).dimmed()
                );
            }
        }
        if log.is_empty() {
            log.seed_welcome();
        }

        Ok(Self {
            manager,
            log,
            recommender,
            top_k,
            verbose,
        })
    }

    pub fn session(&self) -> &Session {
        self.manager.session()
    }

    pub fn messages(&self) -> &[Message] {
        self.log.messages()
    }

    /// Runs one turn: appends the user message and a pending placeholder,
    /// asks the recommendation collaborator, and resolves the placeholder
    /// with the results or a visible error notice. Returns the resolved
    /// assistant message.
    ///
    /// Persistence is best-effort on both sides of the turn; a failed write
    /// warns but never rolls back the in-memory log, which stays
    /// authoritative for the life of the view. A recommendation failure ends
    /// the turn in a failed state but leaves the session usable.
    pub async fn submit(&mut self, text: &str) -> Result<&Message> {
        let session = self.manager.session().clone();
        let request = RecommendRequest::new(text, Some(&session.user_id), self.top_k)?;
        let ticket = self.log.begin_turn(text)?;

        self.persist(&session, Role::User, request.query.clone()).await;

        if self.verbose {
            eprintln!(
                "{}",
                format!(
                    "[rec] Requesting top {} recommendations for session {}",
                    self.top_k, session.id
                )
                .dimmed()
            );
        }

        let outcome = match self.recommender.recommend(&request).await {
            Ok(response) => {
                if self.verbose {
                    eprintln!(
                        "{}",
                        format!("[rec] Received {} results", response.results.len()).dimmed()
                    );
                }
                TurnOutcome::Results {
                    results: response.results,
                    summary: response.summary,
                }
            }
            Err(e) => {
                eprintln!("{}", format!("[rec] Warning: {}", e).dimmed());
                TurnOutcome::Failed
            }
        };

        let persisted_reply = match &outcome {
            TurnOutcome::Results { summary, .. } => Some(
                summary
                    .clone()
                    .unwrap_or_else(|| DEFAULT_RESULT_SUMMARY.to_string()),
            ),
            // A failed turn persists nothing on the assistant side.
            TurnOutcome::Failed => None,
        };

        self.log.resolve_turn(ticket, outcome);
        if let Some(content) = persisted_reply {
            self.persist(&session, Role::Assistant, content).await;
        }

        Ok(self.log.messages().last().expect("turn just resolved"))
    }

    async fn persist(&self, session: &Session, role: Role, content: String) {
        if let Err(e) = self
            .manager
            .store()
            .persist_message(&session.id, role, &content)
            .await
        {
            eprintln!("{}", format!("[rec] Warning: {}", e).dimmed());
        }
    }
}
