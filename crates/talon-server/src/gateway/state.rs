use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use talon::{ConversationState, MatchEngine, TextProvider};

/// Shared handler state: the engine plus per-session conversation histories.
pub struct AppState<P: TextProvider + 'static> {
    /// The core engine facade.
    pub engine: Arc<MatchEngine<P>>,

    /// Conversation state per session id.
    pub sessions: Arc<Mutex<HashMap<Uuid, ConversationState>>>,

    /// Default `top_k` for ranking requests.
    pub default_top_k: usize,

    /// Turn cap for newly created sessions.
    pub max_session_turns: usize,
}

impl<P: TextProvider> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            sessions: Arc::clone(&self.sessions),
            default_top_k: self.default_top_k,
            max_session_turns: self.max_session_turns,
        }
    }
}

impl<P: TextProvider> AppState<P> {
    /// Creates state over an assembled engine.
    pub fn new(engine: Arc<MatchEngine<P>>, default_top_k: usize, max_session_turns: usize) -> Self {
        Self {
            engine,
            sessions: Arc::new(Mutex::new(HashMap::new())),
            default_top_k,
            max_session_turns,
        }
    }

    /// Takes the session for `id` out of the map (creating a fresh one on
    /// first sight) so the chat handler never holds the sessions lock across
    /// provider calls.
    pub async fn take_session(&self, id: Uuid) -> ConversationState {
        self.sessions
            .lock()
            .await
            .remove(&id)
            .unwrap_or_else(|| ConversationState::new(self.max_session_turns))
    }

    /// Puts a session back after a chat turn.
    pub async fn store_session(&self, id: Uuid, session: ConversationState) {
        self.sessions.lock().await.insert(id, session);
    }
}
