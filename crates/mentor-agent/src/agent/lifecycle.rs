//! Session-opening and restart operations.

use tracing::debug;

use mentor_common::ConfigError;

use crate::session::SharedHistory;
use crate::Message;

use super::Agent;

impl Agent {
    /// Open a scenario session.
    ///
    /// On an empty history: pick one configured intro line, append it
    /// as the assistant, and return it. On an existing conversation:
    /// return the most recent message without touching history, so
    /// repeated calls resume rather than reset.
    ///
    /// Calling this on an agent with no intro messages is a caller
    /// error and fails with [`ConfigError::NoIntroAvailable`].
    pub async fn start_session(&self, session_id: Option<&str>) -> Result<String, ConfigError> {
        let session_id = self.resolve_session(session_id);
        let handle = self.store.get_or_create(session_id);
        let mut history = handle.lock().await;

        if let Some(last) = history.last() {
            return Ok(last.content.clone());
        }

        if self.config.intro_messages.is_empty() {
            return Err(ConfigError::NoIntroAvailable(self.name.clone()));
        }

        let index = (self.intro_selector)(&self.config.intro_messages);
        let intro = self.config.intro_messages[index].clone();
        history.append(Message::assistant(intro.clone()));

        debug!(agent = %self.name, session = %session_id, "session opened with intro");
        Ok(intro)
    }

    /// Clear the session's history and hand back the empty handle.
    ///
    /// The caller drives the next turn itself (the vocabulary front end
    /// sends a synthetic "begin" message); the agent injects nothing.
    pub async fn restart_session(&self, session_id: Option<&str>) -> SharedHistory {
        let session_id = self.resolve_session(session_id);
        self.store.clear(session_id).await;

        debug!(agent = %self.name, session = %session_id, "session restarted");
        self.store.get_or_create(session_id)
    }
}
