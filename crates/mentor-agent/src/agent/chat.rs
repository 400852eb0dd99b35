//! The request/response chat turn.

use tracing::debug;

use mentor_common::CompletionError;

use crate::{CompletionBackend, Message};

use super::Agent;

impl Agent {
    /// Run one chat turn against `backend` in the given session (the
    /// bound default when `session_id` is `None`).
    ///
    /// The backend sees the committed history plus the new user
    /// message; on success the user message and the assistant reply
    /// are appended together. A failed or timed-out call appends
    /// nothing, so history is never left with a dangling user turn.
    ///
    /// Holding the session lock across the backend call serializes
    /// turns within one session; other sessions are unaffected.
    pub async fn chat(
        &self,
        backend: &dyn CompletionBackend,
        user_input: impl Into<String>,
        session_id: Option<&str>,
    ) -> Result<String, CompletionError> {
        let session_id = self.resolve_session(session_id);
        let handle = self.store.get_or_create(session_id);
        let mut history = handle.lock().await;

        let user_message = Message::user(user_input);
        let mut outbound = history.snapshot();
        outbound.push(user_message.clone());

        let request = backend.complete(&self.config.system_prompt, &outbound);
        let reply = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, request)
                .await
                .map_err(|_| CompletionError::Timeout)??,
            None => request.await?,
        };

        history.append(user_message);
        history.append(Message::assistant(reply.content.clone()));

        debug!(
            agent = %self.name,
            session = %session_id,
            turn = history.len() / 2,
            "chat turn complete"
        );
        Ok(reply.content)
    }
}
