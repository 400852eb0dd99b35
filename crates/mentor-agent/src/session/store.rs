//! Registry of session histories keyed by session id.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::history::SessionHistory;

/// Handle to one session's history.
///
/// The async mutex serializes turns within a session (a chat turn holds
/// it across the backend call); distinct sessions lock independently
/// and proceed in parallel.
pub type SharedHistory = Arc<tokio::sync::Mutex<SessionHistory>>;

/// Owns every session history in the process.
///
/// Constructed by the host and handed to agents via `Arc`; there is no
/// hidden global. Entries are created on first lookup and never
/// evicted, so a host that mints unbounded session ids grows the map
/// without limit.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, SharedHistory>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the history for `session_id`, registering an empty one if
    /// absent. Insert-if-absent is atomic: racing callers with the same
    /// new id get the same handle.
    pub fn get_or_create(&self, session_id: &str) -> SharedHistory {
        let mut sessions = self.sessions.lock().unwrap();
        sessions
            .entry(session_id.to_string())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(SessionHistory::new())))
            .clone()
    }

    /// Empty the named history in place, keeping its identity. Unknown
    /// ids are a no-op; a later `get_or_create` yields an empty history
    /// either way.
    pub async fn clear(&self, session_id: &str) {
        let handle = {
            let sessions = self.sessions.lock().unwrap();
            sessions.get(session_id).cloned()
        };
        if let Some(handle) = handle {
            handle.lock().await.clear();
        }
    }

    /// Number of registered sessions.
    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().unwrap().is_empty()
    }

    /// Registered session ids, in no particular order.
    pub fn session_ids(&self) -> Vec<String> {
        self.sessions.lock().unwrap().keys().cloned().collect()
    }
}
