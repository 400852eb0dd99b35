//! Agent construction and variant selection.
//!
//! One `Agent` type covers all three behaviors; [`AgentKind`] records
//! which lifecycle operations a front end should wire up.

mod chat;
mod lifecycle;


use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;

use mentor_common::ConfigError;

use crate::config::AgentConfig;
use crate::session::SessionStore;

/// Which optional lifecycle operations a front end should wire up.
///
/// Conversation agents only chat. Scenario agents open fresh sessions
/// with an intro line (`start_session`). Vocabulary agents can restart
/// a drill (`restart_session`).
///
/// Advisory metadata: the operations themselves behave the same on
/// every kind (`start_session` is guarded only by intro availability),
/// so hosts use the kind to decide which controls to surface, not to
/// change behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    Conversation,
    Scenario,
    Vocabulary,
}

/// Picks one index from the candidate intro list. Injectable so tests
/// can pin the choice; the default is a uniform random pick.
pub type IntroSelector = Box<dyn Fn(&[String]) -> usize + Send + Sync>;

/// A configured conversational behavior bound to a default session.
///
/// Immutable after construction: every piece of mutable conversation
/// state lives in the [`SessionStore`], so one agent can serve many
/// sessions and be shared freely across tasks.
pub struct Agent {
    pub(crate) name: String,
    kind: AgentKind,
    pub(crate) config: AgentConfig,
    pub(crate) session_id: String,
    pub(crate) store: Arc<SessionStore>,
    pub(crate) intro_selector: IntroSelector,
    pub(crate) timeout: Option<Duration>,
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("config", &self.config)
            .field("session_id", &self.session_id)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Agent {
    /// Bind `config` to `store`. The default session id is the agent's
    /// name; override with [`with_session_id`](Agent::with_session_id).
    pub fn new(kind: AgentKind, config: AgentConfig, store: Arc<SessionStore>) -> Self {
        Self {
            name: config.name.clone(),
            kind,
            session_id: config.name.clone(),
            config,
            store,
            intro_selector: Box::new(|intros: &[String]| {
                rand::thread_rng().gen_range(0..intros.len())
            }),
            timeout: None,
        }
    }

    /// Free-talk conversation agent with sources derived under `root`.
    pub fn conversation(store: Arc<SessionStore>, root: &Path) -> Result<Self, ConfigError> {
        Ok(Self::new(
            AgentKind::Conversation,
            AgentConfig::conversation(root)?,
            store,
        ))
    }

    /// Vocabulary-drill agent with sources derived under `root`.
    pub fn vocabulary(store: Arc<SessionStore>, root: &Path) -> Result<Self, ConfigError> {
        Ok(Self::new(
            AgentKind::Vocabulary,
            AgentConfig::vocabulary(root)?,
            store,
        ))
    }

    /// Scenario role-play agent for `name` (e.g. `"hotel_checkin"`)
    /// with sources derived under `root`.
    pub fn scenario(store: Arc<SessionStore>, root: &Path, name: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(
            AgentKind::Scenario,
            AgentConfig::scenario(root, name)?,
            store,
        ))
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    pub fn with_intro_selector(mut self, selector: IntroSelector) -> Self {
        self.intro_selector = selector;
        self
    }

    /// Per-call deadline for the completion backend. Off by default; an
    /// expired turn fails with a timeout error and leaves history
    /// untouched.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Advisory only: no operation consults the kind. See [`AgentKind`].
    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    /// The session id used when an operation gets no explicit one.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn intro_messages(&self) -> &[String] {
        &self.config.intro_messages
    }

    pub(crate) fn resolve_session<'a>(&'a self, session_id: Option<&'a str>) -> &'a str {
        session_id.unwrap_or(&self.session_id)
    }
}
