//! Conversational-agent lifecycle for the mentor tutoring system.
//!
//! Provides the pieces a chat front end wires together:
//! - A [`SessionStore`] keyed by string session id, the only shared
//!   mutable state
//! - [`Agent`]s that bind a loaded [`AgentConfig`] to a default session
//!   and run request/response turns
//! - The [`CompletionBackend`] seam behind which an LLM provider lives
//!
//! Rendering and the provider client itself are the host's problem.

pub mod agent;
pub mod config;
pub mod session;

use async_trait::async_trait;

pub use agent::{Agent, AgentKind, IntroSelector};
pub use config::AgentConfig;
pub use session::{SessionHistory, SessionStore, SharedHistory};

pub use mentor_common::{CompletionError, ConfigError, MentorError};

/// The external capability that turns a prompt plus history into the
/// next assistant message. May be remote, slow, or down; callers get a
/// [`CompletionError`] and decide whether to retry.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(
        &self,
        system_prompt: &str,
        messages: &[Message],
    ) -> Result<Message, CompletionError>;
}

/// One conversation turn. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Who produced a message. The system prompt travels separately and is
/// never part of the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}
