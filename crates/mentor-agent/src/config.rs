//! Agent configuration loaded once at construction.
//!
//! Two file formats: a plain-text system prompt (required) and a JSON
//! array of candidate intro lines (scenario agents only). A missing or
//! malformed source is a hard construction failure; there is no
//! degraded agent.

use std::fs;
use std::path::Path;

use mentor_common::ConfigError;
use tracing::debug;

/// Static per-agent configuration.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Agent name; doubles as the default session id and, for derived
    /// configs, the stem of the source file names.
    pub name: String,
    /// System prompt text, trimmed of surrounding whitespace.
    pub system_prompt: String,
    /// Candidate opening lines; empty for agents without an intro file.
    pub intro_messages: Vec<String>,
}

impl AgentConfig {
    /// Load from explicit paths. The intro file, when given, must hold
    /// a JSON array of strings.
    pub fn load(
        name: impl Into<String>,
        prompt_path: &Path,
        intro_path: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        let system_prompt = load_prompt(prompt_path)?;
        let intro_messages = match intro_path {
            Some(path) => load_intro(path)?,
            None => Vec::new(),
        };

        debug!(
            agent = %name,
            intros = intro_messages.len(),
            "loaded agent config"
        );
        Ok(Self {
            name,
            system_prompt,
            intro_messages,
        })
    }

    /// Free-talk conversation agent: `prompts/conversation_prompt.txt`
    /// under `root`, no intro file.
    pub fn conversation(root: &Path) -> Result<Self, ConfigError> {
        Self::load(
            "conversation",
            &root.join("prompts").join("conversation_prompt.txt"),
            None,
        )
    }

    /// Vocabulary-drill agent: `prompts/vocab_study_prompt.txt` under
    /// `root`, no intro file.
    pub fn vocabulary(root: &Path) -> Result<Self, ConfigError> {
        Self::load(
            "vocab_study",
            &root.join("prompts").join("vocab_study_prompt.txt"),
            None,
        )
    }

    /// Scenario role-play agent. Both sources derive from the scenario
    /// name: `prompts/{name}_prompt.txt` and `content/intro/{name}.json`.
    pub fn scenario(root: &Path, name: &str) -> Result<Self, ConfigError> {
        Self::load(
            name,
            &root.join("prompts").join(format!("{name}_prompt.txt")),
            Some(
                &root
                    .join("content")
                    .join("intro")
                    .join(format!("{name}.json")),
            ),
        )
    }
}

fn load_prompt(path: &Path) -> Result<String, ConfigError> {
    let text = fs::read_to_string(path)
        .map_err(|_| ConfigError::PromptNotFound(path.to_path_buf()))?;
    Ok(text.trim().to_string())
}

fn load_intro(path: &Path) -> Result<Vec<String>, ConfigError> {
    let text = fs::read_to_string(path)
        .map_err(|_| ConfigError::IntroNotFound(path.to_path_buf()))?;
    serde_json::from_str(&text).map_err(|e| ConfigError::IntroMalformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
