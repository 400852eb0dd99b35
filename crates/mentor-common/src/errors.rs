use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("prompt file not found: {0}")]
    PromptNotFound(PathBuf),

    #[error("intro file not found: {0}")]
    IntroNotFound(PathBuf),

    #[error("intro file {path} is not a valid JSON string array: {reason}")]
    IntroMalformed { path: PathBuf, reason: String },

    #[error("agent '{0}' has no intro messages configured")]
    NoIntroAvailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("completion timed out")]
    Timeout,
}

#[derive(Debug, thiserror::Error)]
pub enum MentorError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::PromptNotFound(PathBuf::from("prompts/missing_prompt.txt"));
        assert_eq!(
            err.to_string(),
            "prompt file not found: prompts/missing_prompt.txt"
        );

        let err = ConfigError::IntroNotFound(PathBuf::from("content/intro/hotel_checkin.json"));
        assert_eq!(
            err.to_string(),
            "intro file not found: content/intro/hotel_checkin.json"
        );

        let err = ConfigError::IntroMalformed {
            path: PathBuf::from("content/intro/renting.json"),
            reason: "expected value at line 1 column 1".into(),
        };
        assert!(err.to_string().contains("renting.json"));
        assert!(err.to_string().contains("line 1 column 1"));

        let err = ConfigError::NoIntroAvailable("conversation".into());
        assert_eq!(
            err.to_string(),
            "agent 'conversation' has no intro messages configured"
        );
    }

    #[test]
    fn completion_error_display() {
        let err = CompletionError::BackendUnavailable("connection refused".into());
        assert_eq!(
            err.to_string(),
            "completion backend unavailable: connection refused"
        );

        let err = CompletionError::Timeout;
        assert_eq!(err.to_string(), "completion timed out");
    }

    #[test]
    fn mentor_error_from_config() {
        let config_err = ConfigError::PromptNotFound(PathBuf::from("p.txt"));
        let err: MentorError = config_err.into();
        assert!(matches!(err, MentorError::Config(_)));
        assert!(err.to_string().contains("p.txt"));
    }

    #[test]
    fn mentor_error_from_completion() {
        let completion_err = CompletionError::Timeout;
        let err: MentorError = completion_err.into();
        assert!(matches!(err, MentorError::Completion(_)));
        assert_eq!(err.to_string(), "completion timed out");
    }

    #[test]
    fn mentor_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: MentorError = io_err.into();
        assert!(matches!(err, MentorError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }
}
