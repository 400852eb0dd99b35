pub mod errors;
pub mod logging;

pub use errors::{CompletionError, ConfigError, MentorError};
pub use logging::init_logging;

pub type Result<T> = std::result::Result<T, MentorError>;
