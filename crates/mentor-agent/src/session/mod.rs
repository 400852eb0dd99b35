//! Session state: per-conversation message history and the store that
//! owns every history in the process.

mod history;
mod store;

pub use history::SessionHistory;
pub use store::{SessionStore, SharedHistory};
