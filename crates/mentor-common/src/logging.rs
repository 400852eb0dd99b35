//! Tracing subscriber setup for embedding hosts.
//!
//! The workspace ships no binary; whatever process hosts the agents
//! (web UI, test harness, REPL) calls [`init_logging`] once at startup.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `directive` is the fallback filter (e.g. `"mentor=info"`) applied
/// when `RUST_LOG` is not set. Safe to call more than once; later
/// calls are no-ops.
pub fn init_logging(directive: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "mentor=info".parse().unwrap()),
            ),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        init_logging("mentor=debug");
        init_logging("not a directive !!!");
    }
}
