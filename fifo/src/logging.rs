//! Diagnostic tracing for `fifo` and `calc`.
//!
//! Stdout belongs to the program's protocol: REPL prompts and replies, or a
//! calculator report. Tracing goes to stderr so scripted sessions can compare
//! stdout byte for byte while still collecting diagnostics.
//!
//! What each level shows:
//! - `warn` (default): calculator inputs that were reported instead of computed,
//!   such as `calc fib 0`.
//! - `info`: one summary per REPL session (lines read, final queue size, and
//!   whether it ended on `exit` or end of input).
//! - `debug`: every parsed command, empty-queue dequeue/peek, and each
//!   scoring or loan result.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber. Call once, first thing in `main`.
///
/// ```bash
/// RUST_LOG=fifo=debug fifo run
/// RUST_LOG=calc=debug calc loan --annual-income 50000
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn default_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_keeps_only_warnings() {
        assert_eq!(default_filter().to_string(), DEFAULT_FILTER);
    }
}
