//! Interactive FIFO queue driven by a line-oriented command protocol.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (queue, command parsing, dispatch).
//!   No terminal or filesystem I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting helpers (config files).
//!
//! [`session`] couples core logic with an input and output stream to implement
//! the `fifo run` REPL.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
