//! Deterministic, pure logic for the queue REPL.
//!
//! Core modules perform no I/O on the terminal or filesystem. They operate on
//! in-memory values and return deterministic outputs suitable for tests.

pub mod command;
pub mod dispatch;
pub mod queue;
