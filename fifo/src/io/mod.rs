//! I/O helpers for the queue REPL.

pub mod config;
