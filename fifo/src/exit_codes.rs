//! Stable exit codes for the workspace CLIs.

/// Command succeeded, including a REPL session ended by `exit` or end of input.
pub const OK: i32 = 0;
/// Command failed due to invalid config or a broken input/output stream.
pub const INVALID: i32 = 1;
