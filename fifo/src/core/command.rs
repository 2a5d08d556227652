//! Line parser for the queue REPL protocol.

/// One decoded input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `enqueue <value>` with exactly one value token.
    Enqueue(String),
    Dequeue,
    Peek,
    Size,
    Exit,
    /// Anything that does not start with a recognized keyword, or a
    /// non-`enqueue` keyword followed by extra tokens. Holds the normalized line.
    Unknown(String),
    /// `enqueue` with zero or more than one value token.
    MalformedEnqueue,
}

/// Parse a raw input line.
///
/// The line is trimmed and lowercased before tokenizing on whitespace, so
/// enqueued values are case-folded too. Values are single tokens; there is no
/// quoting.
pub fn parse_command(line: &str) -> Command {
    let normalized = line.trim().to_lowercase();
    let mut tokens = normalized.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Command::Unknown(normalized);
    };
    let rest: Vec<&str> = tokens.collect();

    match (keyword, rest.as_slice()) {
        ("enqueue", [value]) => Command::Enqueue((*value).to_string()),
        ("enqueue", _) => Command::MalformedEnqueue,
        ("dequeue", []) => Command::Dequeue,
        ("peek", []) => Command::Peek,
        ("size", []) => Command::Size,
        ("exit", []) => Command::Exit,
        _ => Command::Unknown(normalized),
    }
}
