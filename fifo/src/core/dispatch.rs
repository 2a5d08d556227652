//! Routes parsed commands to the queue and formats the observable result.

use std::fmt::Debug;

use crate::core::command::Command;
use crate::core::queue::Queue;

pub const COMMAND_LIST: &str = "enqueue <value>, dequeue, peek, size, exit";
pub const FAREWELL: &str = "Exiting program.";
pub const ENQUEUE_USAGE: &str = "Usage: enqueue <value>";

/// Whether the session keeps reading after this reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// Printable outcome of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Non-fatal warning printed ahead of `message` (empty-queue access).
    pub diagnostic: Option<String>,
    pub message: String,
    pub control: Control,
}

impl Reply {
    fn line(message: String) -> Self {
        Self {
            diagnostic: None,
            message,
            control: Control::Continue,
        }
    }

    fn warned(diagnostic: &str, message: String) -> Self {
        Self {
            diagnostic: Some(diagnostic.to_string()),
            message,
            control: Control::Continue,
        }
    }
}

/// Apply `command` to `queue`.
///
/// `empty_indicator` is printed in place of a value when `dequeue`/`peek`
/// find the queue empty. Never fails.
pub fn dispatch(command: Command, queue: &mut Queue<String>, empty_indicator: &str) -> Reply {
    match command {
        Command::Enqueue(value) => {
            queue.enqueue(value.clone());
            Reply::line(format!("Enqueued {value}. Queue: {}", render_queue(queue)))
        }
        Command::Dequeue => match queue.dequeue() {
            Some(value) => Reply::line(format!(
                "Dequeued: {value}. Queue: {}",
                render_queue(queue)
            )),
            None => Reply::warned(
                "Warning: Dequeue from empty queue.",
                format!("Dequeued: {empty_indicator}. Queue: {}", render_queue(queue)),
            ),
        },
        Command::Peek => match queue.peek() {
            Some(value) => Reply::line(format!("Peek: {value}")),
            None => Reply::warned(
                "Warning: Peek from empty queue.",
                format!("Peek: {empty_indicator}"),
            ),
        },
        Command::Size => Reply::line(format!("Queue size: {}", queue.size())),
        Command::Exit => Reply {
            diagnostic: None,
            message: FAREWELL.to_string(),
            control: Control::Exit,
        },
        Command::MalformedEnqueue => Reply::line(ENQUEUE_USAGE.to_string()),
        Command::Unknown(_) => Reply::line(format!("Unknown command. Try: {COMMAND_LIST}")),
    }
}

/// Render queue contents front to back, e.g. `["a", "b"]`.
pub fn render_queue<T: Debug>(queue: &Queue<T>) -> String {
    let items: Vec<String> = queue.iter().map(|item| format!("{item:?}")).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::command::parse_command;

    fn run(queue: &mut Queue<String>, line: &str) -> Reply {
        dispatch(parse_command(line), queue, "None")
    }

    #[test]
    fn enqueue_reports_full_contents() {
        let mut queue = Queue::new();
        run(&mut queue, "enqueue a");
        let reply = run(&mut queue, "enqueue b");
        assert_eq!(reply.message, r#"Enqueued b. Queue: ["a", "b"]"#);
        assert_eq!(reply.diagnostic, None);
        assert_eq!(reply.control, Control::Continue);
    }

    #[test]
    fn scenario_dequeue_peek_drain() {
        let mut queue = Queue::new();
        for line in ["enqueue a", "enqueue b", "enqueue c"] {
            run(&mut queue, line);
        }

        let reply = run(&mut queue, "dequeue");
        assert_eq!(reply.message, r#"Dequeued: a. Queue: ["b", "c"]"#);
        assert_eq!(queue.size(), 2);

        let reply = run(&mut queue, "peek");
        assert_eq!(reply.message, "Peek: b");
        assert_eq!(queue.size(), 2);

        assert_eq!(run(&mut queue, "dequeue").message, r#"Dequeued: b. Queue: ["c"]"#);
        assert_eq!(run(&mut queue, "dequeue").message, "Dequeued: c. Queue: []");

        let reply = run(&mut queue, "dequeue");
        assert_eq!(reply.message, "Dequeued: None. Queue: []");
        assert_eq!(
            reply.diagnostic.as_deref(),
            Some("Warning: Dequeue from empty queue.")
        );
        assert_eq!(queue.size(), 0);
    }

    #[test]
    fn peek_on_empty_uses_indicator() {
        let mut queue = Queue::new();
        let reply = dispatch(Command::Peek, &mut queue, "<empty>");
        assert_eq!(reply.message, "Peek: <empty>");
        assert_eq!(
            reply.diagnostic.as_deref(),
            Some("Warning: Peek from empty queue.")
        );
    }

    #[test]
    fn malformed_enqueue_leaves_size_unchanged() {
        let mut queue = Queue::new();
        run(&mut queue, "enqueue keep");
        assert_eq!(run(&mut queue, "enqueue").message, ENQUEUE_USAGE);
        assert_eq!(run(&mut queue, "enqueue two words").message, ENQUEUE_USAGE);
        assert_eq!(queue.size(), 1);
    }

    #[test]
    fn unknown_command_lists_commands() {
        let mut queue = Queue::new();
        let reply = run(&mut queue, "pop");
        assert_eq!(
            reply.message,
            "Unknown command. Try: enqueue <value>, dequeue, peek, size, exit"
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn size_and_exit() {
        let mut queue = Queue::new();
        run(&mut queue, "enqueue x");
        assert_eq!(run(&mut queue, "size").message, "Queue size: 1");
        let reply = run(&mut queue, "exit");
        assert_eq!(reply.message, FAREWELL);
        assert_eq!(reply.control, Control::Exit);
    }
}
