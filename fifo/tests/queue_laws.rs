//! Session-level checks of the queue laws through the text protocol.

use fifo::core::queue::Queue;
use fifo::session::SessionEnd;
use fifo::test_support::{quiet_config, run_script};

#[test]
fn malformed_enqueue_does_not_change_size() {
    let script = "enqueue one\nenqueue\nenqueue two three\nsize\n";
    let (summary, transcript) = run_script(script, quiet_config()).expect("run");

    assert_eq!(summary.final_size, 1);
    assert_eq!(summary.end, SessionEnd::EndOfInput);
    let lines: Vec<&str> = transcript.lines().collect();
    assert_eq!(lines[1], "Usage: enqueue <value>");
    assert_eq!(lines[2], "Usage: enqueue <value>");
    assert_eq!(lines[3], "Queue size: 1");
}

#[test]
fn repeated_peek_is_pure() {
    let script = "enqueue p\nenqueue q\npeek\npeek\npeek\nsize\ndequeue\n";
    let (summary, transcript) = run_script(script, quiet_config()).expect("run");

    let lines: Vec<&str> = transcript.lines().collect();
    assert_eq!(&lines[2..5], &["Peek: p", "Peek: p", "Peek: p"]);
    assert_eq!(lines[5], "Queue size: 2");
    assert_eq!(lines[6], r#"Dequeued: p. Queue: ["q"]"#);
    assert_eq!(summary.final_size, 1);
}

#[test]
fn empty_probing_is_routine() {
    let script = "dequeue\npeek\ndequeue\nsize\nexit\n";
    let (summary, transcript) = run_script(script, quiet_config()).expect("run");

    assert_eq!(summary.final_size, 0);
    assert_eq!(summary.end, SessionEnd::ExitCommand);
    assert_eq!(transcript.matches("Warning:").count(), 3);
    assert!(transcript.contains("Queue size: 0"));
}

#[test]
fn size_law_holds_for_interleaved_operations() {
    let mut queue = Queue::new();
    let mut expected = 0usize;
    for round in 0..20 {
        queue.enqueue(format!("v{round}"));
        expected += 1;
        if round % 3 == 0 {
            assert!(queue.dequeue().is_some());
            expected -= 1;
        }
        assert_eq!(queue.size(), expected);
    }
}
