use std::time::{Duration, Instant};

use discovery_core::DebounceGate;

const QUIET: Duration = Duration::from_millis(400);

#[test]
fn rapid_updates_settle_once_on_last_value() {
    let start = Instant::now();
    let mut gate = DebounceGate::new(String::new(), QUIET);

    let mut emitted = Vec::new();
    for (offset_ms, value) in [(0, "r"), (90, "ru"), (180, "rus"), (270, "rust")] {
        let at = start + Duration::from_millis(offset_ms);
        gate.push(value.to_string(), at);
        if gate.poll(at) {
            emitted.push(gate.settled().clone());
        }
    }
    // Poll densely past the final deadline.
    for step in 0..20u64 {
        if gate.poll(start + Duration::from_millis(300 + step * 50)) {
            emitted.push(gate.settled().clone());
        }
    }

    assert_eq!(emitted, vec!["rust".to_string()]);
}

#[test]
fn value_is_held_until_quiet_period_elapses() {
    let start = Instant::now();
    let mut gate = DebounceGate::new(String::new(), QUIET);
    gate.push("go".to_string(), start);

    assert!(!gate.poll(start + Duration::from_millis(399)));
    assert_eq!(gate.settled(), "");
    assert!(gate.is_pending());

    assert!(gate.poll(start + QUIET));
    assert_eq!(gate.settled(), "go");
    assert!(!gate.is_pending());
}

#[test]
fn new_push_reschedules_the_deadline() {
    let start = Instant::now();
    let mut gate = DebounceGate::new(0u32, QUIET);
    gate.push(1, start);
    gate.push(2, start + Duration::from_millis(300));

    // The first deadline has passed but was cancelled by the second push.
    assert!(!gate.poll(start + Duration::from_millis(450)));
    assert!(gate.poll(start + Duration::from_millis(700)));
    assert_eq!(*gate.settled(), 2);
}

#[test]
fn returning_to_settled_value_emits_nothing() {
    let start = Instant::now();
    let mut gate = DebounceGate::new("java".to_string(), QUIET);
    gate.push("javas".to_string(), start);
    gate.push("java".to_string(), start + Duration::from_millis(100));

    assert!(!gate.poll(start + Duration::from_secs(1)));
    assert_eq!(gate.settled(), "java");
    assert!(!gate.is_pending());
}
