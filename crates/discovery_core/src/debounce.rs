use std::time::{Duration, Instant};

/// Holds back a changing value until it has been stable for `quiet`.
///
/// Time is passed in by the caller, so the gate has no timers of its own:
/// `push` (re)arms the deadline and `poll` settles the pending value once
/// the deadline has passed. A newer `push` replaces the pending value and
/// its deadline, so only the most recent value is ever settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebounceGate<T> {
    quiet: Duration,
    settled: T,
    pending: Option<(T, Instant)>,
}

impl<T: Clone + PartialEq> DebounceGate<T> {
    pub fn new(initial: T, quiet: Duration) -> Self {
        Self {
            quiet,
            settled: initial,
            pending: None,
        }
    }

    pub fn settled(&self) -> &T {
        &self.settled
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.quiet));
    }

    /// Settles the pending value if its quiet period elapsed.
    /// Returns `true` only when the settled value actually changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match &self.pending {
            Some((_, deadline)) if *deadline <= now => {}
            _ => return false,
        }
        let Some((value, _)) = self.pending.take() else {
            return false;
        };
        if value == self.settled {
            return false;
        }
        self.settled = value;
        true
    }
}
