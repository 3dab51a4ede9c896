//! Quiet-period gate for bursty collaborator updates.
//!
//! Free-text editors push every keystroke here and dispatch whatever
//! `poll` releases. The reducer never sees the intermediate values.

use std::time::{Duration, Instant};

/// Quiet period used for note autosave.
pub const NOTE_AUTOSAVE_QUIET: Duration = Duration::from_secs(1);

#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub const fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Replaces any pending value and restarts the quiet period.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Releases the pending value once `quiet` has elapsed since the last
    /// push.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let ready = matches!(
            &self.pending,
            Some((_, pushed_at)) if now.saturating_duration_since(*pushed_at) >= self.quiet
        );
        if ready {
            self.flush()
        } else {
            None
        }
    }

    /// Releases the pending value immediately, e.g. when the editor closes.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    /// Drops the pending value without releasing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::Debouncer;
    use std::time::{Duration, Instant};

    #[test]
    fn only_the_last_value_is_released_after_quiet_period() {
        let start = Instant::now();
        let mut gate = Debouncer::new(Duration::from_millis(1_000));

        gate.push("a", start);
        gate.push("ab", start + Duration::from_millis(600));
        assert_eq!(gate.poll(start + Duration::from_millis(1_200)), None);
        assert_eq!(gate.poll(start + Duration::from_millis(1_600)), Some("ab"));
        assert!(!gate.is_pending());
    }

    #[test]
    fn flush_and_cancel_empty_the_gate() {
        let now = Instant::now();
        let mut gate = Debouncer::new(Duration::from_secs(1));

        gate.push(1, now);
        assert_eq!(gate.flush(), Some(1));
        gate.push(2, now);
        gate.cancel();
        assert_eq!(gate.poll(now + Duration::from_secs(5)), None);
    }
}
