//! Cancellable repeating timer driven by caller-supplied instants.
//!
//! The event loop owns no background threads: timers are plain deadlines that
//! the loop polls with the current [`Instant`]. Dropping a timer releases it.

use std::time::{Duration, Instant};

/// Shortest period a timer accepts; zero would fire unboundedly.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A repeating timer with an optional next deadline.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: Duration,
    next_due: Option<Instant>,
}

impl IntervalTimer {
    /// Create an idle timer with the given period.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(MIN_PERIOD),
            next_due: None,
        }
    }

    /// Create a timer that is already running from `now`.
    pub fn started(period: Duration, now: Instant) -> Self {
        let mut timer = Self::new(period);
        timer.start(now);
        timer
    }

    /// (Re)start the timer: the first tick is due one period after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    /// Stop the timer. Cancelling an idle timer is a no-op.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// When the next tick is due, if running.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_due
    }

    /// Number of whole periods that elapsed up to `now`, advancing the deadline
    /// past them. Returns 0 when idle or not yet due.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(due) = self.next_due else {
            return 0;
        };
        if now < due {
            return 0;
        }
        let late = now.duration_since(due).as_nanos() / self.period.as_nanos();
        let fired = u32::try_from(late.saturating_add(1)).unwrap_or(u32::MAX);
        self.next_due = Some(due + self.period * fired);
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn new_timer_is_idle() {
        let mut timer = IntervalTimer::new(10 * MS);
        assert!(!timer.is_running());
        assert_eq!(timer.poll(Instant::now()), 0);
        assert!(timer.next_deadline().is_none());
    }

    #[test]
    fn fires_once_per_period() {
        let t0 = Instant::now();
        let mut timer = IntervalTimer::started(10 * MS, t0);
        assert_eq!(timer.poll(t0 + 5 * MS), 0);
        assert_eq!(timer.poll(t0 + 10 * MS), 1);
        assert_eq!(timer.poll(t0 + 15 * MS), 0);
        assert_eq!(timer.poll(t0 + 20 * MS), 1);
    }

    #[test]
    fn catches_up_after_a_stall() {
        let t0 = Instant::now();
        let mut timer = IntervalTimer::started(10 * MS, t0);
        assert_eq!(timer.poll(t0 + 35 * MS), 3);
        assert_eq!(timer.next_deadline(), Some(t0 + 40 * MS));
    }

    #[test]
    fn cancel_is_idempotent() {
        let t0 = Instant::now();
        let mut timer = IntervalTimer::started(10 * MS, t0);
        timer.cancel();
        timer.cancel();
        assert!(!timer.is_running());
        assert_eq!(timer.poll(t0 + 100 * MS), 0);
    }

    #[test]
    fn restart_moves_deadline() {
        let t0 = Instant::now();
        let mut timer = IntervalTimer::started(10 * MS, t0);
        timer.start(t0 + 8 * MS);
        assert_eq!(timer.poll(t0 + 10 * MS), 0);
        assert_eq!(timer.poll(t0 + 18 * MS), 1);
    }

    #[test]
    fn zero_period_is_clamped() {
        let timer = IntervalTimer::new(Duration::ZERO);
        assert_eq!(timer.period(), MIN_PERIOD);
    }
}
