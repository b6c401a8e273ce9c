//! Fixed-interval frame clock.
//!
//! The caller owns time: every method takes `now`, so the loop can be driven
//! by a real clock in the binary and by synthetic instants in tests.

use std::time::{Duration, Instant};

use tracing::debug;

/// Recurring frame signal with an explicit start/cancel lifecycle.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    /// Create a stopped ticker. A zero interval is raised to one millisecond.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Schedule the first tick one interval after `now`. Restarts a running ticker.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    /// Stop delivering ticks. Safe to call any number of times.
    pub fn cancel(&mut self) {
        if self.next_due.take().is_some() {
            debug!("ticker cancelled");
        }
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Number of ticks due at `now`, advancing the schedule past them.
    ///
    /// Deadlines advance by whole intervals so a late poll catches up
    /// without drifting.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut due) = self.next_due else {
            return 0;
        };
        let mut ticks = 0u32;
        while due <= now {
            ticks = ticks.saturating_add(1);
            due += self.interval;
        }
        self.next_due = Some(due);
        ticks
    }

    /// Time left until the next tick, `None` when stopped.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|due| due.checked_duration_since(now).unwrap_or(Duration::ZERO))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn stopped_ticker_never_fires() {
        let mut ticker = Ticker::new(FRAME);
        let t0 = Instant::now();
        assert!(!ticker.is_running());
        assert_eq!(ticker.poll(t0 + FRAME * 10), 0);
        assert_eq!(ticker.time_until_next(t0), None);
    }

    #[test]
    fn fires_once_per_interval() {
        let mut ticker = Ticker::new(FRAME);
        let t0 = Instant::now();
        ticker.start(t0);

        assert_eq!(ticker.poll(t0 + Duration::from_millis(15)), 0);
        assert_eq!(ticker.poll(t0 + FRAME), 1);
        assert_eq!(ticker.poll(t0 + FRAME), 0);
        assert_eq!(ticker.time_until_next(t0 + FRAME), Some(FRAME));
    }

    #[test]
    fn late_poll_catches_up() {
        let mut ticker = Ticker::new(FRAME);
        let t0 = Instant::now();
        ticker.start(t0);

        assert_eq!(ticker.poll(t0 + FRAME * 3 + Duration::from_millis(5)), 3);
        assert_eq!(
            ticker.time_until_next(t0 + FRAME * 3 + Duration::from_millis(5)),
            Some(Duration::from_millis(11))
        );
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut ticker = Ticker::new(FRAME);
        let t0 = Instant::now();
        ticker.start(t0);

        ticker.cancel();
        ticker.cancel();
        assert!(!ticker.is_running());
        assert_eq!(ticker.poll(t0 + FRAME * 5), 0);

        ticker.start(t0 + FRAME * 5);
        assert!(ticker.is_running());
    }

    #[test]
    fn zero_interval_is_clamped() {
        let ticker = Ticker::new(Duration::ZERO);
        assert_eq!(ticker.interval(), Duration::from_millis(1));
    }
}
