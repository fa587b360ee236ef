//! Cancellable periodic timer measured in milliseconds.
//!
//! The timer does not read a clock. Callers feed it elapsed time with
//! [`TickTimer::consume`] and it reports each firing.

/// One-shot-per-interval gravity timer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickTimer {
    interval_ms: u32,
    waited_ms: u32,
    armed: bool,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer with `interval_ms`.
    ///
    /// An armed timer keeps its progress when the interval is unchanged.
    /// A new interval (or a cancelled timer) restarts from zero.
    /// Returns true if the timer was restarted.
    pub fn schedule(&mut self, interval_ms: u32) -> bool {
        if self.armed && self.interval_ms == interval_ms {
            return false;
        }
        self.interval_ms = interval_ms.max(1);
        self.waited_ms = 0;
        self.armed = true;
        true
    }

    pub fn cancel(&mut self) {
        self.armed = false;
        self.waited_ms = 0;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn interval_ms(&self) -> Option<u32> {
        self.armed.then_some(self.interval_ms)
    }

    /// Milliseconds until the next firing, if armed.
    pub fn remaining_ms(&self) -> Option<u32> {
        self.armed
            .then(|| self.interval_ms.saturating_sub(self.waited_ms))
    }

    /// Spend elapsed time from `budget_ms`.
    ///
    /// If the budget reaches the deadline, only the time up to the deadline is
    /// taken, the timer restarts its interval and true is returned. Otherwise
    /// the whole budget is absorbed.
    pub fn consume(&mut self, budget_ms: &mut u32) -> bool {
        if !self.armed {
            *budget_ms = 0;
            return false;
        }

        let remaining = self.interval_ms.saturating_sub(self.waited_ms);
        if *budget_ms >= remaining {
            *budget_ms -= remaining;
            self.waited_ms = 0;
            true
        } else {
            self.waited_ms += *budget_ms;
            *budget_ms = 0;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_timer_is_idle() {
        let timer = TickTimer::new();
        assert!(!timer.is_armed());
        assert_eq!(timer.remaining_ms(), None);
    }

    #[test]
    fn test_fires_at_deadline() {
        let mut timer = TickTimer::new();
        assert!(timer.schedule(100));

        let mut budget = 60;
        assert!(!timer.consume(&mut budget));
        assert_eq!(timer.remaining_ms(), Some(40));

        let mut budget = 50;
        assert!(timer.consume(&mut budget));
        assert_eq!(budget, 10);
        assert_eq!(timer.remaining_ms(), Some(100));
    }

    #[test]
    fn test_same_interval_keeps_progress() {
        let mut timer = TickTimer::new();
        timer.schedule(100);
        let mut budget = 30;
        timer.consume(&mut budget);

        assert!(!timer.schedule(100));
        assert_eq!(timer.remaining_ms(), Some(70));

        assert!(timer.schedule(15));
        assert_eq!(timer.remaining_ms(), Some(15));
    }

    #[test]
    fn test_cancel_drops_budget() {
        let mut timer = TickTimer::new();
        timer.schedule(100);
        timer.cancel();

        let mut budget = 500;
        assert!(!timer.consume(&mut budget));
        assert_eq!(budget, 0);
        assert!(timer.schedule(100));
        assert_eq!(timer.remaining_ms(), Some(100));
    }
}
