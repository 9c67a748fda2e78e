//! Cancellable countdown over whole seconds
//!
//! The timer holds remaining seconds and a running flag; it never spawns
//! threads. The host loop decides when a second has elapsed and calls
//! [`CountdownTimer::tick`], so cancellation simply stops future ticks from
//! being delivered. Cancelling twice is safe.

/// A countdown the engine can start, resume, cancel, and tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountdownTimer {
    remaining: u32,
    running: bool,
}

impl CountdownTimer {
    /// A stopped timer with nothing on the clock
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            remaining: 0,
            running: false,
        }
    }

    /// Put `secs` on the clock and start counting
    pub const fn start(&mut self, secs: u32) {
        self.remaining = secs;
        self.running = true;
    }

    /// Start counting again without touching the remaining seconds
    pub const fn resume(&mut self) {
        self.running = true;
    }

    /// Stop counting; idempotent
    pub const fn cancel(&mut self) {
        self.running = false;
    }

    /// Stop counting and clear the clock
    pub const fn reset(&mut self) {
        self.remaining = 0;
        self.running = false;
    }

    #[inline]
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Restore the clock from a saved game
    pub const fn set_remaining(&mut self, secs: u32) {
        self.remaining = secs;
    }

    /// Count down one second; returns true when the countdown expires
    ///
    /// Saturates at zero, so remaining never goes negative.
    pub const fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_timer_is_stopped_at_zero() {
        let timer = CountdownTimer::idle();
        assert!(!timer.is_running());
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn start_puts_seconds_on_the_clock() {
        let mut timer = CountdownTimer::idle();
        timer.start(300);
        assert!(timer.is_running());
        assert_eq!(timer.remaining(), 300);
    }

    #[test]
    fn tick_decrements_by_exactly_one() {
        let mut timer = CountdownTimer::idle();
        timer.start(3);

        assert!(!timer.tick());
        assert_eq!(timer.remaining(), 2);
        assert!(!timer.tick());
        assert_eq!(timer.remaining(), 1);
    }

    #[test]
    fn tick_expires_exactly_at_zero() {
        let mut timer = CountdownTimer::idle();
        timer.start(1);

        assert!(timer.tick());
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn tick_saturates_never_negative() {
        let mut timer = CountdownTimer::idle();
        timer.start(0);

        assert!(timer.tick());
        assert!(timer.tick());
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut timer = CountdownTimer::idle();
        timer.start(60);

        timer.cancel();
        assert!(!timer.is_running());
        timer.cancel();
        assert!(!timer.is_running());
        assert_eq!(timer.remaining(), 60);
    }

    #[test]
    fn resume_keeps_remaining_seconds() {
        let mut timer = CountdownTimer::idle();
        timer.start(60);
        timer.cancel();

        timer.resume();
        assert!(timer.is_running());
        assert_eq!(timer.remaining(), 60);
    }

    #[test]
    fn reset_stops_and_clears() {
        let mut timer = CountdownTimer::idle();
        timer.start(60);

        timer.reset();
        assert!(!timer.is_running());
        assert_eq!(timer.remaining(), 0);
    }
}
