/// Outcome of a single one-second tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The countdown is not running; nothing changed.
    Idle,
    /// Still counting; carries the new remaining seconds.
    Running(u32),
    /// The countdown just hit zero. Reported exactly once per activation.
    Expired,
}

/// Single-shot countdown over whole seconds.
///
/// The countdown owns only "count down and say when": the caller drives
/// `tick` once per wall-clock second and decides what zero means. Expiry is
/// reported exactly once per activation, after which the countdown is
/// inactive until restarted. A restart always counts from the given
/// duration; a prior partially-elapsed count is never resumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    duration: u32,
    remaining: u32,
    active: bool,
}

impl Countdown {
    /// An inactive countdown displaying `duration` seconds.
    #[must_use]
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
            active: false,
        }
    }

    /// Reset to `duration` seconds and begin counting.
    pub fn start(&mut self, duration: u32) {
        self.duration = duration;
        self.remaining = duration;
        self.active = true;
    }

    /// Stop counting immediately. No expiry fires for a deactivated countdown.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Change the configured duration. While inactive this also resets the
    /// displayed remaining time; callers must deactivate before changing the
    /// duration of a running countdown.
    pub fn set_duration(&mut self, duration: u32) {
        self.duration = duration;
        if !self.active {
            self.remaining = duration;
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Remaining whole seconds; clamped at zero, never negative.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Advance by one second of wall-clock time.
    pub fn tick(&mut self) -> Tick {
        if !self.active {
            return Tick::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.active = false;
            return Tick::Expired;
        }
        Tick::Running(self.remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_exactly_once_and_clamps_at_zero() {
        let mut countdown = Countdown::new(5);
        countdown.start(5);

        assert_eq!(countdown.tick(), Tick::Running(4));
        assert_eq!(countdown.tick(), Tick::Running(3));
        assert_eq!(countdown.tick(), Tick::Running(2));
        assert_eq!(countdown.tick(), Tick::Running(1));
        assert_eq!(countdown.tick(), Tick::Expired);

        // Further ticks neither fire again nor go negative.
        assert_eq!(countdown.tick(), Tick::Idle);
        assert_eq!(countdown.tick(), Tick::Idle);
        assert_eq!(countdown.remaining(), 0);
        assert!(!countdown.is_active());
    }

    #[test]
    fn deactivation_stops_counting_and_suppresses_expiry() {
        let mut countdown = Countdown::new(5);
        countdown.start(5);
        countdown.tick();
        countdown.tick();
        assert_eq!(countdown.remaining(), 3);

        countdown.deactivate();
        for _ in 0..10 {
            assert_eq!(countdown.tick(), Tick::Idle);
        }
        assert_eq!(countdown.remaining(), 3);
    }

    #[test]
    fn restart_counts_from_the_new_duration() {
        let mut countdown = Countdown::new(5);
        countdown.start(5);
        countdown.tick();
        countdown.deactivate();

        countdown.start(3);
        assert_eq!(countdown.remaining(), 3);
        assert_eq!(countdown.tick(), Tick::Running(2));
    }

    #[test]
    fn set_duration_while_inactive_resets_display() {
        let mut countdown = Countdown::new(5);
        countdown.set_duration(30);
        assert_eq!(countdown.remaining(), 30);
        assert!(!countdown.is_active());
    }

    #[test]
    fn zero_duration_expires_on_first_tick() {
        let mut countdown = Countdown::new(0);
        countdown.start(0);
        assert_eq!(countdown.tick(), Tick::Expired);
        assert_eq!(countdown.remaining(), 0);
    }
}
