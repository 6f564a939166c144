//! Fixed-period timers driven from the UI frame loop.
//!
//! Three timers (clock, simulation, crypto poll) fire independently with no
//! ordering between them. Teardown is simply dropping `Timers`.

use {
    crate::{config::TIMERS, utils::AppInstant},
    std::time::Duration,
};

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: Duration,
    last_fired: Option<AppInstant>,
}

impl IntervalTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            last_fired: None,
        }
    }

    /// True at most once per period. Missed periods are not replayed: the timer re-arms from `now`.
    pub fn due(&mut self, now: AppInstant) -> bool {
        let fire = match self.last_fired {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.period,
        };
        if fire {
            self.last_fired = Some(now);
        }
        fire
    }

    /// Forget the last firing so the next `due` call fires.
    pub fn fire_now(&mut self) {
        self.last_fired = None;
    }

    /// Time until the next firing, used to schedule a repaint.
    pub fn remaining(&self, now: AppInstant) -> Duration {
        match self.last_fired {
            None => Duration::ZERO,
            Some(last) => self.period.saturating_sub(now.saturating_duration_since(last)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Clock,
    Simulation,
    CryptoPoll,
}

#[derive(Debug, Clone)]
pub struct Timers {
    pub clock: IntervalTimer,
    pub simulation: IntervalTimer,
    pub crypto_poll: IntervalTimer,
}

impl Default for Timers {
    fn default() -> Self {
        Self::new()
    }
}

impl Timers {
    pub fn new() -> Self {
        Self {
            clock: IntervalTimer::new(TIMERS.clock),
            simulation: IntervalTimer::new(TIMERS.simulation),
            crypto_poll: IntervalTimer::new(TIMERS.crypto_poll),
        }
    }

    /// Timers due at `now`. The crypto poll only runs while crypto is on screen.
    pub fn poll(&mut self, now: AppInstant, crypto_active: bool) -> Vec<TimerEvent> {
        let mut events = Vec::with_capacity(3);
        if self.clock.due(now) {
            events.push(TimerEvent::Clock);
        }
        if self.simulation.due(now) {
            events.push(TimerEvent::Simulation);
        }
        if crypto_active && self.crypto_poll.due(now) {
            events.push(TimerEvent::CryptoPoll);
        }

        #[cfg(debug_assertions)]
        if DF.log_timers && !events.is_empty() {
            log::info!("Timers fired: {:?}", events);
        }
        events
    }

    /// Shortest wait until any active timer fires.
    pub fn next_deadline(&self, now: AppInstant, crypto_active: bool) -> Duration {
        let mut wait = self.clock.remaining(now).min(self.simulation.remaining(now));
        if crypto_active {
            wait = wait.min(self.crypto_poll.remaining(now));
        }
        wait
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_period() {
        let t0 = AppInstant::now();
        let mut timer = IntervalTimer::new(Duration::from_secs(1));
        assert!(timer.due(t0));
        assert!(!timer.due(t0));
        assert!(!timer.due(t0 + Duration::from_millis(999)));
        assert!(timer.due(t0 + Duration::from_secs(1)));
        assert!(!timer.due(t0 + Duration::from_millis(1500)));
    }

    #[test]
    fn missed_periods_are_not_replayed() {
        let t0 = AppInstant::now();
        let mut timer = IntervalTimer::new(Duration::from_secs(3));
        assert!(timer.due(t0));
        assert!(timer.due(t0 + Duration::from_secs(30)));
        assert!(!timer.due(t0 + Duration::from_secs(31)));
    }

    #[test]
    fn fire_now_rearms_immediately() {
        let t0 = AppInstant::now();
        let mut timer = IntervalTimer::new(Duration::from_secs(10));
        assert!(timer.due(t0));
        timer.fire_now();
        assert!(timer.due(t0 + Duration::from_millis(1)));
    }

    #[test]
    fn crypto_poll_waits_for_crypto_view() {
        let t0 = AppInstant::now();
        let mut timers = Timers::new();
        let events = timers.poll(t0, false);
        assert_eq!(events, [TimerEvent::Clock, TimerEvent::Simulation]);

        let events = timers.poll(t0 + Duration::from_millis(100), true);
        assert_eq!(events, [TimerEvent::CryptoPoll]);

        let events = timers.poll(t0 + Duration::from_secs(3), true);
        assert_eq!(events, [TimerEvent::Clock, TimerEvent::Simulation]);
    }

    #[test]
    fn next_deadline_is_the_nearest_timer() {
        let t0 = AppInstant::now();
        let mut timers = Timers::new();
        timers.poll(t0, true);
        let wait = timers.next_deadline(t0 + Duration::from_millis(400), true);
        assert_eq!(wait, Duration::from_millis(600));
    }
}
