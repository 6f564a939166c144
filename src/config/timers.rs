use std::time::Duration;

pub struct TimerConfig {
    pub clock: Duration,
    pub simulation: Duration,
    pub crypto_poll: Duration,
}

pub const TIMERS: TimerConfig = TimerConfig {
    clock: Duration::from_secs(1),
    simulation: Duration::from_secs(3),
    crypto_poll: Duration::from_secs(10),
};
