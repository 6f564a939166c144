mod clock;
mod simulated_chart;
mod simulator;
mod timers;

pub use clock::{ClockSnapshot, detect_location, location_from_zone};
pub use simulated_chart::simulated_chart;
pub use simulator::{perturb, simulate_tick};
pub use timers::{IntervalTimer, TimerEvent, Timers};
