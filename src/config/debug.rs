//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every feed command and the result it produced.
    pub log_feed: bool,

    /// Log each simulation tick (noisy: every 3s).
    pub log_simulation: bool,

    /// Log timer firings.
    pub log_timers: bool,

    pub log_export: bool,

    /// Log view / category / period changes.
    pub log_selection: bool,
}

pub const DF: LogFlags = LogFlags {
    log_feed: true,
    log_export: true,
    log_selection: true,

    log_simulation: false,
    log_timers: false,
};
