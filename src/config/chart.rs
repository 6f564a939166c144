//! Chart period configuration: live kline requests and the simulated fallback.

use crate::utils::TimeUtils;

/// How many candles of which width back a live chart period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KlineRequest {
    pub interval_ms: i64,
    pub limit: i32,
}

/// Fixed axis labels and relative spread of a simulated chart period.
pub struct SimulatedChartParams {
    pub labels: &'static [&'static str],
    /// Total spread as a fraction of the base value (points land in base ± spread/2).
    pub spread: f64,
}

pub struct ChartConfig {
    pub day: KlineRequest,
    pub week: KlineRequest,
    pub month: KlineRequest,
    pub year: KlineRequest,

    pub sim_day: SimulatedChartParams,
    pub sim_week: SimulatedChartParams,
    pub sim_month: SimulatedChartParams,
    pub sim_year: SimulatedChartParams,

    pub stocks_base: f64,
    pub forex_base: f64,

    pub title_crypto: &'static str,
    pub title_stocks: &'static str,
    pub title_forex: &'static str,
}

pub const CHART: ChartConfig = ChartConfig {
    day: KlineRequest { interval_ms: TimeUtils::MS_IN_15_MIN, limit: 96 },
    week: KlineRequest { interval_ms: TimeUtils::MS_IN_H, limit: 168 },
    month: KlineRequest { interval_ms: TimeUtils::MS_IN_4_H, limit: 180 },
    year: KlineRequest { interval_ms: TimeUtils::MS_IN_D, limit: 365 },

    sim_day: SimulatedChartParams {
        labels: &["9:30", "10:30", "11:30", "12:30", "1:30", "2:30", "3:30"],
        spread: 0.01,
    },
    sim_week: SimulatedChartParams {
        labels: &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        spread: 0.02,
    },
    sim_month: SimulatedChartParams {
        labels: &["Week 1", "Week 2", "Week 3", "Week 4"],
        spread: 0.05,
    },
    sim_year: SimulatedChartParams {
        labels: &["Jan", "Mar", "May", "Jul", "Sep", "Nov", "Dec"],
        spread: 0.1,
    },

    stocks_base: 19500.0,
    forex_base: 1980.0,

    title_crypto: "BTC Price (USD)",
    title_stocks: "NIFTY 50 Performance (INR)",
    title_forex: "Gold Spot Price (USD)",
};
