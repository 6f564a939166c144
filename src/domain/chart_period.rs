use {
    crate::config::{CHART, KlineRequest, SimulatedChartParams},
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    Default,
    clap::ValueEnum,
)]
pub enum ChartPeriod {
    #[strum(to_string = "1D")]
    #[value(name = "1d")]
    #[default]
    Day,
    #[strum(to_string = "1W")]
    #[value(name = "1w")]
    Week,
    #[strum(to_string = "1M")]
    #[value(name = "1m")]
    Month,
    #[strum(to_string = "1Y")]
    #[value(name = "1y")]
    Year,
}

impl ChartPeriod {
    pub const ALL: [ChartPeriod; 4] = [
        ChartPeriod::Day,
        ChartPeriod::Week,
        ChartPeriod::Month,
        ChartPeriod::Year,
    ];

    pub fn kline_request(&self) -> KlineRequest {
        match self {
            ChartPeriod::Day => CHART.day,
            ChartPeriod::Week => CHART.week,
            ChartPeriod::Month => CHART.month,
            ChartPeriod::Year => CHART.year,
        }
    }

    pub fn simulated_spec(&self) -> &'static SimulatedChartParams {
        match self {
            ChartPeriod::Day => &CHART.sim_day,
            ChartPeriod::Week => &CHART.sim_week,
            ChartPeriod::Month => &CHART.sim_month,
            ChartPeriod::Year => &CHART.sim_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::TimeUtils;

    #[test]
    fn kline_requests_match_periods() {
        assert_eq!(
            ChartPeriod::Day.kline_request(),
            KlineRequest { interval_ms: TimeUtils::MS_IN_15_MIN, limit: 96 }
        );
        assert_eq!(ChartPeriod::Week.kline_request().limit, 168);
        assert_eq!(ChartPeriod::Month.kline_request().interval_ms, TimeUtils::MS_IN_4_H);
        assert_eq!(ChartPeriod::Year.kline_request().limit, 365);
    }

    #[test]
    fn display_uses_button_labels() {
        let labels: Vec<String> = ChartPeriod::ALL.iter().map(|p| p.to_string()).collect();
        assert_eq!(labels, ["1D", "1W", "1M", "1Y"]);
    }
}
