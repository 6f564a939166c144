use chrono::{DateTime, Local, TimeZone};

use crate::domain::ChartPeriod;

/// Monotonic clock that also works in the browser.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_15_MIN: i64 = Self::MS_IN_MIN * 15;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_4_H: i64 = Self::MS_IN_H * 4;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;

    /// Convert interval in milliseconds to a Binance-style shorthand (e.g. `15m`, `1h`).
    pub fn interval_to_string(interval_ms: i64) -> &'static str {
        match interval_ms {
            Self::MS_IN_MIN => "1m",
            Self::MS_IN_15_MIN => "15m",
            Self::MS_IN_H => "1h",
            Self::MS_IN_4_H => "4h",
            Self::MS_IN_D => "1d",
            _ => "unknown",
        }
    }
}

/// Axis label for a candle open time, shaped by how wide the chart period is.
pub fn epoch_ms_to_chart_label<Tz: TimeZone>(epoch_ms: i64, period: ChartPeriod, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let Some(utc) = DateTime::from_timestamp_millis(epoch_ms) else {
        return String::new();
    };
    let dt = utc.with_timezone(tz);
    let fmt = match period {
        ChartPeriod::Day => "%I:%M %p",
        ChartPeriod::Week => "%b %-d, %I %p",
        ChartPeriod::Month => "%b %-d",
        ChartPeriod::Year => "%b %y",
    };
    dt.format(fmt).to_string()
}

pub fn timestamp_for_filename(format: &str) -> String {
    Local::now().format(format).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    // 2024-03-05 14:30:00 UTC
    const TS: i64 = 1_709_649_000_000;

    #[test]
    fn chart_labels_follow_period() {
        assert_eq!(epoch_ms_to_chart_label(TS, ChartPeriod::Day, &Utc), "02:30 PM");
        assert_eq!(epoch_ms_to_chart_label(TS, ChartPeriod::Week, &Utc), "Mar 5, 02 PM");
        assert_eq!(epoch_ms_to_chart_label(TS, ChartPeriod::Month, &Utc), "Mar 5");
        assert_eq!(epoch_ms_to_chart_label(TS, ChartPeriod::Year, &Utc), "Mar 24");
    }

    #[test]
    fn interval_names() {
        assert_eq!(TimeUtils::interval_to_string(TimeUtils::MS_IN_15_MIN), "15m");
        assert_eq!(TimeUtils::interval_to_string(TimeUtils::MS_IN_4_H), "4h");
        assert_eq!(TimeUtils::interval_to_string(42), "unknown");
    }
}
