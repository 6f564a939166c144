mod chart_series;
mod key_stats;
mod market_book;

pub use chart_series::{ChartPoint, ChartSeries};
pub use key_stats::KeyStats;
pub use market_book::{MarketBook, SUMMARY_CARD_COUNT, TOP_MOVER_COUNT};
