mod format;
mod time_utils;

pub use format::{
    PricePrecision, format_change, format_compact_volume, format_percent, format_price,
    price_precision,
};
pub use time_utils::{AppInstant, TimeUtils, epoch_ms_to_chart_label, timestamp_for_filename};
