mod analysis;
mod chart_view;
mod dashboard;
mod styles;
mod ticker;
mod ui_config;
mod ui_render;
mod ui_text;

pub(crate) use chart_view::{period_selector, show_price_chart};
pub(crate) use styles::{UiStyleExt, direction_color};
pub(crate) use ticker::TickerState;
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
