// Domain types and value objects
mod asset_class;
mod candle;
mod chart_period;
mod instrument;
mod view;

// Re-export commonly used types to the world
pub use asset_class::AssetClass;
pub use candle::{BaseVol, Candle, QuoteVol};
pub use chart_period::ChartPeriod;
pub use instrument::Instrument;
pub use view::View;
