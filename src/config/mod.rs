//! Configuration module for the TradePro dashboard.

// Can all be private now because we have a public re-export.
mod binance;
mod chart;
mod debug;
mod market;
mod persistence;
mod plot;
mod simulation;
mod ticker;
mod timers;

// Re-export commonly used items
pub use binance::{BINANCE, BinanceApiConfig, CRYPTO_ALLOWLIST, CryptoListing, crypto_listing};
pub use chart::{CHART, ChartConfig, KlineRequest, SimulatedChartParams};
pub use debug::DF;
pub use market::{FOREX_SEED, SeedInstrument, STOCK_SEED};
pub use persistence::PERSISTENCE;
pub use plot::PLOT_CONFIG;
pub use simulation::{SIMULATION, SimulationConfig};
pub use ticker::TICKER;
pub use timers::TIMERS;
