mod bn_kline;
mod error;
mod feed;
mod provider;
mod ticker_24hr;

pub use {
    bn_kline::{candles_to_series, load_klines},
    error::FeedError,
    feed::{FeedCommand, FeedEvent, FeedHealth, MarketFeed},
    provider::{BinanceProvider, MarketDataProvider},
    ticker_24hr::parse_tickers,
};
