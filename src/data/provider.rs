use {
    anyhow::{Context, Result},
    async_trait::async_trait,
    chrono::Local,
    reqwest::Client,
    std::time::Duration,
};

use crate::{
    config::BINANCE,
    data::{FeedError, candles_to_series, load_klines, parse_tickers},
    domain::{ChartPeriod, Instrument},
    models::ChartSeries,
};

/// Abstract interface for fetching live market data.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Latest 24h statistics for the allowlisted crypto pairs.
    async fn fetch_tickers(&self) -> Result<Vec<Instrument>>;

    /// Chart series for the configured chart symbol over `period`.
    async fn fetch_chart(&self, period: ChartPeriod) -> Result<ChartSeries>;
}

pub struct BinanceProvider {
    client: Client,
    base_url: String,
}

impl BinanceProvider {
    pub fn new() -> Result<Self> {
        Self::with_base_url(BINANCE.rest.base_url)
    }

    /// Points the ticker endpoint at another host (mock servers in tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(BINANCE.client.timeout_ms))
            .build()
            .map_err(|e| FeedError::Transport(e.to_string()))
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn ticker_url(&self) -> String {
        format!("{}{}", self.base_url, BINANCE.rest.ticker_24hr_path)
    }
}

#[async_trait]
impl MarketDataProvider for BinanceProvider {
    async fn fetch_tickers(&self) -> Result<Vec<Instrument>> {
        let url = self.ticker_url();
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FeedError::Transport(e.to_string()))
            .with_context(|| format!("GET {}", url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()))
                .with_context(|| format!("GET {}", url));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FeedError::Transport(e.to_string()))?;
        parse_tickers(&body).context("Failed to parse 24hr ticker payload")
    }

    async fn fetch_chart(&self, period: ChartPeriod) -> Result<ChartSeries> {
        let candles = load_klines(BINANCE.chart_symbol, period.kline_request()).await?;
        Ok(candles_to_series(&candles, period, &Local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_url_joins_without_double_slash() {
        let provider = BinanceProvider::with_base_url("http://127.0.0.1:9000/").expect("client");
        assert_eq!(provider.ticker_url(), "http://127.0.0.1:9000/api/v3/ticker/24hr");
    }

    #[test]
    fn default_provider_targets_binance() {
        let provider = BinanceProvider::new().expect("client");
        assert_eq!(provider.ticker_url(), "https://api.binance.com/api/v3/ticker/24hr");
    }
}
