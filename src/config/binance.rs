pub struct BinanceApiConfig {
    pub timeout_ms: u64,
    pub retries: u32,
    pub backoff_ms: u64,
}

impl Default for BinanceApiConfig {
    fn default() -> Self {
        Self {
            timeout_ms: BINANCE.client.timeout_ms,
            retries: BINANCE.client.retries,
            backoff_ms: BINANCE.client.backoff_ms,
        }
    }
}

/// Public REST endpoints. No key required.
pub struct RestEndpoints {
    pub base_url: &'static str,
    pub ticker_24hr_path: &'static str,
}

pub struct ClientDefaults {
    pub timeout_ms: u64,
    pub retries: u32,
    pub backoff_ms: u64,
}

pub struct BinanceConfig {
    pub rest: RestEndpoints,
    pub client: ClientDefaults,
    /// Pair whose klines back the crypto chart.
    pub chart_symbol: &'static str,
}

pub const BINANCE: BinanceConfig = BinanceConfig {
    rest: RestEndpoints {
        base_url: "https://api.binance.com",
        ticker_24hr_path: "/api/v3/ticker/24hr",
    },
    client: ClientDefaults {
        timeout_ms: 5000,
        retries: 2,
        backoff_ms: 1000,
    },
    chart_symbol: "BTCUSDT",
};

/// Display identity for an allowlisted Binance pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CryptoListing {
    pub pair: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

pub const CRYPTO_ALLOWLIST: &[CryptoListing] = &[
    CryptoListing { pair: "BTCUSDT", symbol: "BTC", name: "Bitcoin" },
    CryptoListing { pair: "ETHUSDT", symbol: "ETH", name: "Ethereum" },
    CryptoListing { pair: "SOLUSDT", symbol: "SOL", name: "Solana" },
    CryptoListing { pair: "XRPUSDT", symbol: "XRP", name: "Ripple" },
    CryptoListing { pair: "ADAUSDT", symbol: "ADA", name: "Cardano" },
    CryptoListing { pair: "BNBUSDT", symbol: "BNB", name: "Binance Coin" },
];

pub fn crypto_listing(pair: &str) -> Option<&'static CryptoListing> {
    CRYPTO_ALLOWLIST.iter().find(|l| l.pair == pair)
}
