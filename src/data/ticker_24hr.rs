//! Binance 24h rolling ticker statistics -> crypto instruments.

use {
    crate::{config::crypto_listing, data::FeedError, domain::Instrument},
    anyhow::Result,
    serde::Deserialize,
};

const CRYPTO_CURRENCY: &str = "$";

/// The subset of `/api/v3/ticker/24hr` we read. Binance sends numbers as strings.
/// Fields are optional so one odd row cannot sink the whole batch.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Ticker24hr {
    #[serde(default)]
    symbol: String,
    price_change: Option<String>,
    price_change_percent: Option<String>,
    last_price: Option<String>,
}

fn number(field: Option<&str>) -> Option<f64> {
    field?.trim().parse().ok()
}

/// Keeps only allowlisted pairs, in the order Binance returned them.
pub fn parse_tickers(body: &str) -> Result<Vec<Instrument>> {
    let tickers: Vec<Ticker24hr> =
        serde_json::from_str(body).map_err(|e| FeedError::Decode(e.to_string()))?;

    let instruments = tickers
        .into_iter()
        .filter_map(|t| {
            let listing = crypto_listing(&t.symbol)?;
            match (
                number(t.last_price.as_deref()),
                number(t.price_change.as_deref()),
                number(t.price_change_percent.as_deref()),
            ) {
                (Some(price), Some(change), Some(change_percent)) => Some(Instrument::new(
                    listing.symbol,
                    listing.name,
                    price,
                    change,
                    change_percent,
                    CRYPTO_CURRENCY,
                )),
                _ => {
                    log::warn!("Skipping {}: missing or unparsable ticker numbers", t.symbol);
                    None
                }
            }
        })
        .collect();

    Ok(instruments)
}
