use {
    crate::config::SeedInstrument,
    serde::{Deserialize, Serialize},
};

/// One quoted market: a stock, a currency pair or a coin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    /// Absolute change against the reference (previous close) price.
    pub change: f64,
    pub change_percent: f64,
    pub currency: String,
}

impl Instrument {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        change: f64,
        change_percent: f64,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            price,
            change,
            change_percent,
            currency: currency.into(),
        }
    }

    pub fn is_up(&self) -> bool {
        self.change >= 0.0
    }

    /// The price the change is measured from.
    pub fn reference_price(&self) -> f64 {
        self.price - self.change
    }

    /// Two-letter badge shown next to list rows.
    pub fn icon_text(&self) -> String {
        self.symbol.chars().take(2).collect()
    }

    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        q.is_empty()
            || self.symbol.to_lowercase().contains(&q)
            || self.name.to_lowercase().contains(&q)
    }
}

impl From<&SeedInstrument> for Instrument {
    fn from(seed: &SeedInstrument) -> Self {
        Instrument::new(
            seed.symbol,
            seed.name,
            seed.price,
            seed.change,
            seed.change_percent,
            seed.currency,
        )
    }
}

impl std::fmt::Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) {}{} {:+.2}%",
            self.symbol, self.name, self.currency, self.price, self.change_percent
        )
    }
}
