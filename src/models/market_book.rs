use {
    crate::{
        config::{FOREX_SEED, STOCK_SEED},
        domain::{AssetClass, Instrument},
    },
    itertools::Itertools,
    std::cmp::Ordering,
};

pub const SUMMARY_CARD_COUNT: usize = 4;
pub const TOP_MOVER_COUNT: usize = 5;

/// All instruments the dashboard knows about, one set per asset class.
#[derive(Debug, Clone)]
pub struct MarketBook {
    stocks: Vec<Instrument>,
    forex: Vec<Instrument>,
    crypto: Vec<Instrument>,
}

impl Default for MarketBook {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketBook {
    /// Stocks and forex start from the seed quotes; crypto stays empty until the first poll lands.
    pub fn new() -> Self {
        Self {
            stocks: STOCK_SEED.iter().map(Instrument::from).collect(),
            forex: FOREX_SEED.iter().map(Instrument::from).collect(),
            crypto: Vec::new(),
        }
    }

    pub fn instruments(&self, class: AssetClass) -> &[Instrument] {
        match class {
            AssetClass::Stocks => &self.stocks,
            AssetClass::Forex => &self.forex,
            AssetClass::Crypto => &self.crypto,
        }
    }

    pub fn instruments_mut(&mut self, class: AssetClass) -> &mut Vec<Instrument> {
        match class {
            AssetClass::Stocks => &mut self.stocks,
            AssetClass::Forex => &mut self.forex,
            AssetClass::Crypto => &mut self.crypto,
        }
    }

    pub fn replace_crypto(&mut self, quotes: Vec<Instrument>) {
        self.crypto = quotes;
    }

    pub fn find(&self, class: AssetClass, symbol: &str) -> Option<&Instrument> {
        self.instruments(class).iter().find(|i| i.symbol == symbol)
    }

    /// Which class a symbol belongs to (ticker clicks land here).
    pub fn class_of(&self, symbol: &str) -> Option<AssetClass> {
        [AssetClass::Stocks, AssetClass::Forex, AssetClass::Crypto]
            .into_iter()
            .find(|&c| self.find(c, symbol).is_some())
    }

    pub fn summary(&self, class: AssetClass) -> &[Instrument] {
        let all = self.instruments(class);
        &all[..all.len().min(SUMMARY_CARD_COUNT)]
    }

    /// Largest absolute percent moves first. Ties keep book order.
    pub fn top_movers(&self, class: AssetClass) -> Vec<Instrument> {
        self.instruments(class)
            .iter()
            .sorted_by(|a, b| {
                b.change_percent
                    .abs()
                    .partial_cmp(&a.change_percent.abs())
                    .unwrap_or(Ordering::Equal)
            })
            .take(TOP_MOVER_COUNT)
            .cloned()
            .collect()
    }

    pub fn search(&self, class: AssetClass, query: &str) -> Vec<&Instrument> {
        self.instruments(class)
            .iter()
            .filter(|i| i.matches(query))
            .collect()
    }
}
