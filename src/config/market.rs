//! Seed quotes for the simulated markets.

pub struct SeedInstrument {
    pub symbol: &'static str,
    pub name: &'static str,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub currency: &'static str,
}

pub const STOCK_SEED: &[SeedInstrument] = &[
    SeedInstrument { symbol: "RELIANCE", name: "Reliance Industries", price: 2355.80, change: 12.40, change_percent: 0.53, currency: "₹" },
    SeedInstrument { symbol: "TCS", name: "Tata Consultancy Svcs", price: 3480.20, change: -15.60, change_percent: -0.45, currency: "₹" },
    SeedInstrument { symbol: "HDFCBANK", name: "HDFC Bank Ltd", price: 1510.50, change: 8.30, change_percent: 0.55, currency: "₹" },
    SeedInstrument { symbol: "INFY", name: "Infosys Ltd", price: 1420.75, change: 5.25, change_percent: 0.37, currency: "₹" },
    SeedInstrument { symbol: "TATAMOTORS", name: "Tata Motors Ltd", price: 625.40, change: -2.10, change_percent: -0.33, currency: "₹" },
    SeedInstrument { symbol: "SBIN", name: "State Bank of India", price: 575.15, change: 3.45, change_percent: 0.60, currency: "₹" },
];

pub const FOREX_SEED: &[SeedInstrument] = &[
    SeedInstrument { symbol: "XAU/USD", name: "Gold Spot / US Dollar", price: 1985.40, change: 12.50, change_percent: 0.63, currency: "$" },
    SeedInstrument { symbol: "XAG/USD", name: "Silver Spot / US Dollar", price: 23.65, change: 0.15, change_percent: 0.64, currency: "$" },
    SeedInstrument { symbol: "EUR/USD", name: "Euro / US Dollar", price: 1.0925, change: 0.0015, change_percent: 0.14, currency: "$" },
    SeedInstrument { symbol: "GBP/USD", name: "British Pound / US Dollar", price: 1.2640, change: -0.0020, change_percent: -0.16, currency: "$" },
    SeedInstrument { symbol: "USD/JPY", name: "US Dollar / Japanese Yen", price: 148.50, change: 0.45, change_percent: 0.30, currency: "¥" },
];
