//! Display formatting for quotes.

use crate::domain::AssetClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricePrecision {
    Two,
    Four,
}

impl PricePrecision {
    pub fn decimals(self) -> usize {
        match self {
            PricePrecision::Two => 2,
            PricePrecision::Four => 4,
        }
    }
}

/// Forex quotes get 4dp except yen crosses; sub-unit crypto gets 4dp; everything else 2dp.
pub fn price_precision(value: f64, currency: &str, class: AssetClass) -> PricePrecision {
    match class {
        AssetClass::Forex if !currency.contains('¥') => PricePrecision::Four,
        AssetClass::Crypto if value.abs() < 1.0 => PricePrecision::Four,
        _ => PricePrecision::Two,
    }
}

/// `$1985.40`, `-₹15.60`, `$1.0925`.
pub fn format_price(value: f64, currency: &str, class: AssetClass) -> String {
    let decimals = price_precision(value, currency, class).decimals();
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}{:.*}", sign, currency, decimals, value.abs())
}

/// Like `format_price` but positive moves carry a leading `+`.
pub fn format_change(change: f64, currency: &str, class: AssetClass) -> String {
    let body = format_price(change, currency, class);
    if change > 0.0 {
        format!("+{}", body)
    } else {
        body
    }
}

pub fn format_percent(pct: f64, with_sign: bool) -> String {
    if with_sign && pct > 0.0 {
        format!("+{:.2}%", pct)
    } else {
        format!("{:.2}%", pct)
    }
}

/// `1.2M`, `845.3K`, `3.1B`.
pub fn format_compact_volume(volume: f64) -> String {
    let abs = volume.abs();
    if abs >= 1e9 {
        format!("{:.1}B", volume / 1e9)
    } else if abs >= 1e6 {
        format!("{:.1}M", volume / 1e6)
    } else if abs >= 1e3 {
        format!("{:.1}K", volume / 1e3)
    } else {
        format!("{:.0}", volume)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stocks_use_two_decimals() {
        assert_eq!(format_price(2355.8, "₹", AssetClass::Stocks), "₹2355.80");
        assert_eq!(format_price(0.5, "₹", AssetClass::Stocks), "₹0.50");
    }

    #[test]
    fn forex_uses_four_decimals_except_yen() {
        assert_eq!(format_price(1.0925, "$", AssetClass::Forex), "$1.0925");
        assert_eq!(format_price(1985.4, "$", AssetClass::Forex), "$1985.4000");
        assert_eq!(format_price(148.5, "¥", AssetClass::Forex), "¥148.50");
    }

    #[test]
    fn crypto_below_one_uses_four_decimals() {
        assert_eq!(format_price(0.61234, "$", AssetClass::Crypto), "$0.6123");
        assert_eq!(format_price(64250.129, "$", AssetClass::Crypto), "$64250.13");
        assert_eq!(format_price(-0.0123, "$", AssetClass::Crypto), "-$0.0123");
        assert_eq!(format_price(-512.5, "$", AssetClass::Crypto), "-$512.50");
    }

    #[test]
    fn change_carries_sign() {
        assert_eq!(format_change(12.4, "₹", AssetClass::Stocks), "+₹12.40");
        assert_eq!(format_change(-15.6, "₹", AssetClass::Stocks), "-₹15.60");
        assert_eq!(format_change(0.0, "₹", AssetClass::Stocks), "₹0.00");
    }

    #[test]
    fn percent_rounds_to_two_places() {
        assert_eq!(format_percent(0.5349, true), "+0.53%");
        assert_eq!(format_percent(-0.456, false), "-0.46%");
        assert_eq!(format_percent(0.0, true), "0.00%");
    }

    #[test]
    fn compact_volume() {
        assert_eq!(format_compact_volume(1_234_567.0), "1.2M");
        assert_eq!(format_compact_volume(845_300.0), "845.3K");
        assert_eq!(format_compact_volume(3_100_000_000.0), "3.1B");
        assert_eq!(format_compact_volume(12.0), "12");
    }
}
