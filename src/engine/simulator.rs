//! Random-walk perturbation for the simulated stock and forex quotes.

use {
    crate::{
        config::SIMULATION,
        domain::{AssetClass, Instrument},
        models::MarketBook,
    },
    rand::Rng,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Moves `price` by a uniform delta in `[-volatility, volatility]`.
/// The reference price (`price - change`) is left untouched, so `change_percent`
/// stays measured against the same previous close across ticks.
pub fn perturb<R: Rng + ?Sized>(instrument: &Instrument, volatility: f64, rng: &mut R) -> Instrument {
    let volatility = volatility.abs();
    let delta = rng.gen_range(-volatility..=volatility);
    let reference = instrument.reference_price();
    let change = instrument.change + delta;
    let change_percent = if reference.abs() > f64::EPSILON {
        change / reference * 100.0
    } else {
        0.0
    };

    Instrument {
        price: instrument.price + delta,
        change,
        change_percent,
        ..instrument.clone()
    }
}

/// One simulation tick over every stock and forex quote. Crypto is live and untouched.
pub fn simulate_tick<R: Rng + ?Sized>(book: &mut MarketBook, rng: &mut R) {
    for stock in book.instruments_mut(AssetClass::Stocks).iter_mut() {
        *stock = perturb(stock, SIMULATION.stock_volatility, rng);
    }
    for pair in book.instruments_mut(AssetClass::Forex).iter_mut() {
        let vol = SIMULATION.forex_volatility(&pair.symbol);
        *pair = perturb(pair, vol, rng);
    }

    #[cfg(debug_assertions)]
    if DF.log_simulation {
        if let Some(first) = book.instruments(AssetClass::Stocks).first() {
            log::info!("Simulation tick: {}", first);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn perturb_stays_within_volatility() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut quote = Instrument::new("TCS", "Tata", 3480.20, -15.60, -0.45, "₹");
        for _ in 0..1000 {
            let next = perturb(&quote, 1.0, &mut rng);
            assert!((next.price - quote.price).abs() <= 1.0);
            quote = next;
        }
    }

    #[test]
    fn perturb_keeps_reference_price() {
        let mut rng = StdRng::seed_from_u64(11);
        let quote = Instrument::new("RELIANCE", "Reliance", 2355.80, 12.40, 0.53, "₹");
        let reference = quote.reference_price();
        let next = perturb(&quote, 1.0, &mut rng);
        assert!((next.reference_price() - reference).abs() < 1e-9);
        let expected_pct = next.change / reference * 100.0;
        assert!((next.change_percent - expected_pct).abs() < 1e-12);
        assert_eq!(next.symbol, "RELIANCE");
        assert_eq!(next.currency, "₹");
    }

    #[test]
    fn zero_volatility_is_a_no_op_on_price() {
        let mut rng = StdRng::seed_from_u64(3);
        let quote = Instrument::new("A", "a", 10.0, 1.0, 11.11, "$");
        let next = perturb(&quote, 0.0, &mut rng);
        assert_eq!(next.price, 10.0);
        assert_eq!(next.change, 1.0);
    }

    #[test]
    fn tick_uses_per_symbol_forex_volatility() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut book = MarketBook::new();
        let before = book.clone();
        for _ in 0..50 {
            simulate_tick(&mut book, &mut rng);
        }
        let moved = |class: AssetClass, symbol: &str| {
            let a = before.find(class, symbol).map(|i| i.price).unwrap_or_default();
            let b = book.find(class, symbol).map(|i| i.price).unwrap_or_default();
            (b - a).abs()
        };
        assert!(moved(AssetClass::Forex, "XAU/USD") <= 50.0 * 0.5);
        assert!(moved(AssetClass::Forex, "EUR/USD") <= 50.0 * 0.0005 + 1e-12);
        assert!(moved(AssetClass::Stocks, "SBIN") <= 50.0);
        assert!(book.instruments(AssetClass::Crypto).is_empty());
    }
}
