use {
    crate::{
        config::CHART,
        domain::{AssetClass, ChartPeriod},
        models::ChartSeries,
    },
    rand::Rng,
};

/// Placeholder chart for markets without candle history: the period's fixed labels,
/// each price drawn from `base ± base * spread / 2`.
///
/// Crypto only lands here before its first kline response and borrows the gold settings.
pub fn simulated_chart<R: Rng + ?Sized>(
    class: AssetClass,
    period: ChartPeriod,
    rng: &mut R,
) -> ChartSeries {
    let (title, base) = match class {
        AssetClass::Stocks => (CHART.title_stocks, CHART.stocks_base),
        AssetClass::Forex | AssetClass::Crypto => (CHART.title_forex, CHART.forex_base),
    };
    let spec = period.simulated_spec();

    let labels: Vec<String> = spec.labels.iter().map(|l| l.to_string()).collect();
    let prices: Vec<f64> = labels
        .iter()
        .map(|_| base + (rng.gen_range(0.0..1.0) - 0.5) * (base * spec.spread))
        .collect();

    ChartSeries::from_pairs(title, labels, prices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn label_count_follows_period() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(simulated_chart(AssetClass::Stocks, ChartPeriod::Day, &mut rng).len(), 7);
        assert_eq!(simulated_chart(AssetClass::Stocks, ChartPeriod::Week, &mut rng).len(), 7);
        assert_eq!(simulated_chart(AssetClass::Stocks, ChartPeriod::Month, &mut rng).len(), 4);
        let year = simulated_chart(AssetClass::Forex, ChartPeriod::Year, &mut rng);
        assert_eq!(year.labels().first().map(String::as_str), Some("Jan"));
        assert_eq!(year.labels().last().map(String::as_str), Some("Dec"));
    }

    #[test]
    fn prices_stay_within_spread() {
        let mut rng = StdRng::seed_from_u64(99);
        for period in ChartPeriod::ALL {
            for _ in 0..100 {
                let s = simulated_chart(AssetClass::Stocks, period, &mut rng);
                let half = CHART.stocks_base * period.simulated_spec().spread / 2.0;
                for p in s.prices() {
                    assert!((p - CHART.stocks_base).abs() <= half + 1e-9);
                }
            }
        }
    }

    #[test]
    fn titles_by_class() {
        let mut rng = StdRng::seed_from_u64(5);
        let s = simulated_chart(AssetClass::Stocks, ChartPeriod::Day, &mut rng);
        assert_eq!(s.title, CHART.title_stocks);
        let f = simulated_chart(AssetClass::Forex, ChartPeriod::Day, &mut rng);
        assert_eq!(f.title, CHART.title_forex);
        let c = simulated_chart(AssetClass::Crypto, ChartPeriod::Day, &mut rng);
        assert!((c.prices()[0] - CHART.forex_base).abs() <= CHART.forex_base * 0.005);
    }
}
