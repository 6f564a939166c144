use crate::models::KeyStats;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub price: f64,
    /// Only candle-backed series know their traded volume.
    pub volume: Option<f64>,
}

/// An ordered run of label/price pairs ready to be drawn as a line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    pub title: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn new(title: impl Into<String>, points: Vec<ChartPoint>) -> Self {
        Self {
            title: title.into(),
            points,
        }
    }

    /// Builds a series without volume information.
    pub fn from_pairs(title: impl Into<String>, labels: Vec<String>, prices: Vec<f64>) -> Self {
        debug_assert_eq!(labels.len(), prices.len());
        let points = labels
            .into_iter()
            .zip(prices)
            .map(|(label, price)| ChartPoint {
                label,
                price,
                volume: None,
            })
            .collect();
        Self::new(title, points)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.label.clone()).collect()
    }

    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    /// (min, max) over all prices.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        let mut prices = self.points.iter().map(|p| p.price);
        let first = prices.next()?;
        Some(prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }

    pub fn key_stats(&self) -> Option<KeyStats> {
        KeyStats::from_series(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_range_spans_all_points() {
        let s = ChartSeries::from_pairs(
            "t",
            vec!["a".into(), "b".into(), "c".into()],
            vec![3.0, 1.5, 4.25],
        );
        assert_eq!(s.price_range(), Some((1.5, 4.25)));
        assert_eq!(s.labels(), ["a", "b", "c"]);
        assert!(ChartSeries::default().price_range().is_none());
    }
}
