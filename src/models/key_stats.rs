use crate::models::ChartSeries;

/// Open / high / low / volume summary shown on the analysis view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyStats {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    /// `None` when the series carries no volume (simulated charts).
    pub volume: Option<f64>,
}

impl KeyStats {
    pub fn from_series(series: &ChartSeries) -> Option<Self> {
        let open = series.points.first()?.price;
        let (low, high) = series.price_range()?;

        let volumes: Vec<f64> = series.points.iter().filter_map(|p| p.volume).collect();
        let volume = if volumes.is_empty() {
            None
        } else {
            Some(volumes.iter().sum())
        };

        Some(Self {
            open,
            high,
            low,
            volume,
        })
    }
}
