pub struct SimulationConfig {
    /// Max absolute move per tick for every stock.
    pub stock_volatility: f64,
    /// Max absolute move per tick for gold.
    pub metal_volatility: f64,
    /// Max absolute move per tick for every other forex pair.
    pub fx_volatility: f64,
    /// Forex symbols containing this marker use `metal_volatility`.
    pub metal_marker: &'static str,
}

pub const SIMULATION: SimulationConfig = SimulationConfig {
    stock_volatility: 1.0,
    metal_volatility: 0.5,
    fx_volatility: 0.0005,
    metal_marker: "XAU",
};

impl SimulationConfig {
    pub fn forex_volatility(&self, symbol: &str) -> f64 {
        if symbol.contains(self.metal_marker) {
            self.metal_volatility
        } else {
            self.fx_volatility
        }
    }
}
