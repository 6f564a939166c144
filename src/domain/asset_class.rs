use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// Which instrument set (and which chart source) the dashboard shows.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    Default,
    clap::ValueEnum,
)]
pub enum AssetClass {
    #[strum(to_string = "Stocks")]
    Stocks,
    #[strum(to_string = "Forex")]
    Forex,
    #[strum(to_string = "Crypto")]
    #[default]
    Crypto,
}

impl AssetClass {
    /// Lowercase tag used in export file names.
    pub fn slug(&self) -> &'static str {
        match self {
            AssetClass::Stocks => "stocks",
            AssetClass::Forex => "forex",
            AssetClass::Crypto => "crypto",
        }
    }

    /// Crypto quotes come from the network, the rest are simulated locally.
    pub fn is_live(&self) -> bool {
        matches!(self, AssetClass::Crypto)
    }
}
