use std::{error::Error, fmt};

/// Why a feed request produced no data. The dashboard only logs these.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedError {
    /// Could not reach the endpoint at all.
    Transport(String),
    /// Endpoint answered with a non-success HTTP status.
    Status(u16),
    /// Payload did not have the expected shape.
    Decode(String),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FeedError::Transport(msg) => write!(f, "Binance API connection failed: {}.", msg),
            FeedError::Status(code) => write!(f, "Binance API returned HTTP {}", code),
            FeedError::Decode(msg) => write!(f, "Unexpected Binance payload: {}", msg),
        }
    }
}

impl Error for FeedError {}
