mod root;
mod session;
mod state;

pub(crate) use {
    root::ExportStatus,
    session::MarketSession,
    state::{Preferences, Selection},
};

pub use root::App;
