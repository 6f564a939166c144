#![allow(clippy::collapsible_if)]

pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

pub use app::App;
pub use config::PERSISTENCE;

use {
    clap::Parser,
    domain::{AssetClass, ChartPeriod},
    std::path::PathBuf,
};

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Asset class to open on (overrides the saved choice)
    #[arg(long, value_enum)]
    pub category: Option<AssetClass>,

    /// Chart period to open on (overrides the saved choice)
    #[arg(long, value_enum)]
    pub period: Option<ChartPeriod>,

    /// Never touch the network; crypto stays empty
    #[arg(long, default_value_t = false)]
    pub offline: bool,

    /// Where the export buttons write their files
    #[arg(long)]
    pub export_dir: Option<PathBuf>,
}

/// Main application entry point - creates the GUI app
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_overrides() {
        let cli = Cli::parse_from([
            "trade-pro",
            "--category",
            "forex",
            "--period",
            "1y",
            "--offline",
            "--export-dir",
            "/tmp/out",
        ]);
        assert_eq!(cli.category, Some(AssetClass::Forex));
        assert_eq!(cli.period, Some(ChartPeriod::Year));
        assert!(cli.offline);
        assert_eq!(cli.export_dir, Some(PathBuf::from("/tmp/out")));
    }

    #[test]
    fn cli_defaults_leave_saved_state_alone() {
        let cli = Cli::parse_from(["trade-pro"]);
        assert!(cli.category.is_none());
        assert!(cli.period.is_none());
        assert!(!cli.offline);
    }
}
