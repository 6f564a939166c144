use {
    crate::{
        domain::{AssetClass, ChartPeriod, Instrument},
        export::export_path,
        models::KeyStats,
        utils::{format_change, format_compact_volume, format_percent, format_price},
    },
    anyhow::{Context, Result},
    chrono::Local,
    std::path::{Path, PathBuf},
    tabled::{Table, Tabled, settings::Style},
};

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Tabled)]
struct InstrumentRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Change")]
    change: String,
    #[tabled(rename = "Change %")]
    change_percent: String,
}

impl InstrumentRow {
    fn new(i: &Instrument, class: AssetClass) -> Self {
        Self {
            symbol: i.symbol.clone(),
            name: i.name.clone(),
            price: format_price(i.price, &i.currency, class),
            change: format_change(i.change, &i.currency, class),
            change_percent: format_percent(i.change_percent, true),
        }
    }
}

/// Formatted quote table, shared by the report file and the snapshot CLI.
pub fn instrument_table(class: AssetClass, instruments: &[Instrument]) -> String {
    let rows = instruments.iter().map(|i| InstrumentRow::new(i, class));
    Table::new(rows).with(Style::modern()).to_string()
}

fn key_stats_block(stats: Option<&KeyStats>) -> String {
    let Some(stats) = stats else {
        return "Key Statistics: no chart data\n".to_string();
    };
    let volume = stats
        .volume
        .map(format_compact_volume)
        .unwrap_or_else(|| "-".to_string());
    format!(
        "Key Statistics\n  Open:   {:.2}\n  High:   {:.2}\n  Low:    {:.2}\n  Volume: {}\n",
        stats.open, stats.high, stats.low, volume
    )
}

fn render_report(
    class: AssetClass,
    period: ChartPeriod,
    instruments: &[Instrument],
    stats: Option<&KeyStats>,
) -> String {
    format!(
        "TradePro Market Analysis\nGenerated: {}\nCategory: {}    Period: {}\n\n{}\n\n{}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        class,
        period,
        instrument_table(class, instruments),
        key_stats_block(stats)
    )
}

/// Writes the plain-text analysis report and returns its path.
pub fn export_report(
    class: AssetClass,
    period: ChartPeriod,
    instruments: &[Instrument],
    stats: Option<&KeyStats>,
    dir: &Path,
) -> Result<PathBuf> {
    let path = export_path(dir, class, "txt")?;
    std::fs::write(&path, render_report(class, period, instruments, stats))
        .with_context(|| format!("Failed to write report {}", path.display()))?;

    #[cfg(debug_assertions)]
    if DF.log_export {
        log::info!("Wrote {} report to {}", class, path.display());
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Instrument> {
        vec![
            Instrument::new("EUR/USD", "Euro / US Dollar", 1.0925, 0.0015, 0.14, "$"),
            Instrument::new("USD/JPY", "US Dollar / Japanese Yen", 151.42, -0.38, -0.25, "¥"),
        ]
    }

    #[test]
    fn table_uses_display_formatting() {
        let table = instrument_table(AssetClass::Forex, &sample());
        assert!(table.contains("Symbol"));
        assert!(table.contains("$1.0925"));
        assert!(table.contains("+$0.0015"));
        assert!(table.contains("¥151.42"));
        assert!(table.contains("-0.25%"));
    }

    #[test]
    fn report_includes_header_table_and_stats() {
        let stats = KeyStats {
            open: 1980.0,
            high: 1995.5,
            low: 1970.25,
            volume: Some(1_300_000.0),
        };
        let text = render_report(AssetClass::Forex, ChartPeriod::Week, &sample(), Some(&stats));
        assert!(text.starts_with("TradePro Market Analysis\n"));
        assert!(text.contains("Category: Forex    Period: 1W"));
        assert!(text.contains("EUR/USD"));
        assert!(text.contains("High:   1995.50"));
        assert!(text.contains("Volume: 1.3M"));
    }

    #[test]
    fn report_file_lands_in_directory() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = export_report(AssetClass::Forex, ChartPeriod::Day, &sample(), None, tmp.path())
            .expect("export");
        let text = std::fs::read_to_string(&path).expect("read back");
        assert!(path.extension().is_some_and(|e| e == "txt"));
        assert!(text.contains("Key Statistics: no chart data"));
    }
}
