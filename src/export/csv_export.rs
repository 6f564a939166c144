use {
    crate::{
        domain::{AssetClass, Instrument},
        export::export_path,
    },
    anyhow::{Context, Result},
    serde::Serialize,
    std::path::{Path, PathBuf},
};

#[cfg(debug_assertions)]
use crate::config::DF;

const CSV_HEADER: [&str; 6] = ["symbol", "name", "price", "change", "change_percent", "currency"];

#[derive(Serialize)]
struct CsvRow<'a> {
    symbol: &'a str,
    name: &'a str,
    price: f64,
    change: f64,
    change_percent: f64,
    currency: &'a str,
}

impl<'a> From<&'a Instrument> for CsvRow<'a> {
    fn from(i: &'a Instrument) -> Self {
        Self {
            symbol: &i.symbol,
            name: &i.name,
            price: i.price,
            change: i.change,
            change_percent: i.change_percent,
            currency: &i.currency,
        }
    }
}

/// Writes the instrument list as CSV and returns where it went.
pub fn export_csv(class: AssetClass, instruments: &[Instrument], dir: &Path) -> Result<PathBuf> {
    let path = export_path(dir, class, "csv")?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    // Written by hand so an empty list still gets a header.
    writer.write_record(CSV_HEADER)?;

    for instrument in instruments {
        writer
            .serialize(CsvRow::from(instrument))
            .with_context(|| format!("Failed to write row for {}", instrument.symbol))?;
    }
    writer.flush().context("Failed to flush CSV export")?;

    #[cfg(debug_assertions)]
    if DF.log_export {
        log::info!("Exported {} rows to {}", instruments.len(), path.display());
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_one_row_per_instrument() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let instruments = vec![
            Instrument::new("TCS", "Tata Consultancy", 3890.5, -12.25, -0.31, "₹"),
            Instrument::new("INFY", "Infosys, Ltd", 1500.0, 5.0, 0.33, "₹"),
        ];

        let path = export_csv(AssetClass::Stocks, &instruments, tmp.path()).expect("export");
        let text = std::fs::read_to_string(path).expect("read back");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "symbol,name,price,change,change_percent,currency");
        assert_eq!(lines[1], "TCS,Tata Consultancy,3890.5,-12.25,-0.31,₹");
        assert_eq!(lines[2], "INFY,\"Infosys, Ltd\",1500.0,5.0,0.33,₹");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn empty_list_still_has_header() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = export_csv(AssetClass::Crypto, &[], tmp.path()).expect("export");
        let text = std::fs::read_to_string(path).expect("read back");
        assert_eq!(text.trim_end(), "symbol,name,price,change,change_percent,currency");
    }
}
