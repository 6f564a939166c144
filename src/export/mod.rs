//! The analysis view's share/export actions.
//!
//! "Export Excel" writes CSV and "Export PDF" writes a plain-text report;
//! neither aims at the named format.

mod csv_export;
mod mailto;
mod report;

pub use {
    csv_export::export_csv,
    mailto::{SHARE_BODY, SHARE_SUBJECT, mailto_link},
    report::{export_report, instrument_table},
};

use {
    crate::{config::PERSISTENCE, domain::AssetClass, utils::timestamp_for_filename},
    anyhow::{Context, Result},
    std::path::{Path, PathBuf},
};

/// `<dir>/tradepro_<class>_<timestamp>.<ext>`, creating `dir` if needed.
fn export_path(dir: &Path, class: AssetClass, extension: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;
    let stamp = timestamp_for_filename(PERSISTENCE.export.timestamp_format);
    let stem = format!("{}_{}_{}", PERSISTENCE.export.filename_prefix, class.slug(), stamp);
    Ok(first_free_path(dir, &stem, extension))
}

/// `stem.ext`, or `stem_2.ext`, `stem_3.ext`, ... when taken.
fn first_free_path(dir: &Path, stem: &str, extension: &str) -> PathBuf {
    let mut path = dir.join(format!("{}.{}", stem, extension));
    let mut n = 2;
    while path.exists() {
        path = dir.join(format!("{}_{}.{}", stem, n, extension));
        n += 1;
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_path_names_class_and_creates_dir() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let nested = tmp.path().join("out");
        let path = export_path(&nested, AssetClass::Forex, "csv").expect("path");

        assert!(nested.is_dir());
        let name = path.file_name().and_then(|n| n.to_str()).expect("utf8 name");
        assert!(name.starts_with("tradepro_forex_"));
        assert!(name.ends_with(".csv"));
        // tradepro_forex_YYYYmmdd_HHMMSS.csv
        assert_eq!(name.len(), "tradepro_forex_".len() + 15 + ".csv".len());
    }

    #[test]
    fn taken_names_get_a_counter() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let first = first_free_path(tmp.path(), "tradepro_crypto_20261016_101500", "csv");
        assert!(first.ends_with("tradepro_crypto_20261016_101500.csv"));
        std::fs::write(&first, "x").expect("write");

        let second = first_free_path(tmp.path(), "tradepro_crypto_20261016_101500", "csv");
        assert!(second.ends_with("tradepro_crypto_20261016_101500_2.csv"));
        std::fs::write(&second, "y").expect("write");

        let third = first_free_path(tmp.path(), "tradepro_crypto_20261016_101500", "csv");
        assert!(third.ends_with("tradepro_crypto_20261016_101500_3.csv"));
        assert_eq!(std::fs::read_to_string(&first).expect("read"), "x");
    }
}
