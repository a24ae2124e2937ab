use std::{fs, io, path::Path};

use tracing::info;

use crate::{
    portfolio::Portfolio,
    prices::PriceTable,
    valuation::{Valuation, SEPARATOR},
};

pub const REPORT_FILE_NAME: &str = "portfolio_report.txt";

/// Plain-text report, one valuation line per holding followed by `total`.
pub fn render_report(portfolio: &Portfolio, prices: &PriceTable, total: u64) -> String {
    let mut report = String::from("Stock Portfolio Report\n");
    report.push_str(SEPARATOR);
    report.push('\n');
    for line in Valuation::of(portfolio, prices).lines {
        report.push_str(&format!("{line}\n"));
    }
    report.push_str(SEPARATOR);
    report.push('\n');
    report.push_str(&format!("Total Investment = ${total}\n"));
    report
}

/// Creates or truncates `path` with the rendered report.
pub fn write_report(
    path: &Path,
    portfolio: &Portfolio,
    prices: &PriceTable,
    total: u64,
) -> io::Result<()> {
    fs::write(path, render_report(portfolio, prices, total))?;
    info!("wrote report for {} holdings to {}", portfolio.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO_REPORT: &str = "Stock Portfolio Report\n\
        -------------------------\n\
        AAPL x 2 = $360\n\
        TSLA x 1 = $250\n\
        -------------------------\n\
        Total Investment = $610\n";

    #[test]
    fn test_render_report() {
        let report = render_report(&Portfolio::demo(), &PriceTable::default(), 610);
        assert_eq!(report, DEMO_REPORT);
    }

    #[test]
    fn test_render_empty_report() {
        let report = render_report(&Portfolio::new(), &PriceTable::default(), 0);
        assert_eq!(
            report,
            "Stock Portfolio Report\n\
             -------------------------\n\
             -------------------------\n\
             Total Investment = $0\n"
        );
    }

    #[test]
    fn test_write_report_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(REPORT_FILE_NAME);
        fs::write(&path, "stale content that is longer than the report ".repeat(10)).unwrap();
        write_report(&path, &Portfolio::demo(), &PriceTable::default(), 610).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEMO_REPORT);
    }

    #[test]
    fn test_write_report_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join(REPORT_FILE_NAME);
        let err = write_report(&path, &Portfolio::demo(), &PriceTable::default(), 610);
        assert!(err.is_err());
    }
}
