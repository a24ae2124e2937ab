use std::path::PathBuf;

use clap::Parser;

use crate::report::REPORT_FILE_NAME;

/// Stock portfolio tracker. Defaults to interactive mode.
#[derive(Parser, Debug)]
#[command(name = "portfolio", version)]
pub struct Args {
    /// Run a demo portfolio and exit
    #[arg(long)]
    pub demo: bool,
    /// Comma-separated SYMBOL:QTY pairs, e.g. AAPL:2,TSLA:1
    #[arg(long)]
    pub stocks: Option<String>,
    /// Path to file with alternating lines SYMBOL then QTY (or a JSON object)
    #[arg(long)]
    pub input_file: Option<String>,
    /// Automatically save report
    #[arg(long)]
    pub auto_save: bool,
    /// Where the report is written
    #[arg(long, env = "PORTFOLIO_REPORT_PATH", default_value = REPORT_FILE_NAME)]
    pub report_path: PathBuf,
}

/// Sources and options for a non-interactive run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchPlan {
    pub demo: bool,
    pub stocks: Option<String>,
    pub input_file: Option<PathBuf>,
    pub auto_save: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    Interactive,
    Batch(BatchPlan),
}

impl Args {
    /// Batch mode when any input source is given, interactive otherwise.
    pub fn mode(&self) -> Mode {
        let stocks = self.stocks.clone().filter(|s| !s.is_empty());
        let input_file = self
            .input_file
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);
        if !self.demo && stocks.is_none() && input_file.is_none() {
            return Mode::Interactive;
        }
        Mode::Batch(BatchPlan {
            demo: self.demo,
            stocks,
            input_file,
            auto_save: self.auto_save,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode(args: &[&str]) -> Mode {
        Args::try_parse_from(std::iter::once("portfolio").chain(args.iter().copied()))
            .unwrap()
            .mode()
    }

    #[test]
    fn test_no_flags_is_interactive() {
        assert_eq!(mode(&[]), Mode::Interactive);
    }

    #[test]
    fn test_auto_save_alone_is_interactive() {
        assert_eq!(mode(&["--auto-save"]), Mode::Interactive);
    }

    #[test]
    fn test_empty_stocks_is_interactive() {
        assert_eq!(mode(&["--stocks", ""]), Mode::Interactive);
    }

    #[test]
    fn test_empty_input_file_is_absent() {
        assert_eq!(mode(&["--input-file", ""]), Mode::Interactive);
        assert_eq!(
            mode(&["--demo", "--input-file", ""]),
            Mode::Batch(BatchPlan {
                demo: true,
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_batch_sources() {
        assert_eq!(
            mode(&["--demo"]),
            Mode::Batch(BatchPlan {
                demo: true,
                ..Default::default()
            })
        );
        assert_eq!(
            mode(&["--stocks", "AAPL:2", "--auto-save"]),
            Mode::Batch(BatchPlan {
                stocks: Some("AAPL:2".to_string()),
                auto_save: true,
                ..Default::default()
            })
        );
        assert_eq!(
            mode(&["--input-file", "holdings.txt"]),
            Mode::Batch(BatchPlan {
                input_file: Some(PathBuf::from("holdings.txt")),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::Interactive.to_string(), "interactive");
        assert_eq!(Mode::Batch(BatchPlan::default()).to_string(), "batch");
    }
}
