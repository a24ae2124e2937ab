use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stock_portfolio::app::{self, Console};
use stock_portfolio::cli::Args;
use stock_portfolio::input::ChannelInput;
use stock_portfolio::prices::PriceTable;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // logs go to stderr, stdout is reserved for the summary
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!(
                "{}=warn,{}=warn",
                env!("CARGO_CRATE_NAME"),
                env!("CARGO_PKG_NAME").replace('-', "_")
            )
            .into()
        }))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let mode = args.mode();
    let prices = PriceTable::default();

    let console = Console {
        open_input: || ChannelInput::stdin().context("Could not install the Ctrl-C handler"),
        output: io::stdout().lock(),
        errors: io::stderr().lock(),
    };

    match app::run(&mode, &prices, &args.report_path, console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(app::report_failure(&err, io::stderr().lock())),
    }
}
