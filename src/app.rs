use std::{io::Write, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::{debug, info};

use crate::{
    cli::{BatchPlan, Mode},
    error::InputError,
    input::LineSource,
    interactive::Session,
    parser::{parse_delimited, read_input_file},
    portfolio::Portfolio,
    prices::PriceTable,
    report::write_report,
    valuation::Valuation,
};

pub const INPUT_ERROR_EXIT: u8 = 2;
pub const FAILURE_EXIT: u8 = 1;

/// Console handles a run reads from and writes to. `open_input` is only
/// called in interactive mode.
pub struct Console<F, W, E> {
    pub open_input: F,
    pub output: W,
    pub errors: E,
}

pub fn run<F, R, W, E>(
    mode: &Mode,
    prices: &PriceTable,
    report_path: &Path,
    console: Console<F, W, E>,
) -> Result<()>
where
    F: FnOnce() -> Result<R>,
    R: LineSource,
    W: Write,
    E: Write,
{
    info!("running in {mode} mode");
    match mode {
        Mode::Interactive => {
            let input = (console.open_input)()?;
            run_interactive(prices, report_path, input, console.output)
        }
        Mode::Batch(plan) => run_batch(plan, prices, report_path, console.output, console.errors),
    }
}

/// Prints why a run failed and returns the process exit status for it.
pub fn report_failure<E: Write>(err: &anyhow::Error, mut errors: E) -> u8 {
    if let Some(input_error) = err.downcast_ref::<InputError>() {
        let _ = writeln!(errors, "{}", input_error.to_string().red());
        return INPUT_ERROR_EXIT;
    }
    debug!("run failed: {err:?}");
    let _ = writeln!(errors, "{}", format!("Error: {err:#}").red());
    FAILURE_EXIT
}

pub fn run_interactive<R: LineSource, W: Write>(
    prices: &PriceTable,
    report_path: &Path,
    input: R,
    output: W,
) -> Result<()> {
    let mut session = Session::new(input, output, prices);
    let portfolio = session.collect()?;

    let valuation = Valuation::of(&portfolio, prices);
    writeln!(session.output(), "\n{}\n", valuation.summary())?;

    if session.confirm_save()? {
        save(report_path, &portfolio, prices, valuation.total, session.output())?;
    }
    Ok(())
}

/// Merges demo, `--stocks` and input file holdings in that order, drops
/// unknown symbols and prints the summary.
pub fn run_batch<W: Write, E: Write>(
    plan: &BatchPlan,
    prices: &PriceTable,
    report_path: &Path,
    mut output: W,
    mut errors: E,
) -> Result<()> {
    let mut portfolio = if plan.demo {
        Portfolio::demo()
    } else {
        Portfolio::new()
    };

    if let Some(stocks) = &plan.stocks {
        portfolio.merge(parse_delimited(stocks));
    }

    if let Some(input_file) = &plan.input_file {
        portfolio.merge(read_input_file(input_file)?);
    }

    debug!("merged portfolio: {portfolio:?}");

    for symbol in portfolio.retain_known(prices) {
        writeln!(
            errors,
            "{}",
            format!("Warning: unknown stock symbol '{symbol}' ignored").yellow()
        )?;
    }

    let valuation = Valuation::of(&portfolio, prices);
    writeln!(output, "{}", valuation.summary())?;

    if plan.auto_save {
        save(report_path, &portfolio, prices, valuation.total, &mut output)?;
    }
    Ok(())
}

fn save<W: Write>(
    report_path: &Path,
    portfolio: &Portfolio,
    prices: &PriceTable,
    total: u64,
    mut output: W,
) -> Result<()> {
    write_report(report_path, portfolio, prices, total)
        .with_context(|| format!("Could not write report to {}", report_path.display()))?;
    writeln!(output, "{}", format!("Saved as {}", report_path.display()).green())?;
    Ok(())
}
