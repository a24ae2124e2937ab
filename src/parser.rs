use std::{fs, io::ErrorKind, path::Path};

use serde_json::{Map, Value};
use tracing::debug;

use crate::{error::InputError, portfolio::Portfolio};

/// Parses `SYMBOL:QTY` / `SYMBOL=QTY` pairs separated by commas.
///
/// A bare symbol counts as one unit. A quantity that is not an integer
/// resolves to 0, so the segment contributes nothing.
pub fn parse_delimited(input: &str) -> Portfolio {
    let mut portfolio = Portfolio::new();
    for segment in input.split(',') {
        if segment.trim().is_empty() {
            continue;
        }
        let (symbol, quantity) = match segment
            .split_once(':')
            .or_else(|| segment.split_once('='))
        {
            Some((symbol, quantity)) => (symbol, quantity.trim().parse::<i64>().unwrap_or(0)),
            None => (segment, 1),
        };
        debug!("parsed segment {segment:?} as {symbol:?} x {quantity}");
        portfolio.add(symbol, quantity);
    }
    portfolio
}

/// Parses one token per line: a symbol optionally followed by a quantity line.
///
/// When the line after a symbol is not an integer, the symbol counts as one
/// unit and that line is read as the next symbol.
pub fn parse_lines(input: &str) -> Portfolio {
    let lines: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut portfolio = Portfolio::new();
    let mut i = 0;
    while i < lines.len() {
        let symbol = lines[i];
        match lines.get(i + 1).and_then(|next| next.parse::<i64>().ok()) {
            Some(quantity) => {
                portfolio.add(symbol, quantity);
                i += 2;
            }
            None => {
                portfolio.add(symbol, 1);
                i += 1;
            }
        }
    }
    portfolio
}

/// Parses a JSON object of `"SYMBOL": quantity` entries, keeping key order.
pub fn parse_json(input: &str) -> Result<Portfolio, serde_json::Error> {
    let entries: Map<String, Value> = serde_json::from_str(input)?;
    let mut portfolio = Portfolio::new();
    for (symbol, quantity) in entries {
        portfolio.add(&symbol, quantity.as_i64().unwrap_or(0));
    }
    Ok(portfolio)
}

/// Reads a portfolio file, as JSON when it starts with `{` and as
/// alternating lines otherwise.
pub fn read_input_file(path: &Path) -> Result<Portfolio, InputError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => InputError::NotFound(path.to_path_buf()),
        _ => InputError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    if content.trim_start().starts_with('{') {
        debug!("reading {} as json", path.display());
        parse_json(&content).map_err(|source| InputError::Json {
            path: path.to_path_buf(),
            source,
        })
    } else {
        Ok(parse_lines(&content))
    }
}
