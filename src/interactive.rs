use std::io::{self, Write};

use tracing::debug;

use crate::{input::LineSource, portfolio::Portfolio, prices::PriceTable};

const DONE: &str = "DONE";

enum Answer {
    Line(String),
    Closed,
}

/// Prompt-driven portfolio entry over any line source and sink.
pub struct Session<'a, R, W> {
    input: R,
    output: W,
    prices: &'a PriceTable,
}

impl<'a, R: LineSource, W: Write> Session<'a, R, W> {
    pub fn new(input: R, output: W, prices: &'a PriceTable) -> Self {
        Self {
            input,
            output,
            prices,
        }
    }

    /// Collects holdings until `done`, end of input or an interrupt. Unknown
    /// symbols are rejected at the prompt and never enter the portfolio.
    /// Quantities net per symbol; totals that end up non-positive are dropped.
    pub fn collect(&mut self) -> io::Result<Portfolio> {
        writeln!(self.output, "📊 Stock Portfolio Tracker")?;
        writeln!(self.output, "Type 'done' when you finish.\n")?;

        let mut entries: Vec<(String, i64)> = vec![];
        loop {
            let symbol = match self.prompt("Enter stock symbol: ")? {
                Answer::Line(line) => line.to_uppercase(),
                Answer::Closed => {
                    writeln!(self.output, "\nInput terminated")?;
                    break;
                }
            };

            if symbol == DONE {
                break;
            }

            if !self.prices.contains(&symbol) {
                writeln!(self.output, "Stock not available, try again.")?;
                continue;
            }

            match self.prompt("Enter quantity: ")? {
                Answer::Line(line) => match line.parse::<i64>() {
                    Ok(quantity) => match entries.iter_mut().find(|(s, _)| *s == symbol) {
                        Some((_, total)) => *total = total.saturating_add(quantity),
                        None => entries.push((symbol, quantity)),
                    },
                    Err(_) => writeln!(self.output, "Enter a valid number.")?,
                },
                Answer::Closed => {
                    writeln!(self.output, "\nInput terminated")?;
                    break;
                }
            }
        }

        let mut portfolio = Portfolio::new();
        for (symbol, quantity) in entries {
            portfolio.add(&symbol, quantity);
        }
        debug!("collected {} holdings", portfolio.len());
        Ok(portfolio)
    }

    /// Asks whether to save the report; only `yes` counts.
    pub fn confirm_save(&mut self) -> io::Result<bool> {
        match self.prompt("Save result to a file? (yes/no): ")? {
            Answer::Line(line) => Ok(line.eq_ignore_ascii_case("yes")),
            Answer::Closed => {
                writeln!(self.output)?;
                Ok(false)
            }
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    fn prompt(&mut self, message: &str) -> io::Result<Answer> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        Ok(match self.input.next_line()? {
            Some(line) => Answer::Line(line.trim().to_string()),
            None => Answer::Closed,
        })
    }
}
