use std::fmt::Display;

use crate::{portfolio::Portfolio, prices::PriceTable};

pub const SEPARATOR: &str = "-------------------------";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValuationLine {
    pub symbol: String,
    pub quantity: u64,
    pub value: u64,
}

impl Display for ValuationLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {} = ${}", self.symbol, self.quantity, self.value)
    }
}

/// Per-holding values and their total for one portfolio.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Valuation {
    pub lines: Vec<ValuationLine>,
    pub total: u64,
}

impl Valuation {
    pub fn of(portfolio: &Portfolio, prices: &PriceTable) -> Self {
        let lines: Vec<ValuationLine> = portfolio
            .iter()
            .map(|holding| ValuationLine {
                symbol: holding.symbol.clone(),
                quantity: holding.quantity,
                value: holding
                    .quantity
                    .saturating_mul(prices.price_of(&holding.symbol)),
            })
            .collect();
        let total = lines
            .iter()
            .fold(0_u64, |acc, line| acc.saturating_add(line.value));
        Self { lines, total }
    }

    /// Console summary block.
    pub fn summary(&self) -> String {
        let mut s = vec!["--- Portfolio Summary ---".to_string()];
        s.extend(self.lines.iter().map(ToString::to_string));
        s.push(SEPARATOR.to_string());
        s.push(format!("Total Investment = ${}", self.total));
        s.push(SEPARATOR.to_string());
        s.join("\n")
    }
}
