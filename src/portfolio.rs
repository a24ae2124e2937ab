use tracing::debug;

use crate::prices::PriceTable;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Holding {
    pub symbol: String,
    pub quantity: u64,
}

/// Holdings keyed by upper-case symbol, kept in the order they were first added.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Portfolio {
    holdings: Vec<Holding>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self { holdings: vec![] }
    }

    pub fn demo() -> Self {
        let mut portfolio = Self::new();
        portfolio.add("AAPL", 2);
        portfolio.add("TSLA", 1);
        portfolio
    }

    /// Adds `quantity` units of `symbol`, summing with any existing holding.
    /// Non-positive quantities are ignored.
    pub fn add(&mut self, symbol: &str, quantity: i64) {
        if quantity <= 0 {
            debug!("ignoring {symbol} with quantity {quantity}");
            return;
        }
        self.add_units(symbol.trim().to_uppercase(), quantity.unsigned_abs());
    }

    fn add_units(&mut self, symbol: String, quantity: u64) {
        match self.holdings.iter_mut().find(|h| h.symbol == symbol) {
            Some(holding) => holding.quantity = holding.quantity.saturating_add(quantity),
            None => self.holdings.push(Holding { symbol, quantity }),
        }
    }

    pub fn merge(&mut self, other: Portfolio) {
        for holding in other.holdings {
            self.add_units(holding.symbol, holding.quantity);
        }
    }

    /// Drops every holding the price table does not list and returns the
    /// dropped symbols in portfolio order.
    pub fn retain_known(&mut self, prices: &PriceTable) -> Vec<String> {
        let mut dropped = vec![];
        self.holdings.retain(|holding| {
            if prices.contains(&holding.symbol) {
                true
            } else {
                dropped.push(holding.symbol.clone());
                false
            }
        });
        dropped
    }

    pub fn quantity_of(&self, symbol: &str) -> Option<u64> {
        let symbol = symbol.trim().to_uppercase();
        self.holdings
            .iter()
            .find(|h| h.symbol == symbol)
            .map(|h| h.quantity)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Holding> {
        self.holdings.iter()
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(portfolio: &Portfolio) -> Vec<&str> {
        portfolio.iter().map(|h| h.symbol.as_str()).collect()
    }

    #[test]
    fn test_add_accumulates() {
        let mut portfolio = Portfolio::new();
        portfolio.add("aapl", 2);
        portfolio.add("TSLA", 1);
        portfolio.add("AAPL ", 3);
        assert_eq!(portfolio.quantity_of("AAPL"), Some(5));
        assert_eq!(portfolio.quantity_of("tsla"), Some(1));
        assert_eq!(symbols(&portfolio), vec!["AAPL", "TSLA"]);
    }

    #[test]
    fn test_add_ignores_non_positive() {
        let mut portfolio = Portfolio::new();
        portfolio.add("AAPL", 0);
        portfolio.add("TSLA", -4);
        assert!(portfolio.is_empty());
    }

    #[test]
    fn test_add_saturates() {
        let mut portfolio = Portfolio::new();
        portfolio.add("AAPL", i64::MAX);
        portfolio.add("AAPL", i64::MAX);
        portfolio.add("AAPL", i64::MAX);
        assert_eq!(portfolio.quantity_of("AAPL"), Some(u64::MAX));
    }

    #[test]
    fn test_merge_sums_and_keeps_order() {
        let mut portfolio = Portfolio::demo();
        let mut other = Portfolio::new();
        other.add("MSFT", 1);
        other.add("AAPL", 3);
        portfolio.merge(other);
        assert_eq!(symbols(&portfolio), vec!["AAPL", "TSLA", "MSFT"]);
        assert_eq!(portfolio.quantity_of("AAPL"), Some(5));
    }

    #[test]
    fn test_retain_known() {
        let mut portfolio = Portfolio::new();
        portfolio.add("OOPS", 1);
        portfolio.add("AAPL", 1);
        portfolio.add("NFLX", 2);
        let dropped = portfolio.retain_known(&PriceTable::default());
        assert_eq!(dropped, vec!["OOPS".to_string(), "NFLX".to_string()]);
        assert_eq!(symbols(&portfolio), vec!["AAPL"]);
    }

    #[test]
    fn test_retain_known_applies_to_demo_entries() {
        let mut portfolio = Portfolio::demo();
        let dropped = portfolio.retain_known(&PriceTable::new([("AAPL", 1)]));
        assert_eq!(dropped, vec!["TSLA".to_string()]);
        assert_eq!(portfolio.len(), 1);
    }
}
