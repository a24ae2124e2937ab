use std::collections::HashMap;

/// Unit prices the tracker values holdings against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceTable {
    prices: HashMap<String, u64>,
}

impl PriceTable {
    pub fn new<I, S>(prices: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        Self {
            prices: prices
                .into_iter()
                .map(|(symbol, price)| (symbol.as_ref().trim().to_uppercase(), price))
                .collect(),
        }
    }

    /// Price for `symbol`, or 0 when the symbol is not listed.
    pub fn price_of(&self, symbol: &str) -> u64 {
        self.prices
            .get(&symbol.trim().to_uppercase())
            .copied()
            .unwrap_or(0)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.prices.contains_key(&symbol.trim().to_uppercase())
    }

    pub fn known_symbols(&self) -> impl Iterator<Item = &str> {
        self.prices.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::new([
            ("AAPL", 180),
            ("TSLA", 250),
            ("GOOGL", 140),
            ("AMZN", 130),
            ("MSFT", 330),
        ])
    }
}
