//! Demo stock data served to the views and the JSON API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A generic demo record listed on the home view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub field1: String,
    pub field2: String,
}

/// Price snapshot for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub price: f64,
    pub change: String,
}

/// Read-only lookup of records and quotes.
#[derive(Debug, Clone)]
pub struct StockBook {
    records: Vec<Record>,
    quotes: BTreeMap<String, Quote>,
}

impl StockBook {
    pub fn new(records: Vec<Record>, quotes: impl IntoIterator<Item = (String, Quote)>) -> Self {
        Self {
            records,
            quotes: quotes
                .into_iter()
                .map(|(ticker, quote)| (ticker.to_uppercase(), quote))
                .collect(),
        }
    }

    /// The fixed demo data set.
    pub fn demo() -> Self {
        let records = vec![
            Record {
                id: 1,
                field1: "Hello from the stock server".to_string(),
                field2: "It works".to_string(),
            },
            Record {
                id: 2,
                field1: "Second record".to_string(),
                field2: "Also works".to_string(),
            },
        ];
        let quote = |price: f64, change: &str| Quote {
            price,
            change: change.to_string(),
        };

        Self::new(
            records,
            [
                ("AAPL".to_string(), quote(150.00, "+1.5%")),
                ("GOOGL".to_string(), quote(2800.00, "-0.5%")),
                ("MSFT".to_string(), quote(300.00, "+0.8%")),
            ],
        )
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Case-insensitive quote lookup.
    pub fn quote(&self, ticker: &str) -> Option<&Quote> {
        self.quotes.get(&ticker.to_uppercase())
    }

    /// Known tickers, alphabetically.
    pub fn tickers(&self) -> impl Iterator<Item = &str> {
        self.quotes.keys().map(String::as_str)
    }
}

impl Default for StockBook {
    fn default() -> Self {
        Self::demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_lookup_is_case_insensitive() {
        let book = StockBook::demo();
        assert_eq!(book.quote("aapl").map(|q| q.price), Some(150.0));
        assert_eq!(book.quote("GOOGL").map(|q| q.change.as_str()), Some("-0.5%"));
        assert!(book.quote("TSLA").is_none());
    }

    #[test]
    fn test_demo_contents() {
        let book = StockBook::default();
        assert_eq!(book.records().len(), 2);
        assert_eq!(book.tickers().collect::<Vec<_>>(), vec!["AAPL", "GOOGL", "MSFT"]);
    }
}
