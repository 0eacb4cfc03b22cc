use crate::constants::DEFAULT_NAME_COLUMN;
use crate::types::{TickerName, TickerSymbol, WordFrequency};

/// A ticker found in the collected text, along with how often it was mentioned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedTicker {
    pub ticker: TickerSymbol,
    pub name: TickerName,
    pub frequency: WordFrequency,
}

/// Tickers ordered by descending mention frequency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedTickers {
    name_column: String,
    rows: Vec<RankedTicker>,
}

impl RankedTickers {
    pub fn new(name_column: &str, rows: Vec<RankedTicker>) -> Self {
        RankedTickers {
            name_column: name_column.to_string(),
            rows,
        }
    }

    /// Header label carried over from the reference table's name column.
    pub fn name_column(&self) -> &str {
        &self.name_column
    }

    pub fn rows(&self) -> &[RankedTicker] {
        &self.rows
    }

    /// The `n` most mentioned tickers.
    pub fn top(&self, n: usize) -> &[RankedTicker] {
        &self.rows[..n.min(self.rows.len())]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<RankedTicker> {
        self.rows
    }
}

impl Default for RankedTickers {
    fn default() -> Self {
        Self::new(DEFAULT_NAME_COLUMN, Vec::new())
    }
}

impl<'a> IntoIterator for &'a RankedTickers {
    type Item = &'a RankedTicker;
    type IntoIter = std::slice::Iter<'a, RankedTicker>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
