use crate::constants::DEFAULT_NAME_COLUMN;
use crate::types::{TickerName, TickerReference, TickerSymbol};
use crate::utils::dedup_vector;
use log::warn;
use std::collections::HashMap;

/// Known ticker symbols and their descriptive names.
///
/// Rows keep the order they were loaded in, which is the order equal-frequency tickers are
/// ranked in. Symbols are unique; when a duplicate is supplied only the first row is kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickerReferenceTable {
    name_column: String,
    rows: Vec<TickerReference>,
    index: HashMap<TickerSymbol, usize>,
}

impl TickerReferenceTable {
    /// Builds a table whose name column is labeled `Company`.
    pub fn new(rows: Vec<TickerReference>) -> Self {
        Self::with_name_column(DEFAULT_NAME_COLUMN, rows)
    }

    pub fn with_name_column(name_column: &str, rows: Vec<TickerReference>) -> Self {
        let total_rows = rows.len();
        let rows = dedup_vector(rows, |(ticker_symbol, _)| ticker_symbol.clone());

        if rows.len() != total_rows {
            warn!(
                "Dropped {} duplicate ticker symbol row(s) from the reference table",
                total_rows - rows.len()
            );
        }

        let index = rows
            .iter()
            .enumerate()
            .map(|(position, (ticker_symbol, _))| (ticker_symbol.clone(), position))
            .collect();

        TickerReferenceTable {
            name_column: name_column.to_string(),
            rows,
            index,
        }
    }

    /// Header label of the descriptive name column (e.g. `Company` or `Coin Name`).
    pub fn name_column(&self) -> &str {
        &self.name_column
    }

    pub fn rows(&self) -> &[TickerReference] {
        &self.rows
    }

    /// Case-sensitive lookup of a ticker's name.
    pub fn get(&self, ticker_symbol: &str) -> Option<&TickerName> {
        self.index
            .get(ticker_symbol)
            .map(|&position| &self.rows[position].1)
    }

    pub fn contains(&self, ticker_symbol: &str) -> bool {
        self.index.contains_key(ticker_symbol)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<S, N> FromIterator<(S, N)> for TickerReferenceTable
where
    S: Into<TickerSymbol>,
    N: Into<TickerName>,
{
    fn from_iter<I: IntoIterator<Item = (S, N)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(ticker_symbol, name)| (ticker_symbol.into(), name.into()))
                .collect(),
        )
    }
}
