use crate::models::{RankedTicker, RankedTickers, TickerReferenceTable};
use crate::types::WordFrequencyMap;

/// Joins word frequencies with the ticker reference table and ranks the matches.
///
/// Words are matched against ticker symbols by exact, case-sensitive equality, so only
/// words which are known tickers survive.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** Equal frequencies keep the row order of the reference table. The sort is
///   stable, so identical input always produces identical output.
///
/// ### Example:
/// ```rust
/// use ticker_tally::{rank_tickers, TickerReferenceTable, WordFrequencyMap};
///
/// let mut frequencies = WordFrequencyMap::new();
/// frequencies.insert("hello".to_string(), 2);
/// frequencies.insert("TSLA".to_string(), 5);
///
/// let reference: TickerReferenceTable =
///     [("TSLA", "Tesla"), ("APPL", "Apple")].into_iter().collect();
///
/// let ranked = rank_tickers(&frequencies, &reference);
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked.rows()[0].ticker, "TSLA");
/// assert_eq!(ranked.rows()[0].frequency, 5);
/// ```
pub fn rank_tickers(
    frequencies: &WordFrequencyMap,
    reference: &TickerReferenceTable,
) -> RankedTickers {
    let mut rows: Vec<RankedTicker> = reference
        .rows()
        .iter()
        .filter_map(|(ticker_symbol, name)| {
            frequencies
                .get(ticker_symbol)
                .map(|&frequency| RankedTicker {
                    ticker: ticker_symbol.to_owned(),
                    name: name.to_owned(),
                    frequency,
                })
        })
        .collect();

    // `sort_by` is stable; ties stay in reference table order
    rows.sort_by(|a, b| b.frequency.cmp(&a.frequency));

    RankedTickers::new(reference.name_column(), rows)
}
