#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::DEFAULT_TICKER_SCAN_CONFIG;
pub mod constants;
pub mod models;
pub use models::{
    Comment, CommentLimit, Error, ForumPost, Post, PostDump, PostSource, RankedTicker,
    RankedTickers, TickerReferenceTable, TickerScanConfig, TickerScanner, Tokenizer,
    WordFrequencyCounter,
};
pub mod types;
mod utils;
pub use types::{
    ExclusionSet, TickerName, TickerReference, TickerSymbol, Word, WordFrequency,
    WordFrequencyMap, WordRef,
};
pub use utils::{
    format_ranked_tickers_preview, increment_count, rank_tickers, read_exclusion_set_from_path,
    read_exclusion_set_from_string, read_ticker_reference_table,
    read_ticker_reference_table_from_gz_bytes, read_ticker_reference_table_from_path,
    read_ticker_reference_table_from_string, write_ranked_tickers, write_ranked_tickers_to_path,
};

/// Splits forum text into candidate words, keeping the `$` ticker marker.
///
/// Empty tokens are kept; see `Tokenizer::compact_parser` for a variant that drops them.
pub fn tokenize(text: &str) -> Vec<Word> {
    Tokenizer::forum_text_parser().tokenize(text)
}

/// Counts `words` on top of `frequencies` using the exclusion rules of
/// `WordFrequencyCounter`, returning the updated map.
pub fn count_words<I, S>(
    exclusions: &ExclusionSet,
    frequencies: WordFrequencyMap,
    words: I,
) -> WordFrequencyMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counter = WordFrequencyCounter::new(exclusions);
    counter.count_words(words);

    let mut merged = frequencies;
    for (word, frequency) in counter.into_frequencies() {
        *merged.entry(word).or_insert(0) += frequency;
    }

    merged
}

/// Scans posts from `source` and ranks the ticker mentions found in them.
pub fn find_tickers<S: PostSource + ?Sized>(
    source: &mut S,
    exclusions: &ExclusionSet,
    reference: &TickerReferenceTable,
) -> Result<RankedTickers, Error> {
    find_tickers_with_custom_config(DEFAULT_TICKER_SCAN_CONFIG, source, exclusions, reference)
}

pub fn find_tickers_with_custom_config<S: PostSource + ?Sized>(
    ticker_scan_config: &TickerScanConfig,
    source: &mut S,
    exclusions: &ExclusionSet,
    reference: &TickerReferenceTable,
) -> Result<RankedTickers, Error> {
    let mut ticker_scanner = TickerScanner::new(ticker_scan_config, exclusions);
    ticker_scanner.scan(source)?;

    Ok(ticker_scanner.rank(reference))
}
