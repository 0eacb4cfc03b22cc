use crate::constants::TICKER_MARKER;
use crate::types::{ExclusionSet, WordFrequencyMap};
use crate::utils::increment_count;
use log::debug;

/// Accumulates word frequencies across every text unit of a collection run.
///
/// The counter owns its frequency map; callers feed it words and take the map back with
/// `into_frequencies` once the run is complete.
pub struct WordFrequencyCounter<'a> {
    exclusions: &'a ExclusionSet,
    frequencies: WordFrequencyMap,
}

impl<'a> WordFrequencyCounter<'a> {
    pub fn new(exclusions: &'a ExclusionSet) -> Self {
        WordFrequencyCounter {
            exclusions,
            frequencies: WordFrequencyMap::new(),
        }
    }

    /// Counts the given words, in order.
    ///
    /// - A word starting with the ticker marker is always counted with the marker stripped,
    ///   even if the stripped word is excluded.
    /// - A word found in the exclusion set is skipped.
    /// - Any other word is counted as-is.
    pub fn count_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref();

            if let Some(ticker_symbol) = word.strip_prefix(TICKER_MARKER) {
                increment_count(&mut self.frequencies, ticker_symbol);
            } else if self.exclusions.contains(word) {
                debug!("Skipping excluded word: {}", word);
            } else {
                increment_count(&mut self.frequencies, word);
            }
        }
    }

    pub fn frequencies(&self) -> &WordFrequencyMap {
        &self.frequencies
    }

    /// Consumes the counter, handing the accumulated map to the caller.
    pub fn into_frequencies(self) -> WordFrequencyMap {
        self.frequencies
    }
}
