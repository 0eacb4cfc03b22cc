use std::collections::{HashMap, HashSet};

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a candidate word as an owned `String`. Words are the basic units produced by the
/// tokenizer and counted by the frequency counter.
pub type Word = String;

/// Represents a borrowed view of a word as a `str`.
pub type WordRef = str;

/// Represents a ticker symbol (e.g., stock ticker) as an owned `String`.
pub type TickerSymbol = String;

/// Represents the descriptive name of a ticker (e.g., a company or coin name).
pub type TickerName = String;

/// Represents the total number of occurrences of a word across a collection run.
pub type WordFrequency = usize;

/// Represents a map of words to their frequency counts across a collection run.
///
/// Keys are case-preserved; `"TSLA"` and `"tsla"` are distinct entries.
pub type WordFrequencyMap = HashMap<Word, WordFrequency>;

/// Words which collide with valid ticker symbols but should only be counted when explicitly
/// prefixed with the ticker marker.
pub type ExclusionSet = HashSet<Word>;

/// A single `(ticker symbol, descriptive name)` row of the reference table.
pub type TickerReference = (TickerSymbol, TickerName);
