/// Prefix used in forum text to explicitly denote a ticker mention (e.g. `$TSLA`).
pub const TICKER_MARKER: char = '$';

/// Header label of the ticker symbol column in reference tables and ranked output.
pub const TICKER_COLUMN: &str = "Ticker";

/// Header label of the frequency column in ranked output.
pub const FREQUENCY_COLUMN: &str = "Frequency";

/// Name column label used when a reference table is built in memory.
pub const DEFAULT_NAME_COLUMN: &str = "Company";

/// Command-line sentinel meaning "consume every top-level comment".
pub const ALL_COMMENTS_SENTINEL: i64 = -1;

pub const DEFAULT_EXCLUDED_WORDS_FILE_PATH: &str = "data/excluded.txt";

pub const DEFAULT_TICKERS_FILE_PATH: &str = "data/tickers.csv";

pub const DEFAULT_NUM_TOP_TICKERS: usize = 10;

pub const GZIP_FILE_EXTENSION: &str = "gz";
