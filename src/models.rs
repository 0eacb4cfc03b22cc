pub mod comment_limit;
pub use comment_limit::CommentLimit;

pub mod error;
pub use error::Error;

pub mod forum;
pub use forum::{ForumPost, PostSource};

pub mod post_dump;
pub use post_dump::{Comment, Post, PostDump};

pub mod ranked_tickers;
pub use ranked_tickers::{RankedTicker, RankedTickers};

pub mod ticker_reference_table;
pub use ticker_reference_table::TickerReferenceTable;

pub mod ticker_scanner;
pub use ticker_scanner::{TickerScanConfig, TickerScanner};

pub mod tokenizer;
pub use tokenizer::Tokenizer;

pub mod word_frequency_counter;
pub use word_frequency_counter::WordFrequencyCounter;
