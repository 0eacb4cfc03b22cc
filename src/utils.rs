pub mod dedup_vector;
pub use dedup_vector::dedup_vector;

pub mod increment_count;
pub use increment_count::increment_count;

pub mod rank_tickers;
pub use rank_tickers::rank_tickers;

pub mod read_exclusion_set;
pub use read_exclusion_set::{read_exclusion_set_from_path, read_exclusion_set_from_string};

pub mod read_ticker_reference_table;
pub use read_ticker_reference_table::{
    read_ticker_reference_table, read_ticker_reference_table_from_gz_bytes,
    read_ticker_reference_table_from_path, read_ticker_reference_table_from_string,
};

pub mod write_ranked_tickers;
pub use write_ranked_tickers::{
    format_ranked_tickers_preview, write_ranked_tickers, write_ranked_tickers_to_path,
};
