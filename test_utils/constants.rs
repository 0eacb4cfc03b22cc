use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub static TEST_POST_DUMP_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files", "posts.json"));

pub static TEST_TICKERS_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files", "tickers.csv"));

pub static TEST_EXCLUDED_WORDS_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files", "excluded.txt"));
