use clap::builder::TypedValueParser;
use clap::Parser;
use log::{error, info};
use std::io::{self, Read};
use std::path::PathBuf;
use ticker_tally::constants::{
    DEFAULT_EXCLUDED_WORDS_FILE_PATH, DEFAULT_NUM_TOP_TICKERS, DEFAULT_TICKERS_FILE_PATH,
};
use ticker_tally::{
    find_tickers_with_custom_config, format_ranked_tickers_preview, read_exclusion_set_from_path,
    read_ticker_reference_table_from_path, write_ranked_tickers_to_path, CommentLimit, Error,
    PostDump, TickerScanConfig, DEFAULT_TICKER_SCAN_CONFIG,
};

/// Search a dump of forum posts for the most mentioned tickers.
#[derive(Parser, Debug)]
#[command(name = "ticker-tally-cli", version, about)]
struct Cli {
    /// JSON dump of posts to search, or `-` to read it from stdin.
    posts: String,

    /// Number of posts to parse.
    #[arg(short = 'p', long, default_value_t = DEFAULT_TICKER_SCAN_CONFIG.post_limit,
          value_parser = clap::value_parser!(u64).range(1..).map(|n| n as usize))]
    post_limit: usize,

    /// Number of comments to parse in each post. -1 to parse all comments, 0 to parse no comments.
    #[arg(short = 'c', long, default_value_t = DEFAULT_TICKER_SCAN_CONFIG.comment_limit,
          allow_negative_numbers = true)]
    comment_limit: CommentLimit,

    /// Number of top tickers to print.
    #[arg(short = 'n', long, default_value_t = DEFAULT_NUM_TOP_TICKERS,
          value_parser = clap::value_parser!(u64).range(1..).map(|n| n as usize))]
    num_top_tickers: usize,

    /// Text file containing words that are excluded because they are mistaken as tickers.
    #[arg(short = 'e', long, default_value = DEFAULT_EXCLUDED_WORDS_FILE_PATH)]
    excluded: PathBuf,

    /// CSV containing all tickers (optionally gzip-compressed).
    #[arg(short = 't', long, default_value = DEFAULT_TICKERS_FILE_PATH)]
    tickers: PathBuf,

    /// The filename of the CSV of ticker counts.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Discard empty words left behind by stripped punctuation instead of counting them.
    #[arg(long)]
    drop_empty_tokens: bool,
}

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("Error finding tickers: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let exclusions = read_exclusion_set_from_path(&cli.excluded)?;
    let reference = read_ticker_reference_table_from_path(&cli.tickers)?;

    let mut post_dump = if cli.posts == "-" {
        // Read the post dump from stdin
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        PostDump::from_reader(input.as_bytes())?
    } else {
        PostDump::from_path(&cli.posts)?
    };

    let config = TickerScanConfig {
        post_limit: cli.post_limit,
        comment_limit: cli.comment_limit,
        drop_empty_tokens: cli.drop_empty_tokens,
    };

    println!("Searching {}...", cli.posts);
    let ranked =
        find_tickers_with_custom_config(&config, &mut post_dump, &exclusions, &reference)?;
    info!("Found {} distinct ticker(s)", ranked.len());

    if let Some(output) = &cli.output {
        write_ranked_tickers_to_path(output, &ranked)?;
    }

    println!("{}", format_ranked_tickers_preview(&ranked, cli.num_top_tickers));

    Ok(())
}
