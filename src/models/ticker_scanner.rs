use crate::models::{
    CommentLimit, ForumPost, PostSource, RankedTickers, TickerReferenceTable, Tokenizer,
    WordFrequencyCounter,
};
use crate::types::{ExclusionSet, WordFrequencyMap};
use crate::utils::rank_tickers;
use crate::Error;
use log::{debug, info};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickerScanConfig {
    /// Maximum number of posts requested from the post source.
    pub post_limit: usize,
    pub comment_limit: CommentLimit,
    /// Discard empty tokens instead of counting them under `""`.
    pub drop_empty_tokens: bool,
}

/// Drives a collection run: every post title, body, and top-level comment is tokenized and
/// counted into one shared accumulator, which is ranked once the run is complete.
pub struct TickerScanner<'a> {
    config: &'a TickerScanConfig,
    tokenizer: Tokenizer,
    counter: WordFrequencyCounter<'a>,
    posts_processed: usize,
    comments_processed: usize,
}

impl<'a> TickerScanner<'a> {
    pub fn new(config: &'a TickerScanConfig, exclusions: &'a ExclusionSet) -> Self {
        let tokenizer = if config.drop_empty_tokens {
            Tokenizer::compact_parser()
        } else {
            Tokenizer::forum_text_parser()
        };

        TickerScanner {
            config,
            tokenizer,
            counter: WordFrequencyCounter::new(exclusions),
            posts_processed: 0,
            comments_processed: 0,
        }
    }

    /// Tokenizes and counts a single text unit.
    pub fn process_text(&mut self, text: &str) {
        let words = self.tokenizer.tokenize(text);
        self.counter.count_words(&words);
    }

    /// Processes the post's title and body as one text unit, then each of its top-level
    /// comments (up to the configured limit) as a text unit of its own.
    pub fn process_post<P: ForumPost + ?Sized>(&mut self, post: &P) {
        self.process_text(&format!("{} {}", post.title(), post.body()));

        let mut comments_processed = 0;
        for comment_body in self.config.comment_limit.take(post.comment_bodies()) {
            self.process_text(comment_body);
            comments_processed += 1;
        }

        debug!(
            "Processed post {:?} with {} comment(s)",
            post.title(),
            comments_processed
        );

        self.posts_processed += 1;
        self.comments_processed += comments_processed;
    }

    /// Fetches posts from the source and processes each of them.
    ///
    /// A fetch error aborts the scan; counts gathered so far remain readable through
    /// `frequencies`, but no ranking is produced.
    pub fn scan<S: PostSource + ?Sized>(&mut self, source: &mut S) -> Result<(), Error> {
        info!("Fetching up to {} post(s)...", self.config.post_limit);
        let posts = source.fetch_posts(self.config.post_limit)?;

        info!(
            "Counting words in {} post(s) (comment limit: {})...",
            posts.len(),
            self.config.comment_limit
        );
        for post in &posts {
            self.process_post(post);
        }

        Ok(())
    }

    pub fn frequencies(&self) -> &WordFrequencyMap {
        self.counter.frequencies()
    }

    pub fn posts_processed(&self) -> usize {
        self.posts_processed
    }

    pub fn comments_processed(&self) -> usize {
        self.comments_processed
    }

    /// Consumes the scanner and ranks the accumulated counts against the reference table.
    pub fn rank(self, reference: &TickerReferenceTable) -> RankedTickers {
        info!(
            "Ranking {} distinct word(s) from {} post(s) and {} comment(s)...",
            self.counter.frequencies().len(),
            self.posts_processed,
            self.comments_processed
        );

        let frequencies = self.counter.into_frequencies();

        rank_tickers(&frequencies, reference)
    }
}
