use ticker_tally::{
    ExclusionSet, ForumPost, Post, PostDump, PostSource, TickerReferenceTable, WordFrequencyMap,
};
use ticker_tally::Error as LibError;
pub mod constants;

/// Words that are excluded because they are mistaken as tickers.
pub fn excluded_words() -> ExclusionSet {
    ["YOLO", "DD"].into_iter().map(String::from).collect()
}

/// A small reference table of stock tickers.
pub fn tickers_table() -> TickerReferenceTable {
    [("TSLA", "Tesla"), ("APPL", "Apple")].into_iter().collect()
}

/// Builds a frequency map from `(word, frequency)` pairs.
pub fn frequencies(pairs: &[(&str, usize)]) -> WordFrequencyMap {
    pairs
        .iter()
        .map(|(word, frequency)| (word.to_string(), *frequency))
        .collect()
}

/// A post dump holding `count` copies of the same post.
pub fn repeated_post_dump(post: Post, count: usize) -> PostDump {
    PostDump::new(vec![post; count])
}

/// A post source whose fetch always fails, mimicking an unreachable forum.
pub struct FailingPostSource;

impl PostSource for FailingPostSource {
    type Post = Post;

    fn fetch_posts(&mut self, _post_limit: usize) -> Result<Vec<Post>, LibError> {
        Err(LibError::Other("forum unreachable".to_string()))
    }
}

/// A post whose comments are produced lazily, recording how many were pulled.
pub struct CountingPost {
    pub title: String,
    pub comments: Vec<String>,
    pub pulled: std::cell::Cell<usize>,
}

impl CountingPost {
    pub fn new(title: &str, comments: &[&str]) -> Self {
        CountingPost {
            title: title.to_string(),
            comments: comments.iter().map(|c| c.to_string()).collect(),
            pulled: std::cell::Cell::new(0),
        }
    }
}

impl ForumPost for CountingPost {
    fn title(&self) -> &str {
        &self.title
    }

    fn body(&self) -> &str {
        ""
    }

    fn comment_bodies(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.comments.iter().map(move |comment| {
            self.pulled.set(self.pulled.get() + 1);
            comment.as_str()
        }))
    }
}
