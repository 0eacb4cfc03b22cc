use crate::constants::ALL_COMMENTS_SENTINEL;
use crate::Error;
use std::fmt;
use std::str::FromStr;

/// How many top-level comments are consumed per post.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CommentLimit {
    All,
    AtMost(usize),
}

impl CommentLimit {
    /// Converts the command-line representation, where `-1` means every comment.
    pub fn from_signed(limit: i64) -> Result<Self, Error> {
        match limit {
            ALL_COMMENTS_SENTINEL => Ok(CommentLimit::All),
            limit if limit >= 0 => usize::try_from(limit)
                .map(CommentLimit::AtMost)
                .map_err(|e| Error::ParserError(format!("Invalid comment limit {}: {}", limit, e))),
            limit => Err(Error::ParserError(format!(
                "Invalid comment limit {}: expected {} or a non-negative number",
                limit, ALL_COMMENTS_SENTINEL
            ))),
        }
    }

    /// Applies the limit to a sequence of comments.
    pub fn take<'a, I>(self, comments: I) -> Box<dyn Iterator<Item = I::Item> + 'a>
    where
        I: Iterator + 'a,
    {
        match self {
            CommentLimit::All => Box::new(comments),
            CommentLimit::AtMost(limit) => Box::new(comments.take(limit)),
        }
    }
}

impl FromStr for CommentLimit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let limit = s
            .trim()
            .parse::<i64>()
            .map_err(|e| Error::ParserError(format!("Invalid comment limit {:?}: {}", s, e)))?;

        Self::from_signed(limit)
    }
}

impl fmt::Display for CommentLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentLimit::All => write!(f, "{}", ALL_COMMENTS_SENTINEL),
            CommentLimit::AtMost(limit) => write!(f, "{}", limit),
        }
    }
}
