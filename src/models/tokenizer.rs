use crate::constants::TICKER_MARKER;
use crate::types::Word;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tokenizer {
    pub drop_empty_tokens: bool,
}

impl Tokenizer {
    /// Configuration for forum posts and comments.
    ///
    /// Empty tokens produced by stripped characters next to a space are kept, and are
    /// therefore counted under the `""` key.
    pub fn forum_text_parser() -> Self {
        Self {
            drop_empty_tokens: false,
        }
    }

    /// Same as `forum_text_parser`, but empty tokens are discarded.
    pub fn compact_parser() -> Self {
        Self {
            drop_empty_tokens: true,
        }
    }

    /// Splits the text into candidate words.
    ///
    /// Every character other than an ASCII letter, a space, or the ticker marker is removed
    /// before splitting on single spaces.
    ///
    /// Note: This explicitly does not modify the case of the text.
    pub fn tokenize(self, text: &str) -> Vec<Word> {
        let stripped: String = text
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || *c == ' ' || *c == TICKER_MARKER)
            .collect();

        stripped
            .split(' ')
            .filter(|word| !self.drop_empty_tokens || !word.is_empty())
            .map(|word| word.to_string())
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::forum_text_parser()
    }
}
