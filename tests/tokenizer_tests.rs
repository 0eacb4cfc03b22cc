use ticker_tally::{tokenize, Tokenizer};

#[cfg(test)]
mod forum_text_tokenizer_tests {
    use super::*;

    #[test]
    fn test_preprocess_text() {
        assert_eq!(tokenize("HELLO world"), vec!["HELLO", "world"]);
    }

    #[test]
    fn test_removes_punctuation() {
        let text = "HELLO world, this is good.";
        assert_eq!(tokenize(text), vec!["HELLO", "world", "this", "is", "good"]);
    }

    #[test]
    fn test_keeps_dollar_sign() {
        let text = "HELLO world, this is good. $YOLO";
        assert_eq!(
            tokenize(text),
            vec!["HELLO", "world", "this", "is", "good", "$YOLO"]
        );
    }

    #[test]
    fn test_preserves_case() {
        assert_eq!(tokenize("tsla TSLA Tsla"), vec!["tsla", "TSLA", "Tsla"]);
    }

    #[test]
    fn test_empty_text_yields_single_empty_token() {
        assert_eq!(tokenize(""), vec![""]);
    }

    #[test]
    fn test_removed_character_between_letters_joins_them() {
        assert_eq!(tokenize("a,b"), vec!["ab"]);
    }

    #[test]
    fn test_removed_character_next_to_space_leaves_empty_token() {
        assert_eq!(tokenize("a , b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_line_breaks_and_digits_are_stripped() {
        assert_eq!(tokenize("GME\nto 1000 AMC"), vec!["GMEto", "", "AMC"]);
    }

    #[test]
    fn test_non_ascii_is_stripped() {
        assert_eq!(tokenize("caf\u{e9} \u{1F680}\u{1F680} NIO"), vec!["caf", "", "NIO"]);
    }

    #[test]
    fn test_tokens_only_contain_letters_and_marker() {
        let text = "Wild day!!! $GME up 40%, AMC's *squeezing*... \t\r\n ok? 123 $$ \u{1F680}";

        for token in tokenize(text) {
            assert!(token
                .chars()
                .all(|c| c.is_ascii_alphabetic() || c == '$'));
        }
    }
}

#[cfg(test)]
mod compact_tokenizer_tests {
    use super::*;

    #[test]
    fn test_drops_empty_tokens() {
        let tokenizer = Tokenizer::compact_parser();

        assert_eq!(tokenizer.tokenize("a , b"), vec!["a", "b"]);
        assert!(tokenizer.tokenize("").is_empty());
    }

    #[test]
    fn test_matches_forum_parser_otherwise() {
        let text = "HELLO world, this is good. $YOLO";

        assert_eq!(Tokenizer::compact_parser().tokenize(text), tokenize(text));
    }
}
