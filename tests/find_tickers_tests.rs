use test_utils::{
    excluded_words, repeated_post_dump, tickers_table, CountingPost, FailingPostSource,
};
use ticker_tally::{
    find_tickers, find_tickers_with_custom_config, Comment, CommentLimit, Error, Post, PostDump,
    TickerScanConfig, TickerScanner,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_comment_limit(comment_limit: CommentLimit) -> TickerScanConfig {
        TickerScanConfig {
            post_limit: 10,
            comment_limit,
            drop_empty_tokens: false,
        }
    }

    fn find_with_limit(
        mut post_dump: PostDump,
        comment_limit: CommentLimit,
    ) -> Vec<(String, usize)> {
        let config = config_with_comment_limit(comment_limit);

        find_tickers_with_custom_config(
            &config,
            &mut post_dump,
            &excluded_words(),
            &tickers_table(),
        )
        .unwrap()
        .into_rows()
        .into_iter()
        .map(|row| (row.ticker, row.frequency))
        .collect()
    }

    #[test]
    fn test_find_tickers_none() {
        let post = Post::new(
            "Hello World",
            "This is content",
            &["This is a comment", "This is another comment"],
        );
        let mut post_dump = repeated_post_dump(post, 2);

        let ranked = find_tickers(&mut post_dump, &excluded_words(), &tickers_table()).unwrap();

        assert!(ranked.is_empty());
    }

    #[test]
    fn test_find_tickers_positive_title() {
        let post = Post::new(
            "The Title TSLA",
            "This is content",
            &["This is a comment", "This is another comment"],
        );

        let rows = find_with_limit(repeated_post_dump(post, 2), CommentLimit::AtMost(5));

        assert_eq!(rows, vec![("TSLA".to_string(), 2)]);
    }

    #[test]
    fn test_find_tickers_positive_content() {
        let post = Post::new(
            "The Title",
            "This is content TSLA",
            &["This is a comment", "This is another comment"],
        );

        let rows = find_with_limit(repeated_post_dump(post, 2), CommentLimit::AtMost(5));

        assert_eq!(rows, vec![("TSLA".to_string(), 2)]);
    }

    #[test]
    fn test_find_tickers_positive_comments() {
        let post = Post::new(
            "The Title",
            "This is content",
            &["This is a comment TSLA", "This is a comment APPL"],
        );

        let rows = find_with_limit(repeated_post_dump(post, 2), CommentLimit::AtMost(5));

        assert_eq!(
            rows,
            vec![("TSLA".to_string(), 2), ("APPL".to_string(), 2)]
        );
    }

    #[test]
    fn test_comment_limit() {
        let post = Post::new("Title", "", &["TSLA", "APPL", "$APPL"]);

        assert_eq!(
            find_with_limit(repeated_post_dump(post.clone(), 1), CommentLimit::AtMost(0)),
            vec![]
        );
        assert_eq!(
            find_with_limit(repeated_post_dump(post.clone(), 1), CommentLimit::AtMost(1)),
            vec![("TSLA".to_string(), 1)]
        );
        assert_eq!(
            find_with_limit(repeated_post_dump(post, 1), CommentLimit::All),
            vec![("APPL".to_string(), 2), ("TSLA".to_string(), 1)]
        );
    }

    #[test]
    fn test_replies_are_not_counted() {
        let mut post = Post::new("Title", "", &[]);
        post.comments.push(Comment {
            body: "top level".to_string(),
            replies: vec![Comment::new("TSLA TSLA TSLA")],
        });

        let rows = find_with_limit(PostDump::new(vec![post]), CommentLimit::All);

        assert!(rows.is_empty());
    }

    #[test]
    fn test_post_limit() {
        let post = Post::new("TSLA", "", &[]);
        let config = TickerScanConfig {
            post_limit: 3,
            ..config_with_comment_limit(CommentLimit::All)
        };
        let mut post_dump = repeated_post_dump(post, 5);

        let ranked = find_tickers_with_custom_config(
            &config,
            &mut post_dump,
            &excluded_words(),
            &tickers_table(),
        )
        .unwrap();

        assert_eq!(ranked.rows()[0].frequency, 3);
    }

    #[test]
    fn test_excluded_ticker_needs_marker() {
        let reference = [("DD", "DuPont"), ("TSLA", "Tesla")].into_iter().collect();
        let post = Post::new("DD on TSLA", "My DD says $DD", &[]);
        let config = config_with_comment_limit(CommentLimit::All);

        let ranked = find_tickers_with_custom_config(
            &config,
            &mut PostDump::new(vec![post]),
            &excluded_words(),
            &reference,
        )
        .unwrap();

        let rows: Vec<(&str, usize)> = ranked
            .rows()
            .iter()
            .map(|row| (row.ticker.as_str(), row.frequency))
            .collect();
        assert_eq!(rows, vec![("DD", 1), ("TSLA", 1)]);
    }

    #[test]
    fn test_title_and_body_are_joined_with_a_space() {
        let post = Post::new("Buying", "TSLA", &[]);

        let rows = find_with_limit(PostDump::new(vec![post]), CommentLimit::All);

        assert_eq!(rows, vec![("TSLA".to_string(), 1)]);
    }

    #[test]
    fn test_comment_limit_stops_pulling_comments() {
        let exclusions = excluded_words();
        let config = config_with_comment_limit(CommentLimit::AtMost(2));
        let post = CountingPost::new("TSLA", &["a", "b", "c", "d"]);
        let mut ticker_scanner = TickerScanner::new(&config, &exclusions);

        ticker_scanner.process_post(&post);

        assert_eq!(post.pulled.get(), 2);
        assert_eq!(ticker_scanner.posts_processed(), 1);
        assert_eq!(ticker_scanner.comments_processed(), 2);
    }

    #[test]
    fn test_fetch_failure_aborts_run() {
        let result = find_tickers(&mut FailingPostSource, &excluded_words(), &tickers_table());

        assert!(matches!(result, Err(Error::Other(_))));
    }

    #[test]
    fn test_drop_empty_tokens() {
        let exclusions = excluded_words();
        let keep = config_with_comment_limit(CommentLimit::All);
        let drop = TickerScanConfig {
            drop_empty_tokens: true,
            ..keep.clone()
        };
        let post = Post::new("TSLA , up", "", &[]);

        let mut keeping_scanner = TickerScanner::new(&keep, &exclusions);
        keeping_scanner.process_post(&post);
        let mut dropping_scanner = TickerScanner::new(&drop, &exclusions);
        dropping_scanner.process_post(&post);

        assert_eq!(keeping_scanner.frequencies().get(""), Some(&2));
        assert_eq!(dropping_scanner.frequencies().get(""), None);
        assert_eq!(
            keeping_scanner.rank(&tickers_table()),
            dropping_scanner.rank(&tickers_table())
        );
    }
}
