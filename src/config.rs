use crate::models::{CommentLimit, TickerScanConfig};

pub const DEFAULT_TICKER_SCAN_CONFIG: &TickerScanConfig = &TickerScanConfig {
    post_limit: 50,
    comment_limit: CommentLimit::AtMost(1000),
    drop_empty_tokens: false,
};
