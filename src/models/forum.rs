use crate::Error;

/// A forum post as seen by the collection driver.
///
/// Implementations are responsible for flattening threaded replies: `comment_bodies` yields
/// only top-level comments, in the order the forum provided them.
pub trait ForumPost {
    fn title(&self) -> &str;

    fn body(&self) -> &str;

    fn comment_bodies(&self) -> Box<dyn Iterator<Item = &str> + '_>;
}

/// Anything able to supply forum posts, such as an API client or an offline dump.
pub trait PostSource {
    type Post: ForumPost;

    /// Fetches at most `post_limit` posts.
    ///
    /// Any error aborts the collection run.
    fn fetch_posts(&mut self, post_limit: usize) -> Result<Vec<Self::Post>, Error>;
}
