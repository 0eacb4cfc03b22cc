use crate::models::{ForumPost, PostSource};
use crate::Error;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A comment and its threaded replies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub body: String,
    #[serde(default)]
    pub replies: Vec<Comment>,
}

impl Comment {
    pub fn new(body: &str) -> Self {
        Comment {
            body: body.to_string(),
            replies: Vec::new(),
        }
    }
}

/// A post as stored in a JSON dump.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    #[serde(default)]
    pub selftext: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    pub fn new(title: &str, selftext: &str, comments: &[&str]) -> Self {
        Post {
            title: title.to_string(),
            selftext: selftext.to_string(),
            comments: comments.iter().map(|body| Comment::new(body)).collect(),
        }
    }
}

impl ForumPost for Post {
    fn title(&self) -> &str {
        &self.title
    }

    fn body(&self) -> &str {
        &self.selftext
    }

    // Replies are dropped; only top-level comments are consumed
    fn comment_bodies(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.comments.iter().map(|comment| comment.body.as_str()))
    }
}

/// An offline `PostSource` backed by posts which were fetched ahead of time.
///
/// Posts are served in their stored order, and each post is served once.
#[derive(Clone, Debug, Default)]
pub struct PostDump {
    posts: Vec<Post>,
}

impl PostDump {
    pub fn new(posts: Vec<Post>) -> Self {
        PostDump { posts }
    }

    /// Parses a JSON array of posts.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let posts: Vec<Post> = serde_json::from_reader(reader)?;
        debug!("Loaded {} post(s) from dump", posts.len());

        Ok(Self::new(posts))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path.as_ref()).map_err(|e| {
            Error::Other(format!(
                "Failed to open post dump {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_reader(BufReader::new(file))
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl PostSource for PostDump {
    type Post = Post;

    fn fetch_posts(&mut self, post_limit: usize) -> Result<Vec<Post>, Error> {
        let take = post_limit.min(self.posts.len());

        Ok(self.posts.drain(..take).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let dump = PostDump::from_reader(r#"[{"title": "Only a title"}]"#.as_bytes()).unwrap();

        assert_eq!(dump.posts, vec![Post::new("Only a title", "", &[])]);
    }

    #[test]
    fn test_replies_are_not_flattened_into_comments() {
        let json = r#"[{
            "title": "t",
            "comments": [{"body": "top", "replies": [{"body": "nested"}]}]
        }]"#;
        let dump = PostDump::from_reader(json.as_bytes()).unwrap();

        let bodies: Vec<&str> = dump.posts[0].comment_bodies().collect();
        assert_eq!(bodies, vec!["top"]);
    }

    #[test]
    fn test_fetch_posts_honors_limit() {
        let mut dump = PostDump::new(vec![
            Post::new("a", "", &[]),
            Post::new("b", "", &[]),
            Post::new("c", "", &[]),
        ]);

        let first = dump.fetch_posts(2).unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].title, "a");
        assert_eq!(dump.fetch_posts(10).unwrap().len(), 1);
        assert!(dump.is_empty());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result = PostDump::from_reader("{not json".as_bytes());
        assert!(matches!(result, Err(Error::JsonError(_))));
    }
}
