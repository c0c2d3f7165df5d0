use shared::{
    domain::{Post, PostId},
    error::FetchError,
};
use tracing::{debug, warn};

use crate::fetcher::PostSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Loaded,
}

/// One displayed table row, columns in `id, title, body` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostRow<'a> {
    pub id: PostId,
    pub title: &'a str,
    pub body: &'a str,
}

/// Owns the displayed posts and the reversal toggle.
///
/// Starts in [`ViewState::Loading`] and accepts exactly one fetch outcome.
#[derive(Debug, Clone)]
pub struct ListView {
    state: ViewState,
    posts: Vec<Post>,
    error_message: Option<String>,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListView {
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
            posts: Vec::new(),
            error_message: None,
        }
    }

    /// Builds a view and performs its single fetch from `source`.
    pub async fn open<S>(source: &S) -> Self
    where
        S: PostSource + ?Sized,
    {
        let mut view = Self::new();
        let outcome = source.fetch_posts().await;
        view.complete(outcome);
        view
    }

    /// Applies the fetch outcome. Returns `false` if one was already applied.
    pub fn complete(&mut self, outcome: Result<Vec<Post>, FetchError>) -> bool {
        if self.state == ViewState::Loaded {
            warn!("list view: ignoring second fetch outcome");
            return false;
        }

        match outcome {
            Ok(posts) => {
                debug!(count = posts.len(), "list view: posts loaded");
                self.posts = posts;
                self.error_message = None;
            }
            Err(err) => {
                self.posts.clear();
                self.error_message = Some(err.into_message());
            }
        }
        self.state = ViewState::Loaded;
        true
    }

    /// Reverses the displayed order. Not a sort by id.
    pub fn sort(&mut self) {
        self.posts.reverse();
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == ViewState::Loading
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn rows(&self) -> impl Iterator<Item = PostRow<'_>> + '_ {
        self.posts.iter().map(|post| PostRow {
            id: post.id,
            title: &post.title,
            body: &post.body,
        })
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
