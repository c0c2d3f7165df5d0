//! Backend-to-UI events.

use shared::{domain::Post, error::FetchError};

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    PostsLoaded(Result<Vec<Post>, FetchError>),
    BackendFailed(String),
}
