//! Fetches the post collection once and keeps it in a reversible list view.

pub mod config;
pub mod fetcher;
pub mod render;
pub mod view;

pub use config::{load_settings, Settings, SettingsError};
pub use fetcher::{parse_posts, HttpPostFetcher, PostSource};
pub use view::{ListView, PostRow, ViewState};
