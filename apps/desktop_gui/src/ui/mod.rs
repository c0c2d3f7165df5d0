//! UI layer for desktop GUI: app shell and the posts table.

pub mod app;

pub use app::PostBoardApp;
