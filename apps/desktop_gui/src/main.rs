use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod ui;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use client_core::{load_settings, HttpPostFetcher};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use backend_bridge::{commands::BackendCommand, runtime::spawn_backend_thread};
use controller::events::UiEvent;
use ui::PostBoardApp;

const WINDOW_TITLE: &str = "Posts";

#[derive(Parser, Debug)]
struct Args {
    /// Settings file; defaults to ./posts.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the configured posts endpoint.
    #[arg(long)]
    posts_url: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref()).context("failed to load settings")?;
    if let Some(posts_url) = args.posts_url {
        settings.posts_url = posts_url;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let fetcher = HttpPostFetcher::from_settings(&settings)?;
    tracing::info!(url = %fetcher.posts_url(), "starting posts window");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    spawn_backend_thread(fetcher, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(PostBoardApp::new(cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow!("posts window failed: {err}"))
}
