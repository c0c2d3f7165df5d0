use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use client_core::{
    load_settings,
    render::{render_html_page, render_text_table},
    HttpPostFetcher, ListView,
};
use tracing_subscriber::EnvFilter;

/// Fetch the post collection once and print it as a table.
#[derive(Parser, Debug)]
struct Args {
    /// Settings file; defaults to ./posts.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the configured posts endpoint.
    #[arg(long)]
    posts_url: Option<String>,
    /// Reverse the table order, same as clicking the ID header.
    #[arg(long)]
    reverse: bool,
    /// Print a standalone HTML page instead of a text table.
    #[arg(long)]
    html: bool,
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render(view: &ListView, html: bool) -> Result<String> {
    if html {
        render_html_page(view).context("failed to render html page")
    } else {
        Ok(render_text_table(view))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref()).context("failed to load settings")?;
    if let Some(posts_url) = args.posts_url {
        settings.posts_url = posts_url;
    }
    init_tracing(&settings.log_filter);

    let fetcher = HttpPostFetcher::from_settings(&settings)?;
    tracing::info!(url = %fetcher.posts_url(), "loading posts");

    let mut view = ListView::open(&fetcher).await;
    if let Some(message) = view.error_message() {
        bail!("failed to load posts: {message}");
    }
    if args.reverse {
        view.sort();
    }

    print!("{}", render(&view, args.html)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::Post;

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from([
            "posts",
            "--posts-url",
            "http://127.0.0.1:8080/posts/",
            "--reverse",
            "--html",
        ])
        .expect("args");
        assert_eq!(args.posts_url.as_deref(), Some("http://127.0.0.1:8080/posts/"));
        assert!(args.reverse);
        assert!(args.html);
        assert!(args.config.is_none());
    }

    #[test]
    fn defaults_to_text_output_in_source_order() {
        let args = Args::try_parse_from(["posts"]).expect("args");
        assert!(!args.reverse);
        assert!(!args.html);
    }

    #[test]
    fn render_switches_between_text_and_html() {
        let mut view = ListView::new();
        view.complete(Ok(vec![Post::new(1, "hello", "world")]));

        let html = render(&view, true).expect("html");
        assert!(html.contains("<table id=\"article\">"));
        let text = render(&view, false).expect("text");
        assert!(text.starts_with("ID | Title"));
        assert!(text.contains(" 1 | hello | world"));
    }
}
