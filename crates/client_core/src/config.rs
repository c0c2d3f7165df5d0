use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const DEFAULT_POSTS_URL: &str = "http://jsonplaceholder.typicode.com/posts/";
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_SETTINGS_FILE: &str = "posts.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse settings file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid posts url '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("posts url '{url}' must use http or https, got '{scheme}'")]
    UnsupportedScheme { url: String, scheme: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub posts_url: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            posts_url: DEFAULT_POSTS_URL.into(),
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

impl Settings {
    /// Parses `posts_url`, accepting only absolute http(s) locations.
    pub fn posts_url(&self) -> Result<Url, SettingsError> {
        let url = Url::parse(self.posts_url.trim()).map_err(|source| SettingsError::InvalidUrl {
            url: self.posts_url.clone(),
            source,
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(SettingsError::UnsupportedScheme {
                url: self.posts_url.clone(),
                scheme: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    posts_url: Option<String>,
    log_filter: Option<String>,
}

/// Defaults, then the settings file, then environment overrides.
///
/// An explicit `path` must exist. Without one, `posts.toml` in the working
/// directory is read when present.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, SettingsError> {
    let mut settings = Settings::default();

    match path {
        Some(path) => apply_file(&mut settings, path)?,
        None => {
            let default_path = Path::new(DEFAULT_SETTINGS_FILE);
            if default_path.exists() {
                apply_file(&mut settings, default_path)?;
            }
        }
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn apply_file(settings: &mut Settings, path: &Path) -> Result<(), SettingsError> {
    let raw = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    apply_toml(settings, &raw).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn apply_toml(settings: &mut Settings, raw: &str) -> Result<(), toml::de::Error> {
    let file_cfg: FileSettings = toml::from_str(raw)?;
    if let Some(v) = file_cfg.posts_url {
        settings.posts_url = v;
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
    Ok(())
}

/// Later names win: `APP__*` overrides the bare variable.
fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    for name in ["POSTS_URL", "APP__POSTS_URL"] {
        if let Some(v) = non_empty(name) {
            settings.posts_url = v;
        }
    }
    for name in ["LOG_FILTER", "APP__LOG_FILTER"] {
        if let Some(v) = non_empty(name) {
            settings.log_filter = v;
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
