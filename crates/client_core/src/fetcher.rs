use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::Post,
    error::{FailureDetails, FetchError},
};
use tracing::{debug, error, info};
use url::Url;

use crate::config::{Settings, SettingsError};

/// Source of the post collection.
///
/// Each call performs one read; callers decide how often to call it.
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError>;
}

/// Reads posts with a single `GET` against a fixed URL.
pub struct HttpPostFetcher {
    http: Client,
    posts_url: Url,
}

impl HttpPostFetcher {
    pub fn new(posts_url: Url) -> Self {
        Self::with_client(Client::new(), posts_url)
    }

    pub fn with_client(http: Client, posts_url: Url) -> Self {
        Self { http, posts_url }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, SettingsError> {
        Ok(Self::new(settings.posts_url()?))
    }

    pub fn posts_url(&self) -> &Url {
        &self.posts_url
    }

    /// A non-success status is reported with its canonical reason phrase
    /// rather than the one the server sent, so unregistered codes such as
    /// 599 come out as `"599 - "`.
    async fn request_posts(&self) -> Result<Vec<Post>, FailureDetails> {
        debug!(url = %self.posts_url, "posts: sending request");
        let response = self
            .http
            .get(self.posts_url.clone())
            .send()
            .await
            .map_err(|err| FailureDetails::from_message(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FailureDetails::from_status(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| FailureDetails::from_message(err.to_string()))?;
        parse_posts(&body).map_err(|err| FailureDetails::from_message(err.to_string()))
    }
}

#[async_trait]
impl PostSource for HttpPostFetcher {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        match self.request_posts().await {
            Ok(posts) => {
                info!(url = %self.posts_url, count = posts.len(), "posts: fetched");
                Ok(posts)
            }
            Err(details) => {
                let err = FetchError::from(details);
                error!(url = %self.posts_url, "{}", err.message());
                Err(err)
            }
        }
    }
}

/// Decodes a response body into posts.
///
/// A blank body or a JSON `null` is an empty collection.
pub fn parse_posts(body: &[u8]) -> Result<Vec<Post>, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let posts: Option<Vec<Post>> = serde_json::from_slice(body)?;
    Ok(posts.unwrap_or_default())
}

#[cfg(test)]
#[path = "tests/fetcher_tests.rs"]
mod tests;
