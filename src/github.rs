//! GitHub releases API client.

use reqwest::{Client, StatusCode};
use url::Url;

use crate::error::{Result, WatchError};
use crate::types::{GitHubReleaseResponse, Release};

const GITHUB_API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("relwatch/", env!("CARGO_PKG_VERSION"));

/// Client for listing releases of arbitrary repositories.
pub struct ReleaseClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ReleaseClient {
    /// Creates a new client against `base_url` (the GitHub REST endpoint,
    /// typically `https://api.github.com`).
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let base_url = base_url.into();

        if Url::parse(&base_url).is_err() {
            return Err(WatchError::InvalidUrl(base_url));
        }

        Ok(Self {
            client: Client::new(),
            base_url,
            token,
        })
    }

    /// Fetches the releases of `repo_id` ("owner/name"), most recent first.
    ///
    /// A missing or inaccessible repository surfaces as
    /// [`WatchError::RepoNotFound`] so callers can tell it apart from
    /// transient API failures.
    pub async fn fetch_releases(&self, repo_id: &str) -> Result<Vec<Release>> {
        let url = format!("{}/repos/{}/releases", self.base_url, repo_id);

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header("User-Agent", USER_AGENT);

        if let Some(ref token) = self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(WatchError::RepoNotFound(repo_id.to_string()));
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(WatchError::Api { status, message });
        }

        let github_releases: Vec<GitHubReleaseResponse> = response.json().await?;

        Ok(github_releases.into_iter().map(Release::from).collect())
    }
}
