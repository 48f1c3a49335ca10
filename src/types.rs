use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::warn;

/// Represents a GitHub release.
#[derive(Debug, Clone)]
pub struct Release {
    /// The release tag name (e.g., "v1.0.0").
    pub tag_name: String,
    /// The release name/title.
    pub name: Option<String>,
    /// The release body/description.
    pub body: Option<String>,
    /// Whether this is a prerelease.
    pub prerelease: bool,
    /// Whether this is a draft release.
    pub draft: bool,
    /// The URL to the release page.
    pub html_url: String,
    /// When the release was published.
    pub published_at: Option<DateTime<Utc>>,
}

impl Release {
    /// The release title, falling back to the tag name when GitHub has none.
    pub fn title(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.tag_name,
        }
    }
}

/// Internal structure for GitHub API response.
#[derive(Debug, Deserialize)]
pub(crate) struct GitHubReleaseResponse {
    pub tag_name: String,
    pub name: Option<String>,
    pub body: Option<String>,
    pub prerelease: bool,
    pub draft: bool,
    pub html_url: String,
    pub published_at: Option<DateTime<Utc>>,
}

impl From<GitHubReleaseResponse> for Release {
    fn from(response: GitHubReleaseResponse) -> Self {
        Self {
            tag_name: response.tag_name,
            name: response.name,
            body: response.body,
            prerelease: response.prerelease,
            draft: response.draft,
            html_url: response.html_url,
            published_at: response.published_at,
        }
    }
}

/// One configured repository to watch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoEntry {
    /// The repository in "owner/repo" format.
    pub repo_id: String,
    /// Whether prereleases are tracked for this repository.
    pub include_beta: bool,
}

impl RepoEntry {
    /// Parses a single line of the repository list.
    ///
    /// Blank lines and lines starting with `#` produce no entry. An optional
    /// colon-delimited suffix equal to `beta` (case-insensitive) opts the
    /// repository into prerelease tracking; any other suffix is ignored with
    /// a warning. Lines with an empty repository id are skipped.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let (repo_id, flag) = match line.split_once(':') {
            Some((id, flag)) => (id.trim(), Some(flag.trim())),
            None => (line, None),
        };
        if repo_id.is_empty() {
            return None;
        }

        let include_beta = match flag {
            Some(flag) if flag.eq_ignore_ascii_case("beta") => true,
            Some(flag) => {
                warn!("Ignoring unknown flag '{flag}' for repository {repo_id}");
                false
            }
            None => false,
        };

        Some(Self {
            repo_id: repo_id.to_string(),
            include_beta,
        })
    }
}

/// Parses the full contents of a repository list file.
pub fn parse_repo_list(contents: &str) -> Vec<RepoEntry> {
    contents.lines().filter_map(RepoEntry::parse_line).collect()
}
