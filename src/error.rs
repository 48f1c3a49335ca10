use thiserror::Error;

/// Errors that can occur while watching releases.
#[derive(Error, Debug)]
pub enum WatchError {
    /// Error making an HTTP request.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Error parsing or serializing JSON.
    #[error("Failed to process JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The hosting API returned an error status other than 404.
    #[error("GitHub API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The repository does not exist upstream.
    #[error("Repository not found: {0}")]
    RepoNotFound(String),

    /// The notification gateway rejected the message.
    #[error("Notification rejected: {status} - {message}")]
    Notify { status: u16, message: String },

    /// A release tag contained no recognizable version sequence.
    #[error("Release tag '{tag}' of {repo} contains no version")]
    UnparsableTag { repo: String, tag: String },

    /// A version string failed semantic-version validation.
    #[error("Invalid semantic version '{version}' for {repo}")]
    InvalidVersion { repo: String, version: String },

    /// Invalid endpoint URL.
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    /// IO error (repository list or store file operations).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for relwatch operations.
pub type Result<T> = std::result::Result<T, WatchError>;
