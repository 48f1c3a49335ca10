//! Persisted last-seen release versions.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// On-disk document shape.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreData {
    releases: BTreeMap<String, String>,
}

/// Persistent mapping from repository id to the last recorded release
/// version.
///
/// The store is the single source of truth for "last known version". Every
/// mutation rewrites the whole backing file before returning, so a crash
/// mid-sweep loses at most the comparison in flight, never a recorded one.
#[derive(Debug)]
pub struct VersionStore {
    path: PathBuf,
    data: StoreData,
}

impl VersionStore {
    /// Loads the store from `path`, seeding an empty mapping when the file
    /// does not exist yet.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let data = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => StoreData::default(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, data })
    }

    /// The last recorded version for a repository, if any.
    pub fn get(&self, repo_id: &str) -> Option<&str> {
        self.data.releases.get(repo_id).map(String::as_str)
    }

    /// Records `version` for a repository and flushes the whole document to
    /// disk before returning.
    pub async fn record(&mut self, repo_id: &str, version: &str) -> Result<()> {
        self.data
            .releases
            .insert(repo_id.to_string(), version.to_string());
        self.flush().await
    }

    async fn flush(&self) -> Result<()> {
        let contents = serde_json::to_string(&self.data)?;
        tokio::fs::write(&self.path, contents).await?;
        Ok(())
    }
}
