//! Polling loop tying the store, the hosting API and the notifier together.

use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::config::Settings;
use crate::error::{Result, WatchError};
use crate::format;
use crate::github::ReleaseClient;
use crate::notify::Notifier;
use crate::select::select_release;
use crate::store::VersionStore;
use crate::types::{parse_repo_list, Release, RepoEntry};
use crate::version::{self, VersionOrdering};

/// Watches the configured repositories, one sweep per interval.
pub struct ReleaseWatcher {
    store: VersionStore,
    client: ReleaseClient,
    notifier: Notifier,
    repos_file: PathBuf,
    interval: Duration,
}

impl ReleaseWatcher {
    /// Builds a watcher from settings and a loaded store.
    pub fn new(settings: &Settings, store: VersionStore) -> Result<Self> {
        let client = ReleaseClient::new(&settings.github_api_url, settings.github_token.clone())?;
        let notifier = Notifier::new(&settings.ntfy_url, settings.ntfy_token.clone())?;

        Ok(Self {
            store,
            client,
            notifier,
            repos_file: settings.repos_file.clone(),
            interval: settings.interval,
        })
    }

    /// Runs sweeps forever, sleeping for the configured interval between
    /// them. A sweep that fails outright is logged and the next one is
    /// scheduled regardless.
    pub async fn run(mut self) -> Result<()> {
        loop {
            if let Err(err) = self.sweep().await {
                error!("Sweep failed: {err}");
            }
            debug!("Next sweep in {:?}", self.interval);
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Performs one pass over the repository list.
    ///
    /// Per-repository failures are logged and do not stop the rest of the
    /// sweep; only a failure to read the list itself aborts it.
    pub async fn sweep(&mut self) -> Result<()> {
        let contents = tokio::fs::read_to_string(&self.repos_file).await?;
        let entries = parse_repo_list(&contents);
        info!("Checking {} repositories", entries.len());

        for entry in entries {
            if let Err(err) = self.process_entry(&entry).await {
                error!("Failed to process {}: {err}", entry.repo_id);
            }
        }

        Ok(())
    }

    async fn process_entry(&mut self, entry: &RepoEntry) -> Result<()> {
        debug!("Checking {}", entry.repo_id);

        let releases = match self.client.fetch_releases(&entry.repo_id).await {
            Ok(releases) => releases,
            Err(WatchError::RepoNotFound(_)) => {
                warn!("Repository {} not found", entry.repo_id);
                self.notify_missing_repo(&entry.repo_id).await?;
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        let Some(release) = select_release(&releases, entry.include_beta) else {
            debug!("No suitable release for {}", entry.repo_id);
            return Ok(());
        };

        let Some(version) = version::normalize_tag(&release.tag_name) else {
            return Err(WatchError::UnparsableTag {
                repo: entry.repo_id.clone(),
                tag: release.tag_name.clone(),
            });
        };

        let Some(recorded) = self.store.get(&entry.repo_id).map(str::to_string) else {
            self.store.record(&entry.repo_id, &version).await?;
            info!("Now tracking {} at {version}", entry.repo_id);
            return Ok(());
        };

        let Some(ordering) = version::compare(&version, &recorded) else {
            let invalid = if version::is_valid(&recorded) {
                version
            } else {
                recorded
            };
            return Err(WatchError::InvalidVersion {
                repo: entry.repo_id.clone(),
                version: invalid,
            });
        };

        match ordering {
            VersionOrdering::Newer => {
                // Record first: losing one notification beats announcing
                // the same release again every sweep.
                self.store.record(&entry.repo_id, &version).await?;
                info!("New release for {}: {recorded} -> {version}", entry.repo_id);
                self.notify_release(&entry.repo_id, release, &version).await?;
            }
            VersionOrdering::Older => {
                self.store.record(&entry.repo_id, &version).await?;
                info!(
                    "Recorded downgrade for {}: {recorded} -> {version}",
                    entry.repo_id
                );
            }
            VersionOrdering::Same => {
                debug!("{} is unchanged at {recorded}", entry.repo_id);
            }
        }

        Ok(())
    }

    async fn notify_release(&self, repo_id: &str, release: &Release, version: &str) -> Result<()> {
        let header = format::render_header(
            repo_id,
            release.title(),
            version,
            release.published_at,
            &release.html_url,
        );
        let message = format::assemble_message(
            &header,
            release.body.as_deref().unwrap_or(""),
            &release.html_url,
            format::MESSAGE_BYTE_BUDGET,
        );

        self.notifier
            .notify(&format::notification_title(repo_id), "tada", &message)
            .await
    }

    async fn notify_missing_repo(&self, repo_id: &str) -> Result<()> {
        let title = format!("Repository {repo_id} not found!");
        let message = format!(
            "The repository {repo_id} does not exist or is not accessible. \
             Check the watch list entry."
        );

        self.notifier.notify(&title, "warning", &message).await
    }
}
