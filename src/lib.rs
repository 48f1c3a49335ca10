//! # relwatch
//!
//! Watches GitHub repositories for new releases and pushes a notification
//! to an ntfy topic when a newer version appears.
//!
//! ## Example
//!
//! ```no_run
//! use clap::Parser;
//! use relwatch::{ReleaseWatcher, Settings, VersionStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::parse();
//!
//!     let store = VersionStore::load(&settings.store_file).await?;
//!     let watcher = ReleaseWatcher::new(&settings, store)?;
//!
//!     // Polls the watch list forever, one sweep per interval.
//!     watcher.run().await?;
//!
//!     Ok(())
//! }
//! ```

mod config;
mod error;
pub mod format;
mod github;
mod notify;
mod select;
mod store;
mod types;
pub mod version;
mod watcher;

pub use config::Settings;
pub use error::{Result, WatchError};
pub use github::ReleaseClient;
pub use notify::Notifier;
pub use select::select_release;
pub use store::VersionStore;
pub use types::{parse_repo_list, Release, RepoEntry};
pub use watcher::ReleaseWatcher;
