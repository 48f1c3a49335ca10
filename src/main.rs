//! relwatch CLI entry point.

use clap::Parser;
use relwatch::{ReleaseWatcher, Settings, VersionStore};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let settings = Settings::parse();

    let default_filter = if settings.debug {
        "relwatch=debug,info"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    info!("relwatch v{}", env!("CARGO_PKG_VERSION"));

    let store = VersionStore::load(&settings.store_file).await?;
    let watcher = ReleaseWatcher::new(&settings, store)?;

    watcher.run().await?;

    Ok(())
}
