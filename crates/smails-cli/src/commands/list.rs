//! List mails

use anyhow::{Context, Result};
use smails_core::Config;

/// Print every mail name, one per line
pub async fn run(config_path: &str) -> Result<()> {
    let config = Config::load(config_path).context("Failed to load configuration")?;
    let catalog = config.catalog().context("Failed to scan mails")?;

    tracing::debug!("Found {} mails", catalog.len());
    for name in catalog.names() {
        println!("{name}");
    }
    Ok(())
}
