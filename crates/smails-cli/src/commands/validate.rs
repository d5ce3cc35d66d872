//! Validate configuration command

use anyhow::{Context, Result};
use smails_core::Config;

/// Run the validate command
pub async fn run(config_path: &str) -> Result<()> {
    tracing::info!("Validating configuration: {}", config_path);

    let config = Config::load(config_path).context("Failed to load configuration")?;

    tracing::info!("✓ Project: {}", config.project.name);
    tracing::info!("✓ Version: {}", config.project.version);

    let bridge = config.bridge().context("Invalid scoping prefix")?;
    tracing::info!("✓ Scoping prefix: {}", bridge.scoping().prefix());
    tracing::info!(
        "✓ Transpiler: disable_comments={}",
        bridge.transpiler().options().disable_comments
    );

    let catalog = config.catalog().context("Failed to scan mails")?;
    for entry in catalog.mails() {
        entry
            .load()
            .with_context(|| format!("Invalid templates in mail '{}'", entry.name))?;
        entry
            .default_props()
            .with_context(|| format!("Invalid props in mail '{}'", entry.name))?;
        tracing::info!("✓ Mail: {}", entry.name);
    }

    tracing::info!("✓ Configuration is valid ({} mails)", catalog.len());
    Ok(())
}
