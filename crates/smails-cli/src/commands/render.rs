//! Render a single mail

use anyhow::{Context, Result};
use smails_core::Config;
use std::path::Path;

/// Run the render command
pub async fn run(
    config_path: &str,
    mail: &str,
    props: Option<&str>,
    output: Option<&str>,
) -> Result<()> {
    tracing::info!("Loading configuration from {}", config_path);

    let config = Config::load(config_path).context("Failed to load configuration")?;
    let catalog = config.catalog().context("Failed to scan mails")?;
    let Some(entry) = catalog.get(mail) else {
        anyhow::bail!("Mail not found: {}", mail);
    };

    let props = match props {
        Some(path) => smails_core::catalog::load_props(Path::new(path))
            .with_context(|| format!("Failed to read props from {}", path))?,
        None => entry.default_props().context("Failed to read default props")?,
    };

    let component = config
        .load_mail(&entry.name)
        .with_context(|| format!("Failed to load mail '{}'", entry.name))?;
    let html = config
        .bridge()?
        .render(&component, &props)
        .with_context(|| format!("Failed to render mail '{}'", entry.name))?;

    match output {
        Some(path) => {
            tokio::fs::write(path, &html)
                .await
                .with_context(|| format!("Failed to write {}", path))?;
            tracing::info!("✓ {} ({} bytes) -> {}", entry.name, html.len(), path);
        }
        None => println!("{html}"),
    }

    Ok(())
}
