//! Render mails into the output directory

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use smails_core::{Bridge, Config, MailEntry};

/// A mail written to disk
struct Built {
    name: String,
    size: usize,
    hash: String,
}

/// Run the build command
pub async fn run(config_path: &str, mail: Option<&str>) -> Result<()> {
    tracing::info!("Loading configuration from {}", config_path);

    let config = Config::load(config_path).context("Failed to load configuration")?;
    let catalog = config.catalog().context("Failed to scan mails")?;
    let bridge = config.bridge()?;

    let entries: Vec<&MailEntry> = match mail {
        Some(name) => match catalog.get(name) {
            Some(entry) => vec![entry],
            None => anyhow::bail!("Mail not found: {}", name),
        },
        None => catalog.mails().iter().collect(),
    };

    if entries.is_empty() {
        tracing::warn!("No mails found in {}", config.mails_dir().display());
        return Ok(());
    }

    let output_dir = config.output_dir();
    tokio::fs::create_dir_all(&output_dir)
        .await
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    tracing::info!("Building {} mails into {}", entries.len(), output_dir.display());
    for entry in entries {
        let built = build_mail(&config, &bridge, entry).await?;
        tracing::info!(
            "  ✓ {} ({} bytes, hash: {}...)",
            built.name,
            built.size,
            &built.hash[..8]
        );
    }

    tracing::info!("Build complete");
    Ok(())
}

async fn build_mail(config: &Config, bridge: &Bridge, entry: &MailEntry) -> Result<Built> {
    let props = entry
        .default_props()
        .with_context(|| format!("Failed to read props for '{}'", entry.name))?;
    let component = config
        .load_mail(&entry.name)
        .with_context(|| format!("Failed to load mail '{}'", entry.name))?;
    let html = bridge
        .render(&component, &props)
        .with_context(|| format!("Failed to render mail '{}'", entry.name))?;

    let path = config.output_dir().join(format!("{}.html", entry.name));
    tokio::fs::write(&path, &html)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(Built {
        name: entry.name.clone(),
        size: html.len(),
        hash: hex::encode(Sha256::digest(html.as_bytes())),
    })
}
