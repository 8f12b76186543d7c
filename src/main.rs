//! Armory - item catalog builder for a tabletop reference tool
//!
//! Builds the catalog once and writes it to stdout as JSON for the renderer.

mod settings;

use std::io::Write;

use anyhow::{Context, Result};
use armory_catalog::{build_report, SourceStatus};
use armory_core::{Item, PrintSettings};
use armory_integration::IntegrationClient;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use settings::Settings;

/// Document handed to the renderer
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogExport<'a> {
    generated_at: DateTime<Utc>,
    print_settings: PrintSettings,
    armor: &'a SourceStatus,
    magic_items: &'a SourceStatus,
    items: &'a [Item],
}

fn main() -> Result<()> {
    // Initialize logging on stderr; stdout carries the catalog
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;

    info!("Starting Armory...");

    let settings = Settings::load();
    if Settings::settings_path().is_some_and(|p| !p.exists()) {
        if let Err(e) = settings.save() {
            warn!("Could not write default settings: {}", e);
        }
    }

    let client = IntegrationClient::new(settings.api.clone())
        .context("Failed to create integration client")?;

    let report = build_report(&client);
    if !report.is_complete() {
        warn!("Catalog is missing remote entries; check the errors above");
    }
    info!(
        "{} items ready ({}online)",
        report.items.len(),
        if client.is_online() { "" } else { "not " }
    );

    let export = CatalogExport {
        generated_at: Utc::now(),
        print_settings: settings.print,
        armor: &report.armor,
        magic_items: &report.magic_items,
        items: &report.items,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &export).context("Failed to write catalog")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_document_keys() {
        let loaded = SourceStatus::Loaded { count: 0 };
        let failed = SourceStatus::Failed { message: "Server is offline or unreachable".into() };
        let export = CatalogExport {
            generated_at: Utc::now(),
            print_settings: PrintSettings::default(),
            armor: &loaded,
            magic_items: &failed,
            items: &[],
        };

        let json = serde_json::to_value(&export).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["armor", "generatedAt", "items", "magicItems", "printSettings"]);
        assert_eq!(json["magicItems"]["status"], "failed");
        assert_eq!(json["printSettings"]["paperSize"], "letter");
    }
}
