use std::io::Read;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;

use stockroom_cli::{render, CliConfig, OutputFormat, Session};
use stockroom_inventory::InventoryStore;
use stockroom_products::sample_catalog;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    stockroom_observability::init_with(config.log_format());

    let source = match config.script_path() {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read script from stdin")?;
            buf
        }
    };

    let store = if config.empty {
        InventoryStore::new()
    } else {
        InventoryStore::with_products(sample_catalog(Utc::now()))
    };
    tracing::info!(products = store.len(), "inventory loaded");

    let mut session = Session::new(store);
    let applied = session.run(&source).context("script aborted")?;
    tracing::info!(actions = applied, version = session.version(), "script replayed");

    let output = match config.format {
        OutputFormat::Table => render::table(session.store()),
        OutputFormat::Json => render::json(session.store()).context("failed to encode output")?,
    };
    println!("{output}");
    Ok(())
}
