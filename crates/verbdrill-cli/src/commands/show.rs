//! The `verbdrill show` command.

use anyhow::{Context, Result};

use verbdrill_adapters::config::create_catalog_source;
use verbdrill_core::loader::CatalogLoader;

use super::{open_persistence, resolve_config};
use crate::render::group_table;
use crate::StorageArgs;

pub async fn execute(verb: String, storage: StorageArgs) -> Result<()> {
    let config = resolve_config(&storage)?;
    let persistence = open_persistence(&config)?;
    let source = create_catalog_source(&config.catalog)?;

    let catalog = CatalogLoader::new(source, persistence)
        .load()
        .await
        .with_context(|| format!("failed to load catalog from {}", config.catalog))?;

    let record = catalog
        .find(&verb)
        .with_context(|| format!("verb not found in catalog: {verb}"))?;

    println!("{}", record.verb);
    for (lang, words) in &record.data.translate {
        println!("  {lang}: {}", words.join(", "));
    }
    for group in &record.data.konjugation {
        println!("\n{}", group_table(group));
    }
    Ok(())
}
