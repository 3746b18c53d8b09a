//! The `verbdrill validate` command.

use anyhow::{Context, Result};

use verbdrill_adapters::config::create_catalog_source;
use verbdrill_core::validate::validate_catalog;

pub async fn execute(catalog: String) -> Result<()> {
    let source = create_catalog_source(&catalog)?;
    let loaded = source
        .fetch()
        .await
        .with_context(|| format!("failed to load catalog: {}", source.describe()))?;

    println!("Catalog: {} verbs", loaded.len());
    let languages = loaded.translation_languages();
    if !languages.is_empty() {
        println!("Translations: {}", languages.join(", "));
    }

    let warnings = validate_catalog(&loaded);
    for w in &warnings {
        match &w.verb {
            Some(verb) => println!("  WARNING [{verb}]: {}", w.message),
            None => println!("  WARNING: {}", w.message),
        }
    }

    if warnings.is_empty() {
        println!("Catalog valid.");
    } else {
        println!("{} warning(s) found.", warnings.len());
    }
    Ok(())
}
