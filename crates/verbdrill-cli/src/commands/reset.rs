//! The `verbdrill reset` command.

use anyhow::Result;

use super::{open_persistence, resolve_config};
use crate::StorageArgs;

pub fn execute(storage: StorageArgs) -> Result<()> {
    let config = resolve_config(&storage)?;
    open_persistence(&config)?.clear()?;
    println!(
        "Cleared stored catalog and language in {}",
        config.data_dir.display()
    );
    Ok(())
}
