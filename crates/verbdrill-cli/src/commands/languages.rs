//! The `verbdrill languages` command.

use anyhow::Result;
use comfy_table::Table;

use verbdrill_core::i18n::{self, LANGUAGES};

use super::{open_persistence, resolve_config};
use crate::StorageArgs;

pub fn execute(storage: StorageArgs) -> Result<()> {
    let config = resolve_config(&storage)?;
    let stored = open_persistence(&config)?.load_language();

    let mut table = Table::new();
    table.set_header(vec!["", "Code", "Language", "Flag"]);
    for lang in LANGUAGES {
        let marker = if stored.as_deref() == Some(lang.code) {
            "*"
        } else {
            ""
        };
        table.add_row(vec![
            marker.to_string(),
            lang.code.to_string(),
            lang.name.to_string(),
            i18n::flag_path(lang.code),
        ]);
    }
    println!("{table}");

    match stored {
        Some(code) => match i18n::language(&code) {
            Some(info) => println!("Current language: {code} ({})", info.name),
            None => println!("Current language: {code}"),
        },
        None => println!("No language picked yet, the picker opens on the next `verbdrill play`."),
    }
    Ok(())
}
