//! The `verbdrill init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("verbdrill.toml").exists() {
        println!("verbdrill.toml already exists, skipping.");
    } else {
        std::fs::write("verbdrill.toml", SAMPLE_CONFIG)?;
        println!("Created verbdrill.toml");
    }

    println!("\nNext steps:");
    println!("  1. Point `catalog` at your verben.json (path or URL)");
    println!("  2. Run: verbdrill validate --catalog verben.json");
    println!("  3. Run: verbdrill play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# verbdrill configuration

# Path or http(s) URL of the verb catalog
catalog = "verben.json"

# Where the stored catalog and language live
data_dir = "${HOME}/.local/share/verbdrill"

# Interface language shown until you pick one
default_language = "en"

[speech]
enabled = true
program = "espeak-ng"
args = ["-v", "{voice}", "-a", "{amplitude}", "-s", "{speed}", "-p", "{pitch}", "{text}"]
voice = "de-DE"
"#;
