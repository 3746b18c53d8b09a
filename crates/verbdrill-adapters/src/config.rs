//! Configuration and adapter factories.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use verbdrill_core::i18n::DEFAULT_LANGUAGE;
use verbdrill_core::speech::NoopSpeaker;
use verbdrill_core::traits::{CatalogSource, Speaker, SPEECH_LANGUAGE};

use crate::file::FileCatalogSource;
use crate::http::HttpCatalogSource;
use crate::speech::{default_args, CommandSpeaker, DEFAULT_PROGRAM};

/// Top-level verbdrill configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerbdrillConfig {
    /// Catalog location: an `http(s)://` URL or a local path.
    #[serde(default = "default_catalog")]
    pub catalog: String,
    /// Directory holding the stored catalog and language.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Interface language used until one is picked.
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Text-to-speech settings.
    #[serde(default)]
    pub speech: SpeechConfig,
}

/// Text-to-speech settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Program to run per utterance.
    #[serde(default = "default_program")]
    pub program: String,
    /// Argument templates, see [`CommandSpeaker`].
    #[serde(default = "default_args")]
    pub args: Vec<String>,
    /// Voice language.
    #[serde(default = "default_voice")]
    pub voice: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: default_program(),
            args: default_args(),
            voice: default_voice(),
        }
    }
}

fn default_catalog() -> String {
    "verben.json".to_string()
}
fn default_data_dir() -> PathBuf {
    std::env::var("HOME")
        .map(|h| PathBuf::from(h).join(".local").join("share").join("verbdrill"))
        .unwrap_or_else(|_| PathBuf::from(".verbdrill"))
}
fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}
fn default_true() -> bool {
    true
}
fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}
fn default_voice() -> String {
    SPEECH_LANGUAGE.to_string()
}

impl Default for VerbdrillConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            data_dir: default_data_dir(),
            default_language: default_language(),
            speech: SpeechConfig::default(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are copied verbatim and never expanded again. An
/// unterminated `${` is kept as-is.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start + 2..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + 2 + len];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + 2 + len + 1..];
    }
    result.push_str(rest);
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `verbdrill.toml` in the current directory
/// 2. `~/.config/verbdrill/config.toml`
///
/// Environment variable overrides: `VERBDRILL_CATALOG`, `VERBDRILL_DATA_DIR`.
pub fn load_config() -> Result<VerbdrillConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<VerbdrillConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("verbdrill.toml");
        if local.exists() {
            Some(local)
        } else {
            config_dir()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<VerbdrillConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => VerbdrillConfig::default(),
    };

    if let Ok(catalog) = std::env::var("VERBDRILL_CATALOG") {
        config.catalog = catalog;
    }
    if let Ok(dir) = std::env::var("VERBDRILL_DATA_DIR") {
        config.data_dir = PathBuf::from(dir);
    }

    config.catalog = resolve_env_vars(&config.catalog);
    config.data_dir = PathBuf::from(resolve_env_vars(&config.data_dir.to_string_lossy()));
    config.speech.program = resolve_env_vars(&config.speech.program);

    Ok(config)
}

fn config_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("verbdrill"))
}

/// Returns `true` if `location` should be fetched over HTTP.
pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Create a catalog source for a URL or a local path.
pub fn create_catalog_source(location: &str) -> Result<Arc<dyn CatalogSource>> {
    if is_remote(location) {
        Ok(Arc::new(HttpCatalogSource::new(location)?))
    } else {
        Ok(Arc::new(FileCatalogSource::new(location)))
    }
}

/// Create the configured speaker, or a silent one when speech is disabled.
pub fn create_speaker(config: &SpeechConfig) -> Arc<dyn Speaker> {
    if config.enabled {
        Arc::new(CommandSpeaker::new(&config.program, config.args.clone()))
    } else {
        Arc::new(NoopSpeaker)
    }
}
