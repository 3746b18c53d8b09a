//! verbdrill-adapters: Concrete implementations of the core capability
//! traits.
//!
//! Catalog sources (HTTP and local file), a file-backed key-value store, a
//! command-line text-to-speech speaker, test doubles, and the TOML config
//! that wires them together.

pub mod config;
pub mod error;
pub mod file;
pub mod http;
pub mod mock;
pub mod speech;
pub mod store;

pub use config::{create_catalog_source, create_speaker, load_config, VerbdrillConfig};
pub use error::AdapterError;
