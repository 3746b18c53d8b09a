//! verbdrill-core: Quiz engine, persistence contract, and capability traits.
//!
//! This crate holds everything that can be tested without a terminal, a
//! network, or a speech engine: the verb catalog model, the round state
//! machine, the application reducer and its view model, and the adapters'
//! trait seams.

pub mod app;
pub mod error;
pub mod events;
pub mod i18n;
pub mod loader;
pub mod model;
pub mod persistence;
pub mod quiz;
pub mod session;
pub mod speech;
pub mod traits;
pub mod validate;

pub use app::{App, Effect, Intent, View};
pub use error::QuizError;
pub use model::{Catalog, VerbRecord};
pub use session::Session;
