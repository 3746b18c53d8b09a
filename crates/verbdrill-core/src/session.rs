//! Session driver: runs the reducer and carries out its effects.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::app::{App, Effect, Intent, View};
use crate::error::QuizError;
use crate::events::EventSink;
use crate::i18n::DEFAULT_LANGUAGE;
use crate::loader::CatalogLoader;
use crate::persistence::Persistence;
use crate::speech::SpeechAdapter;

/// One learner's quiz session.
///
/// Owns the [`App`] state and the collaborators its effects need. All
/// mutation goes through [`Session::handle`].
pub struct Session {
    app: App,
    loader: CatalogLoader,
    persistence: Persistence,
    speech: SpeechAdapter,
    events: Arc<dyn EventSink>,
    rng: StdRng,
    speech_tasks: Vec<JoinHandle<()>>,
}

impl Session {
    /// Create a session, restoring the stored interface language.
    pub fn new(
        loader: CatalogLoader,
        persistence: Persistence,
        speech: SpeechAdapter,
        events: Arc<dyn EventSink>,
    ) -> Self {
        let app = App::new(persistence.load_language(), DEFAULT_LANGUAGE);
        Self {
            app,
            loader,
            persistence,
            speech,
            events,
            rng: StdRng::from_entropy(),
            speech_tasks: Vec::new(),
        }
    }

    /// Use a seeded RNG so rounds are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Language shown underneath the picker until one is chosen.
    pub fn with_fallback_language(mut self, code: &str) -> Self {
        self.app.set_fallback_language(code);
        self
    }

    /// Load the catalog and build the first round.
    ///
    /// On failure the session stays on the loading screen; the error is
    /// logged and returned for the caller to report.
    pub async fn start(&mut self) -> Result<(), QuizError> {
        match self.loader.load().await {
            Ok(catalog) => {
                info!(records = catalog.len(), "catalog ready");
                self.handle(Intent::CatalogLoaded(catalog));
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "catalog could not be loaded, staying on loading screen");
                Err(e)
            }
        }
    }

    /// Dispatch one intent and perform its effects.
    pub fn handle(&mut self, intent: Intent) {
        let effects = self.app.dispatch(intent, &mut self.rng);
        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::SaveCatalog(catalog) => self.persistence.save_catalog(&catalog),
            Effect::SaveLanguage(code) => self.persistence.save_language(&code),
            Effect::Speak(text) => {
                self.speech_tasks.retain(|task| !task.is_finished());
                self.speech_tasks.push(self.speech.speak(&text));
            }
            Effect::Emit(event) => self.events.record(&event),
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn view(&self) -> View {
        self.app.view()
    }

    /// Wait for every speech task started so far.
    pub async fn drain_speech(&mut self) {
        for task in self.speech_tasks.drain(..) {
            let _ = task.await;
        }
    }
}
