//! Application state, the intent reducer, and the view model.
//!
//! [`App`] is the only place quiz state lives. It is mutated exclusively by
//! [`App::dispatch`], which returns the side effects the caller must carry
//! out (persistence writes, speech, analytics). [`App::view`] is a pure
//! function of the state and picks exactly one screen to show.
//!
//! Overlay precedence: the language picker covers the detail overlay, which
//! covers the quiz. Detail requested before a round exists shows the loading
//! screen.

use rand::Rng;
use tracing::warn;

use crate::events::QuizEvent;
use crate::i18n::{self, Label, LanguageInfo, DEFAULT_LANGUAGE, LANGUAGES, SPEECH_ICON};
use crate::model::{Catalog, TenseGroup};
use crate::quiz::{Mark, QuizRound, RoundState};

/// Something the learner (or the session lifecycle) asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// The catalog finished loading.
    CatalogLoaded(Catalog),
    /// Pick an interface language from the picker.
    PickLanguage(String),
    OpenLanguagePicker,
    OpenDetail,
    CloseDetail,
    /// Choose option `i` (0-based).
    SelectOption(usize),
    RequestNext,
    SpeakCurrent,
}

/// A side effect requested by [`App::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SaveCatalog(Catalog),
    SaveLanguage(String),
    Speak(String),
    Emit(QuizEvent),
}

/// Interface-only state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub language: String,
    pub show_detail: bool,
    pub show_language_picker: bool,
    pub loading: bool,
}

/// The whole quiz session state.
#[derive(Debug, Clone)]
pub struct App {
    catalog: Catalog,
    round: Option<QuizRound>,
    ui: UiState,
}

impl App {
    /// Start a session. Without a stored language the picker opens first and
    /// `fallback_language` is used underneath it.
    pub fn new(stored_language: Option<String>, fallback_language: &str) -> Self {
        let show_language_picker = stored_language.is_none();
        let language = stored_language.unwrap_or_else(|| {
            if fallback_language.is_empty() {
                DEFAULT_LANGUAGE.to_string()
            } else {
                fallback_language.to_string()
            }
        });
        Self {
            catalog: Catalog::default(),
            round: None,
            ui: UiState {
                language,
                show_detail: false,
                show_language_picker,
                loading: true,
            },
        }
    }

    /// Replace the language shown underneath the first-run picker. Has no
    /// effect once a language has been picked or restored.
    pub fn set_fallback_language(&mut self, code: &str) {
        if self.ui.show_language_picker && !code.is_empty() {
            self.ui.language = code.to_string();
        }
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn language(&self) -> &str {
        &self.ui.language
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn round(&self) -> Option<&QuizRound> {
        self.round.as_ref()
    }

    pub fn state(&self) -> RoundState {
        self.round
            .as_ref()
            .map_or(RoundState::Loading, QuizRound::state)
    }

    /// Apply one intent and return the effects it requires.
    pub fn dispatch<R: Rng + ?Sized>(&mut self, intent: Intent, rng: &mut R) -> Vec<Effect> {
        let mut effects = Vec::new();
        match intent {
            Intent::CatalogLoaded(catalog) => {
                effects.push(Effect::SaveCatalog(catalog.clone()));
                self.catalog = catalog;
                self.next_round(rng, &mut effects);
            }
            Intent::PickLanguage(code) => {
                if i18n::is_supported(&code) {
                    self.ui.language = code.clone();
                    self.ui.show_language_picker = false;
                    effects.push(Effect::SaveLanguage(code));
                } else {
                    warn!(code = %code, "ignoring unsupported language");
                }
            }
            Intent::OpenLanguagePicker => self.ui.show_language_picker = true,
            Intent::OpenDetail => self.ui.show_detail = true,
            Intent::CloseDetail => self.ui.show_detail = false,
            Intent::SelectOption(index) => {
                if let Some(round) = self.round.as_mut() {
                    if round.select(index) {
                        effects.push(Effect::Emit(QuizEvent::AnswerClicked {
                            verb: round.prompt().verb.clone(),
                            correct: round.is_correct().unwrap_or(false),
                        }));
                    }
                }
            }
            Intent::RequestNext => self.next_round(rng, &mut effects),
            Intent::SpeakCurrent => {
                if let Some(round) = &self.round {
                    let verb = round.prompt().verb.clone();
                    effects.push(Effect::Speak(verb.clone()));
                    effects.push(Effect::Emit(QuizEvent::SpeechTriggered { verb }));
                }
            }
        }
        effects
    }

    fn next_round<R: Rng + ?Sized>(&mut self, rng: &mut R, effects: &mut Vec<Effect>) {
        self.round = QuizRound::build(&self.catalog, rng);
        self.ui.loading = self.round.is_none();
        if let Some(round) = &self.round {
            effects.push(Effect::Emit(QuizEvent::PromptViewed {
                verb: round.prompt().verb.clone(),
            }));
        }
    }

    /// The screen to show for the current state.
    pub fn view(&self) -> View {
        let lang = self.ui.language.as_str();

        if self.ui.show_language_picker {
            return View::LanguagePicker(PickerView {
                languages: LANGUAGES
                    .iter()
                    .map(|l| LanguageEntry::new(l, lang))
                    .collect(),
            });
        }

        let Some(round) = self.round.as_ref().filter(|_| !self.ui.loading) else {
            return View::Loading;
        };

        if self.ui.show_detail {
            return View::Detail(DetailView {
                title: i18n::label(Label::Verb, lang).to_string(),
                close_label: i18n::label(Label::Close, lang).to_string(),
                verb: round.prompt().verb.clone(),
                groups: round.prompt().data.konjugation.clone(),
            });
        }

        View::Quiz(QuizView {
            prompt: round.prompt().verb.clone(),
            flag: i18n::flag_path(lang),
            speech_icon: SPEECH_ICON,
            options: round
                .options()
                .iter()
                .enumerate()
                .map(|(i, record)| OptionView {
                    label: record.translation_label(lang),
                    mark: round.mark(i),
                })
                .collect(),
            detail_label: i18n::label(Label::Verb, lang).to_string(),
            next_label: i18n::label(Label::Next, lang).to_string(),
            resolved: round.state() == RoundState::RoundResolved,
        })
    }
}

/// Exactly one screen.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Loading,
    Quiz(QuizView),
    Detail(DetailView),
    LanguagePicker(PickerView),
}

/// The active round.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizView {
    /// German infinitive being tested.
    pub prompt: String,
    /// Flag of the interface language.
    pub flag: String,
    pub speech_icon: &'static str,
    pub options: Vec<OptionView>,
    pub detail_label: String,
    pub next_label: String,
    /// An option has been chosen.
    pub resolved: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionView {
    /// Translations joined with ", ".
    pub label: String,
    pub mark: Mark,
}

/// Full conjugation table of the prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub title: String,
    pub close_label: String,
    pub verb: String,
    pub groups: Vec<TenseGroup>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickerView {
    pub languages: Vec<LanguageEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageEntry {
    pub code: String,
    pub name: String,
    pub flag: String,
    /// Currently active interface language.
    pub current: bool,
}

impl LanguageEntry {
    fn new(info: &LanguageInfo, current: &str) -> Self {
        Self {
            code: info.code.to_string(),
            name: info.name.to_string(),
            flag: i18n::flag_path(info.code),
            current: info.code == current,
        }
    }
}
