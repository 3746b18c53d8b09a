//! Interface languages, button labels, and asset paths.

/// Default interface language when none has been picked.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Icon shown next to the prompt for text-to-speech.
pub const SPEECH_ICON: &str = "/volume.svg";

/// An interface language offered in the language picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageInfo {
    /// Two-letter code, also the key into a record's translations.
    pub code: &'static str,
    /// Native name shown in the picker.
    pub name: &'static str,
}

/// Languages offered in the picker, in display order.
pub const LANGUAGES: &[LanguageInfo] = &[
    LanguageInfo { code: "en", name: "English" },
    LanguageInfo { code: "de", name: "Deutsch" },
    LanguageInfo { code: "tr", name: "Türkçe" },
    LanguageInfo { code: "ar", name: "العربية" },
    LanguageInfo { code: "fa", name: "فارسی" },
    LanguageInfo { code: "ru", name: "Русский" },
    LanguageInfo { code: "fr", name: "Français" },
    LanguageInfo { code: "es", name: "Español" },
];

/// Returns `true` if `code` is offered in the picker.
pub fn is_supported(code: &str) -> bool {
    LANGUAGES.iter().any(|l| l.code == code)
}

/// Look up a language by code.
pub fn language(code: &str) -> Option<&'static LanguageInfo> {
    LANGUAGES.iter().find(|l| l.code == code)
}

/// Flag image for a language code.
pub fn flag_path(code: &str) -> String {
    format!("/flag/{code}.png")
}

/// Translatable interface labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// Opens the conjugation table; also the detail overlay's title.
    Verb,
    /// Requests a new round.
    Next,
    /// Closes the detail overlay.
    Close,
}

/// Label text in `lang`, falling back to English.
pub fn label(label: Label, lang: &str) -> &'static str {
    let (verb, next, close) = match lang {
        "de" => ("Konjugation", "Weiter", "Schließen"),
        "tr" => ("Çekim", "Sonraki", "Kapat"),
        "ar" => ("التصريف", "التالي", "إغلاق"),
        "fa" => ("صرف فعل", "بعدی", "بستن"),
        "ru" => ("Спряжение", "Далее", "Закрыть"),
        "fr" => ("Conjugaison", "Suivant", "Fermer"),
        "es" => ("Conjugación", "Siguiente", "Cerrar"),
        _ => ("Conjugation", "Next", "Close"),
    };
    match label {
        Label::Verb => verb,
        Label::Next => next,
        Label::Close => close,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_labels() {
        for lang in LANGUAGES {
            assert!(!label(Label::Next, lang.code).is_empty());
        }
        assert_eq!(label(Label::Close, "fr"), "Fermer");
    }

    #[test]
    fn unknown_language_uses_english() {
        assert_eq!(label(Label::Verb, "xx"), label(Label::Verb, "en"));
        assert!(!is_supported("xx"));
        assert!(language("xx").is_none());
    }

    #[test]
    fn default_language_is_offered() {
        assert!(is_supported(DEFAULT_LANGUAGE));
        assert_eq!(language("de").map(|l| l.name), Some("Deutsch"));
    }

    #[test]
    fn flag_paths() {
        assert_eq!(flag_path("tr"), "/flag/tr.png");
    }
}
