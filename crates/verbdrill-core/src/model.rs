//! Verb catalog data model.
//!
//! The JSON shape matches the static catalog resource: an array of
//! `{ verb, data: { translate, konjugation } }` objects. The stored copy adds a
//! `score` to every record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::i18n::DEFAULT_LANGUAGE;

/// A single verb with its translations and conjugation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbRecord {
    /// German infinitive, unique within a catalog.
    pub verb: String,
    /// Translations and conjugation table.
    pub data: VerbData,
    /// Persisted score. Absent in the static resource.
    #[serde(default)]
    pub score: i64,
}

/// Translations and conjugations for one verb.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbData {
    /// Language code → ordered translations.
    #[serde(default)]
    pub translate: BTreeMap<String, Vec<String>>,
    /// Ordered tense groups.
    #[serde(default)]
    pub konjugation: Vec<TenseGroup>,
}

/// One tense (e.g. "Präsens") and its forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenseGroup {
    pub title: String,
    #[serde(default)]
    pub verb: Vec<Conjugation>,
}

/// A `{person, result}` pair such as `ich` → `gehe`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conjugation {
    pub person: String,
    pub result: String,
}

impl VerbRecord {
    /// Translations for `lang`, falling back to English and then to the
    /// infinitive itself.
    pub fn translation_label(&self, lang: &str) -> String {
        self.data
            .translate
            .get(lang)
            .filter(|t| !t.is_empty())
            .or_else(|| {
                self.data
                    .translate
                    .get(DEFAULT_LANGUAGE)
                    .filter(|t| !t.is_empty())
            })
            .map(|t| t.join(", "))
            .unwrap_or_else(|| self.verb.clone())
    }
}

/// Ordered collection of verb records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(Vec<VerbRecord>);

impl Catalog {
    pub fn new(records: Vec<VerbRecord>) -> Self {
        Self(records)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn records(&self) -> &[VerbRecord] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&VerbRecord> {
        self.0.get(index)
    }

    /// Look up a record by its infinitive (case-insensitive).
    pub fn find(&self, verb: &str) -> Option<&VerbRecord> {
        self.0.iter().find(|r| r.verb.eq_ignore_ascii_case(verb))
    }

    /// Reset every score to zero, as done for a freshly fetched catalog.
    pub fn with_zero_scores(mut self) -> Self {
        for record in &mut self.0 {
            record.score = 0;
        }
        self
    }

    /// Language codes present in at least one record's translations.
    pub fn translation_languages(&self) -> Vec<String> {
        let mut langs: Vec<String> = self
            .0
            .iter()
            .flat_map(|r| r.data.translate.keys().cloned())
            .collect();
        langs.sort();
        langs.dedup();
        langs
    }

    /// Parse a catalog from JSON text.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize the catalog, scores included.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<Vec<VerbRecord>> for Catalog {
    fn from(records: Vec<VerbRecord>) -> Self {
        Self(records)
    }
}

impl IntoIterator for Catalog {
    type Item = VerbRecord;
    type IntoIter = std::vec::IntoIter<VerbRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    const SOURCE_JSON: &str = r#"[
        {
            "verb": "gehen",
            "data": {
                "translate": { "en": ["to go", "to walk"], "tr": ["gitmek"] },
                "konjugation": [
                    { "title": "Präsens", "verb": [
                        { "person": "ich", "result": "gehe" },
                        { "person": "du", "result": "gehst" }
                    ] }
                ]
            }
        }
    ]"#;

    #[test]
    fn parse_static_resource_without_score() {
        let catalog = Catalog::from_json(SOURCE_JSON).unwrap();
        assert_eq!(catalog.len(), 1);
        let gehen = catalog.find("gehen").unwrap();
        assert_eq!(gehen.score, 0);
        assert_eq!(gehen.data.translate["en"], vec!["to go", "to walk"]);
        assert_eq!(gehen.data.konjugation[0].verb[1].result, "gehst");
    }

    #[test]
    fn scores_survive_serialization() {
        let mut records = four_verbs().into_iter().collect::<Vec<_>>();
        records[2].score = 7;
        records[3].score = -3;
        let catalog = Catalog::new(records);

        let json = catalog.to_json().unwrap();
        assert!(json.starts_with('['));
        let back = Catalog::from_json(&json).unwrap();
        assert_eq!(back, catalog);
        assert_eq!(back.get(2).unwrap().score, 7);
    }

    #[test]
    fn zero_scores() {
        let mut records = four_verbs().into_iter().collect::<Vec<_>>();
        records[0].score = 12;
        let catalog = Catalog::new(records).with_zero_scores();
        assert!(catalog.records().iter().all(|r| r.score == 0));
    }

    #[test]
    fn translation_label_fallbacks() {
        let catalog = Catalog::from_json(SOURCE_JSON).unwrap();
        let gehen = catalog.get(0).unwrap();
        assert_eq!(gehen.translation_label("en"), "to go, to walk");
        assert_eq!(gehen.translation_label("tr"), "gitmek");
        assert_eq!(gehen.translation_label("fa"), "to go, to walk");

        let bare = VerbRecord {
            verb: "sein".into(),
            data: VerbData::default(),
            score: 0,
        };
        assert_eq!(bare.translation_label("en"), "sein");
    }

    #[test]
    fn empty_translation_list_falls_back_to_english() {
        let mut gehen = record("gehen", "to go");
        gehen.data.translate.insert("tr".into(), vec![]);
        assert_eq!(gehen.translation_label("tr"), "to go");

        gehen.data.translate.insert("en".into(), vec![]);
        assert_eq!(gehen.translation_label("tr"), "gehen");
    }

    #[test]
    fn find_is_case_insensitive() {
        let catalog = four_verbs();
        assert!(catalog.find("LAUFEN").is_some());
        assert!(catalog.find("machen").is_none());
    }

    #[test]
    fn translation_languages_are_deduplicated() {
        let catalog = Catalog::from_json(SOURCE_JSON).unwrap();
        assert_eq!(catalog.translation_languages(), vec!["en", "tr"]);
    }
}
