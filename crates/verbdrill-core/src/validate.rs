//! Catalog sanity checks.

use std::collections::HashSet;

use crate::i18n::DEFAULT_LANGUAGE;
use crate::model::Catalog;
use crate::quiz::ROUND_SIZE;

/// A validation warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The verb (if applicable).
    pub verb: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a catalog for common issues.
///
/// None of these stop a quiz from running; they explain odd rounds.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if catalog.is_empty() {
        warnings.push(ValidationWarning {
            verb: None,
            message: "catalog is empty, no round can be built".into(),
        });
        return warnings;
    }

    if catalog.len() < ROUND_SIZE {
        warnings.push(ValidationWarning {
            verb: None,
            message: format!(
                "only {} verb(s), every round will repeat options",
                catalog.len()
            ),
        });
    }

    let mut seen = HashSet::new();
    for record in catalog.records() {
        if !seen.insert(record.verb.as_str()) {
            warnings.push(ValidationWarning {
                verb: Some(record.verb.clone()),
                message: format!("duplicate verb: {}", record.verb),
            });
        }
    }

    for record in catalog.records() {
        if record.verb.trim().is_empty() {
            warnings.push(ValidationWarning {
                verb: None,
                message: "record with an empty verb".into(),
            });
        }
        if !record.data.translate.contains_key(DEFAULT_LANGUAGE) {
            warnings.push(ValidationWarning {
                verb: Some(record.verb.clone()),
                message: "no English translation to fall back on".into(),
            });
        }
        if record.data.konjugation.is_empty() {
            warnings.push(ValidationWarning {
                verb: Some(record.verb.clone()),
                message: "conjugation table is empty".into(),
            });
        }
    }

    warnings
}
