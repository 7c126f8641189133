//! The fixed, ordered enumeration of valid category labels.
//!
//! A taxonomy is injected into the classifier and merge pipeline as an
//! immutable value; it is never a hidden module-level global, so tests can
//! substitute alternate label sets. A label's 1-based position defines the
//! index the oracle is asked to answer with.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// An ordered, fixed sequence of category labels plus a designated fallback.
///
/// Invariants enforced at construction: at least one label, no duplicate
/// labels, fallback is a member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Taxonomy {
    labels: Vec<String>,
    fallback: String,
}

impl Taxonomy {
    /// Build a validated taxonomy from labels and a fallback label.
    pub fn new(
        labels: Vec<String>,
        fallback: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let fallback = fallback.into();
        if labels.is_empty() {
            return Err(ConfigError::EmptyTaxonomy);
        }
        for (i, label) in labels.iter().enumerate() {
            if labels[..i].contains(label) {
                return Err(ConfigError::DuplicateLabel {
                    label: label.clone(),
                });
            }
        }
        if !labels.contains(&fallback) {
            return Err(ConfigError::FallbackNotInTaxonomy { label: fallback });
        }
        Ok(Self { labels, fallback })
    }

    /// The reference instance: the nine bioethics timeline categories.
    pub fn reference() -> Self {
        let labels = [
            "Medical and Clinical Ethics",
            "Legislation and Rights",
            "Research and Experimentation",
            "Feminist Bioethics",
            "Animal Bioethics",
            "Environmental Bioethics",
            "Education and Training",
            "Public Health",
            "Institutionalization",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        // The reference fallback is the last label; new() cannot fail here.
        Self::new(labels, "Institutionalization").expect("reference taxonomy is valid")
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the taxonomy has no labels. Always false for a constructed
    /// taxonomy; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label at the given 1-based position, or `None` when out of range.
    pub fn label_at(&self, index: usize) -> Option<&str> {
        if index == 0 {
            return None;
        }
        self.labels.get(index - 1).map(String::as_str)
    }

    /// 1-based position of a label, or `None` when it is not a member.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label).map(|i| i + 1)
    }

    /// Whether the label is a member.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// All labels in taxonomy order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The designated fallback label.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_has_nine_labels() {
        let taxonomy = Taxonomy::reference();
        assert_eq!(taxonomy.len(), 9);
        assert_eq!(taxonomy.fallback(), "Institutionalization");
        assert!(taxonomy.contains(taxonomy.fallback()));
    }

    #[test]
    fn label_at_is_one_based() {
        let taxonomy = Taxonomy::reference();
        assert_eq!(taxonomy.label_at(1), Some("Medical and Clinical Ethics"));
        assert_eq!(taxonomy.label_at(9), Some("Institutionalization"));
        assert_eq!(taxonomy.label_at(0), None);
        assert_eq!(taxonomy.label_at(10), None);
    }

    #[test]
    fn position_inverts_label_at() {
        let taxonomy = Taxonomy::reference();
        for (i, label) in taxonomy.labels().iter().enumerate() {
            assert_eq!(taxonomy.position(label), Some(i + 1));
        }
        assert_eq!(taxonomy.position("Not A Category"), None);
    }

    #[test]
    fn empty_labels_rejected() {
        let err = Taxonomy::new(vec![], "X").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyTaxonomy));
    }

    #[test]
    fn duplicate_labels_rejected() {
        let err =
            Taxonomy::new(vec!["A".into(), "B".into(), "A".into()], "B").unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateLabel { label } if label == "A"));
    }

    #[test]
    fn fallback_must_be_member() {
        let err = Taxonomy::new(vec!["A".into(), "B".into()], "C").unwrap_err();
        assert!(
            matches!(err, ConfigError::FallbackNotInTaxonomy { label } if label == "C")
        );
    }
}
