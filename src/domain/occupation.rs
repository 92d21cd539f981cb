//! Occupation classification record.
//!
//! One [`Occupation`] is one row of the NCO-2015 classification as returned by
//! the search service. Records are immutable values; the session only stores
//! and slices them.

use serde::{Deserialize, Serialize};

/// A single NCO classification entry.
///
/// Field names on the wire follow the search backend's JSON schema
/// (`occupation_title`, `nco_2015`, ...). The hierarchy labels (`division`,
/// `subdivision`, `group`, `family`) are informational only.
///
/// `similarity_score` is present only on semantic-mode results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occupation {
    #[serde(rename = "occupation_title")]
    pub title: String,

    /// Primary identifier, used as the stable rendering key.
    #[serde(rename = "nco_2015")]
    pub code_2015: String,

    #[serde(rename = "nco_2004")]
    pub code_2004: String,

    #[serde(default)]
    pub division: String,
    #[serde(default)]
    pub subdivision: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub family: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_score: Option<f64>,
}

impl Occupation {
    /// Creates a record with a title and both classification codes.
    ///
    /// Hierarchy labels start empty and there is no similarity score.
    ///
    /// # Examples
    ///
    /// ```
    /// use ncosearch::domain::Occupation;
    ///
    /// let medic = Occupation::new("Combat Medic", "31-9099.01", "31-9099.00");
    /// assert_eq!(medic.code_2015, "31-9099.01");
    /// assert!(medic.similarity_score.is_none());
    /// ```
    #[must_use]
    pub fn new(title: impl Into<String>, code_2015: impl Into<String>, code_2004: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            code_2015: code_2015.into(),
            code_2004: code_2004.into(),
            division: String::new(),
            subdivision: String::new(),
            group: String::new(),
            family: String::new(),
            similarity_score: None,
        }
    }

    /// Sets the four hierarchy labels.
    #[must_use]
    pub fn with_hierarchy(
        mut self,
        division: impl Into<String>,
        subdivision: impl Into<String>,
        group: impl Into<String>,
        family: impl Into<String>,
    ) -> Self {
        self.division = division.into();
        self.subdivision = subdivision.into();
        self.group = group.into();
        self.family = family.into();
        self
    }

    /// Attaches a semantic similarity score.
    #[must_use]
    pub fn with_score(mut self, score: f64) -> Self {
        self.similarity_score = Some(score);
        self
    }

    /// Formats the similarity score with two decimals, or an empty string.
    #[must_use]
    pub fn score_label(&self) -> String {
        self.similarity_score
            .map_or_else(String::new, |score| format!("{score:.2}"))
    }
}

/// Counts records whose `code_2015` repeats an earlier record in `records`.
///
/// A well-behaved search service never returns duplicates within one
/// response; the session logs the count but keeps the records as delivered.
#[must_use]
pub fn duplicate_code_count(records: &[Occupation]) -> usize {
    let mut seen = std::collections::HashSet::with_capacity(records.len());
    records
        .iter()
        .filter(|record| !seen.insert(record.code_2015.as_str()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_exact_row_without_score() {
        let json = r#"{
            "occupation_title": "Combat Medic",
            "nco_2015": "31-9099.01",
            "nco_2004": "31-9099.00",
            "division": "Healthcare Support Occupations",
            "subdivision": "Other Healthcare Support Occupations",
            "group": "Medical Assistants and Other Healthcare Support",
            "family": "Healthcare",
            "similarity_score": null
        }"#;

        let occupation: Occupation = serde_json::from_str(json).unwrap();
        assert_eq!(occupation.title, "Combat Medic");
        assert_eq!(occupation.code_2015, "31-9099.01");
        assert_eq!(occupation.family, "Healthcare");
        assert!(occupation.similarity_score.is_none());
        assert_eq!(occupation.score_label(), "");
    }

    #[test]
    fn decodes_semantic_row_with_score() {
        let json = r#"{
            "occupation_title": "Intelligence Analyst",
            "nco_2015": "19-3033.00",
            "nco_2004": "19-3022.00",
            "division": "",
            "subdivision": "",
            "group": "",
            "family": "Intelligence",
            "similarity_score": 0.8712
        }"#;

        let occupation: Occupation = serde_json::from_str(json).unwrap();
        assert_eq!(occupation.similarity_score, Some(0.8712));
        assert_eq!(occupation.score_label(), "0.87");
    }

    #[test]
    fn counts_repeated_codes() {
        let records = vec![
            Occupation::new("A", "11-1011.00", ""),
            Occupation::new("B", "15-1142.00", ""),
            Occupation::new("A again", "11-1011.00", ""),
        ];
        assert_eq!(duplicate_code_count(&records), 1);
        assert_eq!(duplicate_code_count(&[]), 0);
    }
}
