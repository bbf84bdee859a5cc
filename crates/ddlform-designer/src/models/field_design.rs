//! Field design model

use serde::{Deserialize, Serialize};

use super::FieldType;

/// Stable position key of a field row.
///
/// Keys are slot indices handed out in insertion order. Removing a row leaves
/// its slot empty, so a key never moves to another field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldKey(usize);

impl FieldKey {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for FieldKey {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(FieldKey)
    }
}

fn default_type_tag() -> String {
    FieldType::default().tag().to_string()
}

/// A field row as entered in the form, before validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDraft {
    /// Human label, also used as the column comment
    #[serde(default)]
    pub legend: String,
    /// Type tag picked in the select (e.g. "varchar", "int")
    #[serde(rename = "type", default = "default_type_tag")]
    pub field_type: String,
}

impl Default for FieldDraft {
    fn default() -> Self {
        Self {
            legend: String::new(),
            field_type: default_type_tag(),
        }
    }
}

impl FieldDraft {
    /// Create an empty row with the default type
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row with a label
    pub fn named(legend: impl Into<String>) -> Self {
        Self {
            legend: legend.into(),
            ..Self::default()
        }
    }

    /// Builder: set type
    pub fn of_type(mut self, field_type: FieldType) -> Self {
        self.field_type = field_type.tag().to_string();
        self
    }

    /// Builder: set a raw type tag
    pub fn type_tag(mut self, tag: impl Into<String>) -> Self {
        self.field_type = tag.into();
        self
    }
}

/// A validated field, ready for DDL generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDesign {
    /// Row the field came from
    pub key: FieldKey,
    /// Human label, never blank
    pub legend: String,
    pub field_type: FieldType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_type_defaults_to_varchar() {
        let draft: FieldDraft = serde_json::from_str(r#"{"legend": "Name"}"#).expect("parse");
        assert_eq!(draft.field_type, "varchar");
        assert_eq!(draft.legend, "Name");
    }

    #[test]
    fn test_type_is_serialized_as_type() {
        let json = serde_json::to_value(FieldDraft::named("Price").of_type(FieldType::Double))
            .expect("serialize");
        assert_eq!(json["type"], "double");
    }

    #[test]
    fn test_key_parses_from_text() {
        assert_eq!(" 3 ".parse::<FieldKey>().ok(), Some(FieldKey::new(3)));
        assert!("x".parse::<FieldKey>().is_err());
    }
}
