//! Validation types and logic

use super::FieldKey;

pub const TABLE_NAME_REQUIRED: &str = "Table name is required";
pub const FIELD_NAME_REQUIRED: &str = "Field name is required";
pub const FIELD_TYPE_REQUIRED: &str = "Field type is required";

/// Form slot a validation message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldPath {
    /// The table name input
    Table,
    /// The name input of a field row
    Legend(FieldKey),
    /// The type select of a field row
    Type(FieldKey),
}

impl FieldPath {
    /// Key of the field row this path points into, if any
    pub fn field_key(&self) -> Option<FieldKey> {
        match self {
            FieldPath::Table => None,
            FieldPath::Legend(key) | FieldPath::Type(key) => Some(*key),
        }
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldPath::Table => f.write_str("table"),
            FieldPath::Legend(key) => write!(f, "fields[{}].legend", key),
            FieldPath::Type(key) => write!(f, "fields[{}].type", key),
        }
    }
}

/// Validation error for a single form slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Slot that has the error
    pub field: FieldPath,
    /// Error message
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered, non-empty set of validation errors produced by a failed submit
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("table definition is invalid ({} error(s))", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Wrap collected errors. Returns `None` when there is nothing to report.
    pub(crate) fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// Message to show inline next to a slot
    pub fn for_path(&self, path: FieldPath) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == path)
            .map(|e| e.message.as_str())
    }

    /// All errors reported for one field row
    pub fn for_field(&self, key: FieldKey) -> Vec<&ValidationError> {
        self.errors
            .iter()
            .filter(|e| e.field.field_key() == Some(key))
            .collect()
    }

    /// Whether the table name slot has an error
    pub fn has_table_error(&self) -> bool {
        self.for_path(FieldPath::Table).is_some()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
