//! Table design model

use serde::{Deserialize, Serialize};

use super::validation::{FIELD_NAME_REQUIRED, FIELD_TYPE_REQUIRED, TABLE_NAME_REQUIRED};
use super::{
    FieldDesign, FieldDraft, FieldKey, FieldPath, FieldType, ValidationError, ValidationErrors,
};

/// Table definition as entered in the form.
///
/// Field rows live in a sparse list: deleting a row leaves an empty slot so
/// the keys of the remaining rows stay the same.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDraft {
    /// Table name as typed by the user
    #[serde(default)]
    pub table: String,
    /// Field rows; `None` marks a removed row
    #[serde(default)]
    fields: Vec<Option<FieldDraft>>,
}

impl TableDraft {
    /// Create a draft with a table name and no fields
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            fields: Vec::new(),
        }
    }

    /// Builder: add a field row
    pub fn with_field(mut self, field: FieldDraft) -> Self {
        self.fields.push(Some(field));
        self
    }

    /// Append a field row and return its key
    pub fn add_field(&mut self, field: FieldDraft) -> FieldKey {
        self.fields.push(Some(field));
        FieldKey::new(self.fields.len() - 1)
    }

    /// Remove a field row, keeping its slot. Returns the removed row.
    pub fn remove_field(&mut self, key: FieldKey) -> Option<FieldDraft> {
        self.fields.get_mut(key.index()).and_then(Option::take)
    }

    pub fn field(&self, key: FieldKey) -> Option<&FieldDraft> {
        self.fields.get(key.index()).and_then(Option::as_ref)
    }

    pub fn field_mut(&mut self, key: FieldKey) -> Option<&mut FieldDraft> {
        self.fields.get_mut(key.index()).and_then(Option::as_mut)
    }

    /// Present rows with their keys, in key order
    pub fn fields(&self) -> impl Iterator<Item = (FieldKey, &FieldDraft)> {
        self.fields
            .iter()
            .enumerate()
            .filter_map(|(i, f)| f.as_ref().map(|f| (FieldKey::new(i), f)))
    }

    /// Number of present rows
    pub fn field_count(&self) -> usize {
        self.fields.iter().flatten().count()
    }

    /// Number of slots ever allocated, removed rows included
    pub fn slot_count(&self) -> usize {
        self.fields.len()
    }

    /// Check the draft and produce a validated design.
    ///
    /// Removed rows are skipped. Errors are ordered table first, then by
    /// field key with the name before the type.
    pub fn validate(&self) -> Result<TableDesign, ValidationErrors> {
        let mut errors = Vec::new();

        if self.table.trim().is_empty() {
            errors.push(ValidationError::new(FieldPath::Table, TABLE_NAME_REQUIRED));
        }

        let mut fields = Vec::with_capacity(self.fields.len());
        for (key, draft) in self.fields() {
            if draft.legend.trim().is_empty() {
                errors.push(ValidationError::new(
                    FieldPath::Legend(key),
                    FIELD_NAME_REQUIRED,
                ));
            }
            match FieldType::from_tag(&draft.field_type) {
                Some(field_type) => fields.push(FieldDesign {
                    key,
                    legend: draft.legend.clone(),
                    field_type,
                }),
                None => errors.push(ValidationError::new(
                    FieldPath::Type(key),
                    FIELD_TYPE_REQUIRED,
                )),
            }
        }

        match ValidationErrors::from_vec(errors) {
            Some(errors) => {
                tracing::debug!(errors = errors.len(), "table draft rejected");
                Err(errors)
            }
            None => Ok(TableDesign {
                table_name: self.table.clone(),
                fields,
            }),
        }
    }
}

/// Validated table definition.
///
/// Only produced by [`TableDraft::validate`]: the table name is not blank and
/// every field has a label and a known type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDesign {
    table_name: String,
    fields: Vec<FieldDesign>,
}

impl TableDesign {
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Fields in key order
    pub fn fields(&self) -> &[FieldDesign] {
        &self.fields
    }
}
