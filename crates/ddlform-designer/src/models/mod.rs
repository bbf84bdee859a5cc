//! Models for table design
//!
//! Core data structures for the table definition form: the editable draft,
//! the validated design and the validation errors reported back to the form.

mod field_design;
mod field_type;
mod table_design;
mod validation;

pub use field_design::{FieldDesign, FieldDraft, FieldKey};
pub use field_type::FieldType;
pub use table_design::{TableDesign, TableDraft};
pub use validation::{
    FIELD_NAME_REQUIRED, FIELD_TYPE_REQUIRED, FieldPath, TABLE_NAME_REQUIRED, ValidationError,
    ValidationErrors,
};
