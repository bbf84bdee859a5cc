//! Events exchanged between the form session and its rendering surface

use crate::models::{FieldKey, ValidationErrors};

/// Events emitted by the rendering surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesignerEvent {
    /// Table name input changed
    SetTableName(String),

    /// Field name input changed
    SetFieldLegend { key: FieldKey, legend: String },

    /// Field type select changed
    SetFieldType { key: FieldKey, tag: String },

    /// User clicked "Add field"
    AddField,

    /// User clicked the remove button of a row
    DeleteField(FieldKey),

    /// User submitted the form
    Submit,

    /// The clipboard mechanism reported a successful copy
    Copied,
}

/// What changed in the session after handling an event,
/// so the rendering surface knows what to redraw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUpdate {
    /// Form rows or inputs changed
    FormChanged,

    /// A row was added
    FieldAdded(FieldKey),

    /// A submit produced new SQL
    SqlGenerated,

    /// A submit was rejected; the errors go inline next to their inputs
    Rejected(ValidationErrors),

    /// The copied indicator is now set
    CopiedChanged,
}
