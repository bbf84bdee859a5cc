//! Field type tags and their SQL column types

use serde::{Deserialize, Serialize};

/// Semantic type of a field as picked in the form's type select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Varchar,
    Double,
    Text,
    Int,
    Date,
    Datetime,
}

impl FieldType {
    /// All types, in the order they are offered to the user
    pub const ALL: [FieldType; 6] = [
        FieldType::Varchar,
        FieldType::Double,
        FieldType::Text,
        FieldType::Int,
        FieldType::Date,
        FieldType::Datetime,
    ];

    /// Parse a type tag (`"varchar"`, `"double"`, ...)
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "varchar" => Some(FieldType::Varchar),
            "double" => Some(FieldType::Double),
            "text" => Some(FieldType::Text),
            "int" => Some(FieldType::Int),
            "date" => Some(FieldType::Date),
            "datetime" => Some(FieldType::Datetime),
            _ => None,
        }
    }

    /// The tag used on the wire and in the form
    pub fn tag(&self) -> &'static str {
        match self {
            FieldType::Varchar => "varchar",
            FieldType::Double => "double",
            FieldType::Text => "text",
            FieldType::Int => "int",
            FieldType::Date => "date",
            FieldType::Datetime => "datetime",
        }
    }

    /// Get the display name for select widgets
    pub fn title(&self) -> &'static str {
        match self {
            FieldType::Varchar => "Varchar",
            FieldType::Double => "Value",
            FieldType::Text => "Text",
            FieldType::Int => "Integer",
            FieldType::Date => "Date",
            FieldType::Datetime => "Date Time",
        }
    }

    /// SQL column type emitted in CREATE TABLE
    pub fn sql_type(&self) -> &'static str {
        match self {
            FieldType::Double => "DOUBLE (11,2)",
            FieldType::Text => "TEXT",
            FieldType::Int => "INT (11)",
            FieldType::Date => "DATE",
            FieldType::Datetime => "DATETIME",
            FieldType::Varchar => "VARCHAR (200)",
        }
    }

    /// SQL column type for a raw tag. Unrecognized tags fall back to VARCHAR.
    pub fn sql_type_for_tag(tag: &str) -> &'static str {
        Self::from_tag(tag).unwrap_or_default().sql_type()
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
