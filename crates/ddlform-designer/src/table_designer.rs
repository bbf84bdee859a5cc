//! Table Designer for ddlform
//!
//! Form model for describing a database table and turning it into a MySQL
//! `CREATE TABLE` statement.
//!
//! ## Features
//!
//! - Editable table draft with stable field row keys
//! - Field-keyed validation errors for inline display
//! - DDL generation with snake_case identifiers and column comments
//! - Per-view form session driven by rendering surface events
//!
//! ## Usage
//!
//! ```rust
//! use ddlform_designer::{DdlGenerator, FieldDraft, FieldType, TableDraft};
//!
//! let design = TableDraft::new("User Accounts")
//!     .with_field(FieldDraft::named("Full Name").of_type(FieldType::Varchar))
//!     .validate()
//!     .expect("valid table");
//!
//! let sql = DdlGenerator::generate_create_table(&design);
//! assert!(sql.starts_with("CREATE TABLE `user_accounts`"));
//! ```

pub mod events;
pub mod models;
pub mod service;
pub mod session;

// Re-exports for convenience
pub use events::{DesignerEvent, SessionUpdate};
pub use models::{
    FieldDesign, FieldDraft, FieldKey, FieldPath, FieldType, TableDesign, TableDraft,
    ValidationError, ValidationErrors,
};
pub use service::{DdlGenerator, to_snake_case};
pub use session::{Clipboard, FormSession, PLACEHOLDER_SQL, SessionError};
