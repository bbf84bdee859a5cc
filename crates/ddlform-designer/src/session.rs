//! Form session
//!
//! State of one open table definition form. A session is created when the
//! form is mounted and dropped when the user navigates away; it owns the
//! draft being edited, the SQL currently on display and the copied flag.
//!
//! ## Event flow
//! 1. Input changes and row add/remove only touch the draft
//! 2. Submit validates the draft; on success the SQL on display is replaced
//!    and the copied flag is reset
//! 3. Copy hands the SQL on display to the clipboard mechanism and sets the
//!    copied flag once it reports success

use uuid::Uuid;

use crate::events::{DesignerEvent, SessionUpdate};
use crate::models::{FieldDraft, FieldKey, TableDraft, ValidationErrors};
use crate::service::DdlGenerator;

/// SQL shown before the first successful submit
pub const PLACEHOLDER_SQL: &str = "/* Define the table name and add\n   the required fields */";

/// Clipboard mechanism the session copies generated SQL into
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no field row with key {0}")]
    UnknownField(FieldKey),
}

/// One open table definition form
#[derive(Debug)]
pub struct FormSession {
    id: Uuid,

    /// The table definition being edited
    draft: TableDraft,

    /// SQL on display
    sql: String,

    /// Whether `sql` was copied since it was generated
    copied: bool,

    /// Errors from the last rejected submit
    errors: Option<ValidationErrors>,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    /// Create a session with one empty field row
    pub fn new() -> Self {
        let mut draft = TableDraft::default();
        draft.add_field(FieldDraft::new());

        let id = Uuid::new_v4();
        tracing::debug!(session = %id, "form session opened");

        Self {
            id,
            draft,
            sql: PLACEHOLDER_SQL.to_string(),
            copied: false,
            errors: None,
        }
    }

    /// Create a session around an existing draft
    pub fn with_draft(draft: TableDraft) -> Self {
        Self {
            draft,
            ..Self::new()
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn draft(&self) -> &TableDraft {
        &self.draft
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Errors from the last rejected submit, cleared by the next successful one
    pub fn errors(&self) -> Option<&ValidationErrors> {
        self.errors.as_ref()
    }

    /// Whether the SQL on display was generated (not the placeholder)
    pub fn has_generated_sql(&self) -> bool {
        self.sql != PLACEHOLDER_SQL
    }

    pub fn set_table_name(&mut self, name: impl Into<String>) {
        self.draft.table = name.into();
    }

    pub fn set_field_legend(
        &mut self,
        key: FieldKey,
        legend: impl Into<String>,
    ) -> Result<(), SessionError> {
        let field = self
            .draft
            .field_mut(key)
            .ok_or(SessionError::UnknownField(key))?;
        field.legend = legend.into();
        Ok(())
    }

    pub fn set_field_type(
        &mut self,
        key: FieldKey,
        tag: impl Into<String>,
    ) -> Result<(), SessionError> {
        let field = self
            .draft
            .field_mut(key)
            .ok_or(SessionError::UnknownField(key))?;
        field.field_type = tag.into();
        Ok(())
    }

    /// Append an empty row
    pub fn add_field(&mut self) -> FieldKey {
        let key = self.draft.add_field(FieldDraft::new());
        tracing::debug!(session = %self.id, key = %key, "field row added");
        key
    }

    /// Remove a row, leaving the keys of the other rows untouched.
    /// Returns false when the row was already gone.
    pub fn delete_field(&mut self, key: FieldKey) -> bool {
        let removed = self.draft.remove_field(key).is_some();
        tracing::debug!(session = %self.id, key = %key, removed, "field row removed");
        removed
    }

    /// Validate the draft and, if it is valid, replace the SQL on display.
    ///
    /// A rejected submit keeps the previous SQL and copied flag.
    pub fn submit(&mut self) -> Result<&str, ValidationErrors> {
        let _span = tracing::debug_span!("submit", session = %self.id).entered();

        match self.draft.validate() {
            Ok(design) => {
                self.sql = DdlGenerator::generate_create_table(&design);
                self.copied = false;
                self.errors = None;
                tracing::info!(
                    table = %design.table_name(),
                    fields = design.fields().len(),
                    "SQL generated"
                );
                Ok(&self.sql)
            }
            Err(errors) => {
                tracing::warn!("Validation errors: {:?}", errors);
                self.errors = Some(errors.clone());
                Err(errors)
            }
        }
    }

    /// Copy the SQL on display through the clipboard mechanism
    pub fn copy<C: Clipboard + ?Sized>(&mut self, clipboard: &mut C) -> anyhow::Result<()> {
        clipboard.set_text(&self.sql)?;
        self.mark_copied();
        Ok(())
    }

    /// Record that the SQL on display reached the clipboard
    pub fn mark_copied(&mut self) {
        self.copied = true;
        tracing::info!(session = %self.id, "SQL copied to clipboard");
    }

    /// Discard the current definition and start over
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Apply an event from the rendering surface
    pub fn handle_event(&mut self, event: DesignerEvent) -> Result<SessionUpdate, SessionError> {
        match event {
            DesignerEvent::SetTableName(name) => {
                self.set_table_name(name);
                Ok(SessionUpdate::FormChanged)
            }
            DesignerEvent::SetFieldLegend { key, legend } => {
                self.set_field_legend(key, legend)?;
                Ok(SessionUpdate::FormChanged)
            }
            DesignerEvent::SetFieldType { key, tag } => {
                self.set_field_type(key, tag)?;
                Ok(SessionUpdate::FormChanged)
            }
            DesignerEvent::AddField => Ok(SessionUpdate::FieldAdded(self.add_field())),
            DesignerEvent::DeleteField(key) => {
                self.delete_field(key);
                Ok(SessionUpdate::FormChanged)
            }
            DesignerEvent::Submit => match self.submit() {
                Ok(_) => Ok(SessionUpdate::SqlGenerated),
                Err(errors) => Ok(SessionUpdate::Rejected(errors)),
            },
            DesignerEvent::Copied => {
                self.mark_copied();
                Ok(SessionUpdate::CopiedChanged)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FieldPath, TABLE_NAME_REQUIRED};

    #[derive(Default)]
    struct MemoryClipboard {
        text: Option<String>,
    }

    impl Clipboard for MemoryClipboard {
        fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
            self.text = Some(text.to_string());
            Ok(())
        }
    }

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn set_text(&mut self, _text: &str) -> anyhow::Result<()> {
            anyhow::bail!("clipboard unavailable")
        }
    }

    #[test]
    fn test_new_session_has_one_empty_row() {
        let session = FormSession::new();

        assert_eq!(session.draft().field_count(), 1);
        assert_eq!(session.sql(), PLACEHOLDER_SQL);
        assert!(!session.is_copied());
        assert!(!session.has_generated_sql());
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = FormSession::new();
        let b = FormSession::new();
        a.set_table_name("orders");

        assert_ne!(a.id(), b.id());
        assert_eq!(b.draft().table, "");
    }

    #[test]
    fn test_submit_replaces_sql_and_resets_copied() {
        let mut session = FormSession::new();
        let key = FieldKey::new(0);
        session.set_table_name("Books");
        session.set_field_legend(key, "Title").expect("row exists");
        session.submit().expect("valid");

        let mut clipboard = MemoryClipboard::default();
        session.copy(&mut clipboard).expect("copy");
        assert!(session.is_copied());
        assert_eq!(clipboard.text.as_deref(), Some(session.sql()));

        session.set_field_type(key, "text").expect("row exists");
        let sql = session.submit().expect("valid").to_string();

        assert!(sql.contains("`TITLE_BOOKS` TEXT NOT NULL"));
        assert!(!session.is_copied());
    }

    #[test]
    fn test_rejected_submit_keeps_previous_sql() {
        let mut session = FormSession::new();
        session.set_table_name("Books");
        session
            .set_field_legend(FieldKey::new(0), "Title")
            .expect("row exists");
        let generated = session.submit().expect("valid").to_string();
        session.mark_copied();

        session.set_table_name("  ");
        let errors = session.submit().expect_err("blank table name");

        assert_eq!(errors.for_path(FieldPath::Table), Some(TABLE_NAME_REQUIRED));
        assert_eq!(session.sql(), generated);
        assert!(session.is_copied());
        assert!(session.errors().is_some());
    }

    #[test]
    fn test_successful_submit_clears_errors() {
        let mut session = FormSession::new();
        assert!(session.submit().is_err());
        assert!(session.errors().is_some());

        session.set_table_name("t");
        session
            .set_field_legend(FieldKey::new(0), "a")
            .expect("row exists");
        session.submit().expect("valid");
        assert!(session.errors().is_none());
    }

    #[test]
    fn test_failed_copy_leaves_flag_unset() {
        let mut session = FormSession::new();
        assert!(session.copy(&mut BrokenClipboard).is_err());
        assert!(!session.is_copied());
    }

    #[test]
    fn test_delete_does_not_touch_sql() {
        let mut session = FormSession::new();
        session.set_table_name("t");
        session
            .set_field_legend(FieldKey::new(0), "a")
            .expect("row exists");
        let sql = session.submit().expect("valid").to_string();

        assert!(session.delete_field(FieldKey::new(0)));
        assert!(!session.delete_field(FieldKey::new(0)));
        assert_eq!(session.sql(), sql);
    }

    #[test]
    fn test_editing_removed_row_is_rejected() {
        let mut session = FormSession::new();
        let key = FieldKey::new(0);
        session.delete_field(key);

        assert_eq!(
            session.set_field_legend(key, "x"),
            Err(SessionError::UnknownField(key))
        );
        assert_eq!(
            session.handle_event(DesignerEvent::SetFieldType {
                key,
                tag: "int".into()
            }),
            Err(SessionError::UnknownField(key))
        );
    }

    #[test]
    fn test_handle_event_flow() {
        let mut session = FormSession::new();

        let second = match session.handle_event(DesignerEvent::AddField) {
            Ok(SessionUpdate::FieldAdded(key)) => key,
            other => panic!("unexpected update: {:?}", other),
        };
        assert_eq!(second, FieldKey::new(1));

        let update = session.handle_event(DesignerEvent::Submit).expect("handled");
        assert!(matches!(update, SessionUpdate::Rejected(ref e) if e.len() == 3));

        session
            .handle_event(DesignerEvent::SetTableName("Notes".into()))
            .expect("handled");
        session
            .handle_event(DesignerEvent::DeleteField(FieldKey::new(0)))
            .expect("handled");
        session
            .handle_event(DesignerEvent::SetFieldLegend {
                key: second,
                legend: "Body".into(),
            })
            .expect("handled");

        assert_eq!(
            session.handle_event(DesignerEvent::Submit),
            Ok(SessionUpdate::SqlGenerated)
        );
        assert!(session.sql().contains("`BODY_NOTES`"));

        assert_eq!(
            session.handle_event(DesignerEvent::Copied),
            Ok(SessionUpdate::CopiedChanged)
        );
        assert!(session.is_copied());
    }

    #[test]
    fn test_reset_starts_a_new_definition() {
        let mut session = FormSession::new();
        let old_id = session.id();
        session.set_table_name("t");
        session.add_field();
        session.reset();

        assert_ne!(session.id(), old_id);
        assert_eq!(session.draft().table, "");
        assert_eq!(session.draft().slot_count(), 1);
        assert_eq!(session.sql(), PLACEHOLDER_SQL);
    }
}
