//! DDL generation for table designs
//!
//! Generates the MySQL `CREATE TABLE` statement for a validated table
//! design. Every table gets a surrogate auto-increment primary key, and every
//! field becomes a `NOT NULL` column commented with the label it was entered
//! under.

use crate::models::{FieldDesign, TableDesign};

use super::naming::to_snake_case;

const IDENTIFIER_QUOTE: char = '`';
const INDENT: &str = "  ";

/// DDL Generator for creating SQL statements from table designs
///
/// Stateless: all methods are associated functions over the design.
pub struct DdlGenerator;

impl DdlGenerator {
    /// Wrap an identifier in backticks
    fn quote_ident(name: &str) -> String {
        format!("{}{}{}", IDENTIFIER_QUOTE, name, IDENTIFIER_QUOTE)
    }

    /// Quote a string literal, doubling quotes and backslashes
    fn quote_literal(value: &str) -> String {
        format!("'{}'", value.replace('\\', "\\\\").replace('\'', "''"))
    }

    /// Snake-cased table name used for `CREATE TABLE`
    pub fn table_identifier(design: &TableDesign) -> String {
        to_snake_case(design.table_name())
    }

    /// Name of the surrogate primary key column, e.g. `ID_USER_ACCOUNTS`
    pub fn primary_key_column(design: &TableDesign) -> String {
        format!("ID_{}", Self::table_identifier(design).to_uppercase())
    }

    /// Column name for a field, suffixed with the table name,
    /// e.g. `FULL_NAME_USER_ACCOUNTS`
    pub fn column_name(field: &FieldDesign, design: &TableDesign) -> String {
        format!(
            "{}_{}",
            to_snake_case(&field.legend).to_uppercase(),
            Self::table_identifier(design).to_uppercase()
        )
    }

    /// Generate CREATE TABLE statement
    pub fn generate_create_table(design: &TableDesign) -> String {
        let table = Self::table_identifier(design);
        let pk = Self::quote_ident(&Self::primary_key_column(design));

        let mut lines = Vec::with_capacity(design.fields().len() + 2);
        lines.push(format!("{}{} INT AUTO_INCREMENT NOT NULL", INDENT, pk));
        lines.extend(
            design
                .fields()
                .iter()
                .map(|field| Self::generate_column_definition(field, design)),
        );
        lines.push(format!("{}PRIMARY KEY({})", INDENT, pk));

        tracing::debug!(table = %table, columns = lines.len() - 1, "generated CREATE TABLE");

        format!(
            "CREATE TABLE {} (\n{}\n)",
            Self::quote_ident(&table),
            lines.join(",\n")
        )
    }

    /// Generate the column definition line for one field
    fn generate_column_definition(field: &FieldDesign, design: &TableDesign) -> String {
        format!(
            "{}{} {} NOT NULL COMMENT {}",
            INDENT,
            Self::quote_ident(&Self::column_name(field, design)),
            field.field_type.sql_type(),
            Self::quote_literal(&field.legend)
        )
    }
}
