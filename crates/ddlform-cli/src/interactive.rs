//! Line-based form session
//!
//! Renders the form and the generated SQL as text and turns typed commands
//! into session events.

use anyhow::Result;
use ddlform_designer::{
    Clipboard, DesignerEvent, FieldKey, FieldPath, FieldType, FormSession, SessionUpdate,
};
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  table <name>          set the table name
  add                   add a field row
  legend <key> <name>   set the name of a field row
  type <key> <type>     set the type of a field row (varchar, double, text, int, date, datetime)
  delete <key>          remove a field row
  show                  show the form
  submit                generate the CREATE TABLE statement
  copy                  copy the generated SQL to the clipboard
  new                   start a new table
  help                  show this help
  quit                  leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(DesignerEvent),
    Show,
    Copy,
    New,
    Help,
    Quit,
}

fn parse_key(arg: Option<&str>) -> Result<FieldKey, String> {
    let arg = arg.ok_or("missing field key")?;
    arg.parse()
        .map_err(|_| format!("'{}' is not a field key", arg))
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let command = match word {
        "table" => Command::Event(DesignerEvent::SetTableName(rest.to_string())),
        "add" => Command::Event(DesignerEvent::AddField),
        "legend" => {
            let (key, legend) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            Command::Event(DesignerEvent::SetFieldLegend {
                key: parse_key(Some(key).filter(|k| !k.is_empty()))?,
                legend: legend.trim().to_string(),
            })
        }
        "type" => {
            let mut args = rest.split_whitespace();
            let key = parse_key(args.next())?;
            let tag = args.next().unwrap_or_default().to_string();
            Command::Event(DesignerEvent::SetFieldType { key, tag })
        }
        "delete" => Command::Event(DesignerEvent::DeleteField(parse_key(
            rest.split_whitespace().next(),
        )?)),
        "submit" => Command::Event(DesignerEvent::Submit),
        "show" => Command::Show,
        "copy" => Command::Copy,
        "new" => Command::New,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command '{}', try 'help'", other)),
    };
    Ok(Some(command))
}

/// Render the form rows with inline validation messages
pub fn render_form(session: &FormSession) -> String {
    let draft = session.draft();
    let errors = session.errors();
    let message = |path: FieldPath| errors.and_then(|e| e.for_path(path));

    let table = if draft.table.is_empty() {
        "<unnamed>"
    } else {
        draft.table.as_str()
    };

    let mut out = String::new();
    out.push_str(&format!("Table: {}\n", table));
    if let Some(msg) = message(FieldPath::Table) {
        out.push_str(&format!("  ! {}\n", msg));
    }

    out.push_str("Fields:\n");
    for (key, field) in draft.fields() {
        let legend = if field.legend.is_empty() {
            "<unnamed>"
        } else {
            field.legend.as_str()
        };
        let tag = if field.field_type.is_empty() {
            "<no type>"
        } else {
            field.field_type.as_str()
        };
        out.push_str(&format!("  [{}] {} ({})\n", key, legend, tag));
        for path in [FieldPath::Legend(key), FieldPath::Type(key)] {
            if let Some(msg) = message(path) {
                out.push_str(&format!("      ! {}\n", msg));
            }
        }
    }
    out
}

/// Render the SQL on display and the copy indicator
pub fn render_sql(session: &FormSession) -> String {
    let indicator = if session.is_copied() {
        "[copied to clipboard]"
    } else {
        "[not copied]"
    };
    format!("{}\n{}\n", session.sql(), indicator)
}

/// List of type tags for help output
pub fn render_types() -> String {
    FieldType::ALL
        .iter()
        .map(|t| format!("{:<10}{:<12}{}\n", t.tag(), t.title(), t.sql_type()))
        .collect()
}

/// Run the session until `quit` or end of input
pub fn run<R, W, C>(
    session: &mut FormSession,
    input: R,
    out: &mut W,
    clipboard: &mut C,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    C: Clipboard + ?Sized,
{
    writeln!(out, "{}", HELP)?;
    write!(out, "{}", render_form(session))?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(msg) => {
                writeln!(out, "error: {}", msg)?;
                continue;
            }
        };

        match command {
            Command::Event(event) => match session.handle_event(event) {
                Ok(SessionUpdate::FieldAdded(key)) => writeln!(out, "added field {}", key)?,
                Ok(SessionUpdate::SqlGenerated) => write!(out, "{}", render_sql(session))?,
                Ok(SessionUpdate::Rejected(errors)) => {
                    for error in &errors {
                        writeln!(out, "{}", error)?;
                    }
                }
                Ok(SessionUpdate::FormChanged) | Ok(SessionUpdate::CopiedChanged) => {}
                Err(e) => writeln!(out, "error: {}", e)?,
            },
            Command::Show => {
                write!(out, "{}", render_form(session))?;
                write!(out, "{}", render_sql(session))?;
            }
            Command::Copy => match session.copy(clipboard) {
                Ok(()) => writeln!(out, "copied to clipboard")?,
                Err(e) => {
                    tracing::error!(error = %e, "copy failed");
                    writeln!(out, "error: {:#}", e)?;
                }
            },
            Command::New => {
                session.reset();
                write!(out, "{}", render_form(session))?;
            }
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                write!(out, "{}", render_types())?;
            }
            Command::Quit => break,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct MemoryClipboard(Option<String>);

    impl Clipboard for MemoryClipboard {
        fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
            self.0 = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("   "), Ok(None));
        assert_eq!(
            parse_command("table User Accounts"),
            Ok(Some(Command::Event(DesignerEvent::SetTableName(
                "User Accounts".into()
            ))))
        );
        assert_eq!(
            parse_command("legend 2 Full Name"),
            Ok(Some(Command::Event(DesignerEvent::SetFieldLegend {
                key: FieldKey::new(2),
                legend: "Full Name".into(),
            })))
        );
        assert_eq!(
            parse_command("type 0 int"),
            Ok(Some(Command::Event(DesignerEvent::SetFieldType {
                key: FieldKey::new(0),
                tag: "int".into(),
            })))
        );
        assert_eq!(
            parse_command("delete 1"),
            Ok(Some(Command::Event(DesignerEvent::DeleteField(
                FieldKey::new(1)
            ))))
        );
        assert_eq!(parse_command("quit"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_command("delete").is_err());
        assert!(parse_command("legend x Name").is_err());
        assert!(parse_command("frobnicate").is_err());
    }

    #[test]
    fn renders_inline_errors() {
        let mut session = FormSession::new();
        session.add_field();
        session
            .set_field_legend(FieldKey::new(1), "Email")
            .expect("row exists");
        assert!(session.submit().is_err());

        assert_eq!(
            render_form(&session),
            indoc! {"
                Table: <unnamed>
                  ! Table name is required
                Fields:
                  [0] <unnamed> (varchar)
                      ! Field name is required
                  [1] Email (varchar)
            "}
        );
    }

    #[test]
    fn runs_a_full_session() {
        let input = indoc! {"
            table User Accounts
            legend 0 Full Name
            add
            legend 1 Age
            type 1 int
            delete 1
            submit
            copy
            quit
            submit
        "};
        let mut session = FormSession::new();
        let mut out = Vec::new();
        let mut clipboard = MemoryClipboard::default();

        run(&mut session, input.as_bytes(), &mut out, &mut clipboard).expect("run");

        let out = String::from_utf8(out).expect("utf8");
        assert!(out.contains("added field 1"));
        assert!(out.contains("`FULL_NAME_USER_ACCOUNTS` VARCHAR (200) NOT NULL COMMENT 'Full Name'"));
        assert!(!out.contains("AGE_USER_ACCOUNTS"));
        assert!(out.contains("copied to clipboard"));
        assert!(session.is_copied());
        assert_eq!(clipboard.0.as_deref(), Some(session.sql()));
    }

    #[test]
    fn reports_errors_without_stopping() {
        let input = "submit\nlegend 9 Nope\ntable t\nlegend 0 a\nsubmit\n";
        let mut session = FormSession::new();
        let mut out = Vec::new();

        run(
            &mut session,
            input.as_bytes(),
            &mut out,
            &mut MemoryClipboard::default(),
        )
        .expect("run");

        let out = String::from_utf8(out).expect("utf8");
        assert!(out.contains("table: Table name is required"));
        assert!(out.contains("fields[0].legend: Field name is required"));
        assert!(out.contains("error: no field row with key 9"));
        assert!(out.contains("CREATE TABLE `t`"));
    }
}
