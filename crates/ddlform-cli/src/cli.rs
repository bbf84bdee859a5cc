//! ddlform - describe a table, get its CREATE TABLE statement
//!
//! Terminal front end for the table designer.

mod clipboard;
mod interactive;
mod logging;
mod settings;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use ddlform_designer::{DdlGenerator, FormSession, TableDraft};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::settings::Settings;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Settings file (defaults to <config dir>/ddlform/settings.json)
    #[arg(short, long, env = "DDLFORM_CONFIG")]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the CREATE TABLE statement for a table definition file (.json or .toml)
    Generate {
        file: PathBuf,
    },
    /// List the available field types
    Types,
    /// Fill in the table definition form interactively
    Interactive,
}

/// Read a table definition; the format follows the file extension
fn read_draft(path: &Path) -> Result<TableDraft> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read table definition {:?}", path))?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML table definition {:?}", path)),
        Some("json") | None => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON table definition {:?}", path)),
        Some(other) => bail!("Unsupported table definition format: .{}", other),
    }
}

/// Validate a definition file and print its SQL. Returns false when the
/// definition was rejected.
fn generate(path: &Path, out: &mut impl Write, err: &mut impl Write) -> Result<bool> {
    let draft = read_draft(path)?;

    match draft.validate() {
        Ok(design) => {
            writeln!(out, "{}", DdlGenerator::generate_create_table(&design))?;
            Ok(true)
        }
        Err(errors) => {
            tracing::warn!(path = %path.display(), "{}", errors);
            for error in &errors {
                writeln!(err, "{}", error)?;
            }
            Ok(false)
        }
    }
}

fn run(args: Args, settings: &Settings) -> Result<ExitCode> {
    match args.command {
        Command::Generate { file } => {
            let ok = generate(&file, &mut std::io::stdout(), &mut std::io::stderr())?;
            Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Command::Types => {
            print!("{}", interactive::render_types());
            Ok(ExitCode::SUCCESS)
        }
        Command::Interactive => {
            let mut clipboard = clipboard::from_settings(&settings.clipboard)?;
            let mut session = FormSession::new();
            let stdin = std::io::stdin();
            interactive::run(
                &mut session,
                stdin.lock(),
                &mut std::io::stdout(),
                clipboard.as_mut(),
            )?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let settings = match Settings::load(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Logging is not up yet
            eprintln!("error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init(&settings.logging, args.verbose) {
        eprintln!("error: failed to initialize logging: {:#}", e);
        return ExitCode::FAILURE;
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Starting ddlform");

    match run(args, &settings) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "ddlform failed");
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
