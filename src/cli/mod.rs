use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::application::{LedgerService, Settings};
use crate::domain::EntryKind;
use crate::io::{ExportFormat, Exporter};

pub mod render;
pub mod session;

pub use session::Session;

/// Tally - income and expense on a single screen
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Record income and expenses, keep running totals, see the balance")]
#[command(version)]
pub struct Cli {
    /// Currency locale: en-US, ar-SA, de-DE
    #[arg(short, long, global = true, env = "TALLY_LOCALE", default_value = "en-US")]
    pub locale: String,

    /// Default descriptions for entries recorded without one: english, arabic
    #[arg(long, global = true, env = "TALLY_LABELS", default_value = "english")]
    pub labels: String,

    /// Disable colored output. Any non-empty NO_COLOR other than 0/false/no/off counts.
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive screen (default)
    Session,

    /// Apply entries given on the command line and print the summary
    Tally {
        /// Entries as KIND:AMOUNT[:DESCRIPTION], e.g. "income:50:salary" "expense:20.5"
        entries: Vec<String>,

        /// Output format: table, json, csv
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            locale: self.locale.clone(),
            labels: self.labels.clone(),
            color: color_enabled(self.no_color, io::stdout().is_terminal()),
        }
    }

    pub fn run(self) -> Result<()> {
        let settings = self.settings();
        let mut service = LedgerService::from_settings(&settings)?;

        match self.command.unwrap_or(Commands::Session) {
            Commands::Session => {
                let stdin = io::stdin();
                let interactive = stdin.is_terminal();
                Session::new(&mut service, stdin.lock(), io::stdout().lock())
                    .with_color(settings.color)
                    .interactive(interactive)
                    .run()
            }
            Commands::Tally { entries, format } => run_tally(
                &mut service,
                &entries,
                &format,
                settings.color,
                io::stdout().lock(),
                io::stderr().lock(),
            ),
        }
    }
}

/// Color only goes to a terminal, and never when the user opted out.
fn color_enabled(no_color: bool, is_terminal: bool) -> bool {
    !no_color && is_terminal
}

/// Apply `entries` in order, then write the summary to `out`.
///
/// Entries that cannot be applied are reported on `err` and skipped; the rest
/// still count.
fn run_tally<O: Write, E: Write>(
    service: &mut LedgerService,
    entries: &[String],
    format: &str,
    color: bool,
    mut out: O,
    mut err: E,
) -> Result<()> {
    // Resolve the output format before touching the ledger
    let export_format = match format.to_lowercase().as_str() {
        "table" => None,
        other => Some(ExportFormat::from_str(other)?),
    };

    for raw in entries {
        let (kind, amount, description) = match parse_entry_arg(raw) {
            Ok(parts) => parts,
            Err(e) => {
                writeln!(err, "Skipped: {:#}", e)?;
                continue;
            }
        };
        let notice = service.record(amount, description, kind);
        if notice.is_error() {
            writeln!(err, "Skipped '{}': {}", raw, service.notice_message(&notice))?;
        }
    }

    match export_format {
        None => {
            let summary = service.summary();
            write!(
                out,
                "{}",
                render::screen(&summary, service.formatter(), color)
            )?;
        }
        Some(format) => {
            Exporter::new(service).export(format, &mut out)?;
        }
    }
    out.flush()?;
    err.flush()?;
    Ok(())
}

/// Split `KIND:AMOUNT[:DESCRIPTION]`. The description may itself contain ':'.
fn parse_entry_arg(raw: &str) -> Result<(EntryKind, &str, &str)> {
    let mut parts = raw.splitn(3, ':');
    let kind_str = parts.next().unwrap_or_default();
    let kind = EntryKind::from_str(kind_str).with_context(|| {
        format!(
            "Invalid entry '{}': kind must be 'income' or 'expense'",
            raw
        )
    })?;
    let amount = parts.next().unwrap_or_default();
    let description = parts.next().unwrap_or_default();
    Ok((kind, amount, description))
}
