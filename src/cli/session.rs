use std::fs::File;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::application::{LedgerService, Notice};
use crate::domain::EntryKind;
use crate::io::{ExportFormat, Exporter};

use super::render;

const HELP: &str = "\
Commands:
  income <amount> [description]   record money received (aliases: in, +)
  expense <amount> [description]  record money spent (aliases: out, -)
  clear                           drop every entry and total (alias: reset)
  summary                         show the screen again (aliases: show, ls)
  export <json|csv> [path]        write the current entries (stdout if no path)
  help                            show this help
  quit                            leave (aliases: exit, q)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Line-driven single-screen session.
///
/// Reads one command per line from `input` and writes notices and the
/// re-rendered screen to `output`. Works the same for a terminal and a piped
/// script; `interactive` only controls the prompt.
pub struct Session<'a, R, W> {
    service: &'a mut LedgerService,
    input: R,
    output: W,
    color: bool,
    interactive: bool,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(service: &'a mut LedgerService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
            color: false,
            interactive: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn run(mut self) -> Result<()> {
        self.print_screen()?;

        let mut line = String::new();
        loop {
            if self.interactive {
                write!(self.output, "> ")?;
                self.output.flush()?;
            }

            line.clear();
            if self.input.read_line(&mut line).context("Failed to read input")? == 0 {
                break;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match self.handle_line(trimmed) {
                Ok(LoopControl::Exit) => break,
                Ok(LoopControl::Continue) => {}
                Err(err) => self.report_error(&err)?,
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> Result<LoopControl> {
        let (command, rest) = split_word(line);

        match command.to_lowercase().as_str() {
            "income" | "in" | "+" => self.add(rest, EntryKind::Income)?,
            "expense" | "out" | "-" => self.add(rest, EntryKind::Expense)?,
            "clear" | "reset" => {
                let notice = self.service.clear_all();
                self.print_notice(&notice)?;
                self.print_screen()?;
            }
            "summary" | "show" | "ls" => self.print_screen()?,
            "export" => self.export(rest)?,
            "help" | "?" => writeln!(self.output, "{}", HELP)?,
            "quit" | "exit" | "q" => return Ok(LoopControl::Exit),
            other => writeln!(
                self.output,
                "Unknown command: {} (type 'help' for a list)",
                other
            )?,
        }

        Ok(LoopControl::Continue)
    }

    fn add(&mut self, args: &str, kind: EntryKind) -> Result<()> {
        let (amount, description) = split_word(args);
        let notice = self.service.record(amount, description, kind);
        self.print_notice(&notice)?;
        if !notice.is_error() {
            self.print_screen()?;
        }
        Ok(())
    }

    fn export(&mut self, args: &str) -> Result<()> {
        let (format, path) = split_word(args);
        let format = match ExportFormat::from_str(format) {
            Ok(format) => format,
            Err(err) => {
                writeln!(self.output, "{}", err)?;
                return Ok(());
            }
        };

        let exporter = Exporter::new(&*self.service);
        if path.is_empty() {
            exporter.export(format, &mut self.output)?;
        } else {
            let file =
                File::create(path).with_context(|| format!("Failed to create file: {}", path))?;
            let count = exporter.export(format, file)?;
            tracing::info!(path, format = format.as_str(), count, "summary exported");
            writeln!(self.output, "Exported {} entries to {}", count, path)?;
        }
        Ok(())
    }

    /// A failed command is shown on the screen and the session carries on.
    fn report_error(&mut self, err: &anyhow::Error) -> Result<()> {
        tracing::warn!(error = %format!("{:#}", err), "command failed");
        writeln!(self.output, "! {:#}", err)?;
        Ok(())
    }

    fn print_notice(&mut self, notice: &Notice) -> Result<()> {
        let message = self.service.notice_message(notice);
        let prefix = if notice.is_error() { "!" } else { "*" };
        writeln!(self.output, "{} {}", prefix, message)?;
        Ok(())
    }

    fn print_screen(&mut self) -> Result<()> {
        let summary = self.service.summary();
        let text = render::screen(&summary, self.service.formatter(), self.color);
        write!(self.output, "{}", text)?;
        Ok(())
    }
}

/// Split off the first whitespace-delimited word; the remainder is trimmed.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim();
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (s, ""),
    }
}
