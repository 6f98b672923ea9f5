use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::application::{AppError, LedgerService};
use crate::domain::{format_amount, Summary};

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, AppError> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(AppError::UnknownFormat(s.to_string())),
        }
    }
}

/// Summary snapshot for JSON export
#[derive(Debug, Clone, Serialize)]
pub struct SummarySnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    #[serde(flatten)]
    pub summary: Summary,
}

/// Exporter for converting the current screen to various formats
pub struct Exporter<'a> {
    service: &'a LedgerService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a LedgerService) -> Self {
        Self { service }
    }

    /// Export in the given format, returning the number of entries written.
    pub fn export<W: Write>(&self, format: ExportFormat, writer: W) -> Result<usize, AppError> {
        match format {
            ExportFormat::Json => Ok(self.export_json(writer)?.summary.entries.len()),
            ExportFormat::Csv => self.export_csv(writer),
        }
    }

    /// Export entries to CSV format, newest first
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize, AppError> {
        let summary = self.service.summary();
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["kind", "description", "amount"])?;

        let mut count = 0;
        for tx in &summary.entries {
            let amount = format_amount(tx.amount);
            csv_writer.write_record([
                tx.kind.as_str(),
                tx.description.as_str(),
                amount.as_str(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export totals and entries as a JSON snapshot
    pub fn export_json<W: Write>(&self, mut writer: W) -> Result<SummarySnapshot, AppError> {
        let snapshot = SummarySnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            summary: self.service.summary(),
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        Ok(snapshot)
    }
}
