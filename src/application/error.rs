use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unknown locale: {0} (available: {1})")]
    UnknownLocale(String, String),

    #[error("Unknown label set: {0} (available: english, arabic)")]
    UnknownLabels(String),

    #[error("Unknown export format: {0} (available: json, csv)")]
    UnknownFormat(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
