use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status} fetching {url}")]
    Http { status: u16, url: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unparseable date/time on row {row}: '{value}'")]
    DateTimeParse { row: usize, value: String },

    #[error("Invalid count in column '{column}' on row {row}: '{value}'")]
    InvalidCount {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Invalid coordinate format: {0}")]
    InvalidCoordinate(String),

    #[error("Required column '{0}' missing from source")]
    MissingColumn(String),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No records to compute {0} from")]
    EmptyInput(&'static str),

    #[error("Parquet write error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
