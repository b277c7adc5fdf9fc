use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibretaError {
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No data rows found in the worksheet")]
    NoData,

    #[error("No company name found in the document")]
    MissingCompanyName,

    #[error("Invalid account code: {0} (expected 000-000-000-000-00)")]
    InvalidAccountCode(String),

    #[error("Invalid movement number: {0} (must be a positive integer)")]
    InvalidMovementNumber(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, LibretaError>;
