use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FolioError {
    #[error("Required element not found: {what}")]
    MissingElement { what: String },

    #[error("Invalid theme '{0}', expected 'light' or 'dark'")]
    InvalidTheme(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl FolioError {
    pub fn missing(what: impl Into<String>) -> Self {
        Self::MissingElement { what: what.into() }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
