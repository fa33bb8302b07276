use thiserror::Error;

use super::{ParseError, ResolveError, ValidationError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Resolution error: {0}")]
    Resolve(#[from] ResolveError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn parse<E>(error: E) -> Self
    where
        E: Into<ParseError>,
    {
        error.into().into()
    }

    pub fn validation<E>(error: E) -> Self
    where
        E: Into<ValidationError>,
    {
        error.into().into()
    }

    pub fn resolve<E>(error: E) -> Self
    where
        E: Into<ResolveError>,
    {
        error.into().into()
    }

    /// Process exit status for this error. Host/port resolution failures are
    /// fatal (no benchmark target exists) and get a status of their own so
    /// callers can tell them apart from recoverable usage errors.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            AppError::Resolve(_) => 2,
            AppError::Io { .. }
            | AppError::Clap { .. }
            | AppError::Parse(_)
            | AppError::Validation(_) => 1,
        }
    }
}
