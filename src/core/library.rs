use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::PoisonError;
use crate::books::domain::model::BookEntity;

/// Reported for any book id below 1 and for path ids that are not integers.
pub const INVALID_ID: &str = "Invalid ID: Id must be greater than 0";

#[derive(Debug)]
pub enum LibraryError {
    // The request carried an argument the catalog cannot act on, e.g. a book id below 1.
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    // A book with the same title, author and category is already in the catalog.
    DuplicateKey {
        message: String,
    },
    // More than one book matched where exactly one was required. The candidates are
    // returned so that the caller can disambiguate.
    Conflict {
        message: String,
        books: Vec<BookEntity>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn conflict(message: &str, books: Vec<BookEntity>) -> LibraryError {
        LibraryError::Conflict { message: message.to_string(), books }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::Validation { message, .. } => message,
            LibraryError::NotFound { message } => message,
            LibraryError::DuplicateKey { message } => message,
            LibraryError::Conflict { message, .. } => message,
            LibraryError::Serialization { message } => message,
            LibraryError::Runtime { message, .. } => message,
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl<T> From<PoisonError<T>> for LibraryError {
    fn from(err: PoisonError<T>) -> Self {
        LibraryError::runtime(
            format!("catalog lock poisoned {}", err).as_str(), Some("poisoned".to_string()))
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Conflict { message, books } => {
                write!(f, "{} ({} candidates)", message, books.len())
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

impl std::error::Error for LibraryError {}
