use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::{INVALID_ID, LibraryError};

#[derive(Debug)]
pub enum CommandError {
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    Conflict {
        message: String,
        books: Vec<BookDto>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl CommandError {
    pub fn message(&self) -> &str {
        match self {
            CommandError::Validation { message, .. } => message,
            CommandError::NotFound { message } => message,
            CommandError::DuplicateKey { message } => message,
            CommandError::Conflict { message, .. } => message,
            CommandError::Serialization { message } => message,
            CommandError::Runtime { message, .. } => message,
        }
    }
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::Conflict { message, books } => {
                CommandError::Conflict { message, books: books.into_iter().map(BookDto::from).collect() }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

/// Parses a path identifier. Text that is not an integer is rejected with the same
/// message the catalog gives for ids below 1.
pub fn parse_book_id(raw: &str) -> Result<i64, CommandError> {
    raw.trim().parse::<i64>().map_err(|_| CommandError::Validation {
        message: INVALID_ID.to_string(),
        reason_code: Some("id".to_string()),
    })
}
