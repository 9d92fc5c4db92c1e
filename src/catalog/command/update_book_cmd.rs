use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::{BookDetailsDto, BookDto};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError, parse_book_id};

pub struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookCommandRequest {
    pub book_id: String,
    pub book: BookDetailsDto,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: &str, book: BookDetailsDto) -> Self {
        Self {
            book_id: book_id.to_string(),
            book,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct UpdateBookCommandResponse {
    pub message: String,
    #[serde(rename = "OldBook")]
    pub old_book: BookDto,
    #[serde(rename = "UpdatedBook")]
    pub updated_book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(old_book: BookDto, updated_book: BookDto) -> Self {
        Self {
            message: "Book updated successfully".to_string(),
            old_book,
            updated_book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let id = parse_book_id(req.book_id.as_str())?;
        let fields = req.book.validate()?;
        self.catalog_service.update_book(id, &fields).await.map_err(CommandError::from)
            .map(|(old, updated)| UpdateBookCommandResponse::new(old, updated))
    }
}
