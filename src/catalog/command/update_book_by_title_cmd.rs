use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::{BookDetailsDto, BookDto};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct UpdateBookByTitleCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookByTitleCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookByTitleCommandRequest {
    pub title: String,
    pub book: BookDetailsDto,
}

impl UpdateBookByTitleCommandRequest {
    pub fn new(title: &str, book: BookDetailsDto) -> Self {
        Self {
            title: title.to_string(),
            book,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct UpdateBookByTitleCommandResponse {
    pub message: String,
    pub book: BookDto,
}

impl UpdateBookByTitleCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            message: "Book updated successfully".to_string(),
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookByTitleCommandRequest, UpdateBookByTitleCommandResponse> for UpdateBookByTitleCommand {
    async fn execute(&self, req: UpdateBookByTitleCommandRequest) -> Result<UpdateBookByTitleCommandResponse, CommandError> {
        let fields = req.book.validate()?;
        self.catalog_service.update_book_by_title(req.title.as_str(), &fields)
            .await.map_err(CommandError::from).map(UpdateBookByTitleCommandResponse::new)
    }
}
