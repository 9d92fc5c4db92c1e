use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::books::repository::BookFilter;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SearchBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl SearchBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchBooksCommandRequest {
    pub category: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
}

impl SearchBooksCommandRequest {
    pub fn new(category: Option<&str>, title: Option<&str>, author: Option<&str>) -> Self {
        Self {
            category: category.map(str::to_string),
            title: title.map(str::to_string),
            author: author.map(str::to_string),
        }
    }

    pub fn build_filter(&self) -> BookFilter {
        BookFilter::new(self.category.as_deref(), self.title.as_deref(), self.author.as_deref())
    }
}


#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        self.catalog_service.search_books(&req.build_filter())
            .await.map_err(CommandError::from).map(SearchBooksCommandResponse::new)
    }
}
