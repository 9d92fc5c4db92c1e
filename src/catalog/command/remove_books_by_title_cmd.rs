use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemoveBooksByTitleCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveBooksByTitleCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBooksByTitleCommandRequest {
    pub title: String,
}

impl RemoveBooksByTitleCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct RemoveBooksByTitleCommandResponse {
    pub message: String,
}

impl RemoveBooksByTitleCommandResponse {
    pub fn new(removed: usize, title: &str) -> Self {
        let message = if removed == 1 {
            format!("1 book with title '{}' deleted successfully", title)
        } else {
            format!("{} books with title '{}' deleted successfully", removed, title)
        };
        Self {
            message,
        }
    }
}

#[async_trait]
impl Command<RemoveBooksByTitleCommandRequest, RemoveBooksByTitleCommandResponse> for RemoveBooksByTitleCommand {
    async fn execute(&self, req: RemoveBooksByTitleCommandRequest) -> Result<RemoveBooksByTitleCommandResponse, CommandError> {
        self.catalog_service.remove_books_by_title(req.title.as_str()).await
            .map_err(CommandError::from).map(|removed| RemoveBooksByTitleCommandResponse::new(removed, req.title.as_str()))
    }
}
