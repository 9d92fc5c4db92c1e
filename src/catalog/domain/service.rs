use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use crate::books::domain::model::{BookEntity, BookFields};
use crate::books::dto::BookDto;
use crate::books::repository::{BookFilter, BookRepository};
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

pub struct CatalogServiceImpl {
    group: String,
    book_repository: Arc<dyn BookRepository>,
    events_publisher: Arc<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Arc<dyn BookRepository>,
               events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            group: config.environment.to_string(),
            book_repository,
            events_publisher,
        }
    }

    fn metadata(operation: &str) -> HashMap<String, String> {
        HashMap::from([("operation".to_string(), operation.to_string())])
    }

    // The mutation is already committed when this runs, so a failed event is
    // logged and never turned into an error for the caller.
    async fn publish(&self, key: i64, event: serde_json::Result<DomainEvent>) {
        let res = match event {
            Ok(event) => self.events_publisher.publish(&event).await,
            Err(err) => Err(LibraryError::from(err)),
        };
        if let Err(err) = res {
            tracing::warn!(book_id = key, error = %err, "failed to publish domain event");
        }
    }

    async fn publish_deleted(&self, operation: &str, removed: &[BookEntity]) {
        for book in removed {
            let dto = BookDto::from(book);
            let event = DomainEvent::deleted(
                "books", self.group.as_str(), dto.id.to_string().as_str(), &Self::metadata(operation), &dto);
            self.publish(dto.id, event).await;
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await.map(BookDto::from)
    }

    async fn search_books(&self, filter: &BookFilter) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.query(filter).await?;
        tracing::debug!(?filter, found = books.len(), "searched catalog");
        Ok(books.into_iter().map(BookDto::from).collect())
    }

    async fn add_book(&self, fields: &BookFields) -> LibraryResult<BookDto> {
        let book = BookDto::from(self.book_repository.create(fields).await?);
        tracing::info!(book_id = book.id, title = book.title.as_str(), "book added");
        self.publish(book.id, DomainEvent::added(
            "books", self.group.as_str(), book.id.to_string().as_str(), &Self::metadata("add"), &book)).await;
        Ok(book)
    }

    async fn update_book_by_title(&self, title: &str, fields: &BookFields) -> LibraryResult<BookDto> {
        let book = BookDto::from(self.book_repository.update_by_title(title, fields).await?);
        tracing::info!(book_id = book.id, title, "book updated by title");
        self.publish(book.id, DomainEvent::updated(
            "books", self.group.as_str(), book.id.to_string().as_str(), &Self::metadata("update_by_title"), &book)).await;
        Ok(book)
    }

    async fn update_book(&self, id: i64, fields: &BookFields) -> LibraryResult<(BookDto, BookDto)> {
        let res = self.book_repository.update(id, fields).await?;
        let (old, updated) = (BookDto::from(res.old), BookDto::from(res.updated));
        tracing::info!(book_id = id, "book updated");
        self.publish(id, DomainEvent::updated(
            "books", self.group.as_str(), id.to_string().as_str(), &Self::metadata("update"), &updated)).await;
        Ok((old, updated))
    }

    async fn remove_books_by_title(&self, title: &str) -> LibraryResult<usize> {
        let removed = self.book_repository.delete_by_title(title).await?;
        tracing::info!(title, removed = removed.len(), "books removed by title");
        self.publish_deleted("remove_by_title", &removed).await;
        Ok(removed.len())
    }

    async fn remove_book(&self, id: i64) -> LibraryResult<()> {
        let removed = self.book_repository.delete(id).await?;
        tracing::info!(book_id = id, "book removed");
        self.publish_deleted("remove", &removed).await;
        Ok(())
    }
}
