pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::BookFields;
use crate::books::dto::BookDto;
use crate::books::repository::BookFilter;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto>;
    async fn search_books(&self, filter: &BookFilter) -> LibraryResult<Vec<BookDto>>;
    async fn add_book(&self, fields: &BookFields) -> LibraryResult<BookDto>;
    async fn update_book_by_title(&self, title: &str, fields: &BookFields) -> LibraryResult<BookDto>;
    // returns the book as it was before the update, then the updated book
    async fn update_book(&self, id: i64, fields: &BookFields) -> LibraryResult<(BookDto, BookDto)>;
    // returns the number of removed books
    async fn remove_books_by_title(&self, title: &str) -> LibraryResult<usize>;
    async fn remove_book(&self, id: i64) -> LibraryResult<()>;
}
