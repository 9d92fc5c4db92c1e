pub mod memory_book_repository;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::{BookEntity, BookFields};
use crate::core::library::LibraryResult;

// BookFilter narrows a catalog search, absent fields match every book
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookFilter {
    pub category: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
}

impl BookFilter {
    pub fn new(category: Option<&str>, title: Option<&str>, author: Option<&str>) -> Self {
        Self {
            category: category.map(str::to_string),
            title: title.map(str::to_string),
            author: author.map(str::to_string),
        }
    }

    pub fn matches<B: Book>(&self, book: &B) -> bool {
        self.category.as_deref().map_or(true, |c| book.has_category(c)) &&
            self.title.as_deref().map_or(true, |t| book.has_title(t)) &&
            self.author.as_deref().map_or(true, |a| book.has_author(a))
    }
}

// BookUpdate pairs the values a book had before an update with the updated record
#[derive(Debug, Clone, PartialEq)]
pub struct BookUpdate {
    pub old: BookEntity,
    pub updated: BookEntity,
}

/// The catalog: an ordered sequence of books. Every operation is applied
/// atomically, either completely or not at all.
#[async_trait]
pub trait BookRepository: Sync + Send {
    // first book with the id; ids below 1 are rejected
    async fn get(&self, id: i64) -> LibraryResult<BookEntity>;

    // books matching the filter in insertion order, never empty
    async fn query(&self, filter: &BookFilter) -> LibraryResult<Vec<BookEntity>>;

    // appends a new book unless the same title, author and category exist
    async fn create(&self, fields: &BookFields) -> LibraryResult<BookEntity>;

    // updates the only book with the title
    async fn update_by_title(&self, title: &str, fields: &BookFields) -> LibraryResult<BookEntity>;

    // updates the first book with the id
    async fn update(&self, id: i64, fields: &BookFields) -> LibraryResult<BookUpdate>;

    // removes every book with the title and returns them
    async fn delete_by_title(&self, title: &str) -> LibraryResult<Vec<BookEntity>>;

    // removes every book with the id and returns them
    async fn delete(&self, id: i64) -> LibraryResult<Vec<BookEntity>>;

    async fn count(&self) -> LibraryResult<usize>;
}
