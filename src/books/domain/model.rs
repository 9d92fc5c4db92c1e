use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookFields carries the caller-editable part of a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub category: String,
    pub rating: i32,
}

impl BookFields {
    pub fn new(title: &str, author: &str, category: &str, rating: i32) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
            rating,
        }
    }
}

// BookEntity is a single record of the in-memory catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub category: String,
    pub rating: i32,
}

impl BookEntity {
    pub fn new(book_id: i64, title: &str, author: &str, category: &str, rating: i32) -> Self {
        Self {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
            rating,
        }
    }

    pub fn from_fields(book_id: i64, fields: &BookFields) -> Self {
        Self::new(book_id, fields.title.as_str(), fields.author.as_str(), fields.category.as_str(), fields.rating)
    }

    // overwrites every editable field, the id is kept
    pub fn apply(&mut self, fields: &BookFields) {
        self.title = fields.title.to_string();
        self.author = fields.author.to_string();
        self.category = fields.category.to_string();
        self.rating = fields.rating;
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.book_id
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn category(&self) -> &str {
        self.category.as_str()
    }

    fn rating(&self) -> i32 {
        self.rating
    }
}
