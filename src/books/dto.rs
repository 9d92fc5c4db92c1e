use serde::{Deserialize, Serialize};
use crate::books::domain::model::{BookEntity, BookFields};
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub category: String,
    pub rating: i32,
}

impl BookDto {
    pub fn new(id: i64, title: &str, author: &str, category: &str, rating: i32) -> BookDto {
        BookDto {
            id,
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
            rating,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> i64 {
        self.id
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.book_id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            category: other.category.to_string(),
            rating: other.rating,
        }
    }
}

impl From<BookEntity> for BookDto {
    fn from(other: BookEntity) -> Self {
        Self {
            id: other.book_id,
            title: other.title,
            author: other.author,
            category: other.category,
            rating: other.rating,
        }
    }
}

/// Body of create and update requests. Fields stay optional so that a missing
/// field is reported as a validation message rather than a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetailsDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub rating: Option<i32>,
}

impl BookDetailsDto {
    pub fn new(title: &str, author: &str, category: &str, rating: i32) -> Self {
        Self {
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            category: Some(category.to_string()),
            rating: Some(rating),
        }
    }

    /// Checks every field and reports all violations at once, joined by "; ".
    pub fn validate(&self) -> LibraryResult<BookFields> {
        let mut violations = vec![];
        check_text(&self.title, "Title", 10, 50, &mut violations);
        check_text(&self.author, "Author", 10, 25, &mut violations);
        check_text(&self.category, "Category", 5, 20, &mut violations);
        let rating = self.rating.unwrap_or(0);
        if !(1..=5).contains(&rating) {
            violations.push("Invalid rating: Rating must be between 1 and 5".to_string());
        }

        if !violations.is_empty() {
            return Err(LibraryError::validation(violations.join("; ").as_str(), Some("body".to_string())));
        }
        Ok(BookFields {
            title: self.title.clone().unwrap_or_default(),
            author: self.author.clone().unwrap_or_default(),
            category: self.category.clone().unwrap_or_default(),
            rating,
        })
    }
}

fn check_text(value: &Option<String>, name: &str, min: usize, max: usize, violations: &mut Vec<String>) {
    // an empty string is both missing and too short
    let Some(text) = value.as_deref() else {
        violations.push(format!("{} is required", name));
        return;
    };
    if text.is_empty() {
        violations.push(format!("{} is required", name));
    }
    let len = text.chars().count();
    if len < min || len > max {
        violations.push(format!("{} must be between {} and {} characters", name, min, max));
    }
}
