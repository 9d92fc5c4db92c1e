use std::sync::Arc;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::domain::Configuration;

const SEED: [(&str, &str, &str, i32); 16] = [
    ("To Kill a Mockingbird", "Harper Lee", "Fiction", 5),
    ("1984", "George Orwell", "Fiction", 4),
    ("The Great Gatsby", "F. Scott Fitzgerald", "Fiction", 4),
    ("The Catcher in the Rye", "J.D. Salinger", "Fiction", 3),
    ("Moby Dick", "Herman Melville", "Fiction", 4),
    ("War and Peace", "Leo Tolstoy", "Fiction", 5),
    ("Pride and Prejudice", "Jane Austen", "Fiction", 4),
    ("The Hobbit", "J.R.R. Tolkien", "Fantasy", 5),
    ("The Lord of the Rings", "J.R.R. Tolkien", "Fantasy", 5),
    ("Harry Potter and the Sorcerer's Stone", "J.K. Rowling", "Fantasy", 5),
    ("The Da Vinci Code", "Dan Brown", "Thriller", 4),
    ("The Girl with the Dragon Tattoo", "Stieg Larsson", "Thriller", 4),
    ("Gone Girl", "Gillian Flynn", "Thriller", 4),
    ("The Hunger Games", "Suzanne Collins", "Dystopian", 4),
    ("Divergent", "Veronica Roth", "Dystopian", 3),
    ("The Da Vinci Code", "Onwumere Bright", "Thriller", 5),
];

/// Books the catalog starts with, ids 1 to 16 in insertion order.
pub fn seed_books() -> Vec<BookEntity> {
    SEED.iter().enumerate()
        .map(|(i, (title, author, category, rating))| BookEntity::new(i as i64 + 1, title, author, category, *rating))
        .collect()
}

pub fn create_book_repository(config: &Configuration) -> Arc<dyn BookRepository> {
    let books = if config.seed_catalog { seed_books() } else { vec![] };
    tracing::info!(books = books.len(), id_strategy = %config.id_strategy, "catalog initialized");
    Arc::new(MemoryBookRepository::with_books(config.id_strategy, books))
}
