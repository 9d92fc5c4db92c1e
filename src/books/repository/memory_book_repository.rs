use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::books::domain::Book;
use crate::books::domain::model::{BookEntity, BookFields};
use crate::books::repository::{BookFilter, BookRepository, BookUpdate};
use crate::core::domain::IdStrategy;
use crate::core::library::{INVALID_ID, LibraryError, LibraryResult};

#[derive(Debug)]
struct Shelf {
    books: Vec<BookEntity>,
    last_id: i64,
}

impl Shelf {
    fn next_id(&self, strategy: IdStrategy) -> i64 {
        match strategy {
            IdStrategy::CatalogSize => self.books.len() as i64 + 1,
            IdStrategy::Monotonic => self.last_id + 1,
        }
    }

    fn titled(&self, title: &str) -> Vec<BookEntity> {
        self.books.iter().filter(|b| b.has_title(title)).cloned().collect()
    }
}

// MemoryBookRepository keeps the catalog in process, guarded by a single lock
#[derive(Debug)]
pub struct MemoryBookRepository {
    shelf: Mutex<Shelf>,
    id_strategy: IdStrategy,
}

impl MemoryBookRepository {
    pub fn new(id_strategy: IdStrategy) -> Self {
        Self::with_books(id_strategy, vec![])
    }

    pub fn with_books(id_strategy: IdStrategy, books: Vec<BookEntity>) -> Self {
        let last_id = books.iter().map(|b| b.book_id).max().unwrap_or(0);
        Self {
            shelf: Mutex::new(Shelf { books, last_id }),
            id_strategy,
        }
    }

    fn lock(&self) -> LibraryResult<MutexGuard<'_, Shelf>> {
        Ok(self.shelf.lock()?)
    }
}

fn check_id(id: i64) -> LibraryResult<()> {
    if id < 1 {
        return Err(LibraryError::validation(INVALID_ID, Some("id".to_string())));
    }
    Ok(())
}

fn title_not_found(title: &str) -> LibraryError {
    LibraryError::not_found(format!("Book(s) with title '{}' not found", title).as_str())
}

fn id_not_found(id: i64) -> LibraryError {
    LibraryError::not_found(format!("Book with id: '{}' not found", id).as_str())
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn get(&self, id: i64) -> LibraryResult<BookEntity> {
        check_id(id)?;
        let shelf = self.lock()?;
        shelf.books.iter().find(|b| b.book_id == id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("Book with id {} not found", id).as_str()))
    }

    async fn query(&self, filter: &BookFilter) -> LibraryResult<Vec<BookEntity>> {
        let shelf = self.lock()?;
        let books: Vec<BookEntity> = shelf.books.iter().filter(|b| filter.matches(*b)).cloned().collect();
        if books.is_empty() {
            return Err(LibraryError::not_found("No books found"));
        }
        Ok(books)
    }

    async fn create(&self, fields: &BookFields) -> LibraryResult<BookEntity> {
        let mut shelf = self.lock()?;
        let exists = shelf.books.iter().any(|b| b.is_edition_of(
            fields.title.as_str(), fields.author.as_str(), fields.category.as_str()));
        if exists {
            return Err(LibraryError::duplicate_key("Book already exists"));
        }
        let book = BookEntity::from_fields(shelf.next_id(self.id_strategy), fields);
        shelf.last_id = shelf.last_id.max(book.book_id);
        shelf.books.push(book.clone());
        Ok(book)
    }

    async fn update_by_title(&self, title: &str, fields: &BookFields) -> LibraryResult<BookEntity> {
        let mut shelf = self.lock()?;
        let matches = shelf.titled(title);
        if matches.is_empty() {
            return Err(title_not_found(title));
        }
        if matches.len() > 1 {
            return Err(LibraryError::conflict("Multiple books found", matches));
        }
        let book = shelf.books.iter_mut().find(|b| b.has_title(title))
            .ok_or_else(|| title_not_found(title))?;
        book.apply(fields);
        Ok(book.clone())
    }

    async fn update(&self, id: i64, fields: &BookFields) -> LibraryResult<BookUpdate> {
        check_id(id)?;
        let mut shelf = self.lock()?;
        let book = shelf.books.iter_mut().find(|b| b.book_id == id)
            .ok_or_else(|| id_not_found(id))?;
        let old = book.clone();
        book.apply(fields);
        Ok(BookUpdate { old, updated: book.clone() })
    }

    async fn delete_by_title(&self, title: &str) -> LibraryResult<Vec<BookEntity>> {
        let mut shelf = self.lock()?;
        let (removed, kept): (Vec<BookEntity>, Vec<BookEntity>) = shelf.books.drain(..)
            .partition(|b| b.has_title(title));
        shelf.books = kept;
        if removed.is_empty() {
            return Err(title_not_found(title));
        }
        Ok(removed)
    }

    async fn delete(&self, id: i64) -> LibraryResult<Vec<BookEntity>> {
        check_id(id)?;
        let mut shelf = self.lock()?;
        let (removed, kept): (Vec<BookEntity>, Vec<BookEntity>) = shelf.books.drain(..)
            .partition(|b| b.book_id == id);
        shelf.books = kept;
        if removed.is_empty() {
            return Err(id_not_found(id));
        }
        Ok(removed)
    }

    async fn count(&self) -> LibraryResult<usize> {
        Ok(self.lock()?.books.len())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use crate::books::domain::model::{BookEntity, BookFields};
    use crate::books::factory::seed_books;
    use crate::books::repository::{BookFilter, BookRepository};
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::domain::IdStrategy;
    use crate::core::library::LibraryError;

    fn seeded() -> MemoryBookRepository {
        MemoryBookRepository::with_books(IdStrategy::CatalogSize, seed_books())
    }

    fn architecture() -> BookFields {
        BookFields::new("Introduction to Computer Architecture", "Onwumere Okey", "Science", 5)
    }

    #[tokio::test]
    async fn test_should_reject_ids_below_one() {
        let repo = seeded();
        for id in [0, -1, -22, i64::MIN] {
            assert!(matches!(repo.get(id).await, Err(LibraryError::Validation{ .. })));
            assert!(matches!(repo.update(id, &architecture()).await, Err(LibraryError::Validation{ .. })));
            assert!(matches!(repo.delete(id).await, Err(LibraryError::Validation{ .. })));
        }
        assert_eq!(16, repo.count().await.expect("should count"));
    }

    #[tokio::test]
    async fn test_should_get_book() {
        let repo = seeded();
        let book = repo.get(1).await.expect("should return book");
        assert_eq!(BookEntity::new(1, "To Kill a Mockingbird", "Harper Lee", "Fiction", 5), book);

        let err = repo.get(70_000).await.expect_err("should not find book");
        assert_eq!("Book with id 70000 not found", err.message());
    }

    #[tokio::test]
    async fn test_should_query_all_in_insertion_order() {
        let repo = seeded();
        let books = repo.query(&BookFilter::default()).await.expect("should return books");
        assert_eq!(seed_books(), books);
    }

    #[tokio::test]
    async fn test_should_query_by_filters() {
        let repo = seeded();
        let books = repo.query(&BookFilter::new(None, Some("1984"), None)).await.expect("should return books");
        assert_eq!(1, books.len());

        let books = repo.query(&BookFilter::new(Some("fantasy"), None, None)).await.expect("should return books");
        assert_eq!(vec![8, 9, 10], books.iter().map(|b| b.book_id).collect::<Vec<_>>());

        let books = repo.query(&BookFilter::new(None, Some("the da vinci code"), None)).await.expect("should return books");
        assert_eq!(vec![11, 16], books.iter().map(|b| b.book_id).collect::<Vec<_>>());

        let books = repo.query(&BookFilter::new(Some("Thriller"), Some("The Da Vinci Code"), Some("Dan Brown")))
            .await.expect("should return books");
        assert_eq!(vec![11], books.iter().map(|b| b.book_id).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_should_not_find_unknown_filters() {
        let repo = seeded();
        for filter in [
            BookFilter::new(Some("History"), None, None),
            BookFilter::new(None, None, Some("Ghost Author")),
            BookFilter::new(None, Some("Da Vinci"), None),
            BookFilter::new(Some("Nonexistent Category"), Some("Unknown Book"), Some("Ghost Author")),
        ] {
            let err = repo.query(&filter).await.expect_err("should not find books");
            assert_eq!("No books found", err.message());
        }
    }

    #[tokio::test]
    async fn test_should_not_find_books_in_empty_catalog() {
        let repo = MemoryBookRepository::new(IdStrategy::CatalogSize);
        assert!(matches!(repo.query(&BookFilter::default()).await, Err(LibraryError::NotFound{ .. })));
    }

    #[tokio::test]
    async fn test_should_create_book() {
        let repo = seeded();
        let before = repo.count().await.expect("should count");
        let book = repo.create(&architecture()).await.expect("should create book");
        assert_eq!(before as i64 + 1, book.book_id);

        let loaded = repo.get(book.book_id).await.expect("should return book");
        assert_eq!(BookEntity::from_fields(17, &architecture()), loaded);
        let all = repo.query(&BookFilter::default()).await.expect("should return books");
        assert_eq!(Some(&book), all.last());
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_book() {
        let repo = seeded();
        let _ = repo.create(&architecture()).await.expect("should create book");
        let shouting = BookFields::new("INTRODUCTION TO COMPUTER ARCHITECTURE", "onwumere okey", "SCIENCE", 1);
        let err = repo.create(&shouting).await.expect_err("should reject duplicate");
        assert!(matches!(err, LibraryError::DuplicateKey{ .. }));
        assert_eq!(17, repo.count().await.expect("should count"));

        let seeded_duplicate = BookFields::new("the hobbit", "j.r.r. tolkien", "fantasy", 2);
        assert!(matches!(repo.create(&seeded_duplicate).await, Err(LibraryError::DuplicateKey{ .. })));
    }

    #[tokio::test]
    async fn test_should_assign_catalog_size_ids() {
        let repo = seeded();
        let _ = repo.delete(1).await.expect("should delete book");
        let book = repo.create(&architecture()).await.expect("should create book");
        // fifteen books remain so the new id collides with the last seeded book
        assert_eq!(16, book.book_id);
        let loaded = repo.get(16).await.expect("should return book");
        assert_eq!("The Da Vinci Code", loaded.title.as_str());
    }

    #[tokio::test]
    async fn test_should_assign_monotonic_ids() {
        let repo = MemoryBookRepository::with_books(IdStrategy::Monotonic, seed_books());
        let _ = repo.delete(16).await.expect("should delete book");
        let _ = repo.delete(1).await.expect("should delete book");
        let book = repo.create(&architecture()).await.expect("should create book");
        assert_eq!(17, book.book_id);
        let next = repo.create(&BookFields::new("Operating System Concepts", "Abraham Silberschatz", "Science", 4))
            .await.expect("should create book");
        assert_eq!(18, next.book_id);
    }

    #[tokio::test]
    async fn test_should_update_single_book_by_title() {
        let repo = seeded();
        let fields = BookFields::new("Introduction to Prompt Engineering", "Onwumere Okechukwu Bright", "Science", 5);
        let book = repo.update_by_title("divergent", &fields).await.expect("should update book");
        assert_eq!(BookEntity::from_fields(15, &fields), book);

        let all = repo.query(&BookFilter::default()).await.expect("should return books");
        let mut expected = seed_books();
        expected[14] = BookEntity::from_fields(15, &fields);
        assert_eq!(expected, all);
    }

    #[tokio::test]
    async fn test_should_not_update_ambiguous_title() {
        let repo = seeded();
        let err = repo.update_by_title("The Da Vinci Code", &architecture()).await.expect_err("should conflict");
        match err {
            LibraryError::Conflict { message, books } => {
                assert_eq!("Multiple books found", message.as_str());
                assert_eq!(vec![11, 16], books.iter().map(|b| b.book_id).collect::<Vec<_>>());
            }
            other => panic!("unexpected error {:?}", other),
        }
        let all = repo.query(&BookFilter::default()).await.expect("should return books");
        assert_eq!(seed_books(), all);
    }

    #[tokio::test]
    async fn test_should_not_update_unknown_title() {
        let repo = seeded();
        let err = repo.update_by_title("BadBookTitle", &architecture()).await.expect_err("should not find");
        assert_eq!("Book(s) with title 'BadBookTitle' not found", err.message());
    }

    #[tokio::test]
    async fn test_should_update_book_by_id() {
        let repo = seeded();
        let fields = BookFields::new("Introduction to Prompt Engineering", "Onwumere Okechukwu Bright", "Science", 5);
        let res = repo.update(4, &fields).await.expect("should update book");
        assert_eq!(BookEntity::new(4, "The Catcher in the Rye", "J.D. Salinger", "Fiction", 3), res.old);
        assert_eq!(BookEntity::from_fields(4, &fields), res.updated);
        assert_eq!(res.updated, repo.get(4).await.expect("should return book"));

        let err = repo.update(70_000, &fields).await.expect_err("should not find");
        assert_eq!("Book with id: '70000' not found", err.message());
    }

    #[tokio::test]
    async fn test_should_delete_books_by_title() {
        let repo = seeded();
        let removed = repo.delete_by_title("THE DA VINCI CODE").await.expect("should delete books");
        assert_eq!(2, removed.len());
        assert_eq!(14, repo.count().await.expect("should count"));

        let err = repo.delete_by_title("The Da Vinci Code").await.expect_err("should not find");
        assert_eq!("Book(s) with title 'The Da Vinci Code' not found", err.message());
    }

    #[tokio::test]
    async fn test_should_delete_book_by_id() {
        let repo = seeded();
        let removed = repo.delete(1).await.expect("should delete book");
        assert_eq!(1, removed.len());
        assert!(matches!(repo.get(1).await, Err(LibraryError::NotFound{ .. })));

        let err = repo.delete(1).await.expect_err("should not find");
        assert_eq!("Book with id: '1' not found", err.message());
        let all = repo.query(&BookFilter::default()).await.expect("should return books");
        assert_eq!(seed_books()[1..].to_vec(), all);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_should_apply_concurrent_mutations_atomically() {
        let repo = Arc::new(MemoryBookRepository::with_books(IdStrategy::Monotonic, seed_books()));
        let mut creates = vec![];
        for i in 0..40 {
            let repo = repo.clone();
            creates.push(tokio::spawn(async move {
                repo.create(&BookFields::new(format!("Concurrent Edition {:02}", i).as_str(), "Onwumere Okey", "Science", 4)).await
            }));
        }
        let mut deletes = vec![];
        for id in 1..=8 {
            let repo = repo.clone();
            deletes.push(tokio::spawn(async move { repo.delete(id).await }));
        }

        let mut created = HashSet::new();
        for handle in creates {
            let book = handle.await.expect("task should finish").expect("should create book");
            assert!(created.insert(book.book_id), "id {} assigned twice", book.book_id);
        }
        for handle in deletes {
            assert_eq!(1, handle.await.expect("task should finish").expect("should delete book").len());
        }

        assert_eq!((17..=56).collect::<HashSet<i64>>(), created);
        assert_eq!(48, repo.count().await.expect("should count"));
        let all = repo.query(&BookFilter::default()).await.expect("should return books");
        let ids: HashSet<i64> = all.iter().map(|b| b.book_id).collect();
        assert_eq!(all.len(), ids.len());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_should_create_concurrent_duplicates_once() {
        let repo = Arc::new(MemoryBookRepository::new(IdStrategy::CatalogSize));
        let mut handles = vec![];
        for _ in 0..16 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move { repo.create(&architecture()).await }));
        }
        let mut created = 0;
        for handle in handles {
            match handle.await.expect("task should finish") {
                Ok(_) => created += 1,
                Err(err) => assert!(matches!(err, LibraryError::DuplicateKey{ .. })),
            }
        }
        assert_eq!(1, created);
        assert_eq!(1, repo.count().await.expect("should count"));
    }
}
