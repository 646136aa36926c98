use super::CatalogStore;
use crate::error::Result;
use crate::model::Book;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    books: Vec<Book>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Book>> {
        Ok(self.books.clone())
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        self.books = books.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Status;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_book(self, title: &str, author: &str) -> Self {
            self.push(Book::new(title.to_string(), author.to_string()))
        }

        pub fn with_book_status(self, title: &str, author: &str, status: Status) -> Self {
            let mut book = Book::new(title.to_string(), author.to_string());
            book.status = status;
            self.push(book)
        }

        fn push(mut self, book: Book) -> Self {
            let mut books = self.store.load().unwrap();
            books.push(book);
            self.store.save(&books).unwrap();
            self
        }
    }
}
