//! # Storage Layer
//!
//! Persistence for the catalog sits behind the [`CatalogStore`] trait so the
//! command layer can run against different backends:
//!
//! - [`fs::FileStore`]: production storage, a single JSON document
//! - [`memory::InMemoryStore`]: in-memory storage for fast, isolated tests
//!
//! ## Storage Format
//!
//! For `FileStore` the whole catalog lives in one file:
//! ```text
//! { "books": [ { "title": ..., "author": ..., ... }, ... ] }
//! ```
//!
//! Record order in the document is the catalog order. Every mutation
//! rewrites the document in full; there is no append log and no atomic
//! rename, which is acceptable at personal-catalog scale.
//!
//! `load` never invents data: a missing document is an empty catalog, and a
//! document that fails to decode surfaces as a serialization error for the
//! command layer to handle.

use crate::error::Result;
use crate::model::Book;

pub mod fs;
pub mod memory;

/// Abstract interface for catalog persistence.
pub trait CatalogStore {
    /// Read the full catalog, in stored order.
    fn load(&self) -> Result<Vec<Book>>;

    /// Replace the persisted catalog with `books`.
    fn save(&mut self, books: &[Book]) -> Result<()>;
}
