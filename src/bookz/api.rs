//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single
//! entry point for catalog operations, whatever the UI. It dispatches to
//! the right command function and returns structured `Result<CmdResult>`
//! values; business logic stays in `commands/*.rs` and presentation stays
//! with the caller.
//!
//! `BookzApi<S: CatalogStore>` is generic over the storage backend:
//! `BookzApi<FileStore>` in production, `BookzApi<InMemoryStore>` in tests.

use crate::commands;
use crate::error::Result;
use crate::store::CatalogStore;

/// The main API facade for catalog operations.
pub struct BookzApi<S: CatalogStore> {
    store: S,
}

impl<S: CatalogStore> BookzApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_book(&mut self, draft: commands::BookDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search_books(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query)
    }

    pub fn update_book(
        &mut self,
        selected_title: &str,
        patch: commands::BookPatch,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, selected_title, patch)
    }

    pub fn delete_book(&mut self, selected_title: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, selected_title)
    }
}

pub use commands::{BookDraft, BookPatch, CmdMessage, CmdResult, MessageLevel};
