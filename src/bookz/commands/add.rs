use crate::commands::{BookDraft, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Book;
use crate::store::CatalogStore;

use super::helpers::{blank_to_none, load_or_recover, required_field_messages};

pub fn run<S: CatalogStore>(store: &mut S, draft: BookDraft) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let problems = required_field_messages(&draft.title, &draft.author);
    if !problems.is_empty() {
        for message in problems {
            result.add_message(message);
        }
        return Ok(result);
    }

    let mut books = load_or_recover(store, &mut result)?;
    let book = Book {
        title: draft.title,
        author: draft.author,
        isbn: blank_to_none(draft.isbn),
        genre: blank_to_none(draft.genre),
        publication_year: blank_to_none(draft.publication_year),
        status: draft.status.unwrap_or_default(),
    };
    books.push(book.clone());
    store.save(&books)?;

    result.add_message(CmdMessage::success(format!(
        "Book '{}' by {} added.",
        book.title, book.author
    )));
    result.affected_books.push(book);
    Ok(result)
}
