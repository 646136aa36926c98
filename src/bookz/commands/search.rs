use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Book;
use crate::store::CatalogStore;

use super::helpers::load_or_recover;

pub fn run<S: CatalogStore>(store: &S, query: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if query.trim().is_empty() {
        result.add_message(CmdMessage::warning("Please enter a search query."));
        return Ok(result);
    }

    let books = load_or_recover(store, &mut result)?;
    let query_lower = query.to_lowercase();
    let matches: Vec<Book> = books
        .into_iter()
        .filter(|book| {
            book.title.to_lowercase().contains(&query_lower)
                || book.author.to_lowercase().contains(&query_lower)
        })
        .collect();

    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No books found matching '{}'.",
            query
        )));
    }

    Ok(result.with_listed_books(matches))
}
