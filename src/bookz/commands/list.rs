use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

use super::helpers::load_or_recover;

pub fn run<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let books = load_or_recover(store, &mut result)?;

    if books.is_empty() {
        result.add_message(CmdMessage::info("Your library is empty."));
    }

    Ok(result.with_listed_books(books))
}
