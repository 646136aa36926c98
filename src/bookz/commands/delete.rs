use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

use super::helpers::{load_or_recover, position_by_title};

pub fn run<S: CatalogStore>(store: &mut S, selected_title: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut books = load_or_recover(store, &mut result)?;

    let Some(position) = position_by_title(&books, selected_title) else {
        result.add_message(CmdMessage::warning(format!(
            "No book titled '{}' in the catalog.",
            selected_title
        )));
        return Ok(result);
    };

    let removed = books.remove(position);
    store.save(&books)?;

    result.add_message(CmdMessage::success(format!(
        "Book '{}' deleted.",
        removed.title
    )));
    result.affected_books.push(removed);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_only_the_selected_record() {
        let mut fixture = StoreFixture::new()
            .with_book("Dune", "Frank Herbert")
            .with_book("Foundation", "Isaac Asimov");

        run(&mut fixture.store, "Foundation").unwrap();

        let books = fixture.store.load().unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Dune");
    }

    #[test]
    fn only_the_first_of_duplicate_titles_is_removed() {
        let mut fixture = StoreFixture::new()
            .with_book("Dune", "Frank Herbert")
            .with_book("Dune", "Someone Else");

        run(&mut fixture.store, "Dune").unwrap();

        let books = fixture.store.load().unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].author, "Someone Else");
    }

    #[test]
    fn unknown_title_warns_without_mutating() {
        let mut fixture = StoreFixture::new().with_book("Dune", "Frank Herbert");
        let result = run(&mut fixture.store, "Hyperion").unwrap();

        assert!(result.affected_books.is_empty());
        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
        assert_eq!(fixture.store.load().unwrap().len(), 1);
    }
}
