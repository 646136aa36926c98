use crate::commands::{BookPatch, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Book;
use crate::store::CatalogStore;

use super::helpers::{load_or_recover, position_by_title, required_field_messages};

/// A patched optional field: a supplied blank clears it, a supplied value
/// replaces it, nothing supplied keeps the current value.
fn apply_optional(new: Option<String>, current: &Option<String>) -> Option<String> {
    match new {
        Some(value) if value.is_empty() => None,
        Some(value) => Some(value),
        None => current.clone(),
    }
}

pub fn run<S: CatalogStore>(
    store: &mut S,
    selected_title: &str,
    patch: BookPatch,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut books = load_or_recover(store, &mut result)?;

    let Some(position) = position_by_title(&books, selected_title) else {
        result.add_message(CmdMessage::warning(format!(
            "No book titled '{}' in the catalog.",
            selected_title
        )));
        return Ok(result);
    };

    let current = &books[position];
    let replacement = Book {
        title: patch.title.unwrap_or_else(|| current.title.clone()),
        author: patch.author.unwrap_or_else(|| current.author.clone()),
        isbn: apply_optional(patch.isbn, &current.isbn),
        genre: apply_optional(patch.genre, &current.genre),
        publication_year: apply_optional(patch.publication_year, &current.publication_year),
        status: patch.status.unwrap_or(current.status),
    };

    let problems = required_field_messages(&replacement.title, &replacement.author);
    if !problems.is_empty() {
        for message in problems {
            result.add_message(message);
        }
        return Ok(result);
    }

    books[position] = replacement.clone();
    store.save(&books)?;

    result.add_message(CmdMessage::success(format!(
        "Book '{}' updated.",
        replacement.title
    )));
    result.affected_books.push(replacement);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Status;
    use crate::store::memory::fixtures::StoreFixture;

    fn patch() -> BookPatch {
        BookPatch::default()
    }

    #[test]
    fn changes_only_the_selected_record() {
        let mut fixture = StoreFixture::new()
            .with_book("Dune", "Frank Herbert")
            .with_book("Foundation", "Isaac Asimov");

        let mut changes = patch();
        changes.status = Some(Status::Read);
        run(&mut fixture.store, "Dune", changes).unwrap();

        let books = fixture.store.load().unwrap();
        assert_eq!(books[0].status, Status::Read);
        assert_eq!(books[0].title, "Dune");
        assert_eq!(books[0].author, "Frank Herbert");
        assert_eq!(books[1].status, Status::Available);
        assert_eq!(books[1].title, "Foundation");
    }

    #[test]
    fn unset_fields_keep_their_current_values() {
        let mut fixture = StoreFixture::new().with_book("Dune", "Frank Herbert");
        let mut changes = patch();
        changes.genre = Some("Science Fiction".into());
        run(&mut fixture.store, "Dune", changes).unwrap();

        let mut changes = patch();
        changes.author = Some("F. Herbert".into());
        run(&mut fixture.store, "Dune", changes).unwrap();

        let books = fixture.store.load().unwrap();
        assert_eq!(books[0].author, "F. Herbert");
        assert_eq!(books[0].genre.as_deref(), Some("Science Fiction"));
    }

    #[test]
    fn blank_clears_an_optional_field() {
        let mut fixture = StoreFixture::new().with_book("Dune", "Frank Herbert");
        let mut changes = patch();
        changes.isbn = Some("9780441013593".into());
        run(&mut fixture.store, "Dune", changes).unwrap();

        let mut changes = patch();
        changes.isbn = Some(String::new());
        run(&mut fixture.store, "Dune", changes).unwrap();

        assert_eq!(fixture.store.load().unwrap()[0].isbn, None);
    }

    #[test]
    fn retitling_rebinds_the_lookup_key() {
        let mut fixture = StoreFixture::new().with_book("Dune", "Frank Herbert");
        let mut changes = patch();
        changes.title = Some("Dune Messiah".into());
        run(&mut fixture.store, "Dune", changes).unwrap();

        let books = fixture.store.load().unwrap();
        assert_eq!(books[0].title, "Dune Messiah");
    }

    #[test]
    fn only_the_first_of_duplicate_titles_is_touched() {
        let mut fixture = StoreFixture::new()
            .with_book("Dune", "Frank Herbert")
            .with_book("Dune", "Someone Else");

        let mut changes = patch();
        changes.status = Some(Status::Borrowed);
        run(&mut fixture.store, "Dune", changes).unwrap();

        let books = fixture.store.load().unwrap();
        assert_eq!(books[0].status, Status::Borrowed);
        assert_eq!(books[1].status, Status::Available);
    }

    #[test]
    fn unknown_title_warns_without_mutating() {
        let mut fixture = StoreFixture::new().with_book("Dune", "Frank Herbert");
        let result = run(&mut fixture.store, "Hyperion", patch()).unwrap();

        assert!(result.affected_books.is_empty());
        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
        assert_eq!(fixture.store.load().unwrap().len(), 1);
    }

    #[test]
    fn blanking_the_title_is_rejected() {
        let mut fixture = StoreFixture::new().with_book("Dune", "Frank Herbert");
        let mut changes = patch();
        changes.title = Some(String::new());
        let result = run(&mut fixture.store, "Dune", changes).unwrap();

        assert!(result.affected_books.is_empty());
        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
        assert_eq!(fixture.store.load().unwrap()[0].title, "Dune");
    }
}
