use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookzError, Result};
use crate::model::Book;
use crate::store::CatalogStore;

/// Load the catalog, degrading a decode failure to an empty catalog plus an
/// error message. The broken document stays on disk until the next
/// successful mutation overwrites it.
pub fn load_or_recover<S: CatalogStore>(store: &S, result: &mut CmdResult) -> Result<Vec<Book>> {
    match store.load() {
        Ok(books) => Ok(books),
        Err(BookzError::Serialization(e)) => {
            result.add_message(CmdMessage::error(format!(
                "Could not decode the catalog file ({}). Starting with an empty library.",
                e
            )));
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

/// Blank optional fields are treated as absent, matching the document shape
/// where unset fields are `null`.
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub fn required_field_messages(title: &str, author: &str) -> Vec<CmdMessage> {
    let mut messages = Vec::new();
    if title.is_empty() {
        messages.push(CmdMessage::warning("Title is a required field."));
    }
    if author.is_empty() {
        messages.push(CmdMessage::warning("Author is a required field."));
    }
    messages
}

/// First record whose title matches exactly. With duplicate titles only the
/// first is ever targeted.
pub fn position_by_title(books: &[Book], title: &str) -> Option<usize> {
    books.iter().position(|b| b.title == title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fs::FileStore;

    #[test]
    fn blank_to_none_drops_empty_strings() {
        assert_eq!(blank_to_none(Some(String::new())), None);
        assert_eq!(blank_to_none(Some("x".into())), Some("x".into()));
        assert_eq!(blank_to_none(None), None);
    }

    #[test]
    fn load_or_recover_degrades_decode_errors() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("book_data.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = FileStore::new(path);
        let mut result = CmdResult::default();
        let books = load_or_recover(&store, &mut result).unwrap();

        assert!(books.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("empty library"));
    }

    #[test]
    fn position_by_title_targets_first_duplicate() {
        let books = vec![
            Book::new("Dune".into(), "Frank Herbert".into()),
            Book::new("Dune".into(), "Someone Else".into()),
        ];
        assert_eq!(position_by_title(&books, "Dune"), Some(0));
        assert_eq!(position_by_title(&books, "dune"), None);
    }
}
