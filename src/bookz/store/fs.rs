use super::CatalogStore;
use crate::error::{BookzError, Result};
use crate::model::Book;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk document shape. A document without the `books` key reads as an
/// empty catalog.
#[derive(Serialize, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    books: Vec<Book>,
}

pub struct FileStore {
    data_file: PathBuf,
}

impl FileStore {
    pub fn new(data_file: PathBuf) -> Self {
        Self { data_file }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

impl CatalogStore for FileStore {
    fn load(&self) -> Result<Vec<Book>> {
        if !self.data_file.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.data_file).map_err(BookzError::Io)?;
        let document: CatalogDocument =
            serde_json::from_str(&content).map_err(BookzError::Serialization)?;
        Ok(document.books)
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(BookzError::Io)?;
            }
        }

        let document = CatalogDocument {
            books: books.to_vec(),
        };
        let content = serde_json::to_string_pretty(&document).map_err(BookzError::Serialization)?;
        fs::write(&self.data_file, content).map_err(BookzError::Io)?;
        Ok(())
    }
}
