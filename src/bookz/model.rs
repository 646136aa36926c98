use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shelf status of a book. Serialized as the plain variant name so the
/// catalog document stays hand-readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Available,
    Borrowed,
    Read,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Available => "Available",
            Status::Borrowed => "Borrowed",
            Status::Read => "Read",
        };
        f.write_str(s)
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "available" => Ok(Status::Available),
            "borrowed" => Ok(Status::Borrowed),
            "read" => Ok(Status::Read),
            other => Err(format!(
                "unknown status '{}' (expected Available, Borrowed or Read)",
                other
            )),
        }
    }
}

/// One catalog record. Title and author are required; the rest is free-form
/// and absent fields serialize as `null`. The title doubles as the lookup
/// key for update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    pub genre: Option<String>,
    pub publication_year: Option<String>,
    // Older documents may predate the status field
    #[serde(default)]
    pub status: Status,
}

impl Book {
    pub fn new(title: String, author: String) -> Self {
        Self {
            title,
            author,
            isbn: None,
            genre: None,
            publication_year: None,
            status: Status::default(),
        }
    }
}
