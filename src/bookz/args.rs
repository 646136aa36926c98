use bookz::model::Status;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bookz")]
#[command(about = "File-backed personal book catalog for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book to the catalog
    #[command(alias = "a")]
    Add {
        /// Book title
        title: String,

        /// Author name
        author: String,

        /// ISBN
        #[arg(long)]
        isbn: Option<String>,

        /// Genre
        #[arg(long)]
        genre: Option<String>,

        /// Publication year (stored as given, not validated)
        #[arg(long = "year")]
        publication_year: Option<String>,

        /// Shelf status (Available, Borrowed or Read)
        #[arg(long)]
        status: Option<Status>,
    },

    /// List the catalog
    #[command(alias = "ls")]
    List {
        /// Show every field of every book
        #[arg(long)]
        long: bool,
    },

    /// Search by title or author
    Search {
        /// Substring to match against title or author, case-insensitively
        query: Option<String>,
    },

    /// Update the book with the given title
    Update {
        /// Title of the book to update
        title: String,

        /// New title
        #[arg(long = "title")]
        new_title: Option<String>,

        /// New author
        #[arg(long)]
        author: Option<String>,

        /// New ISBN (pass '' to clear)
        #[arg(long)]
        isbn: Option<String>,

        /// New genre (pass '' to clear)
        #[arg(long)]
        genre: Option<String>,

        /// New publication year (pass '' to clear)
        #[arg(long = "year")]
        publication_year: Option<String>,

        /// New shelf status
        #[arg(long)]
        status: Option<Status>,
    },

    /// Delete the book with the given title
    #[command(alias = "rm")]
    Delete {
        /// Title of the book to delete
        title: String,
    },
}
