use bookz::api::{BookDraft, BookPatch, CmdMessage, MessageLevel};
use bookz::error::Result;
use bookz::init::{initialize, BookzContext};
use bookz::model::{Book, Status};
use clap::Parser;
use colored::*;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = initialize()?;

    match cli.command {
        Some(Commands::Add {
            title,
            author,
            isbn,
            genre,
            publication_year,
            status,
        }) => handle_add(&mut ctx, title, author, isbn, genre, publication_year, status),
        Some(Commands::List { long }) => handle_list(&ctx, long),
        Some(Commands::Search { query }) => handle_search(&ctx, query),
        Some(Commands::Update {
            title,
            new_title,
            author,
            isbn,
            genre,
            publication_year,
            status,
        }) => handle_update(
            &mut ctx,
            title,
            BookPatch {
                title: new_title,
                author,
                isbn,
                genre,
                publication_year,
                status,
            },
        ),
        Some(Commands::Delete { title }) => handle_delete(&mut ctx, title),
        None => handle_list(&ctx, false),
    }
}

fn handle_add(
    ctx: &mut BookzContext,
    title: String,
    author: String,
    isbn: Option<String>,
    genre: Option<String>,
    publication_year: Option<String>,
    status: Option<Status>,
) -> Result<()> {
    let draft = BookDraft {
        title,
        author,
        isbn,
        genre,
        publication_year,
        status,
    };
    let result = ctx.api.add_book(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &BookzContext, long: bool) -> Result<()> {
    let result = ctx.api.list_books()?;
    if long {
        print_book_details(&result.listed_books);
    } else {
        print_books(&result.listed_books);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &BookzContext, query: Option<String>) -> Result<()> {
    let result = ctx.api.search_books(query.as_deref().unwrap_or_default())?;
    print_books(&result.listed_books);
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut BookzContext, title: String, patch: BookPatch) -> Result<()> {
    let result = ctx.api.update_book(&title, patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut BookzContext, title: String) -> Result<()> {
    let result = ctx.api.delete_book(&title)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const STATUS_WIDTH: usize = 12;

fn print_books(books: &[Book]) {
    for (i, book) in books.iter().enumerate() {
        let idx_str = format!("{:>3}. ", i + 1);
        let line = format!("{} by {}", book.title, book.author);

        let available = LINE_WIDTH.saturating_sub(idx_str.width() + STATUS_WIDTH);
        let line_display = truncate_to_width(&line, available);
        let padding = available.saturating_sub(line_display.width());

        let status_str = format!("[{}]", book.status);
        let status_colored = match book.status {
            Status::Available => status_str.green(),
            Status::Borrowed => status_str.yellow(),
            Status::Read => status_str.dimmed(),
        };

        println!(
            "{}{}{}{}",
            idx_str,
            line_display,
            " ".repeat(padding),
            status_colored
        );
    }
}

fn print_book_details(books: &[Book]) {
    for (i, book) in books.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", format!("--- Book {} ---", i + 1).yellow());
        println!("Title:  {}", book.title.bold());
        println!("Author: {}", book.author);
        if let Some(isbn) = &book.isbn {
            println!("ISBN:   {}", isbn);
        }
        if let Some(genre) = &book.genre {
            println!("Genre:  {}", genre);
        }
        if let Some(year) = &book.publication_year {
            println!("Year:   {}", year);
        }
        println!("Status: {}", book.status);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
