//! Book subcommands

use std::cmp::Ordering;

use crate::{
    BacklogError,
    cli::{BookCommands, BookCriteriaArgs, BookSortKey},
    editor,
    filters::book::create_filter,
    lister::{self, Direction},
    matcher::is_close,
    models::{Book, Series},
    output,
    picker::Picker,
    store::{AddOutcome, Backlog},
};

type Result<T> = std::result::Result<T, BacklogError>;

/// Execute a book subcommand
pub fn execute(backlog: &mut Backlog, command: BookCommands, quiet: bool) -> Result<()> {
    match command {
        BookCommands::Add {
            title,
            pages,
            started,
            completed,
            authors,
            genres,
            tags,
            series_title,
            series_index,
            ..
        } => {
            let book = Book {
                title,
                pages,
                started,
                completed,
                authors: trimmed(authors),
                genres: trimmed(genres),
                tags: trimmed(tags),
                series: Series {
                    title: series_title,
                    index: series_index,
                },
            };
            add(backlog, book, quiet)
        }
        BookCommands::Choose { num_runs, criteria } => choose(backlog, num_runs as usize, &criteria),
        BookCommands::Show {
            sort_by,
            direction,
            criteria,
        } => {
            show(backlog, sort_by, direction, &criteria, quiet);
            Ok(())
        }
        BookCommands::Edit { title } => edit(backlog, &title, quiet),
    }
}

fn add(backlog: &mut Backlog, book: Book, quiet: bool) -> Result<()> {
    match backlog.add_book(book) {
        AddOutcome::Added => {}
        AddOutcome::Duplicate { index, item } => {
            output::info("Book has already been added to backlog", quiet);
            if output::confirm("Overwrite details?", quiet)? {
                backlog.replace_book(index, item);
            }
        }
    }
    backlog.save()?;
    Ok(())
}

fn choose(backlog: &Backlog, num_runs: usize, criteria: &BookCriteriaArgs) -> Result<()> {
    let picker = Picker::new(num_runs, create_filter(&criteria.into()));
    let result = picker.pick(&backlog.books)?;
    println!("{}", output::book_line(&result));
    Ok(())
}

fn show(
    backlog: &Backlog,
    sort_by: Option<BookSortKey>,
    direction: Direction,
    criteria: &BookCriteriaArgs,
    quiet: bool,
) {
    let filter = create_filter(&criteria.into());
    let listed = lister::list_items(
        &backlog.books,
        Some(&filter),
        sort_by.map(comparator),
        direction,
    );
    if listed.is_empty() {
        output::info("No books matched.", quiet);
        return;
    }
    for book in listed {
        println!("{}", output::book_line(&book));
    }
}

fn edit(backlog: &mut Backlog, title: &str, quiet: bool) -> Result<()> {
    let index = find_book(backlog, title)?;
    let edited = editor::edit_item(&backlog.books[index], "book")?;
    backlog.replace_book(index, edited);
    backlog.save()?;
    output::info(
        &format!(
            "Saved new details {}",
            output::book_line(&backlog.books[index])
        ),
        quiet,
    );
    Ok(())
}

/// Locate the book to edit: exact title first, then fuzzy candidates
fn find_book(backlog: &Backlog, title: &str) -> Result<usize> {
    if let Some(index) = backlog.books.iter().position(|book| book.title == title) {
        return Ok(index);
    }
    output::warn(&format!("Could not find book with title={title}"));

    let candidates: Vec<usize> = backlog
        .books
        .iter()
        .enumerate()
        .filter(|(_, book)| is_close(&book.title, title))
        .map(|(index, _)| index)
        .collect();
    let labels: Vec<String> = candidates
        .iter()
        .map(|&index| backlog.books[index].to_string())
        .collect();
    let choice = editor::choose_candidate(&labels, "book", title)?;
    Ok(candidates[choice])
}

fn comparator(key: BookSortKey) -> fn(&Book, &Book) -> Ordering {
    match key {
        BookSortKey::Title => |one, two| one.title.cmp(&two.title),
        BookSortKey::Pages => |one, two| one.pages.cmp(&two.pages),
    }
}

fn trimmed(values: Vec<String>) -> Vec<String> {
    values.into_iter().map(|value| value.trim().to_string()).collect()
}
