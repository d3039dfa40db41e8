use bookworm::{BookSearchResult, Config, Rating, ReviewDraft, DEFAULT_MAX_QUOTES};
use log::{info, trace};

use crate::interact::{user_confirm, user_input, user_multi_select, user_select, user_text};

/// Walk the user through every field of the review, starting from the values in `draft`.
pub fn user_fill_draft(draft: ReviewDraft, config: &Config) -> eyre::Result<ReviewDraft> {
    let mut draft = user_pick_book(draft, config)?;

    draft.book_title = user_input("Title", &draft.book_title)?;
    draft.book_author = user_input("Author", &draft.book_author)?;
    draft.book_year = user_input("Year", &draft.book_year)?;
    draft.book_publisher = user_input("Publisher", &draft.book_publisher)?;
    draft.genre = user_input("Genre", &draft.genre)?;
    draft.summary = user_text("summary", &draft.summary)?;
    draft.rating = Some(user_select_rating(draft.rating)?);
    draft.review_text = user_text("review", &draft.review_text)?;
    draft.writer_name = user_input("Your name", &draft.writer_name)?;

    let mut draft = user_pick_quotes(draft, config)?;

    draft.quotes_text = user_text("favourite quotes", &draft.quotes_text)?;
    draft.sign_off = user_input("Additional sign-off", &draft.sign_off)?;

    Ok(draft)
}

fn user_pick_book(draft: ReviewDraft, config: &Config) -> eyre::Result<ReviewDraft> {
    let query = user_input("Search for a book by title or author (leave empty to skip)", "")?;
    if query.trim().is_empty() {
        trace!("Book search skipped");
        return Ok(draft);
    }

    let books = bookworm::search_books(&query, config);
    if books.is_empty() {
        println!("No books found for '{query}'");
        return Ok(draft);
    }

    match select_book(&books)? {
        Some(book) => Ok(draft.with_search_result(book)),
        None => Ok(draft),
    }
}

fn select_book(books: &[BookSearchResult]) -> eyre::Result<Option<&BookSearchResult>> {
    let mut items = books.iter().map(ToString::to_string).collect::<Vec<_>>();
    items.push("None of these".to_owned());

    let selection = user_select("Choose a book", &items, 0)?;
    Ok(books.get(selection))
}

fn user_select_rating(current: Option<Rating>) -> eyre::Result<Rating> {
    let items = Rating::ALL
        .iter()
        .map(|r| format!("{} ({r})", bookworm::render_stars(Some(*r))))
        .collect::<Vec<_>>();
    let default = current
        .and_then(|c| Rating::ALL.iter().position(|&r| r == c))
        .unwrap_or(Rating::ALL.len() - 1);

    let selection = user_select("Rating", &items, default)?;
    Ok(Rating::ALL[selection])
}

fn user_pick_quotes(draft: ReviewDraft, config: &Config) -> eyre::Result<ReviewDraft> {
    if !user_confirm("Fetch quotes from the quote page?", false)? {
        return Ok(draft);
    }

    let quotes = bookworm::fetch_quotes(config, DEFAULT_MAX_QUOTES);
    if quotes.is_empty() {
        println!("No quotes found on the quote page");
        return Ok(draft);
    }

    let selected = user_multi_select("Pick quotes to add (space to select)", &quotes)?;
    info!("Adding {} quotes to the review", selected.len());

    Ok(selected
        .into_iter()
        .fold(draft, |draft, i| draft.with_quote(&quotes[i])))
}
