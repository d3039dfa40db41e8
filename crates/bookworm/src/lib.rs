#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]
#![doc = include_str!("../README.md")]

mod api;
pub mod config;
pub mod draft;
pub mod email;
mod error;
pub mod quotes;
mod uri;

pub use api::open_library::{BookSearchResult, CoverSize};
pub use config::Config;
pub use draft::{Rating, ReviewDraft};
pub use email::{compose_email, render_stars, Email};
pub use error::{Error, ErrorKind};
pub use quotes::{extract_quotes, quotes_or_fallback, DEFAULT_MAX_QUOTES, FALLBACK_QUOTES};

use log::{trace, warn};

type Client = reqwest::blocking::Client;

/// Search the book catalog for `query`.
///
/// A blank `query` returns no results without making a request.
///
/// # Errors
///
/// An `Err` is returned when the catalog cannot be reached.
/// An `Err` is returned when the response cannot be parsed as search results.
#[inline]
pub fn try_search_books(query: &str, config: &Config) -> Result<Vec<BookSearchResult>, Error> {
    trace!("Search catalog for '{query}'");
    api::open_library::search_books::<Client>(query, config)
}

/// Search the book catalog for `query`, any failure is logged and treated as no results.
#[must_use]
#[inline]
pub fn search_books(query: &str, config: &Config) -> Vec<BookSearchResult> {
    search_books_or_empty::<Client>(query, config)
}

fn search_books_or_empty<C: api::Client>(query: &str, config: &Config) -> Vec<BookSearchResult> {
    api::open_library::search_books::<C>(query, config).unwrap_or_else(|err| {
        warn!("Book search failed: {err}");
        Vec::new()
    })
}

/// Fetch the raw html of the quote page configured in `config`.
///
/// # Errors
///
/// An `Err` of kind [`ErrorKind::RemoteUnavailable`] is returned for any failure to fetch the page
/// or to read it from the proxy response.
#[inline]
pub fn fetch_quote_page(config: &Config) -> Result<String, Error> {
    trace!("Fetch quote page");
    api::quote_source::fetch_quote_page::<Client>(config)
}

/// Fetch the quote page and extract at most `max_results` quotes from it, falling back to
/// [`FALLBACK_QUOTES`] when the page cannot be fetched.
#[must_use]
pub fn fetch_quotes(config: &Config, max_results: usize) -> Vec<String> {
    quotes_or_fallback(fetch_quote_page(config), max_results)
}

#[cfg(test)]
mod tests {
    use crate::{
        api::{impl_text_producer, MockClient, NetworkErrorProducer},
        config::Config,
    };

    impl_text_producer! {
        OneBookProducer => Ok(r#"{ "docs": [{ "title": "Piranesi" }] }"#.to_owned()),
        NotJsonProducer => Ok("<html>Bad gateway</html>".to_owned()),
    }

    #[test]
    fn failed_search_is_empty() {
        let config = Config::default();
        let books = super::search_books_or_empty::<MockClient<NetworkErrorProducer>>("wang", &config);

        assert!(books.is_empty());
    }

    #[test]
    fn malformed_search_response_is_empty() {
        let config = Config::default();
        let books = super::search_books_or_empty::<MockClient<NotJsonProducer>>("wang", &config);

        assert!(books.is_empty());
    }

    #[test]
    fn successful_search_is_passed_through() {
        let config = Config::default();
        let books = super::search_books_or_empty::<MockClient<OneBookProducer>>("piranesi", &config);

        assert_eq!(1, books.len());
        assert_eq!("Piranesi", books[0].title);
    }

    #[test]
    fn unreachable_catalog_is_err_then_empty() {
        let config = Config {
            search_url: "http://127.0.0.1:9/search.json".to_owned(),
            ..Config::default()
        };

        assert!(super::try_search_books("wang", &config).is_err());
        assert!(super::search_books("wang", &config).is_empty());
    }
}
