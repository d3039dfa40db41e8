//! Extraction of quote passages from a scraped quote page.
//!
//! The extractor is total: it never fails, a page without any usable passages yields an empty
//! list and a page that could not be fetched yields [`FALLBACK_QUOTES`].

use log::{info, trace, warn};
use scraper::{Html, Selector};

use crate::Error;

/// Elements known to hold quote text on the quote page.
pub const QUOTE_SELECTORS: &str = r#".quoteText, .readable, [data-testid="quote"]"#;

/// The number of quotes kept from a single extraction unless asked otherwise.
pub const DEFAULT_MAX_QUOTES: usize = 10;

/// Quotes returned when the quote page cannot be fetched or read.
pub const FALLBACK_QUOTES: [&str; 3] = [
    "The only way to deal with an unfree world is to become so absolutely free that your very existence is an act of rebellion.",
    "In the end, we will remember not the words of our enemies, but the silence of our friends.",
    "The future belongs to those who believe in the beauty of their dreams.",
];

/// A passage must be longer than this (in characters) to count as a quote.
const MIN_QUOTE_CHARS: usize = 20;

/// Double quotation marks that delimit a passage.
const QUOTE_GLYPHS: &[char] = &['"', '\u{201C}', '\u{201D}'];

/// Marks stripped from either end of a passage without a delimiter pair.
const STRIP_GLYPHS: &[char] = &['"', '\u{201C}', '\u{201D}', '\'', '\u{2018}', '\u{2019}'];

/// Dashes that separate a passage from its attribution.
const ATTRIBUTION_DASHES: &[char] = &['\u{2015}', '\u{2014}', '-'];

/// Collapse every run of whitespace into a single space and trim both ends.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Pull the quoted passage out of a single, already normalized, element text.
///
/// The passage runs from the first quote glyph to the *last* quote glyph after it, so text with
/// several quoted segments collapses into one span covering all of them. Without such a pair the
/// attribution after the first dash is cut off and one layer of quote marks is stripped instead.
#[must_use]
pub fn extract_quote_text(text: &str) -> String {
    if let Some(start) = text.find(QUOTE_GLYPHS) {
        let after = start + text[start..].chars().next().map_or(1, char::len_utf8);
        if let Some(end) = text[after..].rfind(QUOTE_GLYPHS) {
            return text[after..after + end].to_owned();
        }
    }

    strip_quote_glyphs(strip_attribution(text).trim()).to_owned()
}

fn strip_attribution(text: &str) -> &str {
    text.find(ATTRIBUTION_DASHES)
        .map_or(text, |dash| text[..dash].trim_end())
}

fn strip_quote_glyphs(text: &str) -> &str {
    let text = text.strip_prefix(STRIP_GLYPHS).unwrap_or(text);
    text.strip_suffix(STRIP_GLYPHS).unwrap_or(text).trim()
}

/// Extract at most `max_results` quotes from the html of a quote page.
///
/// Matches are kept in document order, candidates beyond `max_results` are ignored.
#[must_use]
pub fn extract_quotes(html: &str, max_results: usize) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(QUOTE_SELECTORS).expect("Quote selectors should always be valid");

    let quotes = document
        .select(&selector)
        .map(|element| normalize_whitespace(&element.text().collect::<String>()))
        .filter(|text| !text.is_empty())
        .map(|text| extract_quote_text(&text))
        .filter(|quote| {
            let keep = quote.chars().count() > MIN_QUOTE_CHARS;
            if !keep {
                trace!("Skipping short passage '{quote}'");
            }
            keep
        })
        .take(max_results)
        .collect::<Vec<_>>();

    info!("Extracted {} quotes", quotes.len());
    quotes
}

/// Extract quotes from a fetched page, or fall back to [`FALLBACK_QUOTES`] when the page could not
/// be fetched.
#[must_use]
pub fn quotes_or_fallback(page: Result<String, Error>, max_results: usize) -> Vec<String> {
    match page {
        Ok(html) => extract_quotes(&html, max_results),
        Err(err) => {
            warn!("{err} - using fallback quotes");
            FALLBACK_QUOTES.iter().map(|&q| q.to_owned()).collect()
        }
    }
}
