//! Rendering of a [`ReviewDraft`] into the newsletter email.

use crate::{
    draft::{Rating, ReviewDraft},
    uri::encode_component,
};

const FILLED_STAR: char = '\u{2605}';
const HALF_STAR: char = '\u{2606}';

const SUBJECT_PREFIX: &str = "The Bookworm Newsletter: ";

const GENRE_PLACEHOLDER: &str = "[Add genre here]";
const SUMMARY_PLACEHOLDER: &str = "[Add your book summary here]";
const QUOTES_PLACEHOLDER: &str = "[Add your favourite quotes here]";

/// A rendered newsletter email.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Email {
    /// The subject line, without the `Subject: ` label.
    pub subject: String,
    /// The whole email starting with the `Subject: ` line, as copied to the clipboard.
    pub full_text: String,
    /// [`Email::full_text`] without its first line, as handed to a mail client.
    pub body: String,
}

impl Email {
    /// A `mailto:` uri with the subject and body filled in and no recipient.
    #[must_use]
    pub fn mailto_uri(&self) -> String {
        format!(
            "mailto:?subject={}&body={}",
            encode_component(&self.subject),
            encode_component(&self.body)
        )
    }
}

/// Render `floor(rating)` filled stars followed by a half star for ratings ending in `.5`.
///
/// No rating renders as an empty string.
#[must_use]
pub fn render_stars(rating: Option<Rating>) -> String {
    rating.map_or_else(String::new, |rating| {
        let mut stars = std::iter::repeat(FILLED_STAR)
            .take(rating.full_stars())
            .collect::<String>();
        if rating.has_half_star() {
            stars.push(HALF_STAR);
        }
        stars
    })
}

const fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Render the newsletter email for `draft`.
#[must_use]
pub fn compose_email(draft: &ReviewDraft) -> Email {
    let ReviewDraft {
        book_title,
        book_author,
        genre,
        summary,
        rating,
        review_text,
        writer_name,
        quotes_text,
        sign_off,
        ..
    } = draft;

    let subject = format!("{SUBJECT_PREFIX}{book_title}");
    let stars = render_stars(*rating);
    let rating = rating.map_or_else(String::new, |r| r.to_string());
    let genre = or_placeholder(genre, GENRE_PLACEHOLDER);
    let summary = or_placeholder(summary, SUMMARY_PLACEHOLDER);
    let quotes = or_placeholder(quotes_text, QUOTES_PLACEHOLDER);

    let mut full_text = format!(
        "Subject: {subject}

Merry Winter! 

After a bit of a reading slump, I'm so back \u{1F62F}

Title: {book_title}
Author: {book_author}
Rating: {stars} ({rating}/5)
Genre: {genre}

Summary

{summary}

Thoughts, Feelings, Emotions

{review_text}

Favourite Quotes

{quotes}

- {writer_name}"
    );

    if !sign_off.is_empty() {
        full_text.push_str("\n\n");
        full_text.push_str(sign_off);
    }

    let body = full_text
        .split_once('\n')
        .map_or_else(String::new, |(_, rest)| rest.to_owned());

    Email {
        subject,
        full_text,
        body,
    }
}
