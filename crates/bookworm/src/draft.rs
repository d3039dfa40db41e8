//! The review being written, as entered by the user.

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::{BookSearchResult, Error, ErrorKind};

/// A star rating between 1 and 5 in half star steps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "RawRating")]
pub struct Rating(u8);

impl Rating {
    /// Every rating that can be given, lowest first.
    pub const ALL: [Self; 9] = [
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
        Self(10),
    ];

    /// The number of whole stars.
    #[must_use]
    pub const fn full_stars(self) -> usize {
        (self.0 / 2) as usize
    }

    /// Whether the rating ends in half a star.
    #[must_use]
    pub const fn has_half_star(self) -> bool {
        self.0 % 2 == 1
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_half_star() {
            write!(f, "{}.5", self.full_stars())
        } else {
            write!(f, "{}", self.full_stars())
        }
    }
}

impl FromStr for Rating {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<f64>().map_err(|e| {
            Error::wrap(ErrorKind::Deserialize, e)
        })?;
        Self::try_from(value)
    }
}

impl TryFrom<f64> for Rating {
    type Error = Error;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let half_stars = value * 2.0;
        if half_stars.fract() == 0.0 && (2.0..=10.0).contains(&half_stars) {
            Ok(Self(half_stars as u8))
        } else {
            Err(Error::new(
                ErrorKind::Deserialize,
                format!("'{value}' is not a rating between 1 and 5 in steps of 0.5"),
            ))
        }
    }
}

/// Ratings are read from draft files either as text (`"4.5"`) or as a number (`4.5`).
#[derive(Deserialize)]
#[serde(untagged)]
enum RawRating {
    Text(String),
    Number(f64),
}

impl TryFrom<RawRating> for Rating {
    type Error = Error;

    fn try_from(raw: RawRating) -> Result<Self, Self::Error> {
        match raw {
            RawRating::Text(text) => text.parse(),
            RawRating::Number(value) => Self::try_from(value),
        }
    }
}

/// The fields of a book review newsletter email.
///
/// The rendered email depends on nothing but these fields, see [`crate::compose_email`].
#[allow(missing_docs)]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReviewDraft {
    pub book_title: String,
    pub book_author: String,
    pub book_year: String,
    pub book_publisher: String,
    /// Placeholder text is rendered in its place when empty.
    pub genre: String,
    /// Placeholder text is rendered in its place when empty.
    pub summary: String,
    pub rating: Option<Rating>,
    pub review_text: String,
    /// Name used in the sign-off line.
    pub writer_name: String,
    /// One or more quotes as free text.
    pub quotes_text: String,
    /// Extra text placed after the sign-off, left out when empty.
    pub sign_off: String,
}

impl ReviewDraft {
    /// Fill the book details from a catalog search result.
    ///
    /// The first author and the first publisher are used, anything the catalog does not know
    /// about is cleared.
    #[must_use]
    pub fn with_search_result(mut self, book: &BookSearchResult) -> Self {
        self.book_title = book.title.clone();
        self.book_author = book.authors.first().cloned().unwrap_or_default();
        self.book_year = book
            .first_publish_year
            .map(|year| year.to_string())
            .unwrap_or_default();
        self.book_publisher = book.publishers.first().cloned().unwrap_or_default();
        self
    }

    /// Append `quote` in quotation marks to the quotes, separated from any existing quotes by a
    /// blank line.
    #[must_use]
    pub fn with_quote(mut self, quote: &str) -> Self {
        if !self.quotes_text.is_empty() {
            self.quotes_text.push_str("\n\n");
        }
        self.quotes_text.push('"');
        self.quotes_text.push_str(quote);
        self.quotes_text.push('"');
        self
    }
}
