use log::{info, trace};
use serde::Deserialize;

use crate::{config::Config, uri::encode_component, Error};

use super::Client;

const COVERS_URL: &str = "https://covers.openlibrary.org/b/id/";

/// A single record returned by the catalog search.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct BookSearchResult {
    /// Title of the work.
    #[serde(default)]
    pub title: String,
    /// Authors in the order the catalog lists them.
    #[serde(rename = "author_name", default)]
    pub authors: Vec<String>,
    /// Year of the earliest known edition.
    pub first_publish_year: Option<u32>,
    /// Publishers across all editions of the work.
    #[serde(rename = "publisher", default)]
    pub publishers: Vec<String>,
    /// ISBNs across all editions of the work.
    #[serde(rename = "isbn", default)]
    pub isbns: Vec<String>,
    /// Id of the cover image, see [`BookSearchResult::cover_url`].
    #[serde(rename = "cover_i")]
    pub cover_id: Option<u64>,
}

/// Size of a cover image served by the covers endpoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CoverSize {
    /// Small thumbnail.
    Small,
    /// Medium thumbnail, the one shown next to search results.
    Medium,
    /// Full size cover.
    Large,
}

impl CoverSize {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
        }
    }
}

impl BookSearchResult {
    /// Url of the cover image, if the catalog knows of one.
    #[must_use]
    pub fn cover_url(&self, size: CoverSize) -> Option<String> {
        self.cover_id
            .map(|id| format!("{COVERS_URL}{id}-{}.jpg", size.suffix()))
    }
}

impl std::fmt::Display for BookSearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title)?;
        if let Some(author) = self.authors.first() {
            write!(f, " by {author}")?;
        }
        if let Some(year) = self.first_publish_year {
            write!(f, " ({year})")?;
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    docs: Vec<BookSearchResult>,
}

pub(crate) fn search_books<C: Client>(
    query: &str,
    config: &Config,
) -> Result<Vec<BookSearchResult>, Error> {
    let query = query.trim();
    if query.is_empty() {
        trace!("Empty search query - skipping catalog search");
        return Ok(Vec::new());
    }

    let url = format!(
        "{}?q={}&limit={}",
        config.search_url,
        encode_component(query),
        config.search_limit
    );

    info!("Searching the catalog for '{query}'");
    let client = C::default();
    let SearchResponse { docs } = client.get_json(&url)?;

    trace!("Catalog search returned {} results", docs.len());
    Ok(docs)
}

#[cfg(test)]
mod tests {
    use super::{BookSearchResult, CoverSize};
    use crate::{
        api::{assert_url, impl_text_producer, MockClient, NetworkErrorProducer},
        config::Config,
        ErrorKind,
    };

    const SEARCH_JSON: &str = include_str!("../../tests/data/open_library_search.json");

    impl_text_producer! {
        ValidJsonProducer => Ok(SEARCH_JSON.to_owned()),
        NoDocsProducer => Ok(r#"{ "numFound": 0 }"#.to_owned()),
        MalformedProducer => Ok("<html>Service unavailable</html>".to_owned()),
    }

    #[test]
    fn search_url_is_encoded_and_limited() {
        let config = Config::default();
        super::search_books::<MockClient<ValidJsonProducer>>("blood over bright haven", &config)
            .expect("ValidJsonProducer always produces valid json");

        assert_url!("https://openlibrary.org/search.json?q=blood%20over%20bright%20haven&limit=10");
    }

    #[test]
    fn query_is_trimmed_before_searching() {
        let config = Config::default();
        super::search_books::<MockClient<ValidJsonProducer>>("  wang&co  ", &config).unwrap();

        assert_url!("https://openlibrary.org/search.json?q=wang%26co&limit=10");
    }

    #[test]
    fn blank_query_does_not_search() {
        crate::api::URL_SINK.with(|sink| *sink.borrow_mut() = None);
        let config = Config::default();
        let res = super::search_books::<MockClient<NetworkErrorProducer>>("   ", &config)
            .expect("Blank queries never reach the client");

        assert!(res.is_empty());
        assert_url!("", "client should not have been called");
    }

    #[test]
    fn docs_are_deserialized_in_order() {
        let config = Config::default();
        let res = super::search_books::<MockClient<ValidJsonProducer>>("wang", &config).unwrap();

        assert_eq!(3, res.len());
        let first = &res[0];
        assert_eq!("Blood Over Bright Haven", first.title);
        assert_eq!(vec!["M. L. Wang".to_owned()], first.authors);
        assert_eq!(Some(2023), first.first_publish_year);
        assert_eq!("Del Rey", first.publishers[0]);
        assert_eq!("9780593725139", first.isbns[0]);
        assert_eq!(Some(14_390_211), first.cover_id);

        assert_eq!(vec!["M. L. Wang", "Gabriel Wang"], res[1].authors);
    }

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let config = Config::default();
        let res = super::search_books::<MockClient<ValidJsonProducer>>("wang", &config).unwrap();

        let bare = &res[2];
        assert_eq!("Untitled Manuscript", bare.title);
        assert!(bare.authors.is_empty());
        assert!(bare.publishers.is_empty());
        assert!(bare.isbns.is_empty());
        assert_eq!(None, bare.first_publish_year);
        assert_eq!(None, bare.cover_id);
    }

    #[test]
    fn missing_docs_is_zero_results() {
        let config = Config::default();
        let res = super::search_books::<MockClient<NoDocsProducer>>("nothing", &config).unwrap();

        assert!(res.is_empty());
    }

    #[test]
    fn malformed_response_is_deserialize_error() {
        let config = Config::default();
        let err = super::search_books::<MockClient<MalformedProducer>>("wang", &config)
            .expect_err("Html is not a search response");

        assert_eq!(ErrorKind::Deserialize, err.kind());
    }

    #[test]
    fn network_error_is_propagated() {
        let config = Config::default();
        let err = super::search_books::<MockClient<NetworkErrorProducer>>("wang", &config)
            .expect_err("NetworkErrorProducer always fails");

        assert_eq!(ErrorKind::IO, err.kind());
    }

    #[test]
    fn cover_url_uses_requested_size() {
        let book = BookSearchResult {
            cover_id: Some(14_390_211),
            ..BookSearchResult::default()
        };

        assert_eq!(
            Some("https://covers.openlibrary.org/b/id/14390211-M.jpg".to_owned()),
            book.cover_url(CoverSize::Medium)
        );
        assert_eq!(None, BookSearchResult::default().cover_url(CoverSize::Large));
    }

    #[test]
    fn display_skips_missing_parts() {
        let book = BookSearchResult {
            title: "Blood Over Bright Haven".to_owned(),
            authors: vec!["M. L. Wang".to_owned()],
            first_publish_year: Some(2023),
            ..BookSearchResult::default()
        };

        assert_eq!("Blood Over Bright Haven by M. L. Wang (2023)", book.to_string());

        let bare = BookSearchResult {
            title: "Untitled".to_owned(),
            ..BookSearchResult::default()
        };
        assert_eq!("Untitled", bare.to_string());
    }
}
