//! Endpoints used by the remote collaborators.

/// Public book catalog search endpoint.
pub const OPEN_LIBRARY_SEARCH_URL: &str = "https://openlibrary.org/search.json";

/// Cross-origin content proxy, the target url is appended percent-encoded.
pub const ALL_ORIGINS_PROXY_URL: &str = "https://api.allorigins.win/get?url=";

/// The page scraped for quotes.
pub const GOODREADS_QUOTES_URL: &str =
    "https://www.goodreads.com/work/quotes/90736001-blood-over-bright-haven";

/// Number of catalog results requested per search.
pub const SEARCH_LIMIT: usize = 10;

/// Where the catalog search and the quote page are fetched from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Base url of the catalog search, the query string is appended to it.
    pub search_url: String,
    /// Value of the `limit` query parameter sent with every search.
    pub search_limit: usize,
    /// Proxy prefix the encoded quote page url is appended to.
    pub proxy_url: String,
    /// The page quotes are extracted from.
    pub quote_page_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_url: OPEN_LIBRARY_SEARCH_URL.to_owned(),
            search_limit: SEARCH_LIMIT,
            proxy_url: ALL_ORIGINS_PROXY_URL.to_owned(),
            quote_page_url: GOODREADS_QUOTES_URL.to_owned(),
        }
    }
}

impl Config {
    /// Replace the page that quotes are scraped from.
    #[must_use]
    pub fn with_quote_page<S: Into<String>>(mut self, url: S) -> Self {
        self.quote_page_url = url.into();
        self
    }

    /// Replace the proxy used to fetch the quote page.
    #[must_use]
    pub fn with_proxy<S: Into<String>>(mut self, url: S) -> Self {
        self.proxy_url = url.into();
        self
    }
}

#[test]
fn overrides_leave_search_untouched() {
    let config = Config::default()
        .with_proxy("http://localhost:8080/get?url=")
        .with_quote_page("https://example.org/quotes");

    assert_eq!(OPEN_LIBRARY_SEARCH_URL, config.search_url);
    assert_eq!(10, config.search_limit);
    assert_eq!("http://localhost:8080/get?url=", config.proxy_url);
    assert_eq!("https://example.org/quotes", config.quote_page_url);
}
