use log::{info, trace};
use serde::Deserialize;

use crate::{config::Config, uri::encode_component, Error, ErrorKind};

use super::Client;

/// Envelope the proxy wraps the fetched page in.
#[derive(Deserialize)]
struct Envelope {
    contents: Option<String>,
}

/// Fetch the raw html of the quote page through the proxy.
///
/// Every failure, including an envelope without any contents, is reported as
/// [`ErrorKind::RemoteUnavailable`] with the underlying error kept as the source.
pub(crate) fn fetch_quote_page<C: Client>(config: &Config) -> Result<String, Error> {
    let url = format!(
        "{}{}",
        config.proxy_url,
        encode_component(&config.quote_page_url)
    );

    info!("Fetching quotes from '{}'", config.quote_page_url);
    let client = C::default();

    client
        .get_json::<Envelope>(&url)
        .and_then(|Envelope { contents }| {
            contents
                .filter(|html| !html.trim().is_empty())
                .ok_or_else(|| Error::new(ErrorKind::NoValue, "Proxy returned no page contents"))
        })
        .map(|html| {
            trace!("Quote page fetched ({} bytes)", html.len());
            html
        })
        .map_err(|e| Error::wrap(ErrorKind::RemoteUnavailable, e))
}

#[cfg(test)]
mod tests {
    use crate::{
        api::{assert_url, impl_text_producer, MockClient, NetworkErrorProducer},
        config::Config,
        ErrorKind,
    };

    impl_text_producer! {
        EnvelopeProducer => Ok(include_str!("../../tests/data/all_origins_envelope.json").to_owned()),
        NullContentsProducer => Ok(r#"{ "contents": null, "status": { "http_code": 404 } }"#.to_owned()),
        NotJsonProducer => Ok("Bad gateway".to_owned()),
    }

    #[test]
    fn page_url_is_encoded_after_proxy() {
        super::fetch_quote_page::<MockClient<EnvelopeProducer>>(&Config::default()).unwrap();

        assert_url!(
            "https://api.allorigins.win/get?url=https%3A%2F%2Fwww.goodreads.com%2Fwork%2Fquotes%2F90736001-blood-over-bright-haven"
        );
    }

    #[test]
    fn contents_are_returned_as_html() {
        let html = super::fetch_quote_page::<MockClient<EnvelopeProducer>>(&Config::default())
            .expect("Envelope has contents");

        assert!(html.contains("class=\"quoteText\""));
    }

    #[test]
    fn null_contents_is_remote_unavailable() {
        let err = super::fetch_quote_page::<MockClient<NullContentsProducer>>(&Config::default())
            .expect_err("No contents to return");

        assert_eq!(ErrorKind::RemoteUnavailable, err.kind());
        assert!(err.to_string().contains("Proxy returned no page contents"));
    }

    #[test]
    fn malformed_envelope_is_remote_unavailable() {
        let err = super::fetch_quote_page::<MockClient<NotJsonProducer>>(&Config::default())
            .expect_err("Not an envelope");

        assert_eq!(ErrorKind::RemoteUnavailable, err.kind());
    }

    #[test]
    fn network_error_is_remote_unavailable() {
        let err = super::fetch_quote_page::<MockClient<NetworkErrorProducer>>(&Config::default())
            .expect_err("NetworkErrorProducer always fails");

        assert_eq!(ErrorKind::RemoteUnavailable, err.kind());
        assert!(err.to_string().contains("Network error"));
    }
}
