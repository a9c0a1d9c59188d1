use crate::ProbeResult;
use async_trait::async_trait;
use std::collections::HashMap;
use url::Url;

use super::{FetchedPage, Fetcher};

#[derive(Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    /// Final URL reported for the request, if it was redirected.
    pub redirect_to: Option<Url>,
}

/// Serves canned pages keyed by the requested URL; unknown URLs get an empty 404.
#[derive(Clone, Default)]
pub struct MockFetcher {
    responses: HashMap<String, MockResponse>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(
            url.to_string(),
            MockResponse {
                status: 200,
                body: body.to_string(),
                redirect_to: None,
            },
        );
        self
    }

    pub fn with_response(mut self, url: &str, response: MockResponse) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch_single(&self, url: Url) -> ProbeResult<FetchedPage> {
        let page = match self.responses.get(url.as_str()) {
            Some(response) => FetchedPage {
                url: response.redirect_to.clone().unwrap_or(url),
                status: response.status,
                body: response.body.clone().into_bytes(),
            },
            None => FetchedPage {
                url,
                status: 404,
                body: Vec::new(),
            },
        };
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProbeError;

    #[tokio::test]
    async fn test_canned_page() {
        let fetcher = MockFetcher::new().with_page("http://fed.com/results", "hello");
        let body = fetcher.fetch_text("http://fed.com/results", true).await.unwrap();
        assert_eq!(body, "hello");
    }

    #[tokio::test]
    async fn test_simulated_redirect() {
        let fetcher = MockFetcher::new().with_response(
            "http://fed.com/results",
            MockResponse {
                status: 200,
                body: "moved".to_string(),
                redirect_to: Some(Url::parse("https://fed.com/login").unwrap()),
            },
        );

        let lenient = fetcher.fetch_text("http://fed.com/results", false).await.unwrap();
        assert_eq!(lenient, "moved");

        let strict = fetcher.fetch("http://fed.com/results", true).await;
        assert!(matches!(
            strict,
            Err(ProbeError::UnexpectedRedirect(u)) if u.as_str() == "https://fed.com/login"
        ));
    }

    #[tokio::test]
    async fn test_unknown_url_is_not_found() {
        let fetcher = MockFetcher::new();
        let result = fetcher.fetch("http://fed.com/missing", false).await;
        assert!(matches!(
            result,
            Err(ProbeError::StatusError { status: 404, url }) if url.as_str() == "http://fed.com/missing"
        ));
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let fetcher = MockFetcher::new().with_response(
            "http://fed.com/results",
            MockResponse {
                status: 500,
                body: "boom".to_string(),
                redirect_to: None,
            },
        );

        let result = fetcher.fetch_text("http://fed.com/results", true).await;
        assert!(matches!(
            result,
            Err(ProbeError::StatusError { status: 500, .. })
        ));
    }
}
