use crate::{ProbeError, ProbeResult};
use async_trait::async_trait;
use log::{debug, info, warn};
use url::Url;

#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Where the request ended up after redirects.
    pub url: Url,
    pub status: u16,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch_single(&self, url: Url) -> ProbeResult<FetchedPage>;

    /// Fetches `url` once and returns the raw body.
    ///
    /// With `strict` set, a request that resolved somewhere other than `url`
    /// fails with [`ProbeError::UnexpectedRedirect`]. A non-2xx status is
    /// always an error.
    async fn fetch(&self, url: &str, strict: bool) -> ProbeResult<Vec<u8>> {
        let requested = Url::parse(url)?;
        info!("Fetching URL: {}", requested);

        let page = self.fetch_single(requested.clone()).await?;
        debug!(
            "Received response: status={}, body_length={}",
            page.status,
            page.body.len()
        );

        if !(200..300).contains(&page.status) {
            return Err(ProbeError::StatusError {
                url: page.url,
                status: page.status,
            });
        }

        if page.url != requested {
            if strict {
                warn!("Unexpected redirect: {} -> {}", requested, page.url);
                return Err(ProbeError::UnexpectedRedirect(page.url));
            }
            debug!("Followed redirect: {} -> {}", requested, page.url);
        }

        Ok(page.body)
    }

    async fn fetch_text(&self, url: &str, strict: bool) -> ProbeResult<String> {
        let body = self.fetch(url, strict).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
