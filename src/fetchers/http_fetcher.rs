use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use url::Url;

use super::{FetchedPage, Fetcher};
use crate::{ProbeConfig, ProbeResult};

#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &ProbeConfig) -> ProbeResult<Self> {
        let client = ClientBuilder::new()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_single(&self, url: Url) -> ProbeResult<FetchedPage> {
        let response = self.client.get(url).send().await?.error_for_status()?;

        let status = response.status().as_u16();
        let final_url = response.url().clone();
        let body = response.bytes().await?;

        Ok(FetchedPage {
            url: final_url,
            status,
            body: body.to_vec(),
        })
    }
}
