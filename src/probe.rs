use crate::fetchers::{Fetcher, HttpFetcher};
use crate::report::{print_meets, Reporter};
use crate::storage::entered_urls;
use crate::variants::unentered_urls;
use crate::{ProbeConfig, ProbeResult};
use log::info;
use std::io::Write;
use std::path::PathBuf;

/// Everything a federation probe needs: where its meets live on disk, how to
/// fetch its listing pages, and how to report what is missing.
pub struct Probe {
    label: String,
    feddir: PathBuf,
    config: ProbeConfig,
    fetcher: Option<Box<dyn Fetcher>>,
}

impl Probe {
    pub fn new(
        label: impl Into<String>,
        feddir: impl Into<PathBuf>,
        config: ProbeConfig,
    ) -> Self {
        Self {
            label: label.into(),
            feddir: feddir.into(),
            config,
            fetcher: None,
        }
    }

    pub fn with_fetcher(mut self, fetcher: Box<dyn Fetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Fetches a listing page as text for the caller to pull meet URLs from.
    /// Without an explicit fetcher an [`HttpFetcher`] is built from the config.
    pub async fn listing(&self, url: &str, strict: bool) -> ProbeResult<String> {
        match &self.fetcher {
            Some(fetcher) => fetcher.fetch_text(url, strict).await,
            None => HttpFetcher::new(&self.config)?.fetch_text(url, strict).await,
        }
    }

    pub fn unentered<S: AsRef<str>>(&self, candidates: &[S]) -> ProbeResult<Vec<String>> {
        let entered = entered_urls(&self.feddir)?;
        let unentered = unentered_urls(candidates, &entered, &self.config.canonical_site);
        info!(
            "{}: {} of {} listed meets are not entered",
            self.label,
            unentered.len(),
            candidates.len()
        );
        Ok(unentered)
    }

    pub fn report_to<W: Write, S: AsRef<str>>(
        &self,
        out: &mut W,
        candidates: &[S],
    ) -> ProbeResult<()> {
        let unentered = self.unentered(candidates)?;
        Reporter::new(self.label.as_str(), &self.config).report(out, &unentered)
    }

    /// Diffs `candidates` against the entered meets and prints the rest to stdout.
    pub fn run<S: AsRef<str>>(&self, candidates: &[S]) -> ProbeResult<()> {
        let unentered = self.unentered(candidates)?;
        print_meets(&self.label, &unentered, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetchers::MockFetcher;
    use crate::storage::MARKER_FILE;
    use crate::ProbeError;
    use std::fs;
    use tempfile::TempDir;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn feddir() -> TempDir {
        let root = TempDir::new().unwrap();
        let meet = root.path().join("1901");
        fs::create_dir_all(&meet).unwrap();
        fs::write(meet.join(MARKER_FILE), "http://fed.com/results/spring%20open\n").unwrap();
        root
    }

    #[tokio::test]
    async fn test_listing_and_report() {
        let root = feddir();
        let fetcher = MockFetcher::new().with_page(
            "http://fed.com/results",
            "http://fed.com/results/spring open\nhttp://fed.com/results/fall open\n",
        );
        let probe =
            Probe::new("FED", root.path(), ProbeConfig::default()).with_fetcher(Box::new(fetcher));

        let page = probe.listing("http://fed.com/results", true).await.unwrap();
        let candidates: Vec<&str> = page.lines().collect();

        let mut out = Vec::new();
        probe.report_to(&mut out, &candidates).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "FED http://fed.com/results/fall%20open\n"
        );
    }

    #[test]
    fn test_missing_feddir_is_error() {
        let root = TempDir::new().unwrap();
        let probe = Probe::new("FED", root.path().join("missing"), ProbeConfig::default());
        assert!(probe.unentered(&["http://fed.com/x"]).is_err());
    }

    #[tokio::test]
    async fn test_listing_defaults_to_http() {
        let root = feddir();
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/results"))
            .and(header("user-agent", "ListingBot/2.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("http://fed.com/results/new"))
            .mount(&server)
            .await;

        let config = ProbeConfig::default().with_user_agent("ListingBot/2.0");
        let probe = Probe::new("FED", root.path(), config);
        let page = probe
            .listing(&format!("{}/results", server.uri()), true)
            .await
            .unwrap();

        assert_eq!(page, "http://fed.com/results/new");
    }

    #[tokio::test]
    async fn test_listing_error_status() {
        let root = feddir();
        let probe = Probe::new("FED", root.path(), ProbeConfig::default())
            .with_fetcher(Box::new(MockFetcher::new()));

        let result = probe.listing("http://fed.com/gone", false).await;
        assert!(matches!(
            result,
            Err(ProbeError::StatusError { status: 404, .. })
        ));
    }
}
