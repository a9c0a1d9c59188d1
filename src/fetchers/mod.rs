pub mod http_fetcher;
pub mod mock_fetcher;

mod fetcher;
pub use fetcher::{FetchedPage, Fetcher};
pub use http_fetcher::HttpFetcher;
pub use mock_fetcher::MockFetcher;
