pub mod core;
pub mod fetchers;
pub mod probe;
pub mod report;
pub mod storage;
pub mod variants;

pub use crate::core::{die, ProbeConfig, ProbeError, ProbeResult};
pub use fetchers::{Fetcher, HttpFetcher};
pub use probe::Probe;
pub use report::{print_meets, Reporter};
pub use storage::entered_urls;
pub use variants::{expand_entered, expand_variants, unentered_urls};
