use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 Gecko/20100101 Firefox/52.0";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Meets that name this site as their source were entered by us and are never reported.
pub const CANONICAL_SITE: &str = "www.openpowerlifting.org";

#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub user_agent: String,
    pub timeout: Duration,
    pub canonical_site: String,
    /// Only print the newest `quick_limit` meets.
    pub quick: bool,
    pub quick_limit: usize,
    /// A "meets remaining" line is printed once more than this many meets are unentered.
    pub summary_threshold: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            canonical_site: CANONICAL_SITE.to_string(),
            quick: false,
            quick_limit: 5,
            summary_threshold: 3,
        }
    }
}

impl ProbeConfig {
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_canonical_site(mut self, site: impl Into<String>) -> Self {
        self.canonical_site = site.into();
        self
    }

    pub fn with_quick(mut self, quick: bool) -> Self {
        self.quick = quick;
        self
    }

    pub fn with_quick_limit(mut self, limit: usize) -> Self {
        self.quick_limit = limit;
        self
    }

    pub fn with_summary_threshold(mut self, threshold: usize) -> Self {
        self.summary_threshold = threshold;
        self
    }

    /// True when `--quick` appears anywhere in `args`.
    pub fn quick_from_args<I, S>(args: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        args.into_iter().any(|arg| arg.as_ref() == "--quick")
    }
}
