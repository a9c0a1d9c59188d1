mod config;
mod errors;

pub use config::{ProbeConfig, CANONICAL_SITE, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use errors::{ProbeError, ProbeResult};

/// Prints `msg` to stderr and exits with status 1.
pub fn die(msg: impl std::fmt::Display) -> ! {
    eprintln!("{}", msg);
    std::process::exit(1);
}
