use std::path::PathBuf;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("unexpected redirect to {0}")]
    UnexpectedRedirect(Url),

    #[error("HTTP status {status} from {url}")]
    StatusError { url: Url, status: u16 },

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("URL parsing error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error at {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output error: {0}")]
    OutputError(#[from] std::io::Error),
}

impl ProbeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProbeError::IoError {
            path: path.into(),
            source,
        }
    }
}

pub type ProbeResult<T> = Result<T, ProbeError>;
