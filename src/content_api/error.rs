use thiserror::Error;

use crate::catalog::InvalidChapterId;

/// Errors surfaced by the content API client.
///
/// Absent optional data (no matching juz, a verse without a translation, an
/// empty reciter list) is not an error; those cases are `Option`s on the
/// models instead.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure: DNS, connect, timeout, interrupted body.
    #[error("network error calling {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    /// The body arrived but was not the JSON shape we expect.
    #[error("malformed response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Rejected before any request was issued.
    #[error(transparent)]
    InvalidChapterId(#[from] InvalidChapterId),
}

pub type FetchResult<T> = Result<T, FetchError>;

impl FetchError {
    /// The HTTP status, when the failure was a status failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
