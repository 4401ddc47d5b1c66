use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Failure categories for a single unit of batch work. The batch driver
/// catches these per item; none of them abort a run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("can't parse publication number {0:?}")]
    BadPublicationNumber(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("unexpected listing body for {publication_number}: {detail}")]
    Listing {
        publication_number: String,
        detail: String,
    },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown output format {0:?}")]
    UnknownFormat(String),
}
