use std::path::PathBuf;

use thiserror::Error;

/// Stage of the run a [`FeedError`] aborted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The source document could not be retrieved.
    Fetch,
    /// The source document is not well-formed XML.
    MalformedDocument,
    /// The output document could not be written.
    Write,
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid feed locator \"{locator}\": {reason}")]
    InvalidLocator { locator: String, reason: String },

    #[error("failed to read feed file {}: {source}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed feed document: {0}")]
    NotWellFormed(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FeedError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            FeedError::Http(_)
            | FeedError::UnexpectedStatus { .. }
            | FeedError::InvalidLocator { .. }
            | FeedError::ReadSource { .. } => FailureKind::Fetch,
            FeedError::Xml(_) | FeedError::NotWellFormed(_) => FailureKind::MalformedDocument,
            FeedError::Csv(_) | FeedError::WriteOutput { .. } => FailureKind::Write,
        }
    }
}
