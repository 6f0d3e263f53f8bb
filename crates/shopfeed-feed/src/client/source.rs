//! Classification of feed locators.

use std::path::PathBuf;

use reqwest::Url;

use crate::error::FeedError;

/// Where a feed document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Http(Url),
    File(PathBuf),
}

impl FeedSource {
    /// Classifies `locator` as an HTTP(S) URL or a local file.
    ///
    /// `file://` URLs and strings without a scheme (`feeds/et.xml`,
    /// `/tmp/feed.xml`) are treated as filesystem paths. Single-letter
    /// schemes are Windows drive letters, not URLs.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidLocator`] for empty locators, unsupported
    /// schemes, and `file://` URLs that do not name a local path.
    pub fn parse(locator: &str) -> Result<Self, FeedError> {
        let trimmed = locator.trim();
        let invalid = |reason: &str| FeedError::InvalidLocator {
            locator: locator.to_owned(),
            reason: reason.to_owned(),
        };

        if trimmed.is_empty() {
            return Err(invalid("locator is empty"));
        }

        match Url::parse(trimmed) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(FeedSource::Http(url)),
                "file" => url
                    .to_file_path()
                    .map(FeedSource::File)
                    .map_err(|()| invalid("file URL does not name a local path")),
                scheme if scheme.len() == 1 => Ok(FeedSource::File(PathBuf::from(trimmed))),
                scheme => Err(invalid(&format!("unsupported scheme \"{scheme}\""))),
            },
            Err(_) if !trimmed.contains("://") => Ok(FeedSource::File(PathBuf::from(trimmed))),
            Err(e) => Err(invalid(&e.to_string())),
        }
    }
}
