use std::path::PathBuf;

/// Feed fetched when neither `CROPINK_FEED_URL` nor `--feed-url` is given.
pub const DEFAULT_FEED_URL: &str = "https://f.cropink.com/feed/11e9623b-ed98-4a61-a9f6-445782c38aa4";

/// Output file written when neither `OUTPUT_CSV_PATH` nor `--output` is given.
pub const DEFAULT_OUTPUT_PATH: &str = "google_ads_feed.csv";

/// Everything a single transform run needs to know about its surroundings.
///
/// Built once by the binary and passed down explicitly; nothing below the
/// entry point reads the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP(S) URL, `file://` URL, or filesystem path of the source feed.
    pub feed_url: String,
    /// Destination of the generated CSV document.
    pub output_path: PathBuf,
}

impl AppConfig {
    /// Returns a copy with CLI-supplied values layered over this config.
    ///
    /// `None` keeps the existing value.
    #[must_use]
    pub fn with_overrides(self, feed_url: Option<String>, output_path: Option<PathBuf>) -> Self {
        Self {
            feed_url: feed_url.unwrap_or(self.feed_url),
            output_path: output_path.unwrap_or(self.output_path),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}
