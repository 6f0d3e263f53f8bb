//! The fetch → parse → map → write run.

use std::io::Write;
use std::path::PathBuf;

use shopfeed_core::{AppConfig, OutputRecord, SourceItem};

use crate::client::FeedClient;
use crate::error::FeedError;
use crate::normalize::map_item_with_warnings;
use crate::parse::parse_feed;
use crate::writer::{write_csv_atomic, write_records};

/// Counters reported at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Items read from the feed, equal to the data rows written.
    pub items: usize,
    /// Items whose price was copied through unrecognized.
    pub price_warnings: usize,
    /// Where the document was written; `None` for previews.
    pub output_path: Option<PathBuf>,
}

/// Maps every item in order, logging each warning.
///
/// Returns the records and the number of items that raised a warning.
#[must_use]
pub fn map_items(items: &[SourceItem]) -> (Vec<OutputRecord>, usize) {
    let mut warned = 0;
    let records = items
        .iter()
        .map(|item| {
            let mapped = map_item_with_warnings(item);
            if !mapped.warnings.is_empty() {
                warned += 1;
            }
            for warning in &mapped.warnings {
                tracing::warn!(%warning, "price passed through unchanged");
            }
            mapped.record
        })
        .collect();
    (records, warned)
}

async fn fetch_and_map(
    config: &AppConfig,
    client: &FeedClient,
) -> Result<(Vec<OutputRecord>, usize), FeedError> {
    let body = client.fetch(&config.feed_url).await?;
    let items = parse_feed(&body)?;
    tracing::info!(items = items.len(), "feed parsed");
    Ok(map_items(&items))
}

/// Runs a full transform and writes the result to `config.output_path`.
///
/// Fetch and parse failures abort before the output file is touched.
///
/// # Errors
///
/// Propagates any [`FeedError`] from fetching, parsing, or writing; use
/// [`FeedError::kind`] to tell the stages apart.
pub async fn run_pipeline(config: &AppConfig, client: &FeedClient) -> Result<RunSummary, FeedError> {
    let (records, price_warnings) = fetch_and_map(config, client).await?;
    write_csv_atomic(&config.output_path, &records)?;

    Ok(RunSummary {
        items: records.len(),
        price_warnings,
        output_path: Some(config.output_path.clone()),
    })
}

/// Runs fetch, parse, and map, writing the CSV to `out` instead of the
/// configured output file.
///
/// # Errors
///
/// Same as [`run_pipeline`], with write failures reported as [`FeedError::Csv`].
pub async fn preview_pipeline<W: Write>(
    config: &AppConfig,
    client: &FeedClient,
    out: W,
) -> Result<RunSummary, FeedError> {
    let (records, price_warnings) = fetch_and_map(config, client).await?;
    write_records(out, &records)?;

    Ok(RunSummary {
        items: records.len(),
        price_warnings,
        output_path: None,
    })
}
