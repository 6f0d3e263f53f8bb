//! CSV serialization of mapped records.

use std::io::Write;
use std::path::Path;

use shopfeed_core::{OutputRecord, COLUMNS};
use tempfile::Builder;

use crate::error::FeedError;

/// Writes the header row and one row per record to `out`.
///
/// Every field is quoted, fields are comma-separated, and each record ends
/// with a single `\n`.
///
/// # Errors
///
/// Returns [`FeedError::Csv`] if serialization or the underlying writer fails.
pub fn write_records<W: Write>(out: W, records: &[OutputRecord]) -> Result<(), FeedError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    writer.write_record(COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(|e| FeedError::Csv(e.into()))?;
    Ok(())
}

/// Writes the CSV document to `path`, replacing any existing file atomically.
///
/// The document is first written to a temporary file next to `path` and then
/// renamed over it, so readers see either the previous file or the complete
/// new one. On failure the temporary file is removed and `path` is untouched.
/// An existing file's permissions carry over to its replacement.
///
/// # Errors
///
/// Returns [`FeedError::WriteOutput`] if the temporary file cannot be created,
/// synced, or renamed, and [`FeedError::Csv`] if serialization fails.
pub fn write_csv_atomic(path: &Path, records: &[OutputRecord]) -> Result<(), FeedError> {
    let write_err = |source: std::io::Error| FeedError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = temp_file_builder().tempfile_in(dir).map_err(write_err)?;
    write_records(&mut tmp, records)?;
    if let Ok(existing) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(write_err)?;
    }
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    tracing::info!(path = %path.display(), rows = records.len(), "csv written");
    Ok(())
}

/// Temp files default to owner-only; ask for `0o666` so a fresh output file
/// gets the same umask-filtered mode a plain create would.
fn temp_file_builder() -> Builder<'static, 'static> {
    let mut builder = Builder::new();
    builder.prefix(".shopfeed");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder
}

#[cfg(test)]
#[path = "writer_test.rs"]
mod tests;
