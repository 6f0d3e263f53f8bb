use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use shopfeed_core::ConfigError;
use shopfeed_feed::{FailureKind, FeedClient, FeedError, RunSummary};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "shopfeed")]
#[command(about = "Convert a Google Shopping XML feed into a Google Ads business data CSV")]
struct Cli {
    /// Feed to read: HTTP(S) URL, `file://` URL, or local path.
    /// Overrides `CROPINK_FEED_URL`.
    #[arg(long)]
    feed_url: Option<String>,

    /// Where to write the CSV. Overrides `OUTPUT_CSV_PATH`.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Print the CSV to stdout instead of writing the output file.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(summary) => {
            match &summary.output_path {
                Some(path) => eprintln!(
                    "wrote {} rows to {} ({} price warnings)",
                    summary.items,
                    path.display(),
                    summary.price_warnings
                ),
                None => eprintln!(
                    "dry-run: {} rows ({} price warnings)",
                    summary.items, summary.price_warnings
                ),
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "run failed");
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<RunSummary> {
    let config = shopfeed_core::load_app_config()
        .context("failed to load configuration")?
        .with_overrides(cli.feed_url, cli.output);
    shopfeed_core::validate_app_config(&config).context("invalid command-line override")?;

    let client = FeedClient::with_defaults()?;

    let summary = if cli.dry_run {
        let stdout = std::io::stdout();
        shopfeed_feed::preview_pipeline(&config, &client, stdout.lock()).await?
    } else {
        shopfeed_feed::run_pipeline(&config, &client).await?
    };

    Ok(summary)
}

/// Maps a failed run to the process exit status.
///
/// `2` fetch, `3` malformed document, `4` write; everything else, including
/// configuration errors, is `1`.
fn exit_code(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<ConfigError>().is_some() {
        return 1;
    }
    match err.downcast_ref::<FeedError>().map(FeedError::kind) {
        Some(FailureKind::Fetch) => 2,
        Some(FailureKind::MalformedDocument) => 3,
        Some(FailureKind::Write) => 4,
        None => 1,
    }
}
