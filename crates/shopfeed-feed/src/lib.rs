pub mod client;
pub mod error;
pub mod normalize;
pub mod parse;
pub mod pipeline;
pub mod price;
pub mod writer;

pub use client::{FeedClient, FeedSource};
pub use error::{FailureKind, FeedError};
pub use normalize::{map_item, map_item_with_warnings, MappedItem, MappingWarning};
pub use parse::parse_feed;
pub use pipeline::{preview_pipeline, run_pipeline, RunSummary};
pub use price::{parse_price, Price};
pub use writer::{write_csv_atomic, write_records};
