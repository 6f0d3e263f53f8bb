//! Mapping from parsed feed items to Google Ads business-data rows.
//!
//! Mapping is total: every item yields a complete [`OutputRecord`], whatever
//! is missing or malformed. Data-quality problems surface as
//! [`MappingWarning`]s instead of errors.

use shopfeed_core::{Field, GoogleField, OutputRecord, SourceItem};

use crate::price::{parse_price, Price};

/// Candidates for `Item category`, most specific first.
const CATEGORY_CANDIDATES: [Field; 2] = [
    Field::Google(GoogleField::GoogleProductCategory),
    Field::Google(GoogleField::ProductType),
];

/// Fields merged into `Contextual keywords`, in output order.
const KEYWORD_FIELDS: [Field; 7] = [
    Field::Google(GoogleField::Brand),
    Field::Google(GoogleField::Color),
    Field::CustomLabel(0),
    Field::CustomLabel(1),
    Field::CustomLabel(2),
    Field::CustomLabel(3),
    Field::CustomLabel(4),
];

const KEYWORD_SEPARATOR: &str = ";";

/// A non-fatal data-quality finding for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingWarning {
    /// The price field is set but is not `<amount> <currency>`; it was copied
    /// to the output unchanged.
    PriceFormat { item_id: String, raw: String },
}

impl std::fmt::Display for MappingWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MappingWarning::PriceFormat { item_id, raw } => {
                write!(f, "item {item_id:?}: unrecognized price format {raw:?}")
            }
        }
    }
}

/// A mapped row together with the warnings raised while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedItem {
    pub record: OutputRecord,
    pub warnings: Vec<MappingWarning>,
}

/// Maps one feed item to its output row.
#[must_use]
pub fn map_item(item: &SourceItem) -> OutputRecord {
    map_item_with_warnings(item).record
}

/// Maps one feed item to its output row and reports data-quality warnings.
#[must_use]
pub fn map_item_with_warnings(item: &SourceItem) -> MappedItem {
    let text = |g: GoogleField| item.value(Field::Google(g)).unwrap_or_default().to_string();

    let id = text(GoogleField::Id);
    let price = parse_price(item.raw(Field::Google(GoogleField::Price)));

    let mut warnings = Vec::new();
    if let Price::Unrecognized(raw) = &price {
        warnings.push(MappingWarning::PriceFormat {
            item_id: id.clone(),
            raw: (*raw).to_string(),
        });
    }

    let record = OutputRecord {
        item_title: text(GoogleField::Title),
        final_url: text(GoogleField::Link),
        image_url: text(GoogleField::ImageLink),
        item_description: text(GoogleField::Description),
        item_category: first_present(item, &CATEGORY_CANDIDATES)
            .unwrap_or_default()
            .to_string(),
        price: price.render(),
        contextual_keywords: contextual_keywords(item),
        id,
        ..OutputRecord::default()
    };

    MappedItem { record, warnings }
}

/// Trimmed value of the first candidate that has one.
fn first_present<'a>(item: &'a SourceItem, candidates: &[Field]) -> Option<&'a str> {
    candidates.iter().find_map(|field| item.value(*field))
}

/// Brand, color, and custom labels joined with `;`, skipping empty values.
fn contextual_keywords(item: &SourceItem) -> String {
    KEYWORD_FIELDS
        .iter()
        .filter_map(|field| item.value(*field))
        .collect::<Vec<_>>()
        .join(KEYWORD_SEPARATOR)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
