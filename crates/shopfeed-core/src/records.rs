//! The Google Ads business-data row produced for every feed item.

use serde::Serialize;

/// Header row of the output document, in the order the import requires.
pub const COLUMNS: [&str; 20] = [
    "ID",
    "ID2",
    "Item title",
    "Final URL",
    "Image URL",
    "Item subtitle",
    "Item description",
    "Item category",
    "Price",
    "Sale price",
    "Contextual keywords",
    "Item address",
    "Tracking template",
    "Custom parameter",
    "Final mobile URL",
    "Android app link",
    "iOS app link",
    "iOS app store ID",
    "Formatted price",
    "Formatted sale price",
];

/// One output row. Field declaration order is the column order.
///
/// Only ID, item title, final URL, image URL, item description, item
/// category, price, and contextual keywords are ever filled. The remaining
/// twelve columns stay empty; the import format requires them to be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "ID2")]
    pub id2: String,
    #[serde(rename = "Item title")]
    pub item_title: String,
    #[serde(rename = "Final URL")]
    pub final_url: String,
    #[serde(rename = "Image URL")]
    pub image_url: String,
    #[serde(rename = "Item subtitle")]
    pub item_subtitle: String,
    #[serde(rename = "Item description")]
    pub item_description: String,
    #[serde(rename = "Item category")]
    pub item_category: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "Sale price")]
    pub sale_price: String,
    #[serde(rename = "Contextual keywords")]
    pub contextual_keywords: String,
    #[serde(rename = "Item address")]
    pub item_address: String,
    #[serde(rename = "Tracking template")]
    pub tracking_template: String,
    #[serde(rename = "Custom parameter")]
    pub custom_parameter: String,
    #[serde(rename = "Final mobile URL")]
    pub final_mobile_url: String,
    #[serde(rename = "Android app link")]
    pub android_app_link: String,
    #[serde(rename = "iOS app link")]
    pub ios_app_link: String,
    #[serde(rename = "iOS app store ID")]
    pub ios_app_store_id: String,
    #[serde(rename = "Formatted price")]
    pub formatted_price: String,
    #[serde(rename = "Formatted sale price")]
    pub formatted_sale_price: String,
}

impl OutputRecord {
    /// Column values in [`COLUMNS`] order.
    #[must_use]
    pub fn values(&self) -> [&str; 20] {
        [
            self.id.as_str(),
            self.id2.as_str(),
            self.item_title.as_str(),
            self.final_url.as_str(),
            self.image_url.as_str(),
            self.item_subtitle.as_str(),
            self.item_description.as_str(),
            self.item_category.as_str(),
            self.price.as_str(),
            self.sale_price.as_str(),
            self.contextual_keywords.as_str(),
            self.item_address.as_str(),
            self.tracking_template.as_str(),
            self.custom_parameter.as_str(),
            self.final_mobile_url.as_str(),
            self.android_app_link.as_str(),
            self.ios_app_link.as_str(),
            self.ios_app_store_id.as_str(),
            self.formatted_price.as_str(),
            self.formatted_sale_price.as_str(),
        ]
    }

    /// Value of the column named `column`, if it is one of [`COLUMNS`].
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        COLUMNS
            .iter()
            .position(|c| *c == column)
            .map(|idx| self.values()[idx])
    }
}
