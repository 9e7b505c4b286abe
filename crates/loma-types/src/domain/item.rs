use serde::{Deserialize, Serialize};

use super::vocabulary::Condition;
use crate::attributes::Attributes;

/// Photo metadata; the image itself lives behind `url`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    #[serde(default)]
    pub caption: String,
    pub url: String,
}

/// A single physical good being sold.
///
/// Fixed columns cover what every item has (name, condition, photos,
/// shipping origin). Everything category-specific goes into `item_details`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub item_name: String,
    #[serde(default)]
    pub condition: Condition,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_zipcode: Option<String>,
    #[serde(default)]
    pub item_details: Attributes,
}

/// The retail product an item is an instance of (brand, model, original
/// price, ...), as opposed to the particular used pair being sold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceItem {
    pub source_item_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_category_id: Option<u64>,
    #[serde(default)]
    pub source_item_details: Attributes,
}
