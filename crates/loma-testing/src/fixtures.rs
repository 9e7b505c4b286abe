//! Listing record builders and catalog files for tests.
//!
//! Records start from a minimal valid listing and are shaped with builder
//! methods, so each test only spells out what it is about.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use loma_types::{
    AttributeValue, Attributes, Condition, Item, Listing, ListingId, ListingRecord,
    ListingStatus, ListingType, Lodging, LodgingType, Photo, SaleType, SourceItem,
};
use std::fs;
use std::path::Path;

/// Fixed timestamp used for every `createdOn`/`listedOn` unless overridden
pub fn timestamp(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Build attributes from `(key, value)` pairs, keeping their order
pub fn attributes<V: Into<AttributeValue>>(pairs: Vec<(&str, V)>) -> Attributes {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.into()))
        .collect()
}

/// Builder for [`ListingRecord`]s.
///
/// # Example
/// ```
/// use loma_testing::fixtures::ListingBuilder;
///
/// let record = ListingBuilder::new(7)
///     .title("Road bike")
///     .price_cents(45000)
///     .with_photos(&["left", "right"])
///     .build();
/// assert_eq!(record.item().map(|i| i.photos.len()), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct ListingBuilder {
    record: ListingRecord,
}

impl ListingBuilder {
    /// Active "sell" listing with no detail record
    pub fn new(id: u64) -> Self {
        let listing = Listing {
            id: ListingId(id),
            community_id: 1,
            listed_by_id: 1,
            created_on: timestamp(2024, 3, 22),
            listed_on: Some(timestamp(2024, 3, 22)),
            closed_on: None,
            status: ListingStatus::Active,
            listing_type: ListingType::Empty,
            sale_type: SaleType::Sell,
            price_cents: 1000,
            title: format!("Listing {}", id),
            description: String::new(),
            available_count: 1,
        };
        Self {
            record: ListingRecord::new(listing),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.record.listing.title = title.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.record.listing.description = description.to_string();
        self
    }

    pub fn price_cents(mut self, price_cents: i64) -> Self {
        self.record.listing.price_cents = price_cents;
        self
    }

    pub fn available_count(mut self, available_count: i64) -> Self {
        self.record.listing.available_count = available_count;
        self
    }

    pub fn status(mut self, status: impl Into<ListingStatus>) -> Self {
        self.record.listing.status = status.into();
        self
    }

    pub fn sale_type(mut self, sale_type: impl Into<SaleType>) -> Self {
        self.record.listing.sale_type = sale_type.into();
        self
    }

    pub fn listing_type(mut self, listing_type: impl Into<ListingType>) -> Self {
        self.record.listing.listing_type = listing_type.into();
        self
    }

    pub fn listed_on(mut self, listed_on: Option<DateTime<Utc>>) -> Self {
        self.record.listing.listed_on = listed_on;
        self
    }

    pub fn closed_on(mut self, closed_on: DateTime<Utc>) -> Self {
        self.record.listing.closed_on = Some(closed_on);
        self
    }

    /// Attach an item; switches the listing type to `item`
    pub fn with_item(mut self, item: Item) -> Self {
        let source = self.record.source_item().cloned();
        self.record.listing.listing_type = ListingType::Item;
        self.record = self.record.with_item(item, source);
        self
    }

    /// Attach an item carrying one photo per caption
    pub fn with_photos(self, captions: &[&str]) -> Self {
        let mut item = sample_item();
        item.photos = captions
            .iter()
            .enumerate()
            .map(|(i, caption)| Photo {
                caption: caption.to_string(),
                url: format!("https://img.example.com/{}.jpg", i),
            })
            .collect();
        self.with_item(item)
    }

    /// Attach a source item to the current item, adding a sample item if needed
    pub fn with_source(mut self, source: SourceItem) -> Self {
        let item = self.record.item().cloned().unwrap_or_else(sample_item);
        self.record.listing.listing_type = ListingType::Item;
        self.record = self.record.with_item(item, Some(source));
        self
    }

    /// Attach a lodging; switches the listing type to `lodging`
    pub fn with_lodging(mut self, lodging: Lodging) -> Self {
        self.record.listing.listing_type = ListingType::Lodging;
        self.record = self.record.with_lodging(lodging);
        self
    }

    pub fn build(self) -> ListingRecord {
        self.record
    }
}

pub fn sample_item() -> Item {
    Item {
        id: None,
        item_name: "Sample item".to_string(),
        condition: Condition::Good,
        photos: Vec::new(),
        shipping_zipcode: None,
        item_details: Attributes::new(),
    }
}

pub fn sample_source() -> SourceItem {
    SourceItem {
        source_item_name: "Sample source".to_string(),
        source_category_id: Some(1),
        source_item_details: attributes(vec![("brand", "Acme")]),
    }
}

pub fn sample_lodging(lodging_type: impl Into<LodgingType>) -> Lodging {
    Lodging {
        lodging_name: "Sample Inn".to_string(),
        address: "1 Test Way".to_string(),
        start_date: date(2024, 5, 1),
        end_date: date(2024, 5, 3),
        lodging_type: lodging_type.into(),
        lodging_url: "https://inn.example.com/".to_string(),
        lodging_details: Attributes::new(),
    }
}

/// Write records as a `{"listings": [...]}` catalog file
pub fn write_catalog(path: &Path, records: &[ListingRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let document = serde_json::json!({ "listings": records });
    fs::write(path, serde_json::to_string_pretty(&document)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_are_valid() {
        let record = ListingBuilder::new(3).build();
        assert_eq!(record.id(), ListingId(3));
        assert!(loma_types::validate_record(&record).is_ok());
    }

    #[test]
    fn test_with_source_keeps_existing_item() {
        let record = ListingBuilder::new(4)
            .with_photos(&["a"])
            .with_source(sample_source())
            .build();
        assert_eq!(record.item().map(|i| i.photos.len()), Some(1));
        assert!(record.source_item().is_some());
        assert_eq!(record.listing.listing_type, ListingType::Item);
    }

    #[test]
    fn test_write_catalog_round_trips() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        let path = dir.path().join("catalog.json");
        write_catalog(&path, &[ListingBuilder::new(1).build()])?;

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(value["listings"][0]["listing"]["id"], 1);
        Ok(())
    }
}
