//! Built-in mock listings.
//!
//! Two records: a sneaker resale (item + source item) and a conference hotel
//! block (lodging). They back the `demo` and `browse` commands and are the
//! default source when no catalog file is configured.

use chrono::{NaiveDate, TimeZone, Utc};
use indexmap::IndexMap;
use loma_types::{
    AttributeValue, Condition, Item, Listing, ListingId, ListingRecord, ListingStatus,
    ListingType, Lodging, LodgingType, Photo, SaleType, SourceItem,
};

pub const SNEAKER_LISTING_ID: ListingId = ListingId(1);
pub const HOTEL_LISTING_ID: ListingId = ListingId(2);

fn march_22() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 22, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn sneaker_listing() -> ListingRecord {
    let listing = Listing {
        id: SNEAKER_LISTING_ID,
        community_id: 1,
        listed_by_id: 1,
        created_on: march_22(),
        listed_on: Some(march_22()),
        closed_on: None,
        status: ListingStatus::Active,
        listing_type: ListingType::Item,
        sale_type: SaleType::Sell,
        price_cents: 12999,
        title: "Stylish Sneakers".to_string(),
        description: "The perfect shoe for the stylish athlete.".to_string(),
        available_count: 1,
    };

    let item = Item {
        id: Some(1),
        item_name: "Used Air Jordans".to_string(),
        condition: Condition::Acceptable,
        photos: vec![
            Photo {
                caption: "side view".to_string(),
                url: "https://www.crepslocker.com/cdn/shop/files/air-jordan-4-retro-red-cement-_2023_-dh6927-161-side.jpg?width=300".to_string(),
            },
            Photo {
                caption: "front view".to_string(),
                url: "https://www.crepslocker.com/cdn/shop/files/air-jordan-4-retro-red-cement-_2023_-dh6927-161-front-side.jpg?width=300".to_string(),
            },
        ],
        shipping_zipcode: Some("94115".to_string()),
        item_details: IndexMap::from([
            ("yearOfProduction".to_string(), AttributeValue::from(2021i64)),
            (
                "sneakerwebReference".to_string(),
                AttributeValue::from("https://sneakerweb.com/sneakers/air-jordan-432/"),
            ),
            ("shoeSize".to_string(), AttributeValue::from(12i64)),
        ]),
    };

    let source = SourceItem {
        source_item_name: "Air Jordan, Retro 4".to_string(),
        source_category_id: Some(43),
        source_item_details: IndexMap::from([
            ("brand".to_string(), AttributeValue::from("Nike")),
            ("model".to_string(), AttributeValue::from("Air Jordan")),
            ("style".to_string(), AttributeValue::from("Retro 4")),
            ("color".to_string(), AttributeValue::from("red/cement")),
            ("originalPrice".to_string(), AttributeValue::from(109.99)),
            ("firstProduced".to_string(), AttributeValue::from(2020i64)),
        ]),
    };

    ListingRecord::new(listing).with_item(item, Some(source))
}

pub fn hotel_listing() -> ListingRecord {
    let listing = Listing {
        id: HOTEL_LISTING_ID,
        community_id: 1,
        listed_by_id: 1,
        created_on: march_22(),
        listed_on: Some(march_22()),
        closed_on: None,
        status: ListingStatus::Active,
        listing_type: ListingType::Lodging,
        sale_type: SaleType::Book,
        price_cents: 15099,
        title: "Studio (garden view)".to_string(),
        description: "Our standard 650 ft. studio with kitchenette.".to_string(),
        available_count: 14,
    };

    let lodging = Lodging {
        lodging_name: "Hilton - Downtown Indianapolis".to_string(),
        address: "123 Main St., Indianapolis, IN 12345".to_string(),
        start_date: date(2024, 5, 1),
        end_date: date(2024, 5, 3),
        lodging_type: LodgingType::Hotel,
        lodging_url: "https://hilton.com/indy/".to_string(),
        lodging_details: IndexMap::from([
            (
                "discount".to_string(),
                AttributeValue::from("10% conference discount for community members"),
            ),
            ("totalRoomsInBlock".to_string(), AttributeValue::from(30i64)),
            ("availableRooms".to_string(), AttributeValue::from(14i64)),
        ]),
    };

    ListingRecord::new(listing).with_lodging(lodging)
}

/// Both mock records, sneaker first
pub fn mock_listings() -> Vec<ListingRecord> {
    vec![sneaker_listing(), hotel_listing()]
}
