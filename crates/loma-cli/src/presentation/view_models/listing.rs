use chrono::{DateTime, NaiveDate, Utc};
use loma_types::{AttributeValue, Condition, ListingStatus, ListingType, LodgingType, SaleType};
use serde::Serialize;

/// One listing page in whatever state the fetch left it.
///
/// The `state` tag keeps "still loading" and "no such listing" apart from a
/// loaded page that simply has no optional sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ListingPageViewModel {
    Loading,
    Loaded(Box<LoadedPageViewModel>),
    NotFound { listing_id: u64 },
    Failed { listing_id: u64, message: String },
}

impl ListingPageViewModel {
    pub fn loaded(&self) -> Option<&LoadedPageViewModel> {
        match self {
            ListingPageViewModel::Loaded(page) => Some(page),
            _ => None,
        }
    }
}

/// Section data in display order: listing, item, source item, lodging
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadedPageViewModel {
    pub listing: ListingSectionViewModel,
    pub item: Option<ItemSectionViewModel>,
    pub source_item: Option<SourceItemSectionViewModel>,
    pub lodging: Option<LodgingSectionViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingSectionViewModel {
    pub listing_id: u64,
    pub community_id: u64,
    pub listed_by_id: u64,
    pub title: String,
    pub description: String,
    pub status: ListingStatus,
    pub listing_type: ListingType,
    pub sale_type: SaleType,
    pub price_cents: i64,
    pub available_count: i64,
    pub created_on: DateTime<Utc>,
    pub listed_on: Option<DateTime<Utc>>,
    pub closed_on: Option<DateTime<Utc>>,
    pub call_to_action: CallToAction,
}

/// What the page's purchase control does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CallToAction {
    BuyNow,
    BookNow,
}

impl CallToAction {
    /// `book` books; every other sale type, known or not, buys
    pub fn for_sale_type(sale_type: &SaleType) -> Self {
        match sale_type {
            SaleType::Book => CallToAction::BookNow,
            _ => CallToAction::BuyNow,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CallToAction::BuyNow => "Buy Now",
            CallToAction::BookNow => "Book Now",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeRowViewModel {
    pub key: String,
    pub value: AttributeValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotoViewModel {
    pub caption: String,
    pub url: String,
}

/// Photos plus the index marked active when the page was rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselViewModel {
    pub photos: Vec<PhotoViewModel>,
    pub active_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemSectionViewModel {
    pub item_name: String,
    pub condition: Condition,
    pub shipping_zipcode: Option<String>,
    pub attributes: Vec<AttributeRowViewModel>,
    /// Absent when the item has no photos
    pub carousel: Option<CarouselViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceItemSectionViewModel {
    pub source_item_name: String,
    pub source_category_id: Option<u64>,
    pub attributes: Vec<AttributeRowViewModel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NameLabel {
    HotelName,
    Lodging,
}

impl NameLabel {
    pub fn for_lodging_type(lodging_type: &LodgingType) -> Self {
        match lodging_type {
            LodgingType::Hotel => NameLabel::HotelName,
            _ => NameLabel::Lodging,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NameLabel::HotelName => "Hotel Name",
            NameLabel::Lodging => "Lodging",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LodgingSectionViewModel {
    pub name_label: NameLabel,
    pub lodging_name: String,
    pub lodging_type: LodgingType,
    pub address: String,
    pub url: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub nights: i64,
    pub attributes: Vec<AttributeRowViewModel>,
}
