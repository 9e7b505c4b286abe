use loma_types::{ListingStatus, ListingType, SaleType, Violation};
use serde::Serialize;

use super::listing::CallToAction;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingSummaryViewModel {
    pub listing_id: u64,
    pub title: String,
    pub status: ListingStatus,
    pub listing_type: ListingType,
    pub sale_type: SaleType,
    pub price_cents: i64,
    pub call_to_action: CallToAction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingListViewModel {
    pub source: String,
    pub listings: Vec<ListingSummaryViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordCheckViewModel {
    /// `None` for a record too broken to carry an id
    pub listing_id: Option<u64>,
    pub title: String,
    pub valid: bool,
    pub duplicate: bool,
    pub violations: Vec<Violation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogCheckViewModel {
    pub path: String,
    pub total: usize,
    pub invalid: usize,
    pub records: Vec<RecordCheckViewModel>,
}

/// Shown when `loma` runs with no subcommand and no default listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WelcomeViewModel {
    pub source: String,
    pub listing_count: usize,
}
