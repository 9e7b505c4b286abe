use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::vocabulary::{ListingStatus, ListingType, SaleType};

/// Listing identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub u64);

impl ListingId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ListingId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ListingId)
    }
}

impl From<u64> for ListingId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A marketplace post offering something for sale, rent or booking.
///
/// Listings are scoped to a community and owned by the member who posted
/// them. The type-specific details live in [`crate::ListingDetail`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub community_id: u64,
    pub listed_by_id: u64,
    pub created_on: DateTime<Utc>,
    /// Absent while the listing is still a draft
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listed_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: ListingStatus,
    pub listing_type: ListingType,
    pub sale_type: SaleType,
    pub price_cents: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_available_count")]
    pub available_count: i64,
}

fn default_available_count() -> i64 {
    1
}

impl Listing {
    pub fn is_closed(&self) -> bool {
        self.closed_on.is_some()
    }
}
