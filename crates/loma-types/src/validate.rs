//! Record invariants.
//!
//! Vocabulary is deliberately not checked here: an unknown sale type or
//! lodging type is a display concern with a defined fallback.

use serde::Serialize;
use std::fmt;

use crate::domain::{ListingDetail, ListingRecord, ListingType};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    EmptyTitle,
    NegativePrice { price_cents: i64 },
    NegativeAvailableCount { available_count: i64 },
    ClosedBeforeListed,
    ClosedBeforeCreated,
    LodgingEndsBeforeStart,
    /// Type-specific record does not match the listing type
    DetailMismatch {
        listing_type: String,
        detail: &'static str,
    },
    /// Record could not be read at all (wrong field type, item and lodging together)
    Unreadable { message: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::EmptyTitle => write!(f, "title is empty"),
            Violation::NegativePrice { price_cents } => {
                write!(f, "price is negative ({} cents)", price_cents)
            }
            Violation::NegativeAvailableCount { available_count } => {
                write!(f, "available count is negative ({})", available_count)
            }
            Violation::ClosedBeforeListed => write!(f, "closedOn is earlier than listedOn"),
            Violation::ClosedBeforeCreated => write!(f, "closedOn is earlier than createdOn"),
            Violation::LodgingEndsBeforeStart => {
                write!(f, "lodging endDate is earlier than startDate")
            }
            Violation::DetailMismatch {
                listing_type,
                detail,
            } => write!(
                f,
                "listing type '{}' cannot carry {} details",
                listing_type, detail
            ),
            Violation::Unreadable { message } => write!(f, "unreadable record: {}", message),
        }
    }
}

/// Collect every invariant the record breaks, in a stable order
pub fn violations(record: &ListingRecord) -> Vec<Violation> {
    let mut found = Vec::new();
    let listing = &record.listing;

    if listing.title.trim().is_empty() {
        found.push(Violation::EmptyTitle);
    }

    if listing.price_cents < 0 {
        found.push(Violation::NegativePrice {
            price_cents: listing.price_cents,
        });
    }

    if listing.available_count < 0 {
        found.push(Violation::NegativeAvailableCount {
            available_count: listing.available_count,
        });
    }

    if let Some(closed_on) = listing.closed_on {
        if closed_on < listing.created_on {
            found.push(Violation::ClosedBeforeCreated);
        }
        if let Some(listed_on) = listing.listed_on
            && closed_on < listed_on
        {
            found.push(Violation::ClosedBeforeListed);
        }
    }

    if let ListingDetail::Lodging(lodging) = &record.detail
        && lodging.end_date < lodging.start_date
    {
        found.push(Violation::LodgingEndsBeforeStart);
    }

    // A missing detail is allowed for any type; only a present detail of the
    // wrong kind is rejected. Unknown listing types accept any detail.
    let mismatch = match (&listing.listing_type, &record.detail) {
        (_, ListingDetail::None) => false,
        (ListingType::Item, ListingDetail::Item { .. }) => false,
        (ListingType::Lodging, ListingDetail::Lodging(_)) => false,
        (ListingType::Other(_), _) => false,
        _ => true,
    };
    if mismatch {
        found.push(Violation::DetailMismatch {
            listing_type: listing.listing_type.to_string(),
            detail: record.detail.kind(),
        });
    }

    found
}

pub fn validate_record(record: &ListingRecord) -> Result<()> {
    let found = violations(record);
    if found.is_empty() {
        Ok(())
    } else {
        Err(Error::InvalidRecord {
            id: record.id(),
            violations: found,
        })
    }
}
