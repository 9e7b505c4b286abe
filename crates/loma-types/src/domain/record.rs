use serde::{Deserialize, Serialize};

use super::item::{Item, SourceItem};
use super::listing::{Listing, ListingId};
use super::lodging::Lodging;
use crate::error::Error;

/// Type-specific part of a listing record.
///
/// Item and lodging details are mutually exclusive, so they are variants of
/// one enum rather than independent optional fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListingDetail {
    Item {
        item: Item,
        source: Option<SourceItem>,
    },
    Lodging(Lodging),
    #[default]
    None,
}

impl ListingDetail {
    pub fn kind(&self) -> &'static str {
        match self {
            ListingDetail::Item { .. } => "item",
            ListingDetail::Lodging(_) => "lodging",
            ListingDetail::None => "none",
        }
    }
}

/// One listing together with its type-specific record.
///
/// On the wire this is the flat page shape
/// `{"listing": {..}, "item": {..}, "sourceItem": {..}, "lodging": {..}}`
/// where every key but `listing` is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ListingRecordRepr", into = "ListingRecordRepr")]
pub struct ListingRecord {
    pub listing: Listing,
    pub detail: ListingDetail,
}

impl ListingRecord {
    pub fn new(listing: Listing) -> Self {
        Self {
            listing,
            detail: ListingDetail::None,
        }
    }

    pub fn with_item(mut self, item: Item, source: Option<SourceItem>) -> Self {
        self.detail = ListingDetail::Item { item, source };
        self
    }

    pub fn with_lodging(mut self, lodging: Lodging) -> Self {
        self.detail = ListingDetail::Lodging(lodging);
        self
    }

    pub fn id(&self) -> ListingId {
        self.listing.id
    }

    pub fn item(&self) -> Option<&Item> {
        match &self.detail {
            ListingDetail::Item { item, .. } => Some(item),
            _ => None,
        }
    }

    pub fn source_item(&self) -> Option<&SourceItem> {
        match &self.detail {
            ListingDetail::Item { source, .. } => source.as_ref(),
            _ => None,
        }
    }

    pub fn lodging(&self) -> Option<&Lodging> {
        match &self.detail {
            ListingDetail::Lodging(lodging) => Some(lodging),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListingRecordRepr {
    listing: Listing,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    item: Option<Item>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_item: Option<SourceItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lodging: Option<Lodging>,
}

impl TryFrom<ListingRecordRepr> for ListingRecord {
    type Error = Error;

    fn try_from(repr: ListingRecordRepr) -> Result<Self, Self::Error> {
        let detail = match (repr.item, repr.source_item, repr.lodging) {
            (Some(item), source, None) => ListingDetail::Item { item, source },
            (None, None, Some(lodging)) => ListingDetail::Lodging(lodging),
            (None, None, None) => ListingDetail::None,
            (Some(_), _, Some(_)) => {
                return Err(Error::Malformed(format!(
                    "listing {} has both an item and a lodging",
                    repr.listing.id
                )));
            }
            (None, Some(_), _) => {
                return Err(Error::Malformed(format!(
                    "listing {} has a source item without an item",
                    repr.listing.id
                )));
            }
        };

        Ok(ListingRecord {
            listing: repr.listing,
            detail,
        })
    }
}

impl From<ListingRecord> for ListingRecordRepr {
    fn from(record: ListingRecord) -> Self {
        let (item, source_item, lodging) = match record.detail {
            ListingDetail::Item { item, source } => (Some(item), source, None),
            ListingDetail::Lodging(lodging) => (None, None, Some(lodging)),
            ListingDetail::None => (None, None, None),
        };

        ListingRecordRepr {
            listing: record.listing,
            item,
            source_item,
            lodging,
        }
    }
}
