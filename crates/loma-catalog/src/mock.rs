use loma_types::{ListingId, ListingRecord};

use crate::fixtures;
use crate::source::ListingSource;
use crate::{Error, Result};

/// In-memory source over the built-in fixtures
#[derive(Debug, Clone)]
pub struct MockCatalog {
    records: Vec<ListingRecord>,
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalog {
    pub fn new() -> Self {
        Self {
            records: fixtures::mock_listings(),
        }
    }
}

impl ListingSource for MockCatalog {
    fn name(&self) -> String {
        "built-in fixtures".to_string()
    }

    fn fetch_listing(&self, id: ListingId) -> Result<ListingRecord> {
        self.records
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or(Error::NotFound(id))
    }

    fn listings(&self) -> Result<Vec<ListingRecord>> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_known_ids() {
        let catalog = MockCatalog::new();
        assert_eq!(
            catalog.fetch_listing(ListingId(1)).unwrap().listing.title,
            "Stylish Sneakers"
        );
        assert_eq!(
            catalog.fetch_listing(ListingId(2)).unwrap().listing.title,
            "Studio (garden view)"
        );
    }

    #[test]
    fn test_fetch_unknown_id_is_not_found() {
        let err = MockCatalog::new().fetch_listing(ListingId(99)).unwrap_err();
        assert!(err.is_not_found());
    }
}
