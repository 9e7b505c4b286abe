use loma_types::ListingRecord;

use crate::fixtures;

/// Two fixed records and a `hotel` switch choosing which one is on screen.
///
/// Stand-in for fetch-by-id while there is no backing store: `current()`
/// returns the lodging record when the switch is on, the item record otherwise.
#[derive(Debug, Clone)]
pub struct ToggleHarness {
    primary: ListingRecord,
    alternate: ListingRecord,
    hotel: bool,
}

impl Default for ToggleHarness {
    fn default() -> Self {
        Self::mock()
    }
}

impl ToggleHarness {
    pub fn new(primary: ListingRecord, alternate: ListingRecord) -> Self {
        Self {
            primary,
            alternate,
            hotel: false,
        }
    }

    /// Sneaker listing as primary, hotel listing as alternate
    pub fn mock() -> Self {
        Self::new(fixtures::sneaker_listing(), fixtures::hotel_listing())
    }

    pub fn toggle(&mut self) -> bool {
        self.hotel = !self.hotel;
        self.hotel
    }

    pub fn set_hotel(&mut self, on: bool) {
        self.hotel = on;
    }

    pub fn is_hotel(&self) -> bool {
        self.hotel
    }

    pub fn current(&self) -> &ListingRecord {
        if self.hotel {
            &self.alternate
        } else {
            &self.primary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_primary() {
        let harness = ToggleHarness::mock();
        assert!(!harness.is_hotel());
        assert_eq!(harness.current().id(), fixtures::SNEAKER_LISTING_ID);
    }

    #[test]
    fn test_toggle_flips_between_records() {
        let mut harness = ToggleHarness::mock();

        assert!(harness.toggle());
        assert_eq!(harness.current().id(), fixtures::HOTEL_LISTING_ID);

        assert!(!harness.toggle());
        assert_eq!(harness.current().id(), fixtures::SNEAKER_LISTING_ID);
    }

    #[test]
    fn test_set_hotel_is_idempotent() {
        let mut harness = ToggleHarness::mock();
        harness.set_hotel(true);
        harness.set_hotel(true);
        assert!(harness.current().lodging().is_some());
    }
}
