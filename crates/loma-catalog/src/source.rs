use loma_types::{ListingId, ListingRecord};
use serde::Serialize;

use crate::Result;

/// Fetch-by-id contract between the page and whatever stores listings.
///
/// Implementations hand back fully resolved records. Absence is reported as
/// [`crate::Error::NotFound`]; a failure worth retrying as [`crate::Error::Transient`].
pub trait ListingSource {
    /// Short human-readable name for diagnostics ("built-in fixtures", a path)
    fn name(&self) -> String;

    fn fetch_listing(&self, id: ListingId) -> Result<ListingRecord>;

    /// Every listing the source knows about, in source order
    fn listings(&self) -> Result<Vec<ListingRecord>>;
}

/// What the page has in hand for the listing it was asked to show.
///
/// Keeps "nothing loaded yet" and "looked it up, not there" apart from a
/// loaded record that merely has no optional sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadState {
    Loading,
    Loaded { record: Box<ListingRecord> },
    NotFound { listing_id: ListingId },
    Failed { listing_id: ListingId, message: String },
}

impl LoadState {
    pub fn loaded(record: ListingRecord) -> Self {
        LoadState::Loaded {
            record: Box::new(record),
        }
    }

    /// Map the outcome of [`ListingSource::fetch_listing`] onto a page state
    pub fn from_fetch(listing_id: ListingId, result: Result<ListingRecord>) -> Self {
        match result {
            Ok(record) => LoadState::loaded(record),
            Err(err) if err.is_not_found() => LoadState::NotFound { listing_id },
            Err(err) => LoadState::Failed {
                listing_id,
                message: err.to_string(),
            },
        }
    }
}

/// Fetch a listing and log the outcome
pub fn load_listing(source: &dyn ListingSource, listing_id: ListingId) -> LoadState {
    let result = source.fetch_listing(listing_id);
    match &result {
        Ok(_) => tracing::debug!(%listing_id, source = %source.name(), "listing loaded"),
        Err(err) if err.is_not_found() => {
            tracing::debug!(%listing_id, source = %source.name(), "listing not found")
        }
        Err(err) => tracing::warn!(%listing_id, source = %source.name(), error = %err, "listing fetch failed"),
    }
    LoadState::from_fetch(listing_id, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, fixtures};

    #[test]
    fn test_from_fetch_maps_not_found() {
        let state = LoadState::from_fetch(ListingId(9), Err(Error::NotFound(ListingId(9))));
        assert_eq!(
            state,
            LoadState::NotFound {
                listing_id: ListingId(9)
            }
        );
    }

    #[test]
    fn test_from_fetch_maps_transient_to_failed() {
        let state = LoadState::from_fetch(
            ListingId(9),
            Err(Error::Transient("connection reset".to_string())),
        );
        match state {
            LoadState::Failed {
                listing_id,
                message,
            } => {
                assert_eq!(listing_id, ListingId(9));
                assert!(message.contains("connection reset"));
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn test_loaded_state_serializes_with_tag() {
        let state = LoadState::loaded(fixtures::sneaker_listing());
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["state"], "loaded");
        assert_eq!(value["record"]["listing"]["id"], 1);

        let value = serde_json::to_value(LoadState::Loading).unwrap();
        assert_eq!(value["state"], "loading");
    }
}
