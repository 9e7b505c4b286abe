use loma_types::{ListingId, ListingRecord, Violation};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::source::ListingSource;
use crate::{Error, Result};

/// On-disk catalog layout: `{"listings": [ ... ]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub listings: Vec<ListingRecord>,
}

/// Same layout with records left as raw JSON, so `inspect` can report a
/// record that does not parse without giving up on the rest of the file
#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    listings: Vec<Value>,
}

/// Validation outcome for one record of a catalog file
#[derive(Debug, Clone, Serialize)]
pub struct RecordReport {
    /// `None` when the record has no readable `listing.id`
    pub listing_id: Option<ListingId>,
    pub title: String,
    pub violations: Vec<Violation>,
    pub duplicate: bool,
}

impl RecordReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty() && !self.duplicate
    }
}

/// Read-only listing source backed by a JSON file.
///
/// The whole file is loaded and validated up front; a catalog with any
/// invalid record or duplicate id is refused as a whole.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
    records: Vec<ListingRecord>,
}

impl FileCatalog {
    pub fn load(path: &Path) -> Result<Self> {
        let document = read_document(path)?;

        let mut seen = HashSet::new();
        for record in &document.listings {
            if !seen.insert(record.id()) {
                return Err(Error::DuplicateId(record.id()));
            }
            loma_types::validate_record(record)?;
        }

        tracing::debug!(
            path = %path.display(),
            count = document.listings.len(),
            "catalog loaded"
        );

        Ok(Self {
            path: path.to_path_buf(),
            records: document.listings,
        })
    }

    /// Validate every record without refusing the file, for reporting.
    ///
    /// Only an unreadable file or a document without a `listings` array is an
    /// error; a record that fails to parse is reported as
    /// [`Violation::Unreadable`].
    pub fn inspect(path: &Path) -> Result<Vec<RecordReport>> {
        let content = std::fs::read_to_string(path)?;
        let document: RawDocument = serde_json::from_str(&content)?;

        let mut seen = HashSet::new();
        let reports = document
            .listings
            .into_iter()
            .map(|value| {
                let listing_id = value
                    .pointer("/listing/id")
                    .and_then(Value::as_u64)
                    .map(ListingId);
                let title = value
                    .pointer("/listing/title")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                let duplicate = listing_id.is_some_and(|id| !seen.insert(id));

                let violations = match serde_json::from_value::<ListingRecord>(value) {
                    Ok(record) => loma_types::violations(&record),
                    Err(err) => vec![Violation::Unreadable {
                        message: err.to_string(),
                    }],
                };

                RecordReport {
                    listing_id,
                    title,
                    violations,
                    duplicate,
                }
            })
            .collect();

        Ok(reports)
    }
}

fn read_document(path: &Path) -> Result<CatalogDocument> {
    let content = std::fs::read_to_string(path)?;
    let document: CatalogDocument = serde_json::from_str(&content)?;
    Ok(document)
}

impl ListingSource for FileCatalog {
    fn name(&self) -> String {
        self.path.display().to_string()
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
