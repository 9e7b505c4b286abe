pub mod config;
pub mod error;
pub mod file;
pub mod fixtures;
pub mod harness;
pub mod mock;
pub mod purchase;
pub mod source;

pub use config::{Config, WORKSPACE_ENV, workspace_dir};
pub use error::{Error, Result};
pub use file::{CatalogDocument, FileCatalog, RecordReport};
pub use harness::ToggleHarness;
pub use mock::MockCatalog;
pub use purchase::{PurchaseConfirmation, PurchaseHook, UnavailablePurchaseHook};
pub use source::{ListingSource, LoadState, load_listing};

use std::path::Path;

/// Open the catalog file if one is given, the built-in fixtures otherwise
pub fn open_source(catalog: Option<&Path>) -> Result<Box<dyn ListingSource>> {
    match catalog {
        Some(path) => Ok(Box::new(FileCatalog::load(path)?)),
        None => Ok(Box::new(MockCatalog::new())),
    }
}
