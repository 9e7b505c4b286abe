pub mod catalog;
pub mod listing;

pub use catalog::{present_catalog_check, present_listing_list, present_welcome};
pub use listing::{present_demo_page, present_listing_page};
