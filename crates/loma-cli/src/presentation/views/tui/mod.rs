//! Ratatui views and stateful components for `loma browse`.
//!
//! Views are stateless widgets over a view model. Components own UI state
//! (the active photo), handle keys, and clamp that state against the data
//! before delegating to a view.

pub mod carousel;
pub mod components;
pub mod page;
pub mod status_bar;

pub use carousel::CarouselView;
pub use components::PhotoCarouselComponent;
pub use page::ListingPageWidget;
pub use status_bar::StatusBarView;
