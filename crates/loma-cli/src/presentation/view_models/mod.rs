pub mod catalog;
pub mod common;
pub mod listing;
pub mod result;

pub use catalog::{
    CatalogCheckViewModel, ListingListViewModel, ListingSummaryViewModel, RecordCheckViewModel,
    WelcomeViewModel,
};
pub use common::{DisplayOptions, Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode};
pub use listing::{
    AttributeRowViewModel, CallToAction, CarouselViewModel, ItemSectionViewModel,
    ListingPageViewModel, ListingSectionViewModel, LoadedPageViewModel, LodgingSectionViewModel,
    NameLabel, PhotoViewModel, SourceItemSectionViewModel,
};
pub use result::CommandResultViewModel;

use std::fmt;

/// Bridge from a view model to the text view that lays it out
pub trait CreateView {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a>;
}
