// Views lay out view models as text (fmt::Display) or ratatui widgets

pub mod catalog;
pub mod listing;
pub mod tui;

pub use catalog::{CatalogCheckView, ListingListView, WelcomeView};
pub use listing::{
    ItemSectionView, ListingPageView, ListingSectionView, LodgingSectionView,
    SourceItemSectionView,
};

use std::fmt;

use crate::presentation::formatters::Palette;

/// Label/value rows with labels padded to the widest one in the block
pub(crate) fn write_rows(
    f: &mut fmt::Formatter,
    rows: &[(String, String)],
    palette: Palette,
) -> fmt::Result {
    let width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    for (label, value) in rows {
        let padded = format!("{:<width$}", label, width = width);
        writeln!(f, "  {}  {}", palette.label(&padded), value)?;
    }
    Ok(())
}
