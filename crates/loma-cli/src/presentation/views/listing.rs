use std::fmt;

use crate::presentation::formatters::{
    Palette, format_attribute_value, format_date, format_price_cents, format_timestamp_date,
};
use crate::presentation::view_models::{
    AttributeRowViewModel, CarouselViewModel, CreateView, DisplayOptions, ItemSectionViewModel,
    ListingPageViewModel, ListingSectionViewModel, LoadedPageViewModel, LodgingSectionViewModel,
    SourceItemSectionViewModel, ViewMode,
};

use super::write_rows;

impl CreateView for ListingPageViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ListingPageView::new(self, options))
    }
}

// --------------------------------------------------------
// Page composer
// --------------------------------------------------------

/// Whole page: listing section, then item, source item and lodging sections.
///
/// The order is fixed. Absent sections contribute nothing.
pub struct ListingPageView<'a> {
    data: &'a ListingPageViewModel,
    options: DisplayOptions,
}

impl<'a> ListingPageView<'a> {
    pub fn new(data: &'a ListingPageViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }

    fn palette(&self) -> Palette {
        Palette::new(self.options.enable_color)
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let ListingPageViewModel::Loaded(page) = self.data {
            writeln!(f, "{}", page.listing.listing_id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.data {
            ListingPageViewModel::Loading => writeln!(f, "loading"),
            ListingPageViewModel::NotFound { listing_id } => {
                writeln!(f, "#{}  not found", listing_id)
            }
            ListingPageViewModel::Failed {
                listing_id,
                message,
            } => writeln!(f, "#{}  failed: {}", listing_id, message),
            ListingPageViewModel::Loaded(page) => {
                let listing = &page.listing;
                writeln!(
                    f,
                    "#{}  {}  {}  {}",
                    listing.listing_id,
                    listing.title,
                    format_price_cents(listing.price_cents),
                    listing.call_to_action.label()
                )
            }
        }
    }

    fn render_full(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let palette = self.palette();
        match self.data {
            ListingPageViewModel::Loading => {
                writeln!(f, "{}", palette.dimmed("Loading listing..."))
            }
            ListingPageViewModel::NotFound { listing_id } => {
                writeln!(
                    f,
                    "{}",
                    palette.warning(&format!("No listing with id {}.", listing_id))
                )
            }
            ListingPageViewModel::Failed {
                listing_id,
                message,
            } => {
                writeln!(
                    f,
                    "{}",
                    palette.error(&format!("Listing {} could not be loaded.", listing_id))
                )?;
                writeln!(f, "  {}", message)
            }
            ListingPageViewModel::Loaded(page) => self.render_sections(f, page),
        }
    }

    fn render_sections(&self, f: &mut fmt::Formatter, page: &LoadedPageViewModel) -> fmt::Result {
        write!(f, "{}", ListingSectionView::new(&page.listing, self.options))?;
        write!(f, "{}", ItemSectionView::new(page.item.as_ref(), self.options))?;
        write!(
            f,
            "{}",
            SourceItemSectionView::new(page.source_item.as_ref(), self.options)
        )?;
        write!(
            f,
            "{}",
            LodgingSectionView::new(page.lodging.as_ref(), self.options)
        )
    }
}

impl<'a> fmt::Display for ListingPageView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.options.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard | ViewMode::Verbose => self.render_full(f),
        }
    }
}

// --------------------------------------------------------
// Listing section
// --------------------------------------------------------

pub struct ListingSectionView<'a> {
    data: &'a ListingSectionViewModel,
    options: DisplayOptions,
}

impl<'a> ListingSectionView<'a> {
    pub fn new(data: &'a ListingSectionViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for ListingSectionView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let palette = Palette::new(self.options.enable_color);
        let listing = self.data;

        let listed = match listing.listed_on {
            Some(ts) => format!("listed {}", format_timestamp_date(ts)),
            None => "not yet listed".to_string(),
        };
        writeln!(f, "{}", palette.title(&listing.title))?;
        writeln!(f, "{}", palette.dimmed(&listed))?;
        writeln!(f)?;

        let mut rows = vec![
            ("Status".to_string(), listing.status.to_string()),
            (
                "Price".to_string(),
                palette.price(&format_price_cents(listing.price_cents)),
            ),
        ];
        if let Some(closed_on) = listing.closed_on {
            rows.push(("Closed".to_string(), format_timestamp_date(closed_on)));
        }
        if listing.available_count > 1 || self.options.mode == ViewMode::Verbose {
            rows.push((
                "Available".to_string(),
                listing.available_count.to_string(),
            ));
        }
        let description = if listing.description.is_empty() {
            palette.dimmed(NO_DESCRIPTION)
        } else {
            listing.description.clone()
        };
        rows.push(("Description".to_string(), description));
        if self.options.mode == ViewMode::Verbose {
            rows.push(("Listing ID".to_string(), listing.listing_id.to_string()));
            rows.push(("Type".to_string(), listing.listing_type.to_string()));
            rows.push(("Sale Type".to_string(), listing.sale_type.to_string()));
            rows.push(("Community".to_string(), listing.community_id.to_string()));
            rows.push(("Listed By".to_string(), listing.listed_by_id.to_string()));
            rows.push((
                "Created".to_string(),
                format_timestamp_date(listing.created_on),
            ));
        }
        write_rows(f, &rows, palette)?;

        writeln!(f)?;
        writeln!(
            f,
            "  {}",
            palette.action(&format!("[ {} ]", listing.call_to_action.label()))
        )
    }
}

pub(crate) const NO_DESCRIPTION: &str = "(none)";

// --------------------------------------------------------
// Item section
// --------------------------------------------------------

pub struct ItemSectionView<'a> {
    data: Option<&'a ItemSectionViewModel>,
    options: DisplayOptions,
}

impl<'a> ItemSectionView<'a> {
    pub fn new(data: Option<&'a ItemSectionViewModel>, options: DisplayOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for ItemSectionView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Some(item) = self.data else {
            return Ok(());
        };
        let palette = Palette::new(self.options.enable_color);

        writeln!(f)?;
        writeln!(f, "{}", palette.heading("Item"))?;

        let mut rows = vec![
            ("Name".to_string(), item.item_name.clone()),
            ("Condition".to_string(), item.condition.to_string()),
        ];
        if let Some(zipcode) = &item.shipping_zipcode {
            rows.push(("Ships From".to_string(), zipcode.clone()));
        }
        rows.extend(attribute_rows(&item.attributes));
        write_rows(f, &rows, palette)?;

        if let Some(carousel) = &item.carousel {
            write_carousel(f, carousel, self.options)?;
        }
        Ok(())
    }
}

fn write_carousel(
    f: &mut fmt::Formatter,
    carousel: &CarouselViewModel,
    options: DisplayOptions,
) -> fmt::Result {
    let palette = Palette::new(options.enable_color);
    let active = carousel
        .active_index
        .min(carousel.photos.len().saturating_sub(1));

    writeln!(f)?;
    writeln!(
        f,
        "  {}",
        palette.label(&format!(
            "Photos ({} of {})",
            active + 1,
            carousel.photos.len()
        ))
    )?;

    for (i, photo) in carousel.photos.iter().enumerate() {
        let marker = if i == active { "▸" } else { " " };
        let caption = if photo.caption.is_empty() {
            format!("photo {}", i + 1)
        } else {
            photo.caption.clone()
        };
        let caption = if i == active {
            palette.title(&caption)
        } else {
            caption
        };

        if options.mode == ViewMode::Verbose {
            writeln!(f, "  {} {}  {}", marker, caption, palette.dimmed(&photo.url))?;
        } else {
            writeln!(f, "  {} {}", marker, caption)?;
        }
    }
    Ok(())
}

// --------------------------------------------------------
// Source item section
// --------------------------------------------------------

pub struct SourceItemSectionView<'a> {
    data: Option<&'a SourceItemSectionViewModel>,
    options: DisplayOptions,
}

impl<'a> SourceItemSectionView<'a> {
    pub fn new(data: Option<&'a SourceItemSectionViewModel>, options: DisplayOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for SourceItemSectionView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Some(source) = self.data else {
            return Ok(());
        };
        let palette = Palette::new(self.options.enable_color);

        writeln!(f)?;
        writeln!(f, "{}", palette.heading("Source Item"))?;

        let mut rows = vec![("Source".to_string(), source.source_item_name.clone())];
        if self.options.mode == ViewMode::Verbose
            && let Some(category) = source.source_category_id
        {
            rows.push(("Category".to_string(), category.to_string()));
        }
        rows.extend(attribute_rows(&source.attributes));
        write_rows(f, &rows, palette)
    }
}

// --------------------------------------------------------
// Lodging section
// --------------------------------------------------------

pub struct LodgingSectionView<'a> {
    data: Option<&'a LodgingSectionViewModel>,
    options: DisplayOptions,
}

impl<'a> LodgingSectionView<'a> {
    pub fn new(data: Option<&'a LodgingSectionViewModel>, options: DisplayOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for LodgingSectionView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Some(lodging) = self.data else {
            return Ok(());
        };
        let palette = Palette::new(self.options.enable_color);

        writeln!(f)?;
        writeln!(f, "{}", palette.heading("Lodging"))?;

        let mut rows = vec![
            (
                lodging.name_label.label().to_string(),
                lodging.lodging_name.clone(),
            ),
            ("Address".to_string(), lodging.address.clone()),
            ("Website".to_string(), lodging.url.clone()),
            ("Start Date".to_string(), format_date(lodging.start_date)),
            ("End Date".to_string(), format_date(lodging.end_date)),
        ];
        if self.options.mode == ViewMode::Verbose {
            rows.push(("Type".to_string(), lodging.lodging_type.to_string()));
            rows.push(("Nights".to_string(), lodging.nights.to_string()));
        }
        rows.extend(attribute_rows(&lodging.attributes));
        write_rows(f, &rows, palette)
    }
}

fn attribute_rows(attributes: &[AttributeRowViewModel]) -> Vec<(String, String)> {
    attributes
        .iter()
        .map(|row| (row.key.clone(), format_attribute_value(&row.value)))
        .collect()
}
