use std::fmt;

use crate::presentation::formatters::{Palette, format_price_cents};
use crate::presentation::view_models::{
    CatalogCheckViewModel, CreateView, DisplayOptions, ListingListViewModel, RecordCheckViewModel,
    ViewMode, WelcomeViewModel,
};

impl CreateView for ListingListViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ListingListView::new(self, options))
    }
}

impl CreateView for CatalogCheckViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(CatalogCheckView::new(self, options))
    }
}

impl CreateView for WelcomeViewModel {
    fn create_view<'a>(&'a self, _options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(WelcomeView { data: self })
    }
}

// --------------------------------------------------------
// Listing list
// --------------------------------------------------------

pub struct ListingListView<'a> {
    data: &'a ListingListViewModel,
    options: DisplayOptions,
}

impl<'a> ListingListView<'a> {
    pub fn new(data: &'a ListingListViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for listing in &self.data.listings {
            writeln!(f, "{}", listing.listing_id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for listing in &self.data.listings {
            writeln!(
                f,
                "#{}  {}  {}",
                listing.listing_id,
                listing.title,
                format_price_cents(listing.price_cents)
            )?;
        }
        Ok(())
    }

    fn render_table(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let palette = Palette::new(self.options.enable_color);

        if self.data.listings.is_empty() {
            writeln!(f, "No listings in {}.", self.data.source)?;
            return Ok(());
        }

        let verbose = self.options.mode == ViewMode::Verbose;
        if verbose {
            writeln!(f, "Source: {}", self.data.source)?;
            writeln!(f)?;
        }

        let header = format!(
            "{:<6} {:<32} {:<10} {:<9} {:>12}",
            "ID", "TITLE", "STATUS", "TYPE", "PRICE"
        );
        writeln!(f, "{}", palette.label(&header))?;
        writeln!(f, "{}", "-".repeat(header.chars().count()))?;

        for listing in &self.data.listings {
            writeln!(
                f,
                "{:<6} {:<32} {:<10} {:<9} {:>12}",
                listing.listing_id,
                truncate(&listing.title, 32),
                listing.status.as_str(),
                listing.listing_type.as_str(),
                format_price_cents(listing.price_cents)
            )?;
        }

        if verbose {
            writeln!(f)?;
            writeln!(f, "{} listing(s)", self.data.listings.len())?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for ListingListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.options.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard | ViewMode::Verbose => self.render_table(f),
        }
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

// --------------------------------------------------------
// Catalog check
// --------------------------------------------------------

pub struct CatalogCheckView<'a> {
    data: &'a CatalogCheckViewModel,
    options: DisplayOptions,
}

impl<'a> CatalogCheckView<'a> {
    pub fn new(data: &'a CatalogCheckViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for CatalogCheckView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let palette = Palette::new(self.options.enable_color);

        writeln!(f, "Catalog: {}", self.data.path)?;
        writeln!(f)?;

        for record in &self.data.records {
            if record.valid {
                writeln!(f, "  ✓ {}", record_label(record))?;
                continue;
            }

            writeln!(
                f,
                "  {}",
                palette.error(&format!("✗ {}", record_label(record)))
            )?;
            if record.duplicate {
                writeln!(f, "      - id already used earlier in the file")?;
            }
            for violation in &record.violations {
                writeln!(f, "      - {}", violation)?;
            }
        }
        Ok(())
    }
}

fn record_label(record: &RecordCheckViewModel) -> String {
    match record.listing_id {
        Some(id) => format!("#{} {}", id, record.title),
        None => format!("#? {}", record.title),
    }
}

// --------------------------------------------------------
// Welcome
// --------------------------------------------------------

pub struct WelcomeView<'a> {
    data: &'a WelcomeViewModel,
}

impl<'a> fmt::Display for WelcomeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "loma - community marketplace listing pages")?;
        writeln!(f)?;
        writeln!(
            f,
            "{} listing(s) available from {}.",
            self.data.listing_count, self.data.source
        )
    }
}
