use loma_catalog::RecordReport;
use loma_types::{ListingId, ListingRecord};

use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CallToAction, CatalogCheckViewModel, CommandResultViewModel, Guidance, ListingListViewModel,
    ListingSummaryViewModel, RecordCheckViewModel, StatusBadge, WelcomeViewModel,
};

pub fn present_listing_list(
    source: &str,
    records: &[ListingRecord],
) -> CommandResultViewModel<ListingListViewModel> {
    let listings: Vec<ListingSummaryViewModel> = records
        .iter()
        .map(|record| {
            let listing = &record.listing;
            ListingSummaryViewModel {
                listing_id: listing.id.get(),
                title: listing.title.clone(),
                status: listing.status.clone(),
                listing_type: listing.listing_type.clone(),
                sale_type: listing.sale_type.clone(),
                price_cents: listing.price_cents,
                call_to_action: CallToAction::for_sale_type(&listing.sale_type),
            }
        })
        .collect();

    let first_id = listings.first().map(|l| l.listing_id);
    let content = ListingListViewModel {
        source: source.to_string(),
        listings,
    };

    match first_id {
        Some(id) => CommandResultViewModel::new(content)
            .with_suggestion(Guidance::new("Open a listing page").with_command(fmt::show(id))),
        None => CommandResultViewModel::new(content)
            .with_badge(StatusBadge::warning("No listings found"))
            .with_suggestion(
                Guidance::new("Point loma at a catalog file").with_command(cmd::USE_CATALOG),
            )
            .with_suggestion(Guidance::new("Try the built-in listings").with_command(cmd::DEMO)),
    }
}

pub fn present_catalog_check(
    path: &str,
    reports: &[RecordReport],
) -> CommandResultViewModel<CatalogCheckViewModel> {
    let records: Vec<RecordCheckViewModel> = reports
        .iter()
        .map(|report| RecordCheckViewModel {
            listing_id: report.listing_id.map(ListingId::get),
            title: report.title.clone(),
            valid: report.is_valid(),
            duplicate: report.duplicate,
            violations: report.violations.clone(),
        })
        .collect();

    let total = records.len();
    let invalid = records.iter().filter(|r| !r.valid).count();

    let content = CatalogCheckViewModel {
        path: path.to_string(),
        total,
        invalid,
        records,
    };

    if invalid == 0 {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::success(format!("{} record(s) valid", total)))
            .with_suggestion(
                Guidance::new("List the catalog").with_command(format!("loma --catalog {} list", path)),
            )
    } else {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::error(format!(
                "{} of {} record(s) invalid",
                invalid, total
            )))
            .with_suggestion(
                Guidance::new("Fix the listed records and re-run").with_command(fmt::check(path)),
            )
    }
}

pub fn present_welcome(
    source: &str,
    listing_count: usize,
) -> CommandResultViewModel<WelcomeViewModel> {
    CommandResultViewModel::new(WelcomeViewModel {
        source: source.to_string(),
        listing_count,
    })
    .with_suggestions(vec![
        Guidance::new("List listings").with_command(cmd::LIST),
        Guidance::new("Show a listing page").with_command(cmd::SHOW),
        Guidance::new("Render the built-in mock listing").with_command(cmd::DEMO),
        Guidance::new("Browse interactively").with_command(cmd::BROWSE),
    ])
}
