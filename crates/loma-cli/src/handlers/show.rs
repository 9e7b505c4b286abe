use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use loma_catalog::{ListingSource, load_listing};
use loma_types::ListingId;

/// Render one listing page. A missing listing is a page state, not an error.
pub fn handle(
    source: &dyn ListingSource,
    listing_id: ListingId,
    photo: usize,
    ctx: &HandlerContext,
) -> Result<()> {
    let state = load_listing(source, listing_id);
    let view_model = presenters::present_listing_page(&state, photo);
    ctx.render(view_model)
}
