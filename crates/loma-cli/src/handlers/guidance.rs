use crate::handlers::{HandlerContext, show};
use crate::presentation::presenters;
use anyhow::Result;
use loma_catalog::ListingSource;
use loma_types::ListingId;

/// `loma` with no subcommand: the configured default listing, or a welcome
pub fn handle(
    source: &dyn ListingSource,
    default_listing: Option<ListingId>,
    ctx: &HandlerContext,
) -> Result<()> {
    if let Some(listing_id) = default_listing {
        return show::handle(source, listing_id, 0, ctx);
    }

    let count = source.listings()?.len();
    let view_model = presenters::present_welcome(&source.name(), count);
    ctx.render(view_model)
}
