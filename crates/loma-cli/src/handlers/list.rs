use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use loma_catalog::ListingSource;

pub fn handle(source: &dyn ListingSource, ctx: &HandlerContext) -> Result<()> {
    let records = source.listings()?;
    tracing::debug!(source = %source.name(), count = records.len(), "listing catalog");

    let view_model = presenters::present_listing_list(&source.name(), &records);
    ctx.render(view_model)
}
