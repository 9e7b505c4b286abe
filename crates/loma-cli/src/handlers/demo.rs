use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use loma_catalog::ToggleHarness;

/// Render the sneaker or hotel mock listing, whatever catalog is configured
pub fn handle(hotel: bool, photo: usize, ctx: &HandlerContext) -> Result<()> {
    let mut harness = ToggleHarness::mock();
    harness.set_hotel(hotel);

    let view_model = presenters::present_demo_page(harness.current(), hotel, photo);
    ctx.render(view_model)
}
