use crate::presentation::renderers::{BrowseApp, run_browse};
use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use loma_catalog::{ToggleHarness, UnavailablePurchaseHook};

pub fn handle(hotel: bool) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("browse needs an interactive terminal; use `loma demo` for plain output");
    }

    let mut harness = ToggleHarness::mock();
    harness.set_hotel(hotel);

    let app = BrowseApp::new(harness, Box::new(UnavailablePurchaseHook));
    run_browse(app)
}
