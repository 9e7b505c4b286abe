use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Result, bail};
use loma_catalog::FileCatalog;
use std::path::Path;

/// Validate every record and print the report.
///
/// Fails after rendering when any record is invalid so scripts can gate on
/// the exit status.
pub fn handle(path: &Path, ctx: &HandlerContext) -> Result<()> {
    let reports = FileCatalog::inspect(path)?;
    let display_path = path.display().to_string();

    let view_model = presenters::present_catalog_check(&display_path, &reports);
    let invalid = view_model.content.invalid;
    ctx.render(view_model)?;

    if invalid > 0 {
        bail!("{} invalid record(s) in {}", invalid, display_path);
    }
    Ok(())
}
