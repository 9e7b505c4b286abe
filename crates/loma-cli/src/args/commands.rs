use super::common::ViewModeArgs;
use clap::Subcommand;
use loma_types::ListingId;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Fetch and render one listing page")]
    Show {
        #[arg(help = "Listing id")]
        id: ListingId,

        #[arg(long, default_value = "0", help = "Photo to mark as active (0-based)")]
        photo: usize,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "List every listing in the catalog")]
    List {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Render one of the two built-in mock listings")]
    Demo {
        #[arg(long, help = "Show the hotel listing instead of the sneaker listing")]
        hotel: bool,

        #[arg(long, default_value = "0", help = "Photo to mark as active (0-based)")]
        photo: usize,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Interactive listing page (t: toggle, ←/→: photos, Enter: buy/book, q: quit)")]
    Browse {
        #[arg(long, help = "Start on the hotel listing")]
        hotel: bool,
    },

    #[command(about = "Validate every record of a catalog file")]
    Check {
        #[arg(help = "Catalog file (default: the configured catalog)")]
        path: Option<PathBuf>,
    },
}
