//! # Presentation Layer
//!
//! Listing pages are rendered through an MVVM split so the same page can go
//! to plain text, JSON or the interactive terminal UI.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> stdout
//!                                                                  ==(Text)==> [ View ]    --> stdout
//!
//! [ Handler ] --> [ BrowseApp (router) ] --> [ Component ] <-- key events
//!                                                 |
//!                                                 v
//!                                        [ ratatui widget ]
//! ```
//!
//! ## Rules
//!
//! ### 1. ViewModels carry raw data
//! Prices stay in integer cents, dates stay dates, attribute values keep
//! their scalar type. JSON output is an API; formatting happens in `views/`
//! through `formatters/`.
//!
//! ### 2. Presenters decide, views lay out
//! Which sections exist, which call-to-action applies, which label the
//! lodging name gets and which tips to show are presenter decisions. Views
//! only choose spacing, color and what a given `ViewMode` hides.
//!
//! ### 3. JSON ignores `ViewMode`
//! `--format json` always dumps the complete view model.
//!
//! ### 4. TUI state lives in components
//! The active photo is private to `PhotoCarouselComponent`; the renderer
//! routes keys to it and never touches the index itself. Components clamp
//! against the data on every render.
//!
//! ## Directory guide
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON page | `view_models/` |
//! | Change when a section or tip appears | `presenters/` |
//! | Change how a price or date reads | `formatters/` |
//! | Change layout, labels or colors | `views/` |
//! | Handle a key in the browser | `views/tui/components/` |
//! | Change the event loop or terminal setup | `renderers/tui/` |

pub mod carousel;
pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, DisplayOptions, Guidance, StatusBadge, StatusLevel,
    ViewMode,
};
