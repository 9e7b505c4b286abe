use crate::args::{OutputFormat, ViewModeArgs};
use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, DisplayOptions, Renderer};
use anyhow::Result;
use serde::Serialize;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    pub options: DisplayOptions,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, view_mode: &ViewModeArgs, enable_color: bool) -> Self {
        Self {
            format,
            options: DisplayOptions::new(view_mode.resolve(), enable_color),
        }
    }

    /// Render a view model using the configured format and display options
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(self.format.into(), self.options);
        renderer.render(view_model)
    }
}
