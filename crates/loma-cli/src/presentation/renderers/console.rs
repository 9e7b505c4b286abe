use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::{self, Write};

use super::traits::Renderer;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, DisplayOptions, OutputFormat,
};

pub struct ConsoleRenderer {
    format: OutputFormat,
    options: DisplayOptions,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, options: DisplayOptions) -> Self {
        Self { format, options }
    }

    /// Write the result to `out`: pretty JSON, or badge + view + tips
    pub fn write_to<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
        W: Write,
    {
        if self.format == OutputFormat::Json {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        let color = self.options.enable_color;

        if let Some(badge) = &result.badge {
            if color {
                writeln!(out, "{} {}", badge.icon(), badge.label.bold())?;
            } else {
                writeln!(out, "{} {}", badge.icon(), badge.label)?;
            }
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.options))?;

        if !result.suggestions.is_empty() {
            let tips = "💡 Tips:";
            if color {
                writeln!(out, "\n{}", tips.yellow().bold())?;
            } else {
                writeln!(out, "\n{}", tips)?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out, &result)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::{present_demo_page, present_listing_page};
    use crate::presentation::view_models::ViewMode;
    use loma_catalog::{LoadState, fixtures};
    use loma_types::ListingId;

    fn render_text<T: Serialize + CreateView>(result: &CommandResultViewModel<T>) -> String {
        let renderer = ConsoleRenderer::new(
            OutputFormat::Text,
            DisplayOptions::new(ViewMode::Standard, false),
        );
        let mut buf = Vec::new();
        renderer.write_to(&mut buf, result).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_output_has_badge_and_tips() {
        let result = present_listing_page(
            &LoadState::NotFound {
                listing_id: ListingId(7),
            },
            0,
        );
        let out = render_text(&result);

        assert!(out.starts_with("⚠️ Listing 7 not found\n\n"));
        assert!(out.contains("No listing with id 7."));
        assert!(out.contains("💡 Tips:"));
        assert!(out.contains("  • See which listings exist: loma list"));
    }

    #[test]
    fn test_json_output_is_the_full_view_model() {
        let renderer = ConsoleRenderer::new(
            OutputFormat::Json,
            DisplayOptions::new(ViewMode::Minimal, false),
        );
        let result = present_demo_page(&fixtures::sneaker_listing(), false, 0);
        let mut buf = Vec::new();
        renderer.write_to(&mut buf, &result).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json["content"]["state"], "loaded");
        assert_eq!(json["content"]["listing"]["price_cents"], 12999);
        assert_eq!(
            json["content"]["item"]["attributes"][0]["key"],
            "yearOfProduction"
        );
        assert_eq!(json["content"]["item"]["attributes"][0]["value"], 2021);
        assert!(json["suggestions"].as_array().unwrap().len() >= 2);
    }
}
