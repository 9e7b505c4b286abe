use owo_colors::OwoColorize;

/// Console styling that collapses to plain text when color is off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn title(&self, text: &str) -> String {
        if self.enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn heading(&self, text: &str) -> String {
        if self.enabled {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn label(&self, text: &str) -> String {
        if self.enabled {
            text.bright_black().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn price(&self, text: &str) -> String {
        if self.enabled {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn action(&self, text: &str) -> String {
        if self.enabled {
            text.black().on_yellow().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn warning(&self, text: &str) -> String {
        if self.enabled {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn error(&self, text: &str) -> String {
        if self.enabled {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dimmed(&self, text: &str) -> String {
        if self.enabled {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_palette_is_plain() {
        let palette = Palette::new(false);
        assert_eq!(palette.price("$1.00"), "$1.00");
        assert_eq!(palette.heading("Item"), "Item");
    }

    #[test]
    fn test_enabled_palette_adds_escapes() {
        let palette = Palette::new(true);
        let styled = palette.price("$1.00");
        assert!(styled.contains("\u{1b}["));
        assert!(styled.contains("$1.00"));
    }
}
