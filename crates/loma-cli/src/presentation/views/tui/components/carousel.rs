//! Photo carousel component.
//!
//! Owns the active-photo index for the browser. Keys: ←/h previous,
//! →/l next, Home/End first/last, 1-9 jump to a photo.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect};

use crate::presentation::carousel::PhotoCarousel;
use crate::presentation::view_models::CarouselViewModel;
use crate::presentation::views::tui::CarouselView;

pub struct PhotoCarouselComponent {
    state: PhotoCarousel,
}

impl Default for PhotoCarouselComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl PhotoCarouselComponent {
    pub fn new() -> Self {
        Self {
            state: PhotoCarousel::new(0),
        }
    }

    /// Start over at the first photo, e.g. after the listing changed
    pub fn reset(&mut self, photo_count: usize) {
        self.state = PhotoCarousel::new(photo_count);
    }

    pub fn active(&self) -> usize {
        self.state.active()
    }

    /// Handle keyboard input
    ///
    /// Returns true if the input was handled.
    pub fn handle_input(&mut self, key: KeyEvent, photo_count: usize) -> bool {
        if photo_count == 0 {
            return false;
        }
        self.state.resize(photo_count);

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.state.previous();
                true
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.state.next();
                true
            }
            KeyCode::Home => {
                self.state.select(0);
                true
            }
            KeyCode::End => {
                self.state.select(photo_count - 1);
                true
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.state.select(index);
                true
            }
            _ => false,
        }
    }

    /// Render with the index clamped against the photos actually present
    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &CarouselViewModel) {
        self.state.resize(data.photos.len());
        f.render_widget(CarouselView::new(data, self.state.active()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_move_within_bounds() {
        let mut component = PhotoCarouselComponent::new();
        component.reset(2);

        assert!(component.handle_input(key(KeyCode::Right), 2));
        assert!(component.handle_input(key(KeyCode::Right), 2));
        assert_eq!(component.active(), 1);

        assert!(component.handle_input(key(KeyCode::Left), 2));
        assert!(component.handle_input(key(KeyCode::Left), 2));
        assert_eq!(component.active(), 0);
    }

    #[test]
    fn test_digit_selects_and_clamps() {
        let mut component = PhotoCarouselComponent::new();
        component.reset(3);

        component.handle_input(key(KeyCode::Char('2')), 3);
        assert_eq!(component.active(), 1);

        component.handle_input(key(KeyCode::Char('9')), 3);
        assert_eq!(component.active(), 2);
    }

    #[test]
    fn test_ignores_keys_without_photos() {
        let mut component = PhotoCarouselComponent::new();
        assert!(!component.handle_input(key(KeyCode::Right), 0));
        assert!(!component.handle_input(key(KeyCode::Char('x')), 4));
    }
}
