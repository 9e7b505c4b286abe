use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use loma_catalog::{LoadState, PurchaseHook, ToggleHarness};
use loma_types::ListingId;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::presentation::presenters::present_listing_page;
use crate::presentation::view_models::{ListingPageViewModel, StatusBadge};
use crate::presentation::views::tui::{ListingPageWidget, PhotoCarouselComponent, StatusBarView};

/// State of the interactive listing page.
///
/// Routes keys: app-level keys (quit, toggle, call-to-action) are handled
/// here, everything else goes to the carousel component.
pub struct BrowseApp {
    harness: ToggleHarness,
    hook: Box<dyn PurchaseHook>,
    page: ListingPageViewModel,
    carousel: PhotoCarouselComponent,
    status: Option<StatusBadge>,
    should_quit: bool,
}

impl BrowseApp {
    pub fn new(harness: ToggleHarness, hook: Box<dyn PurchaseHook>) -> Self {
        let mut app = Self {
            harness,
            hook,
            page: ListingPageViewModel::Loading,
            carousel: PhotoCarouselComponent::new(),
            status: None,
            should_quit: false,
        };
        app.reload();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn page(&self) -> &ListingPageViewModel {
        &self.page
    }

    pub fn active_photo(&self) -> usize {
        self.carousel.active()
    }

    pub fn status(&self) -> Option<&StatusBadge> {
        self.status.as_ref()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Char('t') => {
                self.harness.toggle();
                self.status = None;
                self.reload();
            }
            KeyCode::Enter => self.call_to_action(),
            _ => {
                let count = self.photo_count();
                self.carousel.handle_input(key, count);
            }
        }
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let carousel = self
            .page
            .loaded()
            .and_then(|page| page.item.as_ref())
            .and_then(|item| item.carousel.as_ref());

        let carousel_height = carousel
            .map(|c| (c.photos.len() as u16).saturating_add(2))
            .unwrap_or(0);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),
                Constraint::Length(carousel_height),
                Constraint::Length(2),
            ])
            .split(f.area());

        f.render_widget(ListingPageWidget::new(&self.page), chunks[0]);

        if let Some(carousel) = carousel {
            self.carousel.render(f, chunks[1], carousel);
        }

        let call_to_action = self.page.loaded().map(|page| page.listing.call_to_action);
        f.render_widget(
            StatusBarView::new(call_to_action, self.status.as_ref()),
            chunks[2],
        );
    }

    fn reload(&mut self) {
        let record = self.harness.current();
        tracing::debug!(
            hotel = self.harness.is_hotel(),
            listing_id = %record.id(),
            "showing browse listing"
        );
        let state = LoadState::loaded(record.clone());
        self.page = present_listing_page(&state, 0).content;
        let count = self.photo_count();
        self.carousel.reset(count);
    }

    fn photo_count(&self) -> usize {
        self.page
            .loaded()
            .and_then(|page| page.item.as_ref())
            .and_then(|item| item.carousel.as_ref())
            .map(|carousel| carousel.photos.len())
            .unwrap_or(0)
    }

    fn call_to_action(&mut self) {
        let Some(page) = self.page.loaded() else {
            return;
        };
        let label = page.listing.call_to_action.label();
        let listing_id = ListingId(page.listing.listing_id);

        self.status = Some(match self.hook.initiate(listing_id) {
            Ok(confirmation) => {
                StatusBadge::success(format!("{}: {}", label, confirmation.reference))
            }
            Err(e) => StatusBadge::error(e.to_string()),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loma_catalog::{PurchaseConfirmation, UnavailablePurchaseHook};
    use ratatui::{Terminal, backend::TestBackend};

    struct ReceiptHook;

    impl PurchaseHook for ReceiptHook {
        fn initiate(&self, listing_id: ListingId) -> loma_catalog::Result<PurchaseConfirmation> {
            Ok(PurchaseConfirmation {
                listing_id,
                reference: format!("R-{}", listing_id),
            })
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> BrowseApp {
        BrowseApp::new(ToggleHarness::mock(), Box::new(UnavailablePurchaseHook))
    }

    fn screen(app: &mut BrowseApp) -> String {
        let backend = TestBackend::new(80, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_starts_on_sneaker_page() {
        let app = app();
        let page = app.page().loaded().unwrap();
        assert_eq!(page.listing.title, "Stylish Sneakers");
        assert!(page.lodging.is_none());
        assert_eq!(app.active_photo(), 0);
    }

    #[test]
    fn test_toggle_switches_listing_and_resets_photo() {
        let mut app = app();
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.active_photo(), 1);

        app.handle_key(key(KeyCode::Char('t')));
        let page = app.page().loaded().unwrap();
        assert!(page.lodging.is_some());
        assert!(page.item.is_none());
        assert_eq!(app.active_photo(), 0);

        app.handle_key(key(KeyCode::Char('t')));
        let page = app.page().loaded().unwrap();
        assert!(page.item.is_some());
        assert!(page.lodging.is_none());
    }

    #[test]
    fn test_photo_keys_clamp_at_last_photo() {
        let mut app = app();
        for _ in 0..5 {
            app.handle_key(key(KeyCode::Right));
        }
        assert_eq!(app.active_photo(), 1);
    }

    #[test]
    fn test_enter_reports_unavailable_purchase() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));

        let status = app.status().unwrap();
        assert_eq!(status.level, crate::presentation::StatusLevel::Error);
        assert!(status.label.contains("purchase flow is not available"));
        assert!(!app.should_quit());
    }

    #[test]
    fn test_enter_shows_confirmation() {
        let mut app = BrowseApp::new(ToggleHarness::mock(), Box::new(ReceiptHook));
        app.handle_key(key(KeyCode::Char('t')));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.status().unwrap().label, "Book Now: R-2");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());

        let mut app = self::app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_draw_shows_page_carousel_and_help() {
        let mut app = app();
        let text = screen(&mut app);
        assert!(text.contains("Stylish Sneakers"));
        assert!(text.contains("Photos 1/2"));
        assert!(text.contains("Enter: Buy Now"));

        app.handle_key(key(KeyCode::Char('t')));
        let text = screen(&mut app);
        assert!(text.contains("Hotel Name"));
        assert!(text.contains("Enter: Book Now"));
        assert!(!text.contains("Photos"));
    }
}
