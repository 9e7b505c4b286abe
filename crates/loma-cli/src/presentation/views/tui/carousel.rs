use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::CarouselViewModel;

/// Photo captions with the active one highlighted.
///
/// `active` must already be clamped by the owning component.
pub struct CarouselView<'a> {
    data: &'a CarouselViewModel,
    active: usize,
}

impl<'a> CarouselView<'a> {
    pub fn new(data: &'a CarouselViewModel, active: usize) -> Self {
        Self { data, active }
    }
}

impl<'a> Widget for CarouselView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Photos {}/{} ", self.active + 1, self.data.photos.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title);

        let lines: Vec<Line> = self
            .data
            .photos
            .iter()
            .enumerate()
            .map(|(i, photo)| {
                let caption = if photo.caption.is_empty() {
                    format!("photo {}", i + 1)
                } else {
                    photo.caption.clone()
                };
                if i == self.active {
                    Line::from(Span::styled(
                        format!("▸ {}", caption),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(format!("  {}", caption))
                }
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
