use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::{CallToAction, StatusBadge, StatusLevel};

/// Key help plus the outcome of the last action
pub struct StatusBarView<'a> {
    call_to_action: Option<CallToAction>,
    message: Option<&'a StatusBadge>,
}

impl<'a> StatusBarView<'a> {
    pub fn new(call_to_action: Option<CallToAction>, message: Option<&'a StatusBadge>) -> Self {
        Self {
            call_to_action,
            message,
        }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut help = String::from("t: toggle listing  ←/→: photos  ");
        if let Some(action) = self.call_to_action {
            help.push_str(&format!("Enter: {}  ", action.label()));
        }
        help.push_str("q: quit");

        let mut spans = vec![Span::styled(help, Style::default().fg(Color::DarkGray))];
        if let Some(badge) = self.message {
            let color = match badge.level {
                StatusLevel::Success => Color::Green,
                StatusLevel::Info => Color::Cyan,
                StatusLevel::Warning => Color::Yellow,
                StatusLevel::Error => Color::Red,
            };
            spans.push(Span::raw("  "));
            spans.push(Span::styled(badge.label.clone(), Style::default().fg(color)));
        }

        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}
