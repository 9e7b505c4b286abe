use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::formatters::{
    format_attribute_value, format_date, format_price_cents, format_timestamp_date,
};
use crate::presentation::view_models::{
    AttributeRowViewModel, ListingPageViewModel, ListingSectionViewModel, LoadedPageViewModel,
};
use crate::presentation::views::listing::NO_DESCRIPTION;

/// Listing page without the photo strip (that belongs to the carousel)
pub struct ListingPageWidget<'a> {
    data: &'a ListingPageViewModel,
}

impl<'a> ListingPageWidget<'a> {
    pub fn new(data: &'a ListingPageViewModel) -> Self {
        Self { data }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        match self.data {
            ListingPageViewModel::Loading => vec![Line::from(Span::styled(
                "Loading listing...",
                Style::default().fg(Color::DarkGray),
            ))],
            ListingPageViewModel::NotFound { listing_id } => vec![Line::from(Span::styled(
                format!("No listing with id {}.", listing_id),
                Style::default().fg(Color::Yellow),
            ))],
            ListingPageViewModel::Failed {
                listing_id,
                message,
            } => vec![
                Line::from(Span::styled(
                    format!("Listing {} could not be loaded.", listing_id),
                    Style::default().fg(Color::Red),
                )),
                Line::from(message.clone()),
            ],
            ListingPageViewModel::Loaded(page) => loaded_lines(page),
        }
    }

    fn title(&self) -> String {
        match self.data {
            ListingPageViewModel::Loaded(page) => format!(" Listing #{} ", page.listing.listing_id),
            ListingPageViewModel::NotFound { listing_id }
            | ListingPageViewModel::Failed { listing_id, .. } => {
                format!(" Listing #{} ", listing_id)
            }
            ListingPageViewModel::Loading => " Listing ".to_string(),
        }
    }
}

impl<'a> Widget for ListingPageWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Span::styled(
                self.title(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));

        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

fn loaded_lines(page: &LoadedPageViewModel) -> Vec<Line<'static>> {
    let mut lines = listing_lines(&page.listing);

    if let Some(item) = &page.item {
        lines.push(Line::from(""));
        lines.push(heading("Item"));
        lines.push(row("Name", item.item_name.clone()));
        lines.push(row("Condition", item.condition.to_string()));
        if let Some(zipcode) = &item.shipping_zipcode {
            lines.push(row("Ships From", zipcode.clone()));
        }
        lines.extend(attribute_lines(&item.attributes));
    }

    if let Some(source) = &page.source_item {
        lines.push(Line::from(""));
        lines.push(heading("Source Item"));
        lines.push(row("Source", source.source_item_name.clone()));
        lines.extend(attribute_lines(&source.attributes));
    }

    if let Some(lodging) = &page.lodging {
        lines.push(Line::from(""));
        lines.push(heading("Lodging"));
        lines.push(row(lodging.name_label.label(), lodging.lodging_name.clone()));
        lines.push(row("Address", lodging.address.clone()));
        lines.push(row("Website", lodging.url.clone()));
        lines.push(row("Start Date", format_date(lodging.start_date)));
        lines.push(row("End Date", format_date(lodging.end_date)));
        lines.extend(attribute_lines(&lodging.attributes));
    }

    lines
}

fn listing_lines(listing: &ListingSectionViewModel) -> Vec<Line<'static>> {
    let listed = match listing.listed_on {
        Some(ts) => format!("listed {}", format_timestamp_date(ts)),
        None => "not yet listed".to_string(),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            listing.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(listed, Style::default().fg(Color::DarkGray))),
        Line::from(""),
        row("Status", listing.status.to_string()),
        Line::from(vec![
            label_span("Price"),
            Span::styled(
                format_price_cents(listing.price_cents),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    if let Some(closed_on) = listing.closed_on {
        lines.push(row("Closed", format_timestamp_date(closed_on)));
    }
    if listing.available_count > 1 {
        lines.push(row("Available", listing.available_count.to_string()));
    }
    if listing.description.is_empty() {
        lines.push(Line::from(vec![
            label_span("Description"),
            Span::styled(NO_DESCRIPTION, Style::default().fg(Color::DarkGray)),
        ]));
    } else {
        lines.push(row("Description", listing.description.clone()));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", listing.call_to_action.label()),
        Style::default().fg(Color::Black).bg(Color::Yellow),
    )));
    lines
}

fn attribute_lines(attributes: &[AttributeRowViewModel]) -> Vec<Line<'static>> {
    attributes
        .iter()
        .map(|attr| row(&attr.key, format_attribute_value(&attr.value)))
        .collect()
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn label_span(label: &str) -> Span<'static> {
    Span::styled(format!("{:<20}", label), Style::default().fg(Color::DarkGray))
}

fn row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![label_span(label), Span::raw(value)])
}
