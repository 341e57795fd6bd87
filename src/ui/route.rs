//! Route bar rendering.
//!
//! Displays the router's current path and, for search routes, the term
//! being searched.

use crate::app::App;
use chrono::Local;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the route bar.
///
/// # Details
/// Shows `/` in gray before the first navigation. The back hint only appears
/// once there is somewhere to go back to.
pub fn render_route(app: &App, area: Rect, buf: &mut Buffer) {
    let mut spans = vec![Span::styled("Route: ", Style::default().fg(Color::Yellow))];

    match app.router.current() {
        Some(path) => spans.push(Span::styled(path, Style::default().fg(Color::White))),
        None => spans.push(Span::styled("/", Style::default().fg(Color::Gray))),
    }

    if let Some(term) = app.router.current_search_term() {
        spans.push(Span::styled("  Searching for: ", Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(term, Style::default().fg(Color::Magenta)));
    }

    let title = match app.router.visits().last() {
        None => "Route".to_string(),
        Some(visit) => format!(
            "Route ({} visited, last at {}, Backspace to go back)",
            app.router.visits().len(),
            visit.at.with_timezone(&Local).format("%H:%M:%S")
        ),
    };

    let paragraph =
        Paragraph::new(Line::from(spans)).block(Block::default().title(title).borders(Borders::ALL));

    Widget::render(paragraph, area, buf);
}
