//! Action card widget rendering.
//!
//! Draws one `ActionBox` as a bordered card: the title as a heading, then a
//! body that depends on the card kind.

use crate::action::{ActionBody, ActionBox};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Rows around the body: two borders and the title.
const CARD_CHROME: u16 = 3;

/// Body rows every card reserves, even when its content needs fewer.
const MIN_BODY_ROWS: u16 = 2;

/// Rows `line` takes when word-wrapped to `width` columns.
fn wrapped_rows(line: &str, width: usize) -> usize {
    if width == 0 {
        return 1;
    }

    let mut rows = 1;
    let mut col = 0;
    for (i, word) in line.split(' ').enumerate() {
        let len = word.chars().count();
        let sep = usize::from(i > 0 && col > 0);
        if col + sep + len <= width {
            col += sep + len;
            continue;
        }
        if col > 0 {
            rows += 1;
        }
        // Words wider than the card are broken across rows.
        let extra = len.saturating_sub(1) / width;
        rows += extra;
        col = len - extra * width;
    }
    rows
}

/// Rows needed to draw `card` at `width` columns without cutting text off.
pub fn card_height(card: &ActionBox, width: u16) -> u16 {
    let inner_width = width.saturating_sub(2) as usize;
    let body_rows = match card.view().body {
        ActionBody::Text(message) => message
            .lines()
            .map(|line| wrapped_rows(line, inner_width))
            .sum::<usize>(),
        ActionBody::Button { .. } | ActionBody::Select { .. } => 0,
    };
    let body_rows = u16::try_from(body_rows).unwrap_or(u16::MAX);
    CARD_CHROME.saturating_add(body_rows.max(MIN_BODY_ROWS))
}

/// Render a single card.
///
/// # Arguments
/// * `card` - Card to draw
/// * `focused` - Whether the card has focus (highlighted border)
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Output depends only on the card's view model and `focused`, so drawing the
/// same card twice yields identical cells.
pub fn render_card(card: &ActionBox, focused: bool, area: Rect, buf: &mut Buffer) {
    let view = card.view();

    // Static cards get a quieter focus highlight.
    let border = match (focused, view.body.is_interactive()) {
        (true, true) => Color::Yellow,
        (true, false) => Color::Gray,
        (false, _) => Color::DarkGray,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    Widget::render(block, area, buf);

    let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(inner);

    let heading = Paragraph::new(Line::from(Span::styled(
        view.title,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    Widget::render(heading, rows[0], buf);

    let body_area = rows[1];
    match view.body {
        ActionBody::Button { label } => {
            let button_area = Rect {
                height: body_area.height.min(1),
                ..body_area
            };
            let button = Paragraph::new(label)
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(Color::White)
                        .bg(if focused { Color::Blue } else { Color::DarkGray })
                        .add_modifier(Modifier::BOLD),
                );
            Widget::render(button, button_area, buf);
        }
        ActionBody::Select { label, value, .. } => {
            let line = Line::from(vec![
                Span::styled(format!("{}: ", label), Style::default().fg(Color::Cyan)),
                Span::styled(value, Style::default().fg(Color::White)),
                Span::styled(" ▾", Style::default().fg(Color::Cyan)),
            ]);
            Widget::render(Paragraph::new(line), body_area, buf);
        }
        ActionBody::Text(message) => {
            let text = Paragraph::new(message)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: false });
            Widget::render(text, body_area, buf);
        }
    }
}
