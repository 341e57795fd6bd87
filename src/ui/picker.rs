//! Variation picker rendering.
//!
//! Shows the focused card's variations as a popup list.

use crate::action::VARIATION_LABEL;
use crate::app::{App, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, StatefulWidget, Widget},
};

/// Popup rectangle centered in `area`, clamped to fit.
fn popup_area(area: Rect, rows: usize) -> Rect {
    let width = area.width.min(40);
    let height = area.height.min(rows as u16 + 2);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Render the picker when it is open.
///
/// # Details
/// The current selection is marked, and the highlighted option is drawn in
/// reverse colors.
pub fn render_picker(app: &App, area: Rect, buf: &mut Buffer) {
    if app.mode != UiMode::Picking {
        return;
    }

    let options = app.picker_options();
    let current = app
        .selected_card()
        .map(|c| c.selected_variation().to_string())
        .unwrap_or_default();

    let items: Vec<ListItem> = options
        .iter()
        .map(|name| {
            let marker = if *name == current { "● " } else { "  " };
            ListItem::new(format!("{}{}", marker, name))
        })
        .collect();

    let popup = popup_area(area, items.len());
    Widget::render(Clear, popup, buf);

    let list = List::new(items)
        .block(
            Block::default()
                .title(VARIATION_LABEL)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(Some(app.picker_index));
    StatefulWidget::render(list, popup, buf, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_area_fits() {
        let area = Rect::new(0, 0, 100, 30);
        let popup = popup_area(area, 3);
        assert_eq!(popup, Rect::new(30, 12, 40, 5));

        let small = popup_area(Rect::new(0, 0, 20, 4), 10);
        assert_eq!(small, Rect::new(0, 0, 20, 4));
    }
}
