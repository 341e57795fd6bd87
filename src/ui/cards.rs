//! Card stack rendering.
//!
//! Lays the deck out as a vertical stack of cards, scrolled so the focused
//! card stays visible.

use super::card::{card_height, render_card};
use crate::app::App;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Index of the first visible card for a given focus and viewport.
///
/// # Arguments
/// * `heights` - Row height of every card, in deck order
/// * `selected` - Index of the focused card
/// * `available` - Rows of the viewport
///
/// # Details
/// Keeps the focused card centered where possible. When the cards below the
/// focus cannot fill the rest of the viewport, more cards above are shown
/// instead, so the stack never scrolls past its end.
pub fn scroll_offset(heights: &[u16], selected: usize, available: u16) -> usize {
    let Some(last) = heights.len().checked_sub(1) else {
        return 0;
    };
    let selected = selected.min(last);

    let spare = available.saturating_sub(heights[selected]);
    let below = heights[selected + 1..]
        .iter()
        .fold(0u16, |acc, h| acc.saturating_add(*h));
    let room_above = (spare / 2).max(spare.saturating_sub(below));

    let mut start = selected;
    let mut above = 0u16;
    while start > 0 && above.saturating_add(heights[start - 1]) <= room_above {
        start -= 1;
        above += heights[start];
    }
    start
}

/// Render the card stack.
///
/// # Returns
/// * `Vec<(usize, Rect)>` - Card index and screen area of every drawn card,
///   for mouse hit testing
pub fn render_cards(app: &App, area: Rect, buf: &mut Buffer) -> Vec<(usize, Rect)> {
    if app.cards.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No cards in deck (press 'r' to reload)",
            Style::default().fg(Color::Gray),
        )))
        .block(Block::default().title("Actions").borders(Borders::ALL));
        Widget::render(empty, area, buf);
        return Vec::new();
    }

    let heights: Vec<u16> = app
        .cards
        .iter()
        .map(|card| card_height(card, area.width))
        .collect();
    let start = scroll_offset(&heights, app.selected_index, area.height);

    let mut drawn = Vec::new();
    let mut y = area.y;
    let bottom = area.y + area.height;
    for (idx, card) in app.cards.iter().enumerate().skip(start) {
        if y >= bottom {
            break;
        }
        // The last visible card may be clipped by the bottom edge.
        let height = heights[idx].min(bottom - y);
        let card_area = Rect::new(area.x, y, area.width, height);
        render_card(card, idx == app.selected_index, card_area, buf);
        drawn.push((idx, card_area));
        y += height;
    }

    drawn
}

/// Card under a screen position, if any.
pub fn card_at(drawn: &[(usize, Rect)], column: u16, row: u16) -> Option<usize> {
    drawn
        .iter()
        .find(|(_, rect)| {
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        })
        .map(|(idx, _)| *idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionSpec;

    fn app_with(count: usize) -> App {
        App::new(
            (0..count)
                .map(|i| ActionSpec::info(format!("Card {}", i), "text"))
                .collect(),
        )
    }

    #[test]
    fn test_scroll_offset_uniform_heights() {
        let heights = [5u16; 10];
        assert_eq!(scroll_offset(&heights, 0, 15), 0);
        assert_eq!(scroll_offset(&heights, 5, 15), 4);
        assert_eq!(scroll_offset(&heights, 9, 15), 7);
        assert_eq!(scroll_offset(&heights[..2], 1, 25), 0);
        assert_eq!(scroll_offset(&[], 3, 25), 0);
    }

    #[test]
    fn test_scroll_offset_mixed_heights() {
        // A tall card above the focus only stays visible if it fits.
        let heights = [5, 9, 5, 5, 5];
        assert_eq!(scroll_offset(&heights, 2, 15), 2);
        assert_eq!(scroll_offset(&heights, 4, 15), 2);
        assert_eq!(scroll_offset(&heights, 4, 25), 1);
    }

    #[test]
    fn test_render_cards_uses_card_heights() {
        let mut specs = vec![ActionSpec::info("Tall", "one\ntwo\nthree\nfour")];
        specs.push(ActionSpec::internal("Search", "neural nets"));
        let app = App::new(specs);
        let area = Rect::new(0, 0, 30, 20);
        let mut buf = Buffer::empty(area);

        let drawn = render_cards(&app, area, &mut buf);

        assert_eq!(drawn, vec![(0, Rect::new(0, 0, 30, 7)), (1, Rect::new(0, 7, 30, 5))]);
    }

    #[test]
    fn test_render_cards_reports_hit_areas() {
        let mut app = app_with(4);
        app.selected_index = 3;
        let area = Rect::new(0, 0, 30, 10);
        let mut buf = Buffer::empty(area);

        let drawn = render_cards(&app, area, &mut buf);

        assert_eq!(drawn.iter().map(|(i, _)| *i).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(card_at(&drawn, 5, 1), Some(2));
        assert_eq!(card_at(&drawn, 5, 6), Some(3));
        assert_eq!(card_at(&drawn, 31, 1), None);
    }

    #[test]
    fn test_render_empty_deck() {
        let app = app_with(0);
        let area = Rect::new(0, 0, 50, 5);
        let mut buf = Buffer::empty(area);
        assert!(render_cards(&app, area, &mut buf).is_empty());
    }
}
