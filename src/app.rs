//! Application state management.
//!
//! Manages the card stack, focus, the variation picker, and the in-app router.

use crate::action::{ActionBody, ActionBox, ActionSpec};
use crate::navigation::{AppRouter, Effect, TabOpener};
use chrono::Local;

/// Current UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Moving between cards
    Browse,
    /// Variation picker open over the focused card
    Picking,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Cards in deck order
    pub cards: Vec<ActionBox>,
    /// Index of the focused card
    pub selected_index: usize,
    /// Current UI mode
    pub mode: UiMode,
    /// Highlighted option while the picker is open
    pub picker_index: usize,
    /// In-app router that internal cards navigate with
    pub router: AppRouter,
    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Create application state with one card per spec.
    pub fn new(specs: Vec<ActionSpec>) -> Self {
        Self {
            cards: specs.into_iter().map(ActionBox::new).collect(),
            selected_index: 0,
            mode: UiMode::Browse,
            picker_index: 0,
            router: AppRouter::new(),
            status_message: None,
        }
    }

    /// Replace every card.
    ///
    /// # Details
    /// Cards are rebuilt from scratch, so selections start empty again.
    /// Focus is kept where possible and the picker is closed.
    pub fn set_cards(&mut self, specs: Vec<ActionSpec>) {
        self.cards = specs.into_iter().map(ActionBox::new).collect();
        self.selected_index = self.selected_index.min(self.cards.len().saturating_sub(1));
        self.mode = UiMode::Browse;
        self.picker_index = 0;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    /// Clear status message so the help line shows again.
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn selected_card(&self) -> Option<&ActionBox> {
        self.cards.get(self.selected_index)
    }

    /// Move focus up, wrapping to the bottom.
    ///
    /// # Details
    /// Moving focus dismisses the previous status message.
    pub fn move_up(&mut self) {
        self.clear_status();
        if self.cards.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.cards.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Move focus down, wrapping to the top.
    ///
    /// # Details
    /// Moving focus dismisses the previous status message.
    pub fn move_down(&mut self) {
        self.clear_status();
        if self.cards.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.cards.len();
    }

    /// Handle the primary gesture on the focused card.
    ///
    /// # Details
    /// Button cards are activated. Variation cards open the picker instead,
    /// with the current selection highlighted. Text cards ignore it.
    pub fn activate_selected(&mut self, opener: &mut dyn TabOpener) {
        let Some(card) = self.cards.get(self.selected_index) else {
            return;
        };

        match card.view().body {
            ActionBody::Button { .. } => {
                let effect = card.activate(opener, &mut self.router);
                self.record(effect);
            }
            ActionBody::Select { options, value, .. } => {
                if options.is_empty() {
                    self.set_status("No variations available".to_string());
                    return;
                }
                self.picker_index = options.iter().position(|o| *o == value).unwrap_or(0);
                self.mode = UiMode::Picking;
            }
            ActionBody::Text(_) => {}
        }
    }

    /// Options of the focused card's picker (empty for other cards).
    pub fn picker_options(&self) -> Vec<String> {
        match self.selected_card().map(|c| c.view().body) {
            Some(ActionBody::Select { options, .. }) => options,
            _ => Vec::new(),
        }
    }

    pub fn picker_up(&mut self) {
        let count = self.picker_options().len();
        if count == 0 {
            return;
        }
        self.picker_index = if self.picker_index == 0 {
            count - 1
        } else {
            self.picker_index - 1
        };
    }

    pub fn picker_down(&mut self) {
        let count = self.picker_options().len();
        if count == 0 {
            return;
        }
        self.picker_index = (self.picker_index + 1) % count;
    }

    /// Select the highlighted option and close the picker.
    pub fn pick_highlighted(&mut self) {
        let options = self.picker_options();
        self.mode = UiMode::Browse;
        let Some(name) = options.get(self.picker_index) else {
            return;
        };
        self.select_variation(name);
    }

    /// Select a variation by name on the focused card.
    pub fn select_variation(&mut self, name: &str) {
        let Some(card) = self.cards.get_mut(self.selected_index) else {
            return;
        };
        let effect = card.select(name, &mut self.router);
        if effect.is_none() {
            tracing::debug!(name, "selection without matching variation");
        }
        self.record(effect);
    }

    pub fn close_picker(&mut self) {
        self.mode = UiMode::Browse;
    }

    /// Return to the previous route.
    pub fn go_back(&mut self) {
        let message = match self.router.back() {
            Some(path) => format!("Back to {}", path),
            None => "No previous route".to_string(),
        };
        self.set_status(message);
    }

    fn record(&mut self, effect: Option<Effect>) {
        let Some(effect) = effect else {
            return;
        };
        let kind = self
            .selected_card()
            .map(|c| c.spec().kind_name())
            .unwrap_or("none");
        tracing::info!(card = self.selected_index, kind, effect = ?effect, "card gesture");
        self.set_status(format!(
            "[{}] {}",
            Local::now().format("%H:%M:%S"),
            effect.describe()
        ));
    }
}
