//! The action card widget.
//!
//! An `ActionBox` pairs an `ActionSpec` with the one piece of state a card
//! owns (the selected variation) and turns user gestures into effects.

use super::spec::{ActionKind, ActionSpec};
use crate::navigation::{Effect, Router, TabOpener, search_path};

/// Label of the variation picker.
pub const VARIATION_LABEL: &str = "Select Model";

/// Body of a rendered card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionBody {
    /// Full-width primary button
    Button { label: String },
    /// Labeled single-select control
    Select {
        label: &'static str,
        options: Vec<String>,
        value: String,
    },
    /// Static secondary text
    Text(String),
}

impl ActionBody {
    /// Whether the body reacts to any gesture.
    pub fn is_interactive(&self) -> bool {
        !matches!(self, ActionBody::Text(_))
    }
}

/// Everything needed to draw a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionBoxView {
    pub title: String,
    pub body: ActionBody,
}

/// A single action card and its selection state.
#[derive(Debug, Clone)]
pub struct ActionBox {
    spec: ActionSpec,
    selected_variation: String,
}

impl ActionBox {
    /// Create a card with an empty selection.
    pub fn new(spec: ActionSpec) -> Self {
        Self {
            spec,
            selected_variation: String::new(),
        }
    }

    pub fn spec(&self) -> &ActionSpec {
        &self.spec
    }

    /// Name of the most recently selected variation (empty until one is picked).
    pub fn selected_variation(&self) -> &str {
        &self.selected_variation
    }

    /// Build the view model. Depends only on the card definition and the selection.
    pub fn view(&self) -> ActionBoxView {
        let body = match &self.spec.kind {
            ActionKind::Variations { items } => ActionBody::Select {
                label: VARIATION_LABEL,
                options: items.iter().map(|v| v.name.clone()).collect(),
                value: self.selected_variation.clone(),
            },
            ActionKind::Info { message } | ActionKind::Placeholder { message } => {
                ActionBody::Text(message.clone())
            }
            ActionKind::External { .. } | ActionKind::Internal { .. } | ActionKind::Inert => {
                ActionBody::Button {
                    label: self.spec.title.clone(),
                }
            }
        };

        ActionBoxView {
            title: self.spec.title.clone(),
            body,
        }
    }

    /// Press the card's button.
    ///
    /// Returns the effect that was dispatched, or `None` when the card has no
    /// button or nothing is bound to it.
    pub fn activate(&self, opener: &mut dyn TabOpener, router: &mut dyn Router) -> Option<Effect> {
        let effect = match &self.spec.kind {
            ActionKind::External { url } => Effect::OpenExternal(url.clone()),
            ActionKind::Internal { query } => Effect::Navigate(search_path(query)),
            _ => return None,
        };
        effect.dispatch(opener, router);
        Some(effect)
    }

    /// Pick a variation by name.
    ///
    /// The selection is recorded even when no variation has that name; only a
    /// match navigates. Cards without a picker ignore the call.
    pub fn select(&mut self, name: &str, router: &mut dyn Router) -> Option<Effect> {
        let ActionKind::Variations { items } = &self.spec.kind else {
            return None;
        };

        self.selected_variation = name.to_string();
        let variation = items.iter().find(|v| v.name == name)?;
        let path = search_path(&variation.query);
        router.navigate_to(&path);
        Some(Effect::Navigate(path))
    }
}

impl From<ActionSpec> for ActionBox {
    fn from(spec: ActionSpec) -> Self {
        Self::new(spec)
    }
}
