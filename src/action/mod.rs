//! Action cards.
//!
//! Contains card definitions and the widget state that reacts to gestures.

pub mod card;
pub mod spec;

pub use card::{ActionBody, ActionBox, VARIATION_LABEL};
pub use spec::{ActionProps, ActionSpec};
