//! UI components module.
//!
//! Contains ratatui widgets for displaying the application interface.

pub mod card;
pub mod cards;
pub mod picker;
pub mod route;

pub use cards::{card_at, render_cards};
pub use picker::render_picker;
pub use route::render_route;
