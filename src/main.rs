//! Action deck - terminal front-end for action cards.
//!
//! Main entry point and event loop for the application.

mod action;
mod app;
mod config;
mod deck;
mod logging;
mod navigation;
mod ui;

use app::{App, UiMode};
use config::Config;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use navigation::{SystemOpener, TabOpener};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::Paragraph,
};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

const HELP: &str =
    "q: quit  j/k: move  Enter: activate  Backspace: back  r: reload deck";

/// Main application entry point.
///
/// # Details
/// Loads configuration and the deck, sets up logging and the terminal, and
/// runs the event loop. An optional first argument overrides the deck path.
fn main() -> anyhow::Result<()> {
    let config = Config::load(None)?;
    let _log_guard = logging::init(&Config::app_dir()?, &config.log_filter)?;

    let deck_path = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => config.deck_file_path()?,
    };

    let specs = match deck::load_deck(&deck_path) {
        Ok(specs) => specs,
        Err(e) => {
            tracing::error!(error = %e, "startup deck load failed");
            eprintln!("Error: {}", e);
            eprintln!("Create a deck file (JSONC array of cards) or pass its path as an argument.");
            return Err(e.into());
        }
    };

    let mut app = App::new(specs);
    let mut opener = SystemOpener::new(config.browser.clone());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &mut opener, &deck_path);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "event loop failed");
    }
    result
}

/// Render the complete UI.
///
/// # Returns
/// * `Vec<(usize, Rect)>` - Screen areas of the drawn cards
fn render_ui(f: &mut ratatui::Frame, app: &App) -> Vec<(usize, Rect)> {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Route bar
        Constraint::Min(0),    // Cards
        Constraint::Length(1), // Status bar
    ])
    .split(f.area());

    ui::render_route(app, chunks[0], f.buffer_mut());
    let drawn = ui::render_cards(app, chunks[1], f.buffer_mut());
    ui::render_picker(app, chunks[1], f.buffer_mut());

    let status_text = app.status_message.as_deref().unwrap_or(HELP);
    f.render_widget(Paragraph::new(Line::from(status_text)), chunks[2]);

    drawn
}

/// Main event loop.
///
/// # Details
/// Handles keyboard and mouse events, updates state, and renders UI.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    opener: &mut dyn TabOpener,
    deck_path: &Path,
) -> anyhow::Result<()> {
    let mut drawn = Vec::new();

    loop {
        terminal.draw(|f| {
            drawn = render_ui(f, app);
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if !handle_key(key, app, opener, deck_path) {
                    break;
                }
            }
            Event::Mouse(mouse) => handle_mouse_event(mouse, app, opener, &drawn),
            _ => {}
        }
    }

    Ok(())
}

/// Handle a key press.
///
/// # Returns
/// * `bool` - False when the application should exit
fn handle_key(key: KeyEvent, app: &mut App, opener: &mut dyn TabOpener, deck_path: &Path) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    match app.mode {
        UiMode::Browse => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return false,
            KeyCode::Up | KeyCode::Char('k') => app.move_up(),
            KeyCode::Down | KeyCode::Char('j') => app.move_down(),
            KeyCode::Enter | KeyCode::Char(' ') => app.activate_selected(opener),
            KeyCode::Backspace => app.go_back(),
            KeyCode::Char('r') => reload_deck(app, deck_path),
            _ => {}
        },
        UiMode::Picking => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.picker_up(),
            KeyCode::Down | KeyCode::Char('j') => app.picker_down(),
            KeyCode::Enter | KeyCode::Char(' ') => app.pick_highlighted(),
            KeyCode::Esc | KeyCode::Char('q') => app.close_picker(),
            _ => {}
        },
    }

    true
}

/// Reload the deck file, recreating every card.
fn reload_deck(app: &mut App, deck_path: &Path) {
    match deck::load_deck(deck_path) {
        Ok(specs) => {
            app.set_cards(specs);
            app.set_status(format!("Reloaded {} cards", app.cards.len()));
        }
        Err(e) => {
            tracing::warn!(error = %e, "deck reload failed");
            app.set_status(format!("Reload failed: {}", e));
        }
    }
}

/// Handle mouse events (scroll and click).
///
/// # Details
/// Scrolling moves focus (or the picker highlight). A left click on a card
/// focuses it and performs its primary gesture.
fn handle_mouse_event(
    mouse: MouseEvent,
    app: &mut App,
    opener: &mut dyn TabOpener,
    drawn: &[(usize, Rect)],
) {
    match (mouse.kind, app.mode) {
        (MouseEventKind::ScrollUp, UiMode::Browse) => app.move_up(),
        (MouseEventKind::ScrollDown, UiMode::Browse) => app.move_down(),
        (MouseEventKind::ScrollUp, UiMode::Picking) => app.picker_up(),
        (MouseEventKind::ScrollDown, UiMode::Picking) => app.picker_down(),
        (MouseEventKind::Down(MouseButton::Left), UiMode::Browse) => {
            if let Some(idx) = ui::card_at(drawn, mouse.column, mouse.row) {
                app.selected_index = idx;
                app.activate_selected(opener);
            }
        }
        _ => {}
    }
}
