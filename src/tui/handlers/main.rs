//! Browse screen and search bar input.

use anyhow::Result;
use crossterm::event::{self, KeyCode, KeyModifiers};

use crate::tui::AppState;

/// Handle input on the browse screen.
///
/// Returns `Ok(true)` when the user asked to quit.
pub fn handle_main_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if state.search_active {
        return handle_search_input(state, key);
    }

    match state.shortcuts.lookup(key) {
        Some(action) => super::dispatch_action(state, action),
        None => Ok(false),
    }
}

/// Handle input while the search bar has focus.
///
/// Arrow keys still move the highlight so results can be browsed while typing.
pub fn handle_search_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.should_quit = true;
            return Ok(true);
        }
        KeyCode::Esc | KeyCode::Enter => state.search_active = false,
        KeyCode::Backspace => state.session.pop_search(),
        KeyCode::Up => state.session.select_previous(),
        KeyCode::Down => state.session.select_next(),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            state.session.push_search(ch);
        }
        _ => {}
    }
    Ok(false)
}
