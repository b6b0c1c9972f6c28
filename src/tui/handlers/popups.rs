//! Overlay input routing.

use anyhow::Result;
use crossterm::event;

use crate::tui::component::{Component, ComponentEvent, ContextualComponent};
use crate::tui::{ActiveComponent, AppState};

/// Handle input while an overlay is open.
pub fn handle_popup_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let Some(component) = state.active_component.as_mut() else {
        return Ok(false);
    };

    let event = match component {
        ActiveComponent::Help(help) => help.handle_input(key),
        ActiveComponent::StyleDetails(details) => match state.session.detail_item() {
            Some(style) => details.handle_input(key, style),
            None => Some(ComponentEvent::Closed),
        },
    };

    if event == Some(ComponentEvent::Closed) {
        state.close_component();
    }

    Ok(false)
}
