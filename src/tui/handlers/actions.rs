//! Action dispatch for the browse screen.

use anyhow::Result;
use tracing::debug;

use crate::catalog::CatalogState;
use crate::shortcuts::Action;
use crate::tui::{ActiveComponent, AppState, HelpOverlay, StyleDetails};

/// Dispatch an action to its handler.
///
/// Returns `Ok(true)` when the application should quit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    debug!(action = action.id(), "Dispatching action");

    match action {
        Action::Quit => {
            state.should_quit = true;
            return Ok(true);
        }
        Action::ToggleHelp => {
            state.active_component = Some(ActiveComponent::Help(HelpOverlay::new()));
        }
        Action::Retry => handle_retry(state),
        _ if state.session.state().index().is_none() => {
            // Catalog-dependent actions are inert until a catalog is loaded
        }
        Action::NextCategory => state.session.next_category(),
        Action::PreviousCategory => state.session.previous_category(),
        Action::NavigateUp => state.session.select_previous(),
        Action::NavigateDown => state.session.select_next(),
        Action::JumpToFirst => state.session.select_first(),
        Action::JumpToLast => state.session.select_last(),
        Action::OpenDetails => {
            if state.session.open_details() {
                state.active_component = Some(ActiveComponent::StyleDetails(StyleDetails::new()));
            }
        }
        Action::StartSearch => state.search_active = true,
        Action::ClearSearch => {
            if !state.session.search().is_empty() {
                state.session.clear_search();
                state.set_status("Search cleared");
            }
        }
    }

    Ok(false)
}

/// Requests a re-fetch, but only after a retryable failure.
fn handle_retry(state: &mut AppState) {
    let retryable = match state.session.state() {
        CatalogState::Failed(err) => Some(err.is_retryable()),
        _ => None,
    };

    match retryable {
        Some(true) => {
            state.reload_requested = true;
            state.set_status("Reconnecting...");
        }
        Some(false) => {
            state.set_status("This failure is not retryable; fix the configuration and restart");
        }
        None => {}
    }
}
