//! Component trait pattern for TUI components.
//!
//! Overlays own their local state (scroll position), handle their own keys
//! and report back to `AppState` through a small event type.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::tui::Theme;

/// A self-contained overlay that can be rendered and handle input.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the parent needs to act.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component within `area`.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Component that reads shared data it does not own.
///
/// The detail view borrows the style it shows from the catalog rather than
/// copying it.
pub trait ContextualComponent {
    /// The type of context this component needs
    type Context: ?Sized;

    /// Event type this component can emit
    type Event;

    /// Handle keyboard input with access to shared context.
    fn handle_input(&mut self, key: KeyEvent, context: &Self::Context) -> Option<Self::Event>;

    /// Render the component with access to shared context.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, context: &Self::Context);
}

/// Events emitted by overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentEvent {
    /// Overlay dismissed
    Closed,
}
