//! Keyboard shortcut registry for the browse screen.
//!
//! Maps key events to [`Action`]s so the handlers and the help overlay agree
//! on one set of bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Every action reachable from the browse screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === CATEGORIES ===
    /// Activate the next category
    NextCategory,
    /// Activate the previous category
    PreviousCategory,

    // === STYLE LIST ===
    /// Highlight the previous style
    NavigateUp,
    /// Highlight the next style
    NavigateDown,
    /// Highlight the first style
    JumpToFirst,
    /// Highlight the last style
    JumpToLast,
    /// Open the detail overlay
    OpenDetails,

    // === SEARCH ===
    /// Focus the search bar
    StartSearch,
    /// Clear the search term
    ClearSearch,

    // === GENERAL ===
    /// Re-fetch after a retryable failure
    Retry,
    /// Toggle the help overlay
    ToggleHelp,
    /// Leave the application
    Quit,
}

impl Action {
    /// Stable identifier used in logs.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::NextCategory => "next_category",
            Self::PreviousCategory => "previous_category",
            Self::NavigateUp => "navigate_up",
            Self::NavigateDown => "navigate_down",
            Self::JumpToFirst => "jump_first",
            Self::JumpToLast => "jump_last",
            Self::OpenDetails => "open_details",
            Self::StartSearch => "start_search",
            Self::ClearSearch => "clear_search",
            Self::Retry => "retry",
            Self::ToggleHelp => "toggle_help",
            Self::Quit => "quit",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifier state
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a key event.
    ///
    /// Shift is dropped for characters since the character already encodes it
    /// and terminals disagree on reporting it ('?' arrives with or without).
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Self {
        let modifiers = match event.code {
            KeyCode::Char(_) | KeyCode::BackTab => event.modifiers.difference(KeyModifiers::SHIFT),
            _ => event.modifiers,
        };
        Self {
            code: event.code,
            modifiers,
        }
    }
}

/// Shortcut registry mapping key bindings to actions.
pub struct ShortcutRegistry {
    bindings: HashMap<KeyBinding, Action>,
}

impl ShortcutRegistry {
    /// Create a registry with the default bindings.
    #[must_use]
    pub fn new() -> Self {
        use KeyCode as K;
        use KeyModifiers as M;

        let mut registry = Self {
            bindings: HashMap::new(),
        };

        // === CATEGORIES ===
        registry.register(K::Tab, M::NONE, Action::NextCategory);
        registry.register(K::Char(']'), M::NONE, Action::NextCategory);
        registry.register(K::BackTab, M::NONE, Action::PreviousCategory);
        registry.register(K::Char('['), M::NONE, Action::PreviousCategory);

        // === STYLE LIST ===
        registry.register(K::Up, M::NONE, Action::NavigateUp);
        registry.register(K::Char('k'), M::NONE, Action::NavigateUp);
        registry.register(K::Down, M::NONE, Action::NavigateDown);
        registry.register(K::Char('j'), M::NONE, Action::NavigateDown);
        registry.register(K::Home, M::NONE, Action::JumpToFirst);
        registry.register(K::End, M::NONE, Action::JumpToLast);
        registry.register(K::Enter, M::NONE, Action::OpenDetails);

        // === SEARCH ===
        registry.register(K::Char('/'), M::NONE, Action::StartSearch);
        registry.register(K::Esc, M::NONE, Action::ClearSearch);

        // === GENERAL ===
        registry.register(K::Char('r'), M::NONE, Action::Retry);
        registry.register(K::Char('?'), M::NONE, Action::ToggleHelp);
        registry.register(K::Char('q'), M::NONE, Action::Quit);
        registry.register(K::Char('c'), M::CONTROL, Action::Quit);

        registry
    }

    fn register(&mut self, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        self.bindings
            .insert(KeyBinding::new(code, modifiers), action);
    }

    /// Look up the action bound to a key event.
    #[must_use]
    pub fn lookup(&self, event: KeyEvent) -> Option<Action> {
        self.bindings.get(&KeyBinding::from_event(event)).copied()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
