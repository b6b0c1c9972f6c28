//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and the browse screen widgets built on Ratatui.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod component;
pub mod handlers;
pub mod help_overlay;
pub mod sidebar;
pub mod status_bar;
pub mod style_details;
pub mod style_list;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::info;

use crate::app::CatalogLoader;
use crate::catalog::{BrowseSession, CatalogState};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::DeviceConfigResponse;
use crate::provider::FetchError;
use crate::shortcuts::ShortcutRegistry;

use component::{Component, ContextualComponent};
pub use help_overlay::HelpOverlay;
use sidebar::Sidebar;
use status_bar::StatusBar;
pub use style_details::StyleDetails;
use style_list::StyleList;
pub use theme::Theme;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Overlay currently drawn above the browse screen.
#[derive(Debug, Clone)]
pub enum ActiveComponent {
    /// Keyboard shortcut reference
    Help(HelpOverlay),
    /// Details of the style opened in the session
    StyleDetails(StyleDetails),
}

/// Application state for one interactive session.
pub struct AppState {
    /// Catalog, selection and search
    pub session: BrowseSession,
    /// Loaded configuration
    pub config: Config,
    /// Active color theme
    pub theme: Theme,
    /// Device code shown in the status panel
    pub device_code: Option<String>,
    /// Key bindings for the browse screen
    pub shortcuts: ShortcutRegistry,
    /// Search bar has keyboard focus
    pub search_active: bool,
    /// Open overlay, if any
    pub active_component: Option<ActiveComponent>,
    /// Transient status line text
    pub status_message: String,
    /// Quit requested
    pub should_quit: bool,
    /// Re-fetch requested; consumed by the run loop
    pub reload_requested: bool,
    /// Frame counter driving the loading spinner
    pub tick: usize,
}

impl AppState {
    /// Creates the state for a session whose first fetch is about to start.
    #[must_use]
    pub fn new(config: Config, device_code: Option<String>) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        let active_component = config
            .ui
            .show_help_on_startup
            .then(|| ActiveComponent::Help(HelpOverlay::new()));

        Self {
            session: BrowseSession::new(),
            config,
            theme,
            device_code,
            shortcuts: ShortcutRegistry::new(),
            search_active: false,
            active_component,
            status_message: String::new(),
            should_quit: false,
            reload_requested: false,
            tick: 0,
        }
    }

    /// Installs a finished fetch.
    pub fn apply_fetch_result(&mut self, result: Result<DeviceConfigResponse, FetchError>) {
        match &result {
            Ok(catalog) => {
                info!(
                    categories = catalog.uistyle.len(),
                    styles = catalog.style_count(),
                    "Catalog loaded"
                );
                self.set_status(format!(
                    "Loaded {} styles in {} categories",
                    catalog.style_count(),
                    catalog.uistyle.len()
                ));
            }
            Err(err) => self.set_status(format!("{}: {}", err.kind(), err.message())),
        }
        self.search_active = false;
        if matches!(self.active_component, Some(ActiveComponent::StyleDetails(_))) {
            self.active_component = None;
        }
        self.session.apply_result(result);
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Closes the open overlay.
    pub fn close_component(&mut self) {
        if matches!(self.active_component, Some(ActiveComponent::StyleDetails(_))) {
            self.session.close_details();
        }
        self.active_component = None;
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui<B: Backend>(
    state: &mut AppState,
    loader: &mut CatalogLoader,
    terminal: &mut Terminal<B>,
) -> Result<()> {
    loop {
        // Pick up a finished fetch
        if let Some(result) = loader.poll() {
            state.apply_fetch_result(result);
        }

        if state.reload_requested {
            state.reload_requested = false;
            state.session.begin_loading();
            loader.start();
        }

        state.tick = state.tick.wrapping_add(1);
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key_event(state, key)? {
                    break;
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    loader.cancel();
    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(8),    // Sidebar + main pane
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(30)])
        .split(chunks[1]);

    Sidebar::render(f, body[0], state);
    match state.session.state() {
        CatalogState::Loading => render_loading(f, body[1], state),
        CatalogState::Failed(err) => render_failure(f, body[1], err, &state.theme),
        CatalogState::Loaded { .. } => StyleList::render(f, body[1], state),
    }

    StatusBar::render(f, chunks[2], state, &state.theme);

    let area = f.area();
    match &state.active_component {
        Some(ActiveComponent::Help(help)) => help.render(f, area, &state.theme),
        Some(ActiveComponent::StyleDetails(details)) => {
            if let Some(style) = state.session.detail_item() {
                details.render(f, area, &state.theme, style);
            }
        }
        None => {}
    }
}

/// Render title bar with the active category
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::styled(
        format!(" {APP_NAME}"),
        Style::default()
            .fg(state.theme.primary)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(category) = state.session.active_category() {
        spans.push(Span::styled(
            format!("  {}", category.cat_name),
            Style::default().fg(state.theme.text),
        ));
    }

    let title = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(state.theme.primary)),
    );
    f.render_widget(title, area);
}

/// Loading screen shown while the fetch is in flight
fn render_loading(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let spinner = SPINNER_FRAMES[state.tick % SPINNER_FRAMES.len()];
    let device = state.device_code.as_deref().unwrap_or("device");

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{spinner} Connecting to bridge..."),
            Style::default()
                .fg(theme.warning)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Fetching catalog for {device}"),
            Style::default().fg(theme.text_muted),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary)),
    );
    f.render_widget(paragraph, area);
}

/// Error panel shown after a failed fetch
fn render_failure(f: &mut Frame, area: Rect, err: &FetchError, theme: &Theme) {
    let hint = if err.is_retryable() {
        Line::from(vec![
            Span::raw("Press "),
            Span::styled(
                "r",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" to retry"),
        ])
    } else {
        Line::from(Span::styled(
            "Check the bridge settings (styledeck config show) and restart",
            Style::default().fg(theme.text_muted),
        ))
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            err.kind().label(),
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            err.message().to_string(),
            Style::default().fg(theme.text),
        )),
        Line::from(""),
        hint,
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Connection failed ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.error)),
        );
    f.render_widget(paragraph, area);
}

/// Helper function to create centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events
fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if state.active_component.is_some() {
        return handlers::handle_popup_input(state, key);
    }

    handlers::handle_main_input(state, key)
}
