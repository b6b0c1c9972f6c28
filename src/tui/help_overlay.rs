//! Scrollable help overlay listing keyboard shortcuts, opened with '?'.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::Theme;

/// Shortcut sections: (heading, [(keys, description)]).
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "CATEGORIES",
        &[
            ("Tab / ]", "Next category"),
            ("Shift+Tab / [", "Previous category"),
        ],
    ),
    (
        "STYLES",
        &[
            ("↑ / k", "Move up"),
            ("↓ / j", "Move down"),
            ("Home / End", "First / last style"),
            ("Enter", "Open style details"),
        ],
    ),
    (
        "SEARCH",
        &[
            ("/", "Start typing a search term"),
            ("Backspace", "Delete last character"),
            ("Enter / Esc", "Stop editing (Esc on an idle bar clears it)"),
        ],
    ),
    (
        "GENERAL",
        &[
            ("r", "Retry after a connection failure"),
            ("?", "Toggle this help"),
            ("Esc", "Close overlay"),
            ("q / Ctrl+C", "Quit"),
        ],
    ),
];

/// Help overlay with its own scroll position.
#[derive(Debug, Clone, Default)]
pub struct HelpOverlay {
    scroll_offset: usize,
}

impl HelpOverlay {
    /// Creates an overlay scrolled to the top.
    #[must_use]
    pub const fn new() -> Self {
        Self { scroll_offset: 0 }
    }

    /// Current scroll offset in lines.
    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn total_lines() -> usize {
        // heading + blank per section, plus the rows
        SECTIONS
            .iter()
            .map(|(_, rows)| rows.len() + 2)
            .sum()
    }

    const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < Self::total_lines() {
            self.scroll_offset += 1;
        }
    }

    fn content(theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(Self::total_lines());
        for (heading, rows) in SECTIONS {
            lines.push(Line::from(Span::styled(
                format!("═══ {heading} ═══"),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )));
            for (keys, description) in *rows {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {keys:<16}"), Style::default().fg(theme.success)),
                    Span::styled(*description, Style::default().fg(theme.text)),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines
    }
}

impl Component for HelpOverlay {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') => return Some(ComponentEvent::Closed),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::Home => self.scroll_offset = 0,
            KeyCode::End => self.scroll_offset = Self::total_lines().saturating_sub(1),
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let modal_area = super::centered_rect(60, 70, area);
        f.render_widget(Clear, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);

        let visible_height = chunks[0].height.saturating_sub(2) as usize;
        let paragraph = Paragraph::new(Self::content(theme))
            .block(
                Block::default()
                    .title(" Help - Keyboard Shortcuts ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            )
            .style(Style::default().fg(theme.text))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0));
        f.render_widget(paragraph, chunks[0]);

        let mut scrollbar_state =
            ScrollbarState::new(Self::total_lines().saturating_sub(visible_height))
                .position(self.scroll_offset);
        f.render_stateful_widget(
            Scrollbar::default()
                .orientation(ScrollbarOrientation::VerticalRight)
                .style(Style::default().fg(theme.primary)),
            chunks[1],
            &mut scrollbar_state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_scroll_bounds() {
        let mut help = HelpOverlay::new();
        help.handle_input(key(KeyCode::Up));
        assert_eq!(help.scroll_offset(), 0);

        help.handle_input(key(KeyCode::Down));
        assert_eq!(help.scroll_offset(), 1);

        help.handle_input(key(KeyCode::End));
        let last = help.scroll_offset();
        help.handle_input(key(KeyCode::Down));
        assert_eq!(help.scroll_offset(), last);
    }

    #[test]
    fn test_close_keys() {
        let mut help = HelpOverlay::new();
        assert_eq!(
            help.handle_input(key(KeyCode::Esc)),
            Some(ComponentEvent::Closed)
        );
        assert_eq!(
            help.handle_input(key(KeyCode::Char('?'))),
            Some(ComponentEvent::Closed)
        );
        assert_eq!(help.handle_input(key(KeyCode::Char('x'))), None);
    }
}
