//! Status bar widget for status messages and contextual key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::catalog::CatalogState;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status line above the key hints.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let status_line = if state.status_message.is_empty() {
            Line::from(Span::styled(
                state.session.state().status_label(),
                Style::default().fg(theme.text_muted),
            ))
        } else {
            Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(theme.text),
            ))
        };

        let paragraph = Paragraph::new(vec![status_line, Self::hints_line(state, theme)])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            );
        f.render_widget(paragraph, area);
    }

    /// Key hints for the current mode.
    fn hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hints: &[(&str, &str)] = if state.active_component.is_some() {
            &[("Esc", "Close"), ("↑↓", "Scroll")]
        } else if state.search_active {
            &[("Type", "Filter"), ("Backspace", "Delete"), ("Enter/Esc", "Done")]
        } else {
            match state.session.state() {
                CatalogState::Loading => &[("q", "Quit")],
                CatalogState::Failed(err) if err.is_retryable() => {
                    &[("r", "Retry"), ("?", "Help"), ("q", "Quit")]
                }
                CatalogState::Failed(_) => &[("?", "Help"), ("q", "Quit")],
                CatalogState::Loaded { .. } => &[
                    ("Tab", "Category"),
                    ("↑↓", "Move"),
                    ("/", "Search"),
                    ("Enter", "Details"),
                    ("?", "Help"),
                    ("q", "Quit"),
                ],
            }
        };

        let mut spans = Vec::with_capacity(hints.len() * 3);
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" • ", Style::default().fg(theme.text_muted)));
            }
            spans.push(Span::styled(
                (*key).to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {action}"),
                Style::default().fg(theme.text_secondary),
            ));
        }
        Line::from(spans)
    }
}
