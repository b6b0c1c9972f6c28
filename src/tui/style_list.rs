//! Search bar and style list for the active category.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::format::{badges, price_label, resolution_label};
use crate::models::StyleItem;

/// Main pane of the browse screen.
pub struct StyleList;

impl StyleList {
    /// Render the search bar above the list.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(area);

        Self::render_search_bar(f, chunks[0], state);
        Self::render_list(f, chunks[1], state);
    }

    fn render_search_bar(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let term = state.session.search();

        let (text, style) = if state.search_active {
            (format!("Search: {term}█"), Style::default().fg(theme.accent))
        } else if term.is_empty() {
            (
                "Search: (press / to search)".to_string(),
                Style::default().fg(theme.text_muted),
            )
        } else {
            (
                format!("Search: {term}  (Esc clears)"),
                Style::default().fg(theme.text),
            )
        };

        let border = if state.search_active {
            theme.accent
        } else {
            theme.primary
        };
        f.render_widget(
            Paragraph::new(text).style(style).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            ),
            area,
        );
    }

    fn render_list(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let session = &state.session;
        let visible = session.visible_items();

        let title = session.active_category().map_or_else(
            || " Styles ".to_string(),
            |category| format!(" {} ({}) ", category.cat_name, visible.len()),
        );
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary));

        if visible.is_empty() {
            let message = if session.active_category().is_none() {
                "No category selected".to_string()
            } else if session.search().is_empty() {
                "No styles in this category".to_string()
            } else {
                format!("No styles match '{}'", session.search())
            };
            f.render_widget(
                Paragraph::new(message)
                    .style(Style::default().fg(theme.text_muted))
                    .block(block),
                area,
            );
            return;
        }

        let name_width = usize::from(area.width.saturating_sub(26)).clamp(8, 40);
        let items: Vec<ListItem> = visible
            .iter()
            .map(|style| ListItem::new(Self::row(style, name_width, theme)))
            .collect();

        let mut list_state = ListState::default().with_selected(Some(session.selected_index()));
        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("► ");
        f.render_stateful_widget(list, area, &mut list_state);
    }

    /// One list row: name, price, resolution, badges.
    fn row(style: &StyleItem, name_width: usize, theme: &Theme) -> Line<'static> {
        let name: String = style.display_name().chars().take(name_width).collect();
        let price_color = if style.is_free() {
            theme.price_free
        } else {
            theme.price_paid
        };

        let mut spans = vec![
            Span::styled(
                format!("{name:<name_width$} "),
                Style::default().fg(theme.text),
            ),
            Span::styled(
                format!("{:>7} ", price_label(style.price)),
                Style::default().fg(price_color),
            ),
            Span::styled(
                format!("{:>6}", resolution_label(style.resolution.as_deref())),
                Style::default().fg(theme.text_secondary),
            ),
        ];
        for badge in badges(style) {
            let color = if badge == "GIF" {
                theme.badge_gif
            } else {
                theme.badge_ar
            };
            spans.push(Span::styled(
                format!(" [{badge}]"),
                Style::default().fg(color),
            ));
        }
        Line::from(spans)
    }
}
