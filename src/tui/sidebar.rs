//! Category list and device status panel.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::AppState;
use crate::catalog::CatalogState;

/// Left-hand sidebar.
pub struct Sidebar;

impl Sidebar {
    /// Render the category list above the device panel.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(6)])
            .split(area);

        Self::render_categories(f, chunks[0], state);
        Self::render_device_panel(f, chunks[1], state);
    }

    fn render_categories(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let session = &state.session;
        let categories = session.state().categories();
        let active = session.active_category_id();

        let items: Vec<ListItem> = categories
            .iter()
            .map(|category| {
                let style = if Some(category.id.as_str()) == active {
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(category.cat_name.clone(), style),
                    Span::styled(
                        format!(" ({})", category.style_count()),
                        Style::default().fg(theme.text_muted),
                    ),
                ]))
            })
            .collect();

        let block = Block::default()
            .title(" Categories ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary));

        if items.is_empty() {
            let placeholder = match session.state() {
                CatalogState::Loading => "Loading...",
                CatalogState::Failed(_) => "Unavailable",
                CatalogState::Loaded { .. } => "No categories",
            };
            f.render_widget(
                Paragraph::new(placeholder)
                    .style(Style::default().fg(theme.text_muted))
                    .block(block),
                area,
            );
            return;
        }

        let selected = active.and_then(|id| {
            session
                .state()
                .index()
                .and_then(|index| index.category_position(id))
        });
        let mut list_state = ListState::default().with_selected(selected);
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(theme.highlight_bg))
            .highlight_symbol("▶ ");
        f.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_device_panel(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let catalog = state.session.state();

        let status_color = match catalog {
            CatalogState::Loading => theme.warning,
            CatalogState::Loaded { .. } => theme.success,
            CatalogState::Failed(_) => theme.error,
        };
        let label = |text: &'static str| Span::styled(text, Style::default().fg(theme.text_secondary));

        let mut lines = vec![
            Line::from(vec![
                label("Code:   "),
                Span::styled(
                    state.device_code.as_deref().unwrap_or("(not set)").to_string(),
                    Style::default().fg(theme.text),
                ),
            ]),
            Line::from(vec![
                label("Status: "),
                Span::styled("● ", Style::default().fg(status_color)),
                Span::styled(catalog.status_label(), Style::default().fg(status_color)),
            ]),
        ];

        if let CatalogState::Loaded { index, fetched_at } = catalog {
            lines.push(Line::from(vec![
                label("Styles: "),
                Span::styled(
                    index.catalog().style_count().to_string(),
                    Style::default().fg(theme.text),
                ),
            ]));
            lines.push(Line::from(vec![
                label("Synced: "),
                Span::styled(
                    fetched_at.format("%H:%M:%S").to_string(),
                    Style::default().fg(theme.text_muted),
                ),
            ]));
        }

        let panel = Paragraph::new(lines).block(
            Block::default()
                .title(" Device ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        );
        f.render_widget(panel, area);
    }
}
