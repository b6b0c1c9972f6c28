//! Detail overlay for the highlighted style.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::component::{ComponentEvent, ContextualComponent};
use super::Theme;
use crate::format::{
    badges, configuration_rows, detail_title, layer_counts, price_label, resolution_label,
    DetailValue,
};
use crate::models::StyleItem;

/// Detail overlay. The shown style is passed in as context on each call.
#[derive(Debug, Clone, Default)]
pub struct StyleDetails {
    scroll_offset: u16,
}

impl StyleDetails {
    /// Creates the overlay scrolled to the top.
    #[must_use]
    pub const fn new() -> Self {
        Self { scroll_offset: 0 }
    }

    fn label(text: &str, theme: &Theme) -> Span<'static> {
        Span::styled(
            format!("  {text:<16}"),
            Style::default().fg(theme.text_secondary),
        )
    }

    fn section(text: &'static str, theme: &Theme) -> Line<'static> {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn lines(style: &StyleItem, theme: &Theme) -> Vec<Line<'static>> {
        let mut header = vec![Span::styled(
            detail_title(style).to_string(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )];
        for badge in badges(style) {
            let color = if badge == "GIF" {
                theme.badge_gif
            } else {
                theme.badge_ar
            };
            header.push(Span::raw(" "));
            header.push(Span::styled(
                format!("[{badge}]"),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
        }

        let price_color = if style.is_free() {
            theme.price_free
        } else {
            theme.price_paid
        };

        let mut lines = vec![
            Line::from(header),
            Line::from(Span::styled(
                format!("ID: {}", style.id),
                Style::default().fg(theme.text_muted),
            )),
            Line::from(""),
            Line::from(vec![
                Self::label("Price", theme),
                Span::styled(price_label(style.price), Style::default().fg(price_color)),
            ]),
            Line::from(vec![
                Self::label("Resolution", theme),
                Span::styled(
                    resolution_label(style.resolution.as_deref()),
                    Style::default().fg(theme.text),
                ),
            ]),
            Line::from(""),
            Self::section("Configuration", theme),
        ];

        for (label, value) in configuration_rows(style) {
            let value_span = match value {
                DetailValue::Flag(true) => Span::styled("✓", Style::default().fg(theme.success)),
                DetailValue::Flag(false) => Span::styled("✗", Style::default().fg(theme.error)),
                DetailValue::Text(text) => Span::styled(text, Style::default().fg(theme.text)),
            };
            lines.push(Line::from(vec![Self::label(label, theme), value_span]));
        }

        lines.push(Line::from(""));
        lines.push(Self::section("Layers", theme));
        for (label, count) in layer_counts(style) {
            lines.push(Line::from(vec![
                Self::label(label, theme),
                Span::styled(count.to_string(), Style::default().fg(theme.text)),
            ]));
        }

        if !style.img_preview.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Self::label("Preview", theme),
                Span::styled(
                    style.img_preview.clone(),
                    Style::default().fg(theme.text_muted),
                ),
            ]));
        }

        lines
    }
}

impl ContextualComponent for StyleDetails {
    type Context = StyleItem;
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent, _style: &StyleItem) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(ComponentEvent::Closed),
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, style: &StyleItem) {
        let modal_area = super::centered_rect(60, 75, area);
        f.render_widget(Clear, modal_area);

        let paragraph = Paragraph::new(Self::lines(style, theme))
            .block(
                Block::default()
                    .title(" Style Details ")
                    .title_bottom(Line::from(" Esc close ").alignment(Alignment::Right))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset, 0));
        f.render_widget(paragraph, modal_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn gif_style() -> StyleItem {
        StyleItem {
            id: "gif_0".to_string(),
            style_name: Some("Motion 1".to_string()),
            is_gif: 1,
            price: Some(0),
            free_print_count: 2,
            regeneration_num: 3,
            ..StyleItem::default()
        }
    }

    fn rendered_text(style: &StyleItem) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let details = StyleDetails::new();
        terminal
            .draw(|f| {
                let area = f.area();
                details.render(f, area, &Theme::dark(), style);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_renders_configuration() {
        let text = rendered_text(&gif_style());
        assert!(text.contains("Motion 1"));
        assert!(text.contains("[GIF]"));
        assert!(text.contains("FREE"));
        assert!(text.contains("2 prints"));
        assert!(text.contains("3 times"));
        assert!(text.contains("Keep BG Image"));
    }

    #[test]
    fn test_untitled_style() {
        let style = StyleItem {
            id: "x".to_string(),
            ..StyleItem::default()
        };
        assert!(rendered_text(&style).contains("Untitled Style"));
    }

    #[test]
    fn test_close_and_scroll() {
        let style = gif_style();
        let mut details = StyleDetails::new();
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(details.handle_input(key(KeyCode::Down), &style), None);
        assert_eq!(details.scroll_offset, 1);
        assert_eq!(
            details.handle_input(key(KeyCode::Esc), &style),
            Some(ComponentEvent::Closed)
        );
    }
}
