//! # Search Form Component
//!
//! Modal overlay for editing the search filters. ↑/↓ pick a field, ←/→
//! change it, Enter searches, Esc cancels.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use super::centered_rect;
use crate::api::{SearchField, SearchParameters};
use crate::tui::component::Component;

pub struct SearchForm<'a> {
    pub params: &'a SearchParameters,
    /// Index into `SearchField::ALL`.
    pub focused: usize,
}

impl Component for SearchForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 60, area);
        frame.render_widget(Clear, overlay);

        let lines: Vec<Line> = SearchField::ALL
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let style = if i == self.focused {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                Line::from(vec![
                    Span::styled(format!("{:<24}", field.label()), style),
                    Span::styled(format!("‹ {} ›", self.params.value_of(*field)), style),
                ])
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Search ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" ↑↓ Field  ←→ Change  Enter Search  Esc Cancel ").centered())
            .padding(Padding::uniform(1));

        frame.render_widget(Paragraph::new(lines).block(block), overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_form_lists_every_field() {
        let params = SearchParameters {
            age_range: 18..=30,
            ..Default::default()
        };
        let mut form = SearchForm {
            params: &params,
            focused: 0,
        };
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| form.render(f, f.area())).unwrap();

        let text = buffer_text(terminal.backend());
        for field in SearchField::ALL {
            assert!(text.contains(field.label()), "missing {}", field.label());
        }
        assert!(text.contains("‹ 18 ›"));
        assert!(text.contains("‹ 30 ›"));
    }
}
