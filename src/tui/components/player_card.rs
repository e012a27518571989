//! Player detail and side-by-side comparison views.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::api::Player;
use crate::api::types::display_attr;
use crate::tui::component::Component;

fn attribute_rows(player: &Player) -> Vec<(&'static str, String)> {
    vec![
        ("Age", display_attr(player.age)),
        ("Current ability", display_attr(player.current_ability)),
        ("Potential ability", display_attr(player.potential_ability)),
        ("Positions", player.position_summary()),
        ("Club", player.club.clone().unwrap_or_else(|| "-".to_string())),
        (
            "Nationality",
            player.nationality.clone().unwrap_or_else(|| "-".to_string()),
        ),
    ]
}

pub struct PlayerCard<'a> {
    pub player: &'a Player,
    pub is_saved: bool,
}

impl Component for PlayerCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let label_style = Style::default().fg(Color::DarkGray);
        let mut lines: Vec<Line> = attribute_rows(self.player)
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{label:<20}"), label_style),
                    Span::raw(value),
                ])
            })
            .collect();

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            if self.is_saved { "★ Saved" } else { "s to save" },
            Style::default().fg(Color::Yellow),
        )));

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.player.name))
            .title_style(Style::default().add_modifier(Modifier::BOLD));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Which side of a comparison row is ahead, for numeric attributes.
#[derive(Debug, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Even,
}

/// Higher is better for both ability ratings; younger is "better" for age.
pub fn edge(label: &str, left: Option<u16>, right: Option<u16>) -> Edge {
    match (left, right) {
        (Some(l), Some(r)) if l == r => Edge::Even,
        (Some(l), Some(r)) => {
            let left_ahead = if label == "Age" { l < r } else { l > r };
            if left_ahead { Edge::Left } else { Edge::Right }
        }
        _ => Edge::Even,
    }
}

pub struct Comparison<'a> {
    pub left: &'a Player,
    pub right: &'a Player,
}

impl Component for Comparison<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let ahead = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
        let numeric = [
            ("Age", self.left.age, self.right.age),
            (
                "Current ability",
                self.left.current_ability,
                self.right.current_ability,
            ),
            (
                "Potential ability",
                self.left.potential_ability,
                self.right.potential_ability,
            ),
        ];

        let mut rows: Vec<Row> = numeric
            .iter()
            .map(|(label, l, r)| {
                let (ls, rs) = match edge(label, *l, *r) {
                    Edge::Left => (ahead, Style::default()),
                    Edge::Right => (Style::default(), ahead),
                    Edge::Even => (Style::default(), Style::default()),
                };
                Row::new(vec![
                    Span::raw(*label),
                    Span::styled(display_attr(*l), ls),
                    Span::styled(display_attr(*r), rs),
                ])
            })
            .collect();

        rows.push(Row::new(vec![
            "Positions".to_string(),
            self.left.position_summary(),
            self.right.position_summary(),
        ]));
        rows.push(Row::new(vec![
            "Club".to_string(),
            self.left.club.clone().unwrap_or_default(),
            self.right.club.clone().unwrap_or_default(),
        ]));

        let header = Row::new(vec![
            String::new(),
            self.left.name.clone(),
            self.right.name.clone(),
        ])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

        let table = Table::new(
            rows,
            [
                Constraint::Length(20),
                Constraint::Percentage(40),
                Constraint::Percentage(40),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(" Comparison "));

        frame.render_widget(table, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_text, sample_player};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_edge_prefers_higher_ability() {
        assert_eq!(edge("Current ability", Some(140), Some(120)), Edge::Left);
        assert_eq!(edge("Potential ability", Some(140), Some(170)), Edge::Right);
        assert_eq!(edge("Current ability", Some(100), Some(100)), Edge::Even);
    }

    #[test]
    fn test_edge_prefers_younger() {
        assert_eq!(edge("Age", Some(19), Some(27)), Edge::Left);
    }

    #[test]
    fn test_edge_unknown_is_even() {
        assert_eq!(edge("Age", None, Some(27)), Edge::Even);
    }

    #[test]
    fn test_card_shows_attributes() {
        let ada = sample_player("1", "Ada", 20, 120, 160);
        let mut card = PlayerCard {
            player: &ada,
            is_saved: true,
        };
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|f| card.render(f, f.area())).unwrap();

        let text = buffer_text(terminal.backend());
        assert!(text.contains("Ada"));
        assert!(text.contains("Test FC"));
        assert!(text.contains("Saved"));
    }

    #[test]
    fn test_comparison_shows_both_names() {
        let ada = sample_player("1", "Ada", 20, 120, 160);
        let ben = sample_player("2", "Ben", 22, 110, 140);
        let mut view = Comparison {
            left: &ada,
            right: &ben,
        };
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal.draw(|f| view.render(f, f.area())).unwrap();

        let text = buffer_text(terminal.backend());
        assert!(text.contains("Ada"));
        assert!(text.contains("Ben"));
        assert!(text.contains("Potential ability"));
    }
}
