//! # Player Table Component
//!
//! Scrollable table of players used by both the search results and the
//! saved players screens.
//!
//! Follows the persistent state + transient wrapper pattern: the selected
//! row lives in `TuiState`, `PlayerTable` is built each frame with borrowed
//! rows.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use unicode_width::UnicodeWidthChar;

use crate::api::Player;
use crate::api::types::display_attr;
use crate::tui::component::Component;

const NAME_WIDTH: usize = 26;

pub struct PlayerTable<'a> {
    pub title: String,
    pub players: Vec<&'a Player>,
    pub selected: usize,
    /// Id of the player marked for comparison, highlighted in the list.
    pub marked: Option<&'a str>,
    /// Shown instead of the table when there are no rows.
    pub empty_message: &'a str,
}

impl Component for PlayerTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.title));

        if self.players.is_empty() {
            let empty = Paragraph::new(self.empty_message)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let header = Row::new(["Name", "Age", "CA", "PA", "Pos", "Club"])
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

        let rows = self.players.iter().map(|p| {
            let marked = self.marked == Some(p.id.as_str());
            let name = if marked {
                format!("* {}", truncate_to_width(&p.name, NAME_WIDTH - 2))
            } else {
                truncate_to_width(&p.name, NAME_WIDTH)
            };
            let style = if marked {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            Row::new([
                Cell::from(name),
                Cell::from(display_attr(p.age)),
                Cell::from(display_attr(p.current_ability)),
                Cell::from(display_attr(p.potential_ability)),
                Cell::from(p.position_summary()),
                Cell::from(p.club.clone().unwrap_or_default()),
            ])
            .style(style)
        });

        let widths = [
            Constraint::Length(NAME_WIDTH as u16),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(12),
            Constraint::Min(10),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut state = TableState::default();
        state.select(Some(self.selected.min(self.players.len() - 1)));
        frame.render_stateful_widget(table, area, &mut state);
    }
}

/// Truncate to `max_width` display columns, adding "…" if needed.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_text, sample_player};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_truncate_short_name_unchanged() {
        assert_eq!(truncate_to_width("Ada", 10), "Ada");
    }

    #[test]
    fn test_truncate_long_name() {
        let out = truncate_to_width("Abcdefghijklmnop", 6);
        assert_eq!(out, "Abcde…");
    }

    #[test]
    fn test_truncate_counts_wide_chars() {
        // Each CJK char is two columns wide
        let out = truncate_to_width("山田太郎", 5);
        assert_eq!(out, "山田…");
    }

    #[test]
    fn test_renders_rows_and_marker() {
        let ada = sample_player("1", "Ada", 20, 120, 160);
        let ben = sample_player("2", "Ben", 22, 110, 140);
        let mut table = PlayerTable {
            title: "Players".to_string(),
            players: vec![&ada, &ben],
            selected: 1,
            marked: Some("1"),
            empty_message: "none",
        };

        let mut terminal = Terminal::new(TestBackend::new(80, 8)).unwrap();
        terminal.draw(|f| table.render(f, f.area())).unwrap();

        let text = buffer_text(terminal.backend());
        assert!(text.contains("* Ada"));
        assert!(text.contains("Ben"));
        assert!(text.contains("160"));
    }

    #[test]
    fn test_renders_empty_message() {
        let mut table = PlayerTable {
            title: "Saved players".to_string(),
            players: Vec::new(),
            selected: 0,
            marked: None,
            empty_message: "No saved players.",
        };

        let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
        terminal.draw(|f| table.render(f, f.area())).unwrap();

        assert!(buffer_text(terminal.backend()).contains("No saved players."));
    }
}
