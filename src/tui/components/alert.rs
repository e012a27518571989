use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use super::centered_rect;
use crate::tui::component::Component;

/// Modal error box. Dismissed with Enter or Esc.
pub struct Alert<'a> {
    pub message: &'a str,
}

impl Component for Alert<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 30, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Error ")
            .title_bottom(Line::from(" Enter OK ").centered())
            .padding(Padding::horizontal(1));

        let paragraph = Paragraph::new(self.message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);

        frame.render_widget(paragraph, overlay);
    }
}
