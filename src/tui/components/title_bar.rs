//! # TitleBar Component
//!
//! Top status bar: where you are, what just happened, and whether a search
//! is in flight.
//!
//! ## Conditional Formatting
//!
//! 1. **Loading**: `"Scout › Players | Searching... | ⟳"`
//! 2. **Status message**: `"Scout › Players | 25 players"`
//! 3. **Default**: `"Scout › Players"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status bar component.
///
/// # Props
///
/// - `screen_title`: Title of the visible screen (e.g., "Players", "Ada vs Ben")
/// - `status_message`: Transient status (e.g., "Saved Ada")
/// - `is_loading`: Whether a search request is in flight
pub struct TitleBar {
    pub screen_title: String,
    pub status_message: String,
    pub is_loading: bool,
}

impl TitleBar {
    pub fn new(screen_title: String, status_message: String, is_loading: bool) -> Self {
        Self {
            screen_title,
            status_message,
            is_loading,
        }
    }

    fn text(&self) -> String {
        let mut text = format!("Scout › {}", self.screen_title);
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        if self.is_loading {
            text.push_str(" | ⟳");
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.text()), area);
    }
}
