//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: Top status bar showing the screen title and status
//! - `PlayerCard` / `Comparison`: One player, or two side by side
//! - `Alert`: Modal error box
//!
//! ### Stateful Components
//!
//! - `PlayerTable`: Player list; the selected row is kept in `TuiState`
//! - `SearchForm`: Filter editor; the focused field is kept in `TuiState`
//!   and the parameters themselves live on the modal screen
//!
//! Components receive external data as props, not by reaching into `App`.
//! This makes dependencies explicit and components testable with
//! ratatui's `TestBackend`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── player_table.rs  (Results and saved players)
//! ├── player_card.rs   (Detail and comparison)
//! ├── search_form.rs   (Filter modal)
//! └── alert.rs         (Error modal)
//! ```

use ratatui::layout::{Constraint, Layout, Rect};

mod alert;
mod player_card;
mod player_table;
mod search_form;
mod title_bar;

pub use alert::Alert;
pub use player_card::{Comparison, PlayerCard};
pub use player_table::PlayerTable;
pub use search_form::SearchForm;
pub use title_bar::TitleBar;

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
