use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    Back,
    Submit,
    Up,
    Down,
    Left,
    Right,
    Search,
    Refresh,
    Save,
    Compare,
    OpenSaved,
    Delete,
    DeleteAll,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => map_key(key_event),
        Event::Resize(..) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Translate a key press into a `TuiEvent`. Releases and repeats are dropped.
pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Esc) => Some(TuiEvent::Back),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Up) => Some(TuiEvent::Up),
        (_, KeyCode::Down) => Some(TuiEvent::Down),
        (_, KeyCode::Left) => Some(TuiEvent::Left),
        (_, KeyCode::Right) => Some(TuiEvent::Right),
        (_, KeyCode::Char('/')) => Some(TuiEvent::Search),
        (_, KeyCode::Char('r')) => Some(TuiEvent::Refresh),
        (_, KeyCode::Char('s')) => Some(TuiEvent::Save),
        (_, KeyCode::Char('c')) => Some(TuiEvent::Compare),
        (_, KeyCode::Char('v')) => Some(TuiEvent::OpenSaved),
        (_, KeyCode::Char('d')) => Some(TuiEvent::Delete),
        (_, KeyCode::Char('D')) => Some(TuiEvent::DeleteAll),
        _ => None,
    }
}
