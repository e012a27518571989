//! The navigation context: a stack of pushed screens plus at most one
//! modal on top.
//!
//! Every screen remembers which coordinator put it there. When a screen
//! leaves the context, the caller hands it to
//! [`CoordinatorTree::screen_did_disappear`](super::CoordinatorTree::screen_did_disappear)
//! so its owner can finish.

use log::{debug, warn};

use super::tree::CoordinatorId;
use crate::api::{Player, SearchParameters};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenId(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenKind {
    /// Search results.
    PlayerList,
    /// Filter form; the parameters are edited in place.
    SearchForm(SearchParameters),
    PlayerDetail(Player),
    Comparison(Player, Player),
    SavedPlayers,
    Alert(String),
}

impl ScreenKind {
    pub fn title(&self) -> String {
        match self {
            ScreenKind::PlayerList => "Players".to_string(),
            ScreenKind::SearchForm(_) => "Search".to_string(),
            ScreenKind::PlayerDetail(p) => p.name.clone(),
            ScreenKind::Comparison(a, b) => format!("{} vs {}", a.name, b.name),
            ScreenKind::SavedPlayers => "Saved players".to_string(),
            ScreenKind::Alert(_) => "Error".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub id: ScreenId,
    pub owner: CoordinatorId,
    pub kind: ScreenKind,
}

#[derive(Debug, Default)]
pub struct NavigationContext {
    stack: Vec<Screen>,
    modal: Option<Screen>,
    next_id: u64,
}

impl NavigationContext {
    pub fn new() -> Self {
        Self::default()
    }

    fn make_screen(&mut self, owner: CoordinatorId, kind: ScreenKind) -> Screen {
        self.next_id += 1;
        Screen {
            id: ScreenId(self.next_id),
            owner,
            kind,
        }
    }

    pub fn push(&mut self, owner: CoordinatorId, kind: ScreenKind) -> ScreenId {
        let screen = self.make_screen(owner, kind);
        let id = screen.id;
        debug!("Push {:?} ({:?})", screen.kind.title(), id);
        self.stack.push(screen);
        id
    }

    /// Removes the top pushed screen. The bottom screen is never popped.
    pub fn pop(&mut self) -> Option<Screen> {
        if self.stack.len() <= 1 {
            debug!("Pop ignored: already at root screen");
            return None;
        }
        let screen = self.stack.pop();
        if let Some(ref s) = screen {
            debug!("Pop {:?} ({:?})", s.kind.title(), s.id);
        }
        screen
    }

    /// Presents `kind` modally. Returns None (and changes nothing) if a
    /// modal is already up.
    pub fn present_modal(
        &mut self,
        owner: CoordinatorId,
        kind: ScreenKind,
        animated: bool,
    ) -> Option<ScreenId> {
        if let Some(ref current) = self.modal {
            warn!(
                "Cannot present {:?}: {:?} is already presented",
                kind.title(),
                current.kind.title()
            );
            return None;
        }
        let screen = self.make_screen(owner, kind);
        let id = screen.id;
        debug!("Present {:?} ({:?}, animated={})", screen.kind.title(), id, animated);
        self.modal = Some(screen);
        Some(id)
    }

    pub fn dismiss_modal(&mut self, animated: bool) -> Option<Screen> {
        let screen = self.modal.take();
        if let Some(ref s) = screen {
            debug!("Dismiss {:?} ({:?}, animated={})", s.kind.title(), s.id, animated);
        }
        screen
    }

    /// The screen receiving input: the modal if any, else the top of the stack.
    pub fn top(&self) -> Option<&Screen> {
        self.modal.as_ref().or_else(|| self.stack.last())
    }

    pub fn top_mut(&mut self) -> Option<&mut Screen> {
        self.modal.as_mut().or_else(|| self.stack.last_mut())
    }

    /// Top of the pushed stack, ignoring any modal.
    pub fn top_pushed(&self) -> Option<&Screen> {
        self.stack.last()
    }

    pub fn modal(&self) -> Option<&Screen> {
        self.modal.as_ref()
    }

    pub fn stack(&self) -> &[Screen] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
