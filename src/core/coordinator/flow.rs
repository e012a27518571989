//! The capability set every navigation flow implements.

use super::navigation::{NavigationContext, Screen, ScreenId, ScreenKind};
use super::tree::CoordinatorId;
use crate::api::{Player, SearchParameters};

/// The closed set of flows the app knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    Main,
    Search,
    PlayerDetail,
    Comparison,
    SavedPlayers,
}

/// A navigation request raised by a screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Search(SearchParameters),
    PlayerDetail(Player),
    Comparison(Player, Player),
    SavedPlayers,
}

/// One navigation flow.
///
/// Coordinators never hold references to each other. The tree stores them
/// by id and passes the id plus the shared [`NavigationContext`] into each
/// call.
pub trait Coordinator {
    fn kind(&self) -> FlowKind;

    /// Builds and shows the flow's primary screen.
    fn start(&mut self, id: CoordinatorId, nav: &mut NavigationContext);

    /// The screen this flow owns, once started. When that screen leaves the
    /// navigation context the flow is finished.
    fn screen_ref(&self) -> Option<ScreenId>;

    /// A child flow for `route`, or None to let the parent handle it.
    fn child_for(&self, _route: &Route) -> Option<Box<dyn Coordinator>> {
        None
    }

    fn present_modal(
        &self,
        id: CoordinatorId,
        nav: &mut NavigationContext,
        kind: ScreenKind,
        animated: bool,
    ) -> Option<ScreenId> {
        nav.present_modal(id, kind, animated)
    }

    fn dismiss_modal(&self, nav: &mut NavigationContext, animated: bool) -> Option<Screen> {
        nav.dismiss_modal(animated)
    }

    /// Pops without animation.
    fn pop_view_controller(&self, nav: &mut NavigationContext) -> Option<Screen> {
        nav.pop()
    }
}
