//! The coordinator arena.
//!
//! The tree owns every live coordinator, keyed by [`CoordinatorId`]. A
//! node's parent is just an id, and a parent's children are a list of ids,
//! so there are no reference cycles to break.
//!
//! ```text
//! nodes: { id → Node { flow, parent, children, phase } }
//!
//!   Created ──start()──▶ Started ──coordinator_did_finish()──▶ Finished
//! ```
//!
//! A node leaves the arena once its parent's child list no longer holds
//! its id. Its descendants go with it.

use std::collections::HashMap;

use log::{debug, info, warn};
use uuid::Uuid;

use super::flow::{Coordinator, FlowKind, Route};
use super::navigation::{NavigationContext, Screen, ScreenId, ScreenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordinatorId(Uuid);

impl CoordinatorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CoordinatorId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Created,
    Started,
    Finished,
}

struct Node {
    flow: Box<dyn Coordinator>,
    parent: Option<CoordinatorId>,
    children: Vec<CoordinatorId>,
    phase: Phase,
}

pub struct CoordinatorTree {
    nodes: HashMap<CoordinatorId, Node>,
    root: CoordinatorId,
}

impl CoordinatorTree {
    /// Creates a tree whose root is `root`. The root is not started.
    pub fn new(root: Box<dyn Coordinator>) -> Self {
        let mut tree = Self {
            nodes: HashMap::new(),
            root: CoordinatorId::new(),
        };
        tree.root = tree.insert(root);
        tree
    }

    pub fn root(&self) -> CoordinatorId {
        self.root
    }

    /// Adds a detached coordinator in the `Created` phase.
    pub fn insert(&mut self, flow: Box<dyn Coordinator>) -> CoordinatorId {
        let id = CoordinatorId::new();
        debug!("Created {:?} coordinator {:?}", flow.kind(), id);
        self.nodes.insert(
            id,
            Node {
                flow,
                parent: None,
                children: Vec::new(),
                phase: Phase::Created,
            },
        );
        id
    }

    pub fn contains(&self, id: CoordinatorId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn kind(&self, id: CoordinatorId) -> Option<FlowKind> {
        self.nodes.get(&id).map(|n| n.flow.kind())
    }

    pub fn phase(&self, id: CoordinatorId) -> Option<Phase> {
        self.nodes.get(&id).map(|n| n.phase)
    }

    pub fn parent(&self, id: CoordinatorId) -> Option<CoordinatorId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: CoordinatorId) -> &[CoordinatorId] {
        self.nodes
            .get(&id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn screen_ref(&self, id: CoordinatorId) -> Option<ScreenId> {
        self.nodes.get(&id).and_then(|n| n.flow.screen_ref())
    }

    /// Starts a `Created` coordinator. Anything else is ignored: a finished
    /// flow has to be recreated.
    pub fn start(&mut self, id: CoordinatorId, nav: &mut NavigationContext) {
        let Some(node) = self.nodes.get_mut(&id) else {
            warn!("start: unknown coordinator {:?}", id);
            return;
        };
        match node.phase {
            Phase::Created => {
                node.phase = Phase::Started;
                info!("Starting {:?} coordinator", node.flow.kind());
                node.flow.start(id, nav);
            }
            Phase::Started => debug!("start: {:?} already started", id),
            Phase::Finished => warn!("start: {:?} is finished and cannot restart", id),
        }
    }

    /// Appends `child` to `parent`'s children and points the child back at
    /// it. `None` is a no-op. Duplicates are not detected.
    pub fn add_child(&mut self, parent: CoordinatorId, child: Option<CoordinatorId>) {
        let Some(child) = child else {
            return;
        };
        if !self.nodes.contains_key(&child) || !self.nodes.contains_key(&parent) {
            warn!("add_child: unknown coordinator ({:?} → {:?})", parent, child);
            return;
        }
        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.push(child);
        }
    }

    /// Removes the first occurrence of `child` from `parent`'s children.
    /// Unknown ids are a no-op.
    pub fn child_did_finish(&mut self, parent: CoordinatorId, child: CoordinatorId) {
        let Some(node) = self.nodes.get_mut(&parent) else {
            return;
        };
        let Some(pos) = node.children.iter().position(|c| *c == child) else {
            debug!("child_did_finish: {:?} is not a child of {:?}", child, parent);
            return;
        };
        node.children.remove(pos);
        let still_referenced = node.children.contains(&child);
        if !still_referenced {
            self.release(child);
        }
    }

    /// Marks `id` finished and tells its parent to drop it.
    pub fn coordinator_did_finish(&mut self, id: CoordinatorId) {
        let Some(node) = self.nodes.get_mut(&id) else {
            return;
        };
        if node.phase == Phase::Finished {
            return;
        }
        node.phase = Phase::Finished;
        info!("{:?} coordinator finished", node.flow.kind());

        let parent = node.parent;
        match parent {
            Some(parent) => self.child_did_finish(parent, id),
            None if id != self.root => self.release(id),
            None => {}
        }
    }

    /// Asks `from` for a child flow that handles `route`, bubbling up to the
    /// parent when it can't. The new child is registered and started.
    pub fn navigate(
        &mut self,
        from: CoordinatorId,
        route: Route,
        nav: &mut NavigationContext,
    ) -> Option<CoordinatorId> {
        let mut current = Some(from);
        while let Some(id) = current {
            let Some(node) = self.nodes.get(&id) else {
                warn!("navigate: unknown coordinator {:?}", id);
                return None;
            };
            let (flow, parent) = (node.flow.child_for(&route), node.parent);
            if let Some(flow) = flow {
                let child = self.insert(flow);
                self.add_child(id, Some(child));
                self.start(child, nav);
                return Some(child);
            }
            current = parent;
        }
        warn!("navigate: no coordinator handled {:?}", route);
        None
    }

    /// Finishes the owner of `screen` if it was that owner's primary screen.
    pub fn screen_did_disappear(&mut self, screen: &Screen) {
        if self.screen_ref(screen.owner) == Some(screen.id) {
            self.coordinator_did_finish(screen.owner);
        } else {
            debug!("{:?} disappeared; owner keeps running", screen.kind.title());
        }
    }

    pub fn present_modal(
        &self,
        id: CoordinatorId,
        nav: &mut NavigationContext,
        kind: ScreenKind,
        animated: bool,
    ) -> Option<ScreenId> {
        match self.nodes.get(&id) {
            Some(node) => node.flow.present_modal(id, nav, kind, animated),
            None => {
                warn!("present_modal: unknown coordinator {:?}", id);
                None
            }
        }
    }

    /// Dismisses the current modal through the coordinator that presented it.
    pub fn dismiss_modal(&mut self, nav: &mut NavigationContext, animated: bool) -> Option<Screen> {
        let owner = nav.modal()?.owner;
        let screen = match self.nodes.get(&owner) {
            Some(node) => node.flow.dismiss_modal(nav, animated),
            None => nav.dismiss_modal(animated),
        }?;
        self.screen_did_disappear(&screen);
        Some(screen)
    }

    /// Pops the top pushed screen through the coordinator that pushed it.
    pub fn pop_view_controller(&mut self, nav: &mut NavigationContext) -> Option<Screen> {
        let owner = nav.top_pushed()?.owner;
        let screen = match self.nodes.get(&owner) {
            Some(node) => node.flow.pop_view_controller(nav),
            None => nav.pop(),
        }?;
        self.screen_did_disappear(&screen);
        Some(screen)
    }

    fn release(&mut self, id: CoordinatorId) {
        if id == self.root {
            return;
        }
        let Some(node) = self.nodes.remove(&id) else {
            return;
        };
        debug!("Released {:?} coordinator {:?}", node.flow.kind(), id);
        for child in node.children {
            if self.parent(child) == Some(id) {
                self.release(child);
            }
        }
    }
}
