//! Navigation store: route history stack plus home-tab selection.

use crate::route::{Route, RouteKind, Tab};

/// Direction of a history transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    /// An entry was pushed.
    Forward,
    /// An entry was popped.
    Back,
}

/// Change record returned by mutating stack operations.
///
/// Change observers get no payload; events exist for logging and tests,
/// which want to see exactly which transition happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEvent {
    /// Route that was current before the operation.
    pub from: Route,
    /// Route that is current after the operation.
    pub to: Route,
    /// Whether history grew or shrank.
    pub direction: NavDirection,
}

/// Navigation store.
///
/// Owns the two pieces of navigation state: the ordered history of visited
/// routes and the home-screen tab selection. Everything the chrome shows
/// (current screen, header title, back affordance) derives from these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavStack {
    /// Visited routes, bottom first; the last entry is the current route.
    /// Never empty, and the bottom entry is always `Home`.
    history: Vec<Route>,
    /// Active home tab. Sibling state, not a history entry: it survives
    /// pushes above `Home` and switching it never grows the stack.
    tab: Tab,
}

impl NavStack {
    /// Create a stack showing the home screen on the popular tab.
    pub fn new() -> Self {
        Self {
            history: vec![Route::Home],
            tab: Tab::Popular,
        }
    }

    /// Route currently on screen (the last history entry).
    pub fn current_route(&self) -> &Route {
        &self.history[self.history.len() - 1]
    }

    /// Payload-free tag of the current route.
    pub fn current_kind(&self) -> RouteKind {
        self.current_route().kind()
    }

    /// Active home-screen tab.
    pub fn active_tab(&self) -> Tab {
        self.tab
    }

    /// Number of history entries.
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Check if a pop would remove an entry.
    pub fn can_pop(&self) -> bool {
        self.history.len() > 1
    }

    /// Whether the chrome should offer a back affordance.
    ///
    /// Keyed on the current route's tag, not on depth: a `Home` entry pushed
    /// on top of the stack is poppable yet still shows no back button.
    pub fn shows_back_affordance(&self) -> bool {
        self.current_kind() != RouteKind::Home
    }

    /// Read-only view of the history, bottom first.
    pub fn history(&self) -> &[Route] {
        &self.history
    }

    /// Push a route and make it current. Always succeeds.
    pub fn push(&mut self, route: Route) -> NavEvent {
        let from = self.current_route().clone();
        self.history.push(route);
        NavEvent {
            from,
            to: self.current_route().clone(),
            direction: NavDirection::Forward,
        }
    }

    /// Pop the current route, revealing the entry beneath.
    ///
    /// The bottom `Home` entry is never removed: at depth 1 this is a no-op
    /// returning `None`, so callers can chain fallback behavior on it.
    pub fn pop(&mut self) -> Option<NavEvent> {
        if self.history.len() <= 1 {
            return None;
        }
        let from = self.history.pop()?;
        Some(NavEvent {
            from,
            to: self.current_route().clone(),
            direction: NavDirection::Back,
        })
    }

    /// Change the active tab; returns whether the value actually changed.
    ///
    /// Never touches history. Tab switches are not navigation entries and
    /// are not unwound by pops.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if self.tab == tab {
            return false;
        }
        self.tab = tab;
        true
    }
}

impl Default for NavStack {
    fn default() -> Self {
        Self::new()
    }
}
