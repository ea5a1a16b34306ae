//! Back-intent resolution.
//!
//! A physical back event (hardware button, system gesture) has no single
//! fixed response: what it should do depends on where the user is. This
//! module decides, from navigation state alone, whether back pops a route,
//! resets the home tab, or falls through to the platform default (which on
//! the root screen typically backgrounds the app).
//!
//! # Examples
//!
//! ```
//! use movienav::{resolve_back, NavStack, Route};
//!
//! let mut stack = NavStack::new();
//! stack.push(Route::movie_details(7));
//!
//! // On a detail screen, back pops it.
//! assert!(resolve_back(&mut stack).is_handled());
//! assert_eq!(stack.current_route(), &Route::Home);
//!
//! // At home on the default tab there is nothing left to unwind.
//! assert!(resolve_back(&mut stack).is_unhandled());
//! ```

use crate::debug_log;
use crate::route::{RouteKind, Tab};
use crate::state::NavStack;

// ============================================================================
// Decision
// ============================================================================

/// What a back signal should do, decided from `(RouteKind, Tab)` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackAction {
    /// Pop the current route off the stack.
    PopRoute,
    /// Stay on home but return the tab selection to the default.
    ResetTab,
    /// Nothing left to unwind; let the platform default run.
    Propagate,
}

impl BackAction {
    /// Decide the response to a back signal.
    ///
    /// Strict priority: any route above home pops first; only on home does a
    /// non-default tab get reset; only on home with the default tab does the
    /// signal propagate. A non-default tab parked under a pushed route is
    /// deliberately left alone — the pop wins, and the tab is still there
    /// when the user gets back to home.
    pub fn decide(kind: RouteKind, tab: Tab) -> Self {
        if kind != RouteKind::Home {
            BackAction::PopRoute
        } else if tab != Tab::Popular {
            BackAction::ResetTab
        } else {
            BackAction::Propagate
        }
    }
}

/// Whether a back signal was consumed.
///
/// Mirrors the boolean contract of platform back-handler APIs: `Handled`
/// suppresses the platform default (such as leaving the activity),
/// `Unhandled` lets it proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackDisposition {
    /// The signal was consumed in-app.
    Handled,
    /// No handler wanted the signal; the platform default applies.
    Unhandled,
}

impl BackDisposition {
    /// Check if the signal was consumed.
    pub fn is_handled(&self) -> bool {
        matches!(self, BackDisposition::Handled)
    }

    /// Check if the signal fell through to the platform.
    pub fn is_unhandled(&self) -> bool {
        matches!(self, BackDisposition::Unhandled)
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve one back signal against the stack, applying the decided action.
///
/// The decision is recomputed from current state on every signal; nothing is
/// cached between calls. Mutation goes through the stack's own operations,
/// so its invariants hold afterwards.
pub fn resolve_back(stack: &mut NavStack) -> BackDisposition {
    match BackAction::decide(stack.current_kind(), stack.active_tab()) {
        BackAction::PopRoute => {
            if let Some(event) = stack.pop() {
                debug_log!("back: popped {} -> {}", event.from, event.to);
            }
            BackDisposition::Handled
        }
        BackAction::ResetTab => {
            stack.select_tab(Tab::Popular);
            debug_log!("back: tab reset to {}", Tab::Popular);
            BackDisposition::Handled
        }
        BackAction::Propagate => {
            debug_log!("back: at root, propagating to platform");
            BackDisposition::Unhandled
        }
    }
}
