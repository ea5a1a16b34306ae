//! The navigation controller: intent surface, change observers, and the
//! scoped back-signal registration.
//!
//! Three pieces live here:
//!
//! - [`NavController`] — a cheap-clone handle over the shared
//!   [`NavStack`](crate::NavStack). Screens and the shell all talk to the
//!   same store through clones of one controller.
//! - change observers — registered with [`observe`](NavController::observe),
//!   invoked after every state-changing operation so the embedding can
//!   re-render. Observers carry no event payload; they receive a controller
//!   handle and re-derive everything from current state.
//! - the activation lifecycle — [`activate`](NavController::activate) wires
//!   back-intent resolution to a [`BackSignalSource`] and holds the
//!   resulting [`BackSubscription`](crate::BackSubscription) until
//!   [`deactivate`](NavController::deactivate) or the last handle drops.
//!
//! # Examples
//!
//! ```
//! use movienav::{BackDispatcher, BackSignalSource, NavController, Route};
//!
//! let dispatcher = BackDispatcher::new();
//! let controller = NavController::new();
//! controller.activate(&dispatcher);
//!
//! controller.open_movie(42);
//! assert_eq!(controller.current_route(), Route::movie_details(42));
//!
//! // The hardware back button unwinds the stack.
//! assert!(dispatcher.emit().is_handled());
//! assert_eq!(controller.current_route(), Route::Home);
//! ```

use crate::back::{resolve_back, BackDisposition};
use crate::chrome;
use crate::route::{MovieId, Route, RouteKind, Tab};
use crate::screen::ScreenIntents;
use crate::signal::{BackSignalSource, BackSubscription};
use crate::state::NavStack;
use crate::{debug_log, info_log, trace_log};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Observers = Vec<Box<dyn FnMut(&NavController)>>;

// ============================================================================
// NavController
// ============================================================================

/// Handle to the app's navigation state.
///
/// Clones share one store; the store lives as long as any handle does.
/// Single-threaded by design — the whole navigation model runs on the UI
/// thread, so the handle is neither `Send` nor `Sync`.
#[derive(Clone)]
pub struct NavController {
    stack: Rc<RefCell<NavStack>>,
    observers: Rc<RefCell<Observers>>,
    back_subscription: Rc<RefCell<Option<BackSubscription>>>,
}

impl NavController {
    /// Create a controller at the initial state: home screen, popular tab.
    pub fn new() -> Self {
        Self {
            stack: Rc::new(RefCell::new(NavStack::new())),
            observers: Rc::new(RefCell::new(Vec::new())),
            back_subscription: Rc::new(RefCell::new(None)),
        }
    }

    // ========================================================================
    // Intents
    // ========================================================================

    /// Open a movie's detail screen.
    pub fn open_movie(&self, movie_id: MovieId) {
        let event = self.stack.borrow_mut().push(Route::movie_details(movie_id));
        info_log!(
            "Navigation {:?}: '{}' → '{}' (depth {})",
            event.direction,
            event.from,
            event.to,
            self.depth()
        );
        self.notify_observers();
    }

    /// Open the review composer for a movie.
    ///
    /// The title is captured into the route so the composer never needs a
    /// catalog lookup.
    pub fn open_post_review(&self, movie_id: MovieId, movie_title: impl Into<String>) {
        let event = self
            .stack
            .borrow_mut()
            .push(Route::post_review(movie_id, movie_title));
        info_log!(
            "Navigation {:?}: '{}' → '{}' (depth {})",
            event.direction,
            event.from,
            event.to,
            self.depth()
        );
        self.notify_observers();
    }

    /// Pop the current screen; returns whether anything was popped.
    ///
    /// At the root there is nothing to pop and nobody is notified.
    pub fn go_back(&self) -> bool {
        let event = self.stack.borrow_mut().pop();
        match event {
            Some(event) => {
                info_log!(
                    "Navigation {:?}: '{}' → '{}' (depth {})",
                    event.direction,
                    event.from,
                    event.to,
                    self.depth()
                );
                self.notify_observers();
                true
            }
            None => {
                debug_log!("go_back ignored at root");
                false
            }
        }
    }

    /// Switch the home tab. Selecting the already-active tab notifies nobody.
    pub fn select_tab(&self, tab: Tab) {
        let changed = self.stack.borrow_mut().select_tab(tab);
        if changed {
            debug_log!("Tab switched to {}", tab);
            self.notify_observers();
        } else {
            trace_log!("Tab {} already active", tab);
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Route currently on screen.
    pub fn current_route(&self) -> Route {
        self.stack.borrow().current_route().clone()
    }

    /// Payload-free tag of the current route.
    pub fn current_kind(&self) -> RouteKind {
        self.stack.borrow().current_kind()
    }

    /// Active home-screen tab.
    pub fn active_tab(&self) -> Tab {
        self.stack.borrow().active_tab()
    }

    /// Number of history entries.
    pub fn depth(&self) -> usize {
        self.stack.borrow().depth()
    }

    /// Check if a back intent would pop a screen.
    pub fn can_pop(&self) -> bool {
        self.stack.borrow().can_pop()
    }

    /// Whether the chrome should offer a back affordance.
    pub fn shows_back_affordance(&self) -> bool {
        self.stack.borrow().shows_back_affordance()
    }

    /// Header title for the current screen.
    pub fn header_title(&self) -> &'static str {
        chrome::header_title(self.current_kind())
    }

    // ========================================================================
    // Observers
    // ========================================================================

    /// Register a change observer.
    ///
    /// Observers fire once per state-changing operation, after the store has
    /// mutated; no-ops (pop at root, reselecting the active tab) fire
    /// nothing. Each invocation receives a controller handle to re-derive
    /// from — observers should take that handle rather than capture their
    /// own clone, which would keep the store alive past teardown. They carry
    /// no event payload and live as long as the controller.
    pub fn observe(&self, observer: impl FnMut(&NavController) + 'static) {
        self.observers.borrow_mut().push(Box::new(observer));
    }

    /// Run all observers.
    ///
    /// The list is not borrowed while observers run, so an observer may
    /// query the controller or register further observers; additions are
    /// kept but not invoked until the next change.
    fn notify_observers(&self) {
        let mut running = std::mem::take(&mut *self.observers.borrow_mut());
        for observer in &mut running {
            observer(self);
        }
        let mut observers = self.observers.borrow_mut();
        let added = std::mem::take(&mut *observers);
        *observers = running;
        observers.extend(added);
    }

    // ========================================================================
    // Back-signal activation
    // ========================================================================

    /// Wire back-intent resolution to a signal source.
    ///
    /// The registration is scoped: it lasts until [`deactivate`](Self::deactivate)
    /// or until the last controller handle drops, whichever comes first.
    /// Activating while already active replaces the previous registration.
    pub fn activate(&self, source: &dyn BackSignalSource) {
        let weak = self.downgrade();
        let subscription = source.subscribe(Box::new(move || match weak.upgrade() {
            Some(controller) => controller.handle_back_signal(),
            None => {
                trace_log!("Back signal after controller teardown, ignoring");
                BackDisposition::Unhandled
            }
        }));

        let previous = self.back_subscription.borrow_mut().replace(subscription);
        if previous.is_some() {
            debug_log!("Back subscription replaced");
        } else {
            debug_log!("Back subscription acquired");
        }
    }

    /// Release the back-signal registration, if any.
    pub fn deactivate(&self) {
        let subscription = self.back_subscription.borrow_mut().take();
        if subscription.is_some() {
            debug_log!("Back subscription released");
        }
    }

    /// Check if a back-signal registration is currently held.
    pub fn is_active(&self) -> bool {
        self.back_subscription.borrow().is_some()
    }

    /// Resolve one back signal against the store.
    fn handle_back_signal(&self) -> BackDisposition {
        let disposition = resolve_back(&mut self.stack.borrow_mut());
        if disposition.is_handled() {
            self.notify_observers();
        }
        disposition
    }

    // ========================================================================
    // Screens
    // ========================================================================

    /// Intent handles for screen renderers.
    ///
    /// The bundle exposes navigation intents only — screens cannot read or
    /// mutate the store through it, and intents on a torn-down controller
    /// are ignored.
    pub fn intents(&self) -> ScreenIntents {
        ScreenIntents::new(self.downgrade())
    }

    pub(crate) fn downgrade(&self) -> WeakController {
        WeakController {
            stack: Rc::downgrade(&self.stack),
            observers: Rc::downgrade(&self.observers),
            back_subscription: Rc::downgrade(&self.back_subscription),
        }
    }
}

impl Default for NavController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NavController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavController")
            .field("stack", &self.stack.borrow())
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// WeakController
// ============================================================================

/// Non-owning handle used by back handlers and screen intents.
///
/// Holding only weak references keeps teardown deterministic: dropping the
/// last [`NavController`] releases the back subscription even while screens
/// still hold their intent bundles.
#[derive(Clone)]
pub(crate) struct WeakController {
    stack: Weak<RefCell<NavStack>>,
    observers: Weak<RefCell<Observers>>,
    back_subscription: Weak<RefCell<Option<BackSubscription>>>,
}

impl WeakController {
    pub(crate) fn upgrade(&self) -> Option<NavController> {
        Some(NavController {
            stack: self.stack.upgrade()?,
            observers: self.observers.upgrade()?,
            back_subscription: self.back_subscription.upgrade()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::BackDispatcher;

    #[test]
    fn test_intent_walkthrough() {
        let controller = NavController::new();

        controller.open_movie(7);
        assert_eq!(controller.current_route(), Route::movie_details(7));
        assert_eq!(controller.header_title(), "Movie details");
        assert!(controller.shows_back_affordance());

        controller.open_post_review(7, "Heat");
        assert_eq!(controller.current_route(), Route::post_review(7, "Heat"));
        assert_eq!(controller.header_title(), "Write review");
        assert_eq!(controller.depth(), 3);

        assert!(controller.go_back());
        assert_eq!(controller.current_route(), Route::movie_details(7));

        assert!(controller.go_back());
        assert_eq!(controller.current_route(), Route::Home);
        assert_eq!(controller.header_title(), "Movie Discovery");

        // Nothing left to pop.
        assert!(!controller.go_back());
    }

    #[test]
    fn test_observers_fire_once_per_change() {
        let controller = NavController::new();
        let fired = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&fired);
        controller.observe(move |_controller| *counter.borrow_mut() += 1);

        controller.open_movie(1);
        assert_eq!(*fired.borrow(), 1);

        controller.select_tab(Tab::Search);
        assert_eq!(*fired.borrow(), 2);

        controller.go_back();
        assert_eq!(*fired.borrow(), 3);
    }

    #[test]
    fn test_noops_notify_nobody() {
        let controller = NavController::new();
        let fired = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&fired);
        controller.observe(move |_controller| *counter.borrow_mut() += 1);

        controller.go_back();
        controller.select_tab(Tab::Popular);
        assert_eq!(*fired.borrow(), 0);
    }

    #[test]
    fn test_observer_queries_the_passed_handle() {
        let controller = NavController::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&seen);
        controller.observe(move |controller| log.borrow_mut().push(controller.current_route()));

        controller.open_movie(5);
        controller.go_back();

        assert_eq!(
            *seen.borrow(),
            vec![Route::movie_details(5), Route::Home]
        );
    }

    #[test]
    fn test_back_signal_unwinds_stack() {
        let dispatcher = BackDispatcher::new();
        let controller = NavController::new();
        controller.activate(&dispatcher);
        assert!(controller.is_active());

        controller.select_tab(Tab::Search);
        controller.open_movie(2);

        assert!(dispatcher.emit().is_handled());
        assert_eq!(controller.current_route(), Route::Home);
        assert_eq!(controller.active_tab(), Tab::Search);

        assert!(dispatcher.emit().is_handled());
        assert_eq!(controller.active_tab(), Tab::Popular);

        assert!(dispatcher.emit().is_unhandled());
    }

    #[test]
    fn test_back_signal_notifies_observers() {
        let dispatcher = BackDispatcher::new();
        let controller = NavController::new();
        controller.activate(&dispatcher);

        let fired = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&fired);
        controller.observe(move |_controller| *counter.borrow_mut() += 1);

        controller.open_movie(3);
        dispatcher.emit();
        assert_eq!(*fired.borrow(), 2);

        // Unhandled signals change nothing and notify nobody.
        dispatcher.emit();
        assert_eq!(*fired.borrow(), 2);
    }

    #[test]
    fn test_deactivate_stops_handling() {
        let dispatcher = BackDispatcher::new();
        let controller = NavController::new();
        controller.activate(&dispatcher);
        controller.open_movie(8);

        controller.deactivate();
        assert!(!controller.is_active());
        assert_eq!(dispatcher.handler_count(), 0);

        assert!(dispatcher.emit().is_unhandled());
        // State untouched by the unhandled signal.
        assert_eq!(controller.current_route(), Route::movie_details(8));
    }

    #[test]
    fn test_dropping_last_handle_releases_subscription() {
        let dispatcher = BackDispatcher::new();
        {
            let controller = NavController::new();
            controller.activate(&dispatcher);
            assert_eq!(dispatcher.handler_count(), 1);

            let clone = controller.clone();
            drop(controller);
            // A surviving handle keeps the registration alive.
            assert_eq!(dispatcher.handler_count(), 1);
            drop(clone);
        }
        assert_eq!(dispatcher.handler_count(), 0);
        assert!(dispatcher.emit().is_unhandled());
    }

    #[test]
    fn test_reactivation_replaces_subscription() {
        let dispatcher = BackDispatcher::new();
        let controller = NavController::new();

        controller.activate(&dispatcher);
        controller.activate(&dispatcher);
        assert_eq!(dispatcher.handler_count(), 1);

        controller.open_movie(1);
        assert!(dispatcher.emit().is_handled());
        assert_eq!(controller.current_route(), Route::Home);
    }

    #[test]
    fn test_clones_share_state() {
        let controller = NavController::new();
        let clone = controller.clone();

        clone.open_movie(11);
        assert_eq!(controller.current_route(), Route::movie_details(11));
        assert_eq!(controller.depth(), clone.depth());
    }
}
