//! Back-signal delivery and subscription lifecycle.
//!
//! Platform back events (hardware button, predictive gesture) arrive from
//! outside the navigation model. This module defines the seam they cross:
//!
//! - [`BackSignalSource`] — anything that can deliver back signals to a
//!   registered handler. Embeddings adapt their platform facility to it.
//! - [`BackDispatcher`] — the in-process implementation, also used by tests
//!   and the demo. Handlers run most-recently-subscribed first and the first
//!   one to consume the signal stops the walk.
//! - [`BackSubscription`] — RAII guard returned by `subscribe`. Dropping it
//!   (or calling [`release`](BackSubscription::release)) unregisters the
//!   handler, so a handler can never outlive the state it closes over.
//!
//! # Examples
//!
//! ```
//! use movienav::{BackDisposition, BackDispatcher, BackSignalSource};
//!
//! let dispatcher = BackDispatcher::new();
//! let subscription = dispatcher.subscribe(Box::new(|| BackDisposition::Handled));
//!
//! assert!(dispatcher.emit().is_handled());
//!
//! drop(subscription);
//! assert!(dispatcher.emit().is_unhandled());
//! ```

use crate::back::BackDisposition;
use crate::{debug_log, trace_log};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A registered back-signal handler.
///
/// Returns whether it consumed the signal; `Unhandled` passes the signal on
/// to the next handler (and ultimately to the platform default).
pub type BackHandler = Box<dyn FnMut() -> BackDisposition>;

/// Source of back signals.
///
/// Object-safe so consumers can hold `&dyn BackSignalSource`; handlers are
/// therefore passed pre-boxed.
pub trait BackSignalSource {
    /// Register a handler. It stays registered exactly as long as the
    /// returned guard is alive and unreleased.
    fn subscribe(&self, handler: BackHandler) -> BackSubscription;
}

// ============================================================================
// Subscription guard
// ============================================================================

/// Scoped registration with a [`BackSignalSource`].
///
/// Unregisters on [`release`](Self::release) or drop, whichever comes first;
/// both are no-ops afterwards. The guard holds no strong reference to its
/// source, so one that outlives the source releases into nothing.
pub struct BackSubscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl BackSubscription {
    /// Wrap an unsubscribe action. Sources call this from `subscribe`.
    pub fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Unregister the handler now. Safe to call more than once.
    pub fn release(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }

    /// Check if the handler has already been unregistered.
    pub fn is_released(&self) -> bool {
        self.unsubscribe.is_none()
    }
}

impl Drop for BackSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for BackSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackSubscription")
            .field("released", &self.is_released())
            .finish()
    }
}

// ============================================================================
// Dispatcher
// ============================================================================

type SharedHandler = Rc<RefCell<BackHandler>>;

/// In-process back-signal source.
///
/// Stands in for the platform facility: the embedding calls
/// [`emit`](Self::emit) once per physical back action and applies the
/// platform default (leave the activity) only on `Unhandled`. Cloning yields
/// another handle to the same handler list.
#[derive(Clone)]
pub struct BackDispatcher {
    inner: Rc<RefCell<DispatcherInner>>,
}

#[derive(Default)]
struct DispatcherInner {
    next_id: u64,
    /// Live handlers in subscription order (ids strictly increasing).
    handlers: Vec<(u64, SharedHandler)>,
}

impl DispatcherInner {
    fn remove(&mut self, id: u64) {
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
    }

    fn contains(&self, id: u64) -> bool {
        self.handlers.iter().any(|(handler_id, _)| *handler_id == id)
    }
}

impl BackDispatcher {
    /// Create a dispatcher with no handlers.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(DispatcherInner::default())),
        }
    }

    /// Number of currently registered handlers.
    pub fn handler_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }

    /// Deliver one back signal.
    ///
    /// Handlers are consulted most-recently-subscribed first; the first
    /// `Handled` response stops the walk. The walk covers the handlers that
    /// were registered when the signal arrived — a handler released while
    /// the walk is in progress is skipped, and the handler list is not
    /// borrowed while a handler runs, so handlers may subscribe or release
    /// freely.
    pub fn emit(&self) -> BackDisposition {
        let snapshot: Vec<(u64, SharedHandler)> = self
            .inner
            .borrow()
            .handlers
            .iter()
            .map(|(id, handler)| (*id, Rc::clone(handler)))
            .collect();

        for (id, handler) in snapshot.into_iter().rev() {
            if !self.inner.borrow().contains(id) {
                continue;
            }
            trace_log!("back signal -> handler {}", id);
            let disposition = (*handler.borrow_mut())();
            if disposition.is_handled() {
                debug_log!("back signal consumed by handler {}", id);
                return BackDisposition::Handled;
            }
        }

        debug_log!("back signal unhandled, platform default applies");
        BackDisposition::Unhandled
    }
}

impl BackSignalSource for BackDispatcher {
    fn subscribe(&self, handler: BackHandler) -> BackSubscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.handlers.push((id, Rc::new(RefCell::new(handler))));
            id
        };
        debug_log!("back handler {} subscribed", id);

        let weak = Rc::downgrade(&self.inner);
        BackSubscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().remove(id);
                debug_log!("back handler {} released", id);
            }
        })
    }
}

impl Default for BackDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BackDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackDispatcher")
            .field("handlers", &self.handler_count())
            .finish()
    }
}
