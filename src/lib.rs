//! In-process navigation for a single-activity movie-discovery app.
//!
//! This crate owns how the app moves between screens: the route backstack,
//! the home-screen tab selection, what a hardware back press means at any
//! moment, and the chrome derived from all of that. Screens themselves are
//! opaque collaborators — they receive their route's payload and a bundle of
//! navigation intents, and everything else (rendering, data fetching) stays
//! in the embedding.
//!
//! # Components
//!
//! - [`Route`], [`RouteKind`], [`Tab`] — the closed set of navigation
//!   targets and the home tabs.
//! - [`NavStack`] — the store: route history plus tab selection, with
//!   [`NavEvent`] change records.
//! - [`BackAction`], [`resolve_back`] — back-intent policy: pop a route,
//!   reset the tab, or propagate to the platform.
//! - [`BackDispatcher`], [`BackSubscription`] — back-signal delivery with
//!   RAII-scoped handler registration.
//! - [`NavController`] — the cheap-clone handle tying it together: intents,
//!   queries, change observers, and the activation lifecycle.
//! - [`ScreenRenderers`], [`ShellFrame`] — the screen seam and per-change
//!   composition of the root view.
//!
//! # Quickstart
//!
//! ```
//! use movienav::{BackDispatcher, EdgeInsets, NavController, ScreenRenderers, ShellFrame};
//!
//! // The dispatcher stands in for the platform's back facility.
//! let dispatcher = BackDispatcher::new();
//! let controller = NavController::new();
//! controller.activate(&dispatcher);
//!
//! // One renderer per screen; `String` stands in for the toolkit's element type.
//! let renderers = ScreenRenderers::new()
//!     .home(|tab, _intents| format!("browsing {tab}"))
//!     .movie_details(|id, _intents| format!("movie {id}"))
//!     .post_review(|_id, title, _intents| format!("reviewing {title}"));
//!
//! controller.open_movie(42);
//! let frame = ShellFrame::compose(&controller, &renderers, EdgeInsets::zero());
//! assert_eq!(frame.header.unwrap().title, "Movie details");
//! assert_eq!(frame.content.as_deref(), Some("movie 42"));
//!
//! // A hardware back press unwinds the stack.
//! assert!(dispatcher.emit().is_handled());
//! assert_eq!(controller.header_title(), "Movie Discovery");
//! ```
//!
//! # Logging
//!
//! Diagnostics go through feature-switched macros: the `log` feature
//! (default) forwards to the `log` crate, `tracing` to `tracing`. Enable at
//! most one. With both off the macros compile to nothing.

pub mod back;
pub mod chrome;
pub mod controller;
mod logging;
pub mod route;
pub mod screen;
pub mod signal;
pub mod state;

pub use back::{resolve_back, BackAction, BackDisposition};
pub use chrome::{
    header_title, EdgeInsets, HeaderModel, TabBarModel, TabItem, BACK_BUTTON_LABEL,
    MIN_BOTTOM_INSET,
};
pub use controller::NavController;
pub use route::{MovieId, Route, RouteKind, Tab};
pub use screen::{ScreenIntents, ScreenRenderers, ShellFrame};
pub use signal::{BackDispatcher, BackHandler, BackSignalSource, BackSubscription};
pub use state::{NavDirection, NavEvent, NavStack};
