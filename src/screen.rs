//! The screen seam: renderers, intent handles, and shell composition.
//!
//! Screens are opaque to the navigation model. Each one is a renderer
//! closure registered on [`ScreenRenderers`], receiving exactly the payload
//! its route variant carries plus a [`ScreenIntents`] bundle for navigating
//! onward. `V` is whatever the embedding's UI toolkit renders to — the model
//! never looks inside it.
//!
//! [`ShellFrame::compose`] assembles one frame of the root view from current
//! state: header, mounted screen, tab bar, resolved insets.
//!
//! # Examples
//!
//! ```
//! use movienav::{EdgeInsets, NavController, ScreenRenderers, ShellFrame};
//!
//! let controller = NavController::new();
//! let renderers = ScreenRenderers::new()
//!     .home(|tab, _intents| format!("home: {tab}"))
//!     .movie_details(|id, _intents| format!("movie {id}"))
//!     .post_review(|id, title, _intents| format!("review of {title} ({id})"));
//!
//! controller.open_movie(7);
//! let frame = ShellFrame::compose(&controller, &renderers, EdgeInsets::zero());
//! assert_eq!(frame.content.as_deref(), Some("movie 7"));
//! assert!(frame.header.is_some());
//! assert!(frame.tab_bar.is_none());
//! ```

use crate::chrome::{EdgeInsets, HeaderModel, TabBarModel};
use crate::controller::{NavController, WeakController};
use crate::route::{MovieId, Route, Tab};
use crate::{trace_log, warn_log};
use std::fmt;

// ============================================================================
// ScreenIntents
// ============================================================================

/// Navigation intents handed to screen renderers.
///
/// Deliberately narrow: screens can ask for navigation but cannot read or
/// mutate the store. The bundle holds no strong reference to the controller,
/// so a screen retaining it past teardown neither leaks state nor revives
/// it — late intents are ignored.
#[derive(Clone)]
pub struct ScreenIntents {
    controller: WeakController,
}

impl ScreenIntents {
    pub(crate) fn new(controller: WeakController) -> Self {
        Self { controller }
    }

    /// Open a movie's detail screen.
    pub fn open_movie(&self, movie_id: MovieId) {
        if let Some(controller) = self.live("open_movie") {
            controller.open_movie(movie_id);
        }
    }

    /// Open the review composer for a movie.
    pub fn open_post_review(&self, movie_id: MovieId, movie_title: impl Into<String>) {
        if let Some(controller) = self.live("open_post_review") {
            controller.open_post_review(movie_id, movie_title);
        }
    }

    /// Leave the current screen (the review composer's "done").
    pub fn go_back(&self) {
        if let Some(controller) = self.live("go_back") {
            controller.go_back();
        }
    }

    /// Switch the home tab.
    pub fn select_tab(&self, tab: Tab) {
        if let Some(controller) = self.live("select_tab") {
            controller.select_tab(tab);
        }
    }

    fn live(&self, intent: &str) -> Option<NavController> {
        let controller = self.controller.upgrade();
        if controller.is_none() {
            trace_log!("{} intent after controller teardown, ignoring", intent);
        }
        controller
    }
}

impl fmt::Debug for ScreenIntents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenIntents")
            .field("live", &self.controller.upgrade().is_some())
            .finish()
    }
}

// ============================================================================
// ScreenRenderers
// ============================================================================

type HomeRenderer<V> = Box<dyn Fn(Tab, &ScreenIntents) -> V>;
type DetailsRenderer<V> = Box<dyn Fn(MovieId, &ScreenIntents) -> V>;
type ReviewRenderer<V> = Box<dyn Fn(MovieId, &str, &ScreenIntents) -> V>;

/// Registry of one renderer per screen.
///
/// Built once at startup in the builder style. Each renderer sees only the
/// fields its route variant carries: the home renderer additionally gets the
/// active tab, the review renderer gets the captured title.
pub struct ScreenRenderers<V> {
    home: Option<HomeRenderer<V>>,
    movie_details: Option<DetailsRenderer<V>>,
    post_review: Option<ReviewRenderer<V>>,
}

impl<V> ScreenRenderers<V> {
    /// Create a registry with no renderers.
    pub fn new() -> Self {
        Self {
            home: None,
            movie_details: None,
            post_review: None,
        }
    }

    /// Set the home (tabbed listing / search) renderer.
    pub fn home<F>(mut self, renderer: F) -> Self
    where
        F: Fn(Tab, &ScreenIntents) -> V + 'static,
    {
        self.home = Some(Box::new(renderer));
        self
    }

    /// Set the movie-details renderer.
    pub fn movie_details<F>(mut self, renderer: F) -> Self
    where
        F: Fn(MovieId, &ScreenIntents) -> V + 'static,
    {
        self.movie_details = Some(Box::new(renderer));
        self
    }

    /// Set the review-composer renderer.
    pub fn post_review<F>(mut self, renderer: F) -> Self
    where
        F: Fn(MovieId, &str, &ScreenIntents) -> V + 'static,
    {
        self.post_review = Some(Box::new(renderer));
        self
    }

    /// Render the screen for a route.
    ///
    /// `None` means no renderer is registered for that screen — a wiring
    /// gap in the embedding, logged as such.
    pub fn render(&self, route: &Route, tab: Tab, intents: &ScreenIntents) -> Option<V> {
        let content = match route {
            Route::Home => self.home.as_ref().map(|render| render(tab, intents)),
            Route::MovieDetails { movie_id } => self
                .movie_details
                .as_ref()
                .map(|render| render(*movie_id, intents)),
            Route::PostReview {
                movie_id,
                movie_title,
            } => self
                .post_review
                .as_ref()
                .map(|render| render(*movie_id, movie_title, intents)),
        };
        if content.is_none() {
            warn_log!("No renderer registered for '{}'", route);
        }
        content
    }
}

impl<V> Default for ScreenRenderers<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for ScreenRenderers<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenRenderers")
            .field("home", &self.home.is_some())
            .field("movie_details", &self.movie_details.is_some())
            .field("post_review", &self.post_review.is_some())
            .finish()
    }
}

// ============================================================================
// ShellFrame
// ============================================================================

/// One composed frame of the root view.
///
/// Everything the embedding needs to draw, derived afresh from current
/// state: the header exists only off-home, the tab bar only on home, and
/// exactly one screen is mounted for the top-of-stack route.
#[derive(Debug)]
pub struct ShellFrame<V> {
    /// Header row; `None` on the home screen.
    pub header: Option<HeaderModel>,
    /// Rendered screen content; `None` if no renderer was registered.
    pub content: Option<V>,
    /// Tab bar; present only on the home screen.
    pub tab_bar: Option<TabBarModel>,
    /// Safe-area insets with the bottom floor applied.
    pub insets: EdgeInsets,
}

impl<V> ShellFrame<V> {
    /// Compose a frame from the controller's current state.
    pub fn compose(
        controller: &NavController,
        renderers: &ScreenRenderers<V>,
        insets: EdgeInsets,
    ) -> Self {
        let route = controller.current_route();
        let tab = controller.active_tab();
        let intents = controller.intents();
        let on_home = route.is_home();

        Self {
            header: (!on_home).then(|| HeaderModel::for_kind(route.kind())),
            content: renderers.render(&route, tab, &intents),
            tab_bar: on_home.then(|| TabBarModel::for_active(tab)),
            insets: insets.resolve(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chrome::MIN_BOTTOM_INSET;

    fn string_renderers() -> ScreenRenderers<String> {
        ScreenRenderers::new()
            .home(|tab, _intents| format!("home:{tab}"))
            .movie_details(|id, _intents| format!("details:{id}"))
            .post_review(|id, title, _intents| format!("review:{id}:{title}"))
    }

    #[test]
    fn test_home_frame_shape() {
        let controller = NavController::new();
        let frame = ShellFrame::compose(&controller, &string_renderers(), EdgeInsets::zero());

        assert!(frame.header.is_none());
        assert_eq!(frame.content.as_deref(), Some("home:Popular"));
        assert!(frame.tab_bar.is_some());
        assert_eq!(frame.insets.bottom, MIN_BOTTOM_INSET);
    }

    #[test]
    fn test_details_frame_shape() {
        let controller = NavController::new();
        controller.open_movie(42);

        let frame = ShellFrame::compose(&controller, &string_renderers(), EdgeInsets::zero());
        let header = frame.header.unwrap();

        assert_eq!(header.title, "Movie details");
        assert!(header.shows_back);
        assert_eq!(frame.content.as_deref(), Some("details:42"));
        assert!(frame.tab_bar.is_none());
    }

    #[test]
    fn test_review_renderer_gets_captured_title() {
        let controller = NavController::new();
        controller.open_movie(3);
        controller.open_post_review(3, "Stalker");

        let frame = ShellFrame::compose(&controller, &string_renderers(), EdgeInsets::zero());

        assert_eq!(frame.content.as_deref(), Some("review:3:Stalker"));
        assert_eq!(frame.header.unwrap().title, "Write review");
    }

    #[test]
    fn test_tab_bar_reflects_selection() {
        let controller = NavController::new();
        controller.select_tab(Tab::Search);

        let frame = ShellFrame::compose(&controller, &string_renderers(), EdgeInsets::zero());
        let bar = frame.tab_bar.unwrap();

        assert!(bar.items[1].active);
        assert!(!bar.items[0].active);
        assert_eq!(frame.content.as_deref(), Some("home:Search"));
    }

    #[test]
    fn test_reported_insets_pass_through_above_floor() {
        let controller = NavController::new();
        let insets = EdgeInsets::new(47.0, 0.0, 34.0, 0.0);

        let frame = ShellFrame::compose(&controller, &string_renderers(), insets);

        assert_eq!(frame.insets.top, 47.0);
        assert_eq!(frame.insets.bottom, 34.0);
    }

    #[test]
    fn test_missing_renderer_yields_no_content() {
        let controller = NavController::new();
        controller.open_movie(1);
        let renderers: ScreenRenderers<String> = ScreenRenderers::new();

        let frame = ShellFrame::compose(&controller, &renderers, EdgeInsets::zero());
        assert!(frame.content.is_none());
        // Chrome still derives normally.
        assert_eq!(frame.header.unwrap().title, "Movie details");
    }

    #[test]
    fn test_intents_navigate_from_screens() {
        let controller = NavController::new();
        let intents = controller.intents();

        intents.open_movie(9);
        intents.open_post_review(9, "Ran");
        assert_eq!(controller.current_route(), Route::post_review(9, "Ran"));

        intents.go_back();
        assert_eq!(controller.current_route(), Route::movie_details(9));

        intents.go_back();
        intents.select_tab(Tab::Search);
        assert_eq!(controller.active_tab(), Tab::Search);
    }

    #[test]
    fn test_intents_after_teardown_are_ignored() {
        let controller = NavController::new();
        let intents = controller.intents();
        drop(controller);

        // No panic, no effect.
        intents.open_movie(1);
        intents.go_back();
        intents.select_tab(Tab::Search);
    }
}
