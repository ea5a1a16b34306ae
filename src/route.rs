//! Route and tab definitions for the movie discovery app.
//!
//! Navigation targets are a closed set: the route enum is the single source
//! of truth for which screens exist and which payload each one carries.
//! Adding a screen means adding a variant, and the compiler points at every
//! match that needs updating.

use std::fmt;

/// Identifier of a movie in the catalog.
pub type MovieId = u64;

/// A navigation target together with its payload.
///
/// Routes are values, not registered patterns. The history stack stores them
/// directly, so the payload a screen was opened with (movie id, review title)
/// survives any number of pushes and pops above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Tabbed landing screen (popular list / search).
    Home,
    /// Detail screen for a single movie.
    MovieDetails {
        /// Movie being shown.
        movie_id: MovieId,
    },
    /// Review composer for a movie.
    PostReview {
        /// Movie being reviewed.
        movie_id: MovieId,
        /// Display title, carried so the composer needs no catalog lookup.
        movie_title: String,
    },
}

impl Route {
    /// Route for the landing screen.
    pub fn home() -> Self {
        Self::Home
    }

    /// Route for a movie's detail screen.
    pub fn movie_details(movie_id: MovieId) -> Self {
        Self::MovieDetails { movie_id }
    }

    /// Route for the review composer.
    pub fn post_review(movie_id: MovieId, movie_title: impl Into<String>) -> Self {
        Self::PostReview {
            movie_id,
            movie_title: movie_title.into(),
        }
    }

    /// Payload-free discriminant of this route.
    pub fn kind(&self) -> RouteKind {
        match self {
            Self::Home => RouteKind::Home,
            Self::MovieDetails { .. } => RouteKind::MovieDetails,
            Self::PostReview { .. } => RouteKind::PostReview,
        }
    }

    /// Check if this is the landing screen.
    pub fn is_home(&self) -> bool {
        matches!(self, Self::Home)
    }

    /// Movie id carried by this route, if any.
    pub fn movie_id(&self) -> Option<MovieId> {
        match self {
            Self::Home => None,
            Self::MovieDetails { movie_id } | Self::PostReview { movie_id, .. } => Some(*movie_id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "Home"),
            Self::MovieDetails { movie_id } => write!(f, "MovieDetails({movie_id})"),
            Self::PostReview {
                movie_id,
                movie_title,
            } => write!(f, "PostReview({movie_id}, {movie_title:?})"),
        }
    }
}

/// Discriminant of a [`Route`], without its payload.
///
/// Useful where only the screen identity matters (header titles, back-intent
/// decisions) and cloning a payload would be wasteful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
    /// Tabbed landing screen.
    Home,
    /// Movie detail screen.
    MovieDetails,
    /// Review composer.
    PostReview,
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Home => "Home",
            Self::MovieDetails => "MovieDetails",
            Self::PostReview => "PostReview",
        };
        write!(f, "{name}")
    }
}

/// Tab selection on the home screen.
///
/// Tab state lives alongside the history stack rather than inside it:
/// switching tabs never grows the stack, and the selection survives while
/// detail screens are pushed above home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    /// Curated popular-movies list.
    Popular,
    /// Free-text search.
    Search,
}

impl Tab {
    /// User-facing label for the tab bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Popular => "Popular",
            Self::Search => "Search",
        }
    }
}

impl Default for Tab {
    /// The app lands on the popular list.
    fn default() -> Self {
        Self::Popular
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(Route::home().kind(), RouteKind::Home);
        assert_eq!(Route::movie_details(7).kind(), RouteKind::MovieDetails);
        assert_eq!(Route::post_review(7, "Heat").kind(), RouteKind::PostReview);
    }

    #[test]
    fn test_movie_id_payload() {
        assert_eq!(Route::home().movie_id(), None);
        assert_eq!(Route::movie_details(42).movie_id(), Some(42));
        assert_eq!(Route::post_review(42, "Alien").movie_id(), Some(42));
    }

    #[test]
    fn test_display_includes_payload() {
        assert_eq!(Route::movie_details(3).to_string(), "MovieDetails(3)");
        assert_eq!(
            Route::post_review(3, "Dune").to_string(),
            "PostReview(3, \"Dune\")"
        );
    }

    #[test]
    fn test_default_tab_is_popular() {
        assert_eq!(Tab::default(), Tab::Popular);
        assert_eq!(Tab::default().label(), "Popular");
    }
}
