//! Derived chrome: header, tab bar, and safe-area values.
//!
//! Nothing here is stored. Every value is recomputed from the current
//! navigation state on demand, so the chrome can never drift out of sync
//! with the stack. Styling is the embedding's business; this module only
//! says *what* to show.

use crate::route::{RouteKind, Tab};

/// Label on the header's back button.
pub const BACK_BUTTON_LABEL: &str = "Back";

/// Smallest bottom inset the shell will render with.
///
/// Devices without a bottom safe area report 0, which puts the tab bar flush
/// against the screen edge; 12 units keeps it comfortably tappable.
pub const MIN_BOTTOM_INSET: f32 = 12.0;

/// Header title for a screen.
///
/// Keyed on the route tag alone — payloads never influence the title, so
/// the derivation is total and allocation-free.
pub fn header_title(kind: RouteKind) -> &'static str {
    match kind {
        RouteKind::Home => "Movie Discovery",
        RouteKind::MovieDetails => "Movie details",
        RouteKind::PostReview => "Write review",
    }
}

// ============================================================================
// Header
// ============================================================================

/// What the header row shows for a given screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderModel {
    /// Title text.
    pub title: &'static str,
    /// Whether a back affordance belongs next to the title.
    pub shows_back: bool,
    /// Label of the back affordance when shown.
    pub back_label: &'static str,
}

impl HeaderModel {
    /// Derive the header for a screen.
    pub fn for_kind(kind: RouteKind) -> Self {
        Self {
            title: header_title(kind),
            shows_back: kind != RouteKind::Home,
            back_label: BACK_BUTTON_LABEL,
        }
    }
}

// ============================================================================
// Tab bar
// ============================================================================

/// One button in the home tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabItem {
    /// Tab this button selects.
    pub tab: Tab,
    /// Button label.
    pub label: &'static str,
    /// Whether this tab is the active one.
    pub active: bool,
}

/// The home screen's tab bar: both buttons with the active one flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBarModel {
    /// Buttons in display order.
    pub items: [TabItem; 2],
}

impl TabBarModel {
    /// Derive the tab bar for the given active tab.
    pub fn for_active(active: Tab) -> Self {
        let item = |tab: Tab| TabItem {
            tab,
            label: tab.label(),
            active: tab == active,
        };
        Self {
            items: [item(Tab::Popular), item(Tab::Search)],
        }
    }
}

// ============================================================================
// Safe area
// ============================================================================

/// Safe-area insets reported by the platform, in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl EdgeInsets {
    /// Insets in clockwise order from the top.
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// All edges zero, as on a device without notches or gesture bars.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Apply the bottom floor: a reported bottom inset below
    /// [`MIN_BOTTOM_INSET`] is raised to it, larger values and the other
    /// three edges pass through untouched.
    pub fn resolve(self) -> Self {
        Self {
            bottom: self.bottom.max(MIN_BOTTOM_INSET),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_per_screen() {
        assert_eq!(header_title(RouteKind::Home), "Movie Discovery");
        assert_eq!(header_title(RouteKind::MovieDetails), "Movie details");
        assert_eq!(header_title(RouteKind::PostReview), "Write review");
    }

    #[test]
    fn test_header_shows_back_only_off_home() {
        assert!(!HeaderModel::for_kind(RouteKind::Home).shows_back);
        assert!(HeaderModel::for_kind(RouteKind::MovieDetails).shows_back);
        assert!(HeaderModel::for_kind(RouteKind::PostReview).shows_back);
        assert_eq!(HeaderModel::for_kind(RouteKind::PostReview).back_label, "Back");
    }

    #[test]
    fn test_tab_bar_flags_active_tab() {
        let bar = TabBarModel::for_active(Tab::Search);

        assert_eq!(bar.items[0].tab, Tab::Popular);
        assert!(!bar.items[0].active);
        assert_eq!(bar.items[1].tab, Tab::Search);
        assert!(bar.items[1].active);
        assert_eq!(bar.items[0].label, "Popular");
        assert_eq!(bar.items[1].label, "Search");
    }

    #[test]
    fn test_bottom_inset_floor() {
        let raised = EdgeInsets::new(44.0, 0.0, 8.0, 0.0).resolve();
        assert_eq!(raised.bottom, 12.0);
        assert_eq!(raised.top, 44.0);

        let untouched = EdgeInsets::new(44.0, 0.0, 34.0, 0.0).resolve();
        assert_eq!(untouched.bottom, 34.0);

        assert_eq!(EdgeInsets::zero().resolve().bottom, MIN_BOTTOM_INSET);
        // Exactly at the floor passes through.
        assert_eq!(EdgeInsets::new(0.0, 0.0, 12.0, 0.0).resolve().bottom, 12.0);
    }
}
