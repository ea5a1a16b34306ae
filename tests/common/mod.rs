//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use movienav::*;

/// Controller wired to a fresh dispatcher, the way the shell does at mount.
pub fn active_controller() -> (NavController, BackDispatcher) {
    let dispatcher = BackDispatcher::new();
    let controller = NavController::new();
    controller.activate(&dispatcher);
    (controller, dispatcher)
}

/// Renderers producing readable string tags, standing in for real screens.
pub fn string_renderers() -> ScreenRenderers<String> {
    ScreenRenderers::new()
        .home(|tab, _intents| format!("home:{tab}"))
        .movie_details(|movie_id, _intents| format!("details:{movie_id}"))
        .post_review(|movie_id, title, _intents| format!("review:{movie_id}:{title}"))
}

/// Drive the app from home to the review composer for one movie.
pub fn walk_to_review(controller: &NavController, movie_id: MovieId, title: &str) {
    controller.open_movie(movie_id);
    controller.open_post_review(movie_id, title);
}

/// Compose a frame with zero reported insets and return the content tag.
pub fn content_tag(controller: &NavController, renderers: &ScreenRenderers<String>) -> String {
    ShellFrame::compose(controller, renderers, EdgeInsets::zero())
        .content
        .unwrap_or_else(|| "<none>".to_string())
}
