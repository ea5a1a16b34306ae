//! A scripted session against the navigation model: browse, open a movie,
//! write a review, then unwind everything with back presses.
//!
//! Watch the decisions with logging enabled:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example movie_flow
//! ```

use movienav::{BackDispatcher, EdgeInsets, NavController, ScreenRenderers, ShellFrame, Tab};

fn print_frame(label: &str, frame: &ShellFrame<String>) {
    let header = frame.header.map_or("-".to_string(), |header| {
        if header.shows_back {
            format!("[{}] {}", header.back_label, header.title)
        } else {
            header.title.to_string()
        }
    });
    let tabs = frame.tab_bar.map_or("-".to_string(), |bar| {
        bar.items
            .iter()
            .map(|item| {
                if item.active {
                    format!("[{}]", item.label)
                } else {
                    item.label.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    });
    println!(
        "{label:<18} | header: {header:<22} | screen: {screen:<26} | tabs: {tabs:<19} | bottom inset: {bottom}",
        screen = frame.content.as_deref().unwrap_or("-"),
        bottom = frame.insets.bottom,
    );
}

fn main() {
    env_logger::init();

    let dispatcher = BackDispatcher::new();
    let controller = NavController::new();
    controller.activate(&dispatcher);

    let renderers = ScreenRenderers::new()
        .home(|tab, _intents| match tab {
            Tab::Popular => "popular movie list".to_string(),
            Tab::Search => "search box".to_string(),
        })
        .movie_details(|movie_id, _intents| format!("details for movie #{movie_id}"))
        .post_review(|movie_id, title, _intents| format!("review form: {title} (#{movie_id})"));

    // A notched phone reporting a slim bottom inset; the shell floors it.
    let insets = EdgeInsets::new(47.0, 0.0, 8.0, 0.0);
    let show = |label: &str| print_frame(label, &ShellFrame::compose(&controller, &renderers, insets));

    show("app launch");

    controller.select_tab(Tab::Search);
    show("switch to search");

    controller.open_movie(603);
    show("open a movie");

    controller.open_post_review(603, "The Matrix");
    show("write a review");

    while dispatcher.emit().is_handled() {
        show("press back");
    }
    println!("one more back press reaches the platform: the app would exit");

    controller.deactivate();
}
