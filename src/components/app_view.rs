//! Defines the routes of the application.

use dioxus::prelude::*;

use crate::components::Songs;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum AppView {
    #[redirect("/", || AppView::Songs { data: String::new() })]
    #[route("/songs?:data")]
    Songs { data: String },
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::Songs { .. } => "Songs",
    }
}
