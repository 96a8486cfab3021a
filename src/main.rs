use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod diagnostics;
mod downloads;

use components::AppView;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Stylesheet { href: APP_CSS }

        Router::<AppView> {}
    }
}
