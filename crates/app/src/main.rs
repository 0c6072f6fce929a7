use dioxus::prelude::*;
use shared_types::AppConfig;

mod config;
mod routes;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Registration settings come from the embedded config.toml
    use_context_provider(|| -> AppConfig { config::app_config().clone() });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
