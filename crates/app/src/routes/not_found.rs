use dioxus::prelude::*;

use crate::routes::Route;

/// 404 page for any path outside the registration flow.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { "Page Not Found" }
                p {
                    "Nothing lives at "
                    code { "{path}" }
                    "."
                }
                Link { to: Route::RegisterKolideDetails {},
                    class: "not-found-link",
                    "Continue registration"
                }
            }
        }
    }
}
