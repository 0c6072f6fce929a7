pub mod not_found;
pub mod registration;

use dioxus::prelude::*;

use not_found::NotFound;
use registration::RegisterKolideDetails;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[redirect("/", || Route::RegisterKolideDetails {})]
    #[route("/register/kolide")]
    RegisterKolideDetails {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
