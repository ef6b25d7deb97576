use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFoundPage(route: Vec<String>) -> Element {
    let path = route.join("/");

    rsx! {
        div { class: "page-body not-found",
            h1 { "Page not found" }
            p { "There is nothing at /{path}." }
            Link { to: Route::Dashboard {}, "Back to the dashboard" }
        }
    }
}
