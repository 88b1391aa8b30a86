use dioxus::prelude::*;

use crate::auth::use_current_role;
use crate::routes::{dashboard_home, Route};

/// 404 Not Found page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    let (target, label) = match use_current_role() {
        Some(role) => (dashboard_home(role), "Go to my dashboard"),
        None => (Route::Login {}, "Go to sign in"),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message",
                    "Nothing lives at "
                    code { "{path}" }
                    "."
                }
                Link { to: target, class: "not-found-link", "{label}" }
            }
        }
    }
}
