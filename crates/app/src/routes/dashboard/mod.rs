pub mod admin;
pub mod doctor;
pub mod lab;
pub mod patient;
pub mod pharmacist;
pub mod records;

use dioxus::prelude::*;

use crate::auth::use_auth;

/// First name of the signed-in user for page greetings.
pub(crate) fn use_first_name() -> String {
    let auth = use_auth();
    let name = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.first_name.clone())
        .unwrap_or_default();
    name
}

/// Card-wrapped section of a dashboard page with an optional "View all" link.
#[component]
pub(crate) fn DashboardSection(
    title: String,
    #[props(default)] description: Option<String>,
    #[props(default)] view_all: Option<crate::routes::Route>,
    children: Element,
) -> Element {
    rsx! {
        shared_ui::Card { class: "dashboard-section",
            shared_ui::CardHeader {
                title,
                description,
                action: view_all.map(|to| rsx! {
                    Link { to, class: "dashboard-view-all", "View all" }
                }),
            }
            shared_ui::CardContent { {children} }
        }
    }
}
