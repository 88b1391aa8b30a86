use dioxus::prelude::*;

/// Pulsing placeholder shown while a session or page data loads.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![
        Attribute::new("class", "skeleton", None, false),
        Attribute::new("aria-hidden", "true", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}
