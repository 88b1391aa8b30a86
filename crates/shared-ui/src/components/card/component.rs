use dioxus::prelude::*;

/// Bordered surface grouping related dashboard content.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section {
            ..merged,
            {children}
        }
    }
}

/// Card header with a title, optional description and optional trailing action.
#[component]
pub fn CardHeader(
    title: String,
    #[props(default)] description: Option<String>,
    #[props(default)] action: Option<Element>,
) -> Element {
    rsx! {
        header { class: "card-header",
            div { class: "card-heading",
                h3 { class: "card-title", "{title}" }
                if let Some(description) = description {
                    p { class: "card-description", "{description}" }
                }
            }
            if let Some(action) = action {
                div { class: "card-action", {action} }
            }
        }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        footer { class: "card-footer", {children} }
    }
}
