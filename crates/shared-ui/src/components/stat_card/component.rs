use dioxus::prelude::*;

/// Headline number on a role dashboard, e.g. "Upcoming appointments: 3".
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] hint: Option<String>,
    #[props(default)] icon: Option<Element>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-card",
            div { class: "stat-card-top",
                span { class: "stat-card-label", "{label}" }
                if let Some(icon) = icon {
                    span { class: "stat-card-icon", {icon} }
                }
            }
            span { class: "stat-card-value", "{value}" }
            if let Some(hint) = hint {
                span { class: "stat-card-hint", "{hint}" }
            }
        }
    }
}

/// Responsive row of [`StatCard`]s.
#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        div { class: "stat-grid", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_card_shows_label_value_and_hint() {
        fn app() -> Element {
            rsx! {
                StatGrid {
                    StatCard {
                        label: "Active prescriptions",
                        value: "4",
                        hint: "2 refills due",
                    }
                }
            }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("Active prescriptions"));
        assert!(html.contains(r#"<span class="stat-card-value">4</span>"#), "{html}");
        assert!(html.contains("2 refills due"));
    }
}
