use dioxus::prelude::*;

/// Labelled text input with an inline validation message. `name` doubles as
/// the element id the label and error message point at.
#[component]
pub fn Input(
    #[props(default)] name: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] autocomplete: String,
    #[props(default = false)] disabled: bool,
    /// Message shown under the field; also marks the input invalid.
    #[props(default)]
    error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let error_id = format!("{name}-error");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", r#for: "{name}", "{label}" }
            }
            input {
                id: "{name}",
                name: "{name}",
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                autocomplete: autocomplete,
                disabled: disabled,
                "aria-invalid": if error.is_some() { "true" } else { "false" },
                "aria-describedby": if error.is_some() { error_id.clone() } else { String::new() },
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(message) = error {
                p { class: "input-error", id: "{error_id}", role: "alert", "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_marks_input_invalid() {
        fn app() -> Element {
            rsx! {
                Input {
                    name: "email",
                    label: "Email",
                    error: Some("Enter a valid email address".to_string()),
                }
            }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains(r#"aria-invalid="true""#), "{html}");
        assert!(html.contains("Enter a valid email address"));
        assert!(html.contains(r#"id="email-error""#), "{html}");
    }

    #[test]
    fn no_error_renders_no_message() {
        fn app() -> Element {
            rsx! { Input { name: "password", input_type: "password" } }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains(r#"aria-invalid="false""#), "{html}");
        assert!(!html.contains("input-error"));
    }
}
