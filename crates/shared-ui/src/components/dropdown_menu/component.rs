use dioxus::prelude::*;
use dioxus_primitives::dropdown_menu as prim;

#[component]
pub fn DropdownMenu(mut props: prim::DropdownMenuProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "med-dropdown-menu", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DropdownMenu { ..props }
    }
}

#[component]
pub fn DropdownMenuTrigger(mut props: prim::DropdownMenuTriggerProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "med-dropdown-menu-trigger",
        None,
        false,
    ));

    rsx! {
        prim::DropdownMenuTrigger { ..props }
    }
}

#[component]
pub fn DropdownMenuContent(mut props: prim::DropdownMenuContentProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "med-dropdown-menu-content",
        None,
        false,
    ));

    rsx! {
        prim::DropdownMenuContent { ..props }
    }
}

#[component]
pub fn DropdownMenuItem<T: Clone + PartialEq + 'static>(
    mut props: prim::DropdownMenuItemProps<T>,
) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "med-dropdown-menu-item",
        None,
        false,
    ));

    rsx! {
        prim::DropdownMenuItem { ..props }
    }
}

/// Non-interactive heading at the top of a menu, e.g. the signed-in user.
#[component]
pub fn DropdownMenuLabel(title: String, #[props(default)] subtitle: Option<String>) -> Element {
    rsx! {
        div { class: "med-dropdown-menu-label",
            span { class: "med-dropdown-menu-label-title", "{title}" }
            if let Some(subtitle) = subtitle {
                span { class: "med-dropdown-menu-label-subtitle", "{subtitle}" }
            }
        }
    }
}

#[component]
pub fn DropdownMenuSeparator() -> Element {
    rsx! {
        div { class: "med-dropdown-menu-separator", role: "separator" }
    }
}
