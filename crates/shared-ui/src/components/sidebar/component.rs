use dioxus::prelude::*;

/// Whether the sidebar is expanded. On narrow viewports it overlays the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

/// Provides sidebar state to the sidebar, its trigger and its menu buttons.
#[component]
pub fn SidebarProvider(#[props(default = true)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-open": if state().open { "true" } else { "false" },
            {children}
        }
    }
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let is_open = state().open;

    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new(
            "data-state",
            if is_open { "open" } else { "closed" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        if is_open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.set(SidebarState { open: false }),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

/// Brand block at the top of the sidebar.
#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-header", {children} }
    }
}

#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        nav { class: "sidebar-content", {children} }
    }
}

#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

/// Labelled group of menu entries.
#[component]
pub fn SidebarGroup(label: String, children: Element) -> Element {
    rsx! {
        div { class: "sidebar-group",
            div { class: "sidebar-group-label", "{label}" }
            ul { class: "sidebar-menu", {children} }
        }
    }
}

#[component]
pub fn SidebarMenuItem(children: Element) -> Element {
    rsx! {
        li { class: "sidebar-menu-item", {children} }
    }
}

/// Menu entry. Collapses the sidebar on click so overlay mode gets out of
/// the way after navigation.
#[component]
pub fn SidebarMenuButton(#[props(default = false)] active: bool, children: Element) -> Element {
    let mut state = use_sidebar();

    rsx! {
        button {
            class: "sidebar-menu-button",
            r#type: "button",
            "data-active": if active { "true" } else { "false" },
            "aria-current": if active { "page" } else { "false" },
            onclick: move |_| state.set(SidebarState { open: false }),
            {children}
        }
    }
}

/// Toggle button that opens or closes the sidebar.
#[component]
pub fn SidebarTrigger(children: Element) -> Element {
    let mut state = use_sidebar();

    rsx! {
        button {
            class: "sidebar-trigger",
            r#type: "button",
            "aria-label": "Toggle navigation",
            onclick: move |_| {
                let open = state().open;
                state.set(SidebarState { open: !open });
            },
            {children}
        }
    }
}

/// Main column next to the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        main { class: "sidebar-inset", {children} }
    }
}
