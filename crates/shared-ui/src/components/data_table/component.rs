use dioxus::prelude::*;

/// Scrollable table wrapper with co-located styles.
#[component]
pub fn DataTable(#[props(default)] caption: Option<String>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                if let Some(caption) = caption {
                    caption { class: "data-table-caption", "{caption}" }
                }
                {children}
            }
        }
    }
}

/// Table header section. Wraps `th` elements in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { scope: "col", {children} }
    }
}

/// Table row; highlighted when `selected`, clickable when `onclick` is set.
#[component]
pub fn DataTableRow(
    #[props(default)] selected: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let class = match (onclick.is_some(), selected) {
        (true, true) => "data-table-row clickable selected",
        (true, false) => "data-table-row clickable",
        (false, true) => "data-table-row selected",
        (false, false) => "data-table-row",
    };
    rsx! {
        tr {
            class: "{class}",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

/// Full-width row shown when a table has no records.
#[component]
pub fn DataTableEmpty(columns: usize, message: String) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan: "{columns}", "{message}" }
        }
    }
}
