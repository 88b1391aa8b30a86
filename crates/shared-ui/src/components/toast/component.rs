use dioxus::prelude::*;
use dioxus_primitives::toast as prim;

pub use dioxus_primitives::toast::{use_toast, ToastOptions, Toasts};

/// Mounts the toast region. Place once near the root of the app.
#[component]
pub fn ToastProvider(props: prim::ToastProviderProps) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::ToastProvider { ..props }
    }
}
