use dioxus::prelude::*;
use dioxus_primitives::avatar as prim;

#[component]
pub fn Avatar(mut props: prim::AvatarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "med-avatar", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Avatar { ..props }
    }
}

#[component]
pub fn AvatarFallback(mut props: prim::AvatarFallbackProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "med-avatar-fallback", None, false));

    rsx! {
        prim::AvatarFallback { ..props }
    }
}

/// Avatar showing a user's initials. Used in the dashboard header.
#[component]
pub fn InitialsAvatar(initials: String) -> Element {
    rsx! {
        Avatar {
            AvatarFallback { "{initials}" }
        }
    }
}
