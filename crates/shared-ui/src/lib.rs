//! Dioxus component library for the CareDesk dashboards.
//!
//! Each component lives in `components/<name>/` with its stylesheet next to
//! it and loads that stylesheet itself.

pub mod components;

pub use components::*;
