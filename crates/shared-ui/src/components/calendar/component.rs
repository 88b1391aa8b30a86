use dioxus::prelude::*;
use dioxus_primitives::calendar as prim;

pub use time::{Date, Month, UtcDateTime};

#[component]
pub fn Calendar(mut props: prim::CalendarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "med-calendar", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Calendar { ..props }
    }
}

#[component]
pub fn CalendarHeader(mut props: prim::CalendarHeaderProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "med-calendar-header", None, false));

    rsx! {
        prim::CalendarHeader { ..props }
    }
}

#[component]
pub fn CalendarNavigation(mut props: prim::CalendarNavigationProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "med-calendar-navigation",
        None,
        false,
    ));

    rsx! {
        prim::CalendarNavigation { ..props }
    }
}

#[component]
pub fn CalendarPreviousMonthButton(mut props: prim::CalendarPreviousMonthButtonProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "med-calendar-nav-btn", None, false));

    rsx! {
        prim::CalendarPreviousMonthButton { ..props }
    }
}

#[component]
pub fn CalendarNextMonthButton(mut props: prim::CalendarNextMonthButtonProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "med-calendar-nav-btn", None, false));

    rsx! {
        prim::CalendarNextMonthButton { ..props }
    }
}

#[component]
pub fn CalendarMonthTitle(mut props: prim::CalendarMonthTitleProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "med-calendar-month-title",
        None,
        false,
    ));

    rsx! {
        prim::CalendarMonthTitle { ..props }
    }
}

#[component]
pub fn CalendarGrid(mut props: prim::CalendarGridProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "med-calendar-grid", None, false));

    rsx! {
        prim::CalendarGrid { ..props }
    }
}

/// Convert a calendar date into the `chrono` date used by appointment records.
pub fn to_naive_date(date: Date) -> Option<chrono::NaiveDate> {
    chrono::NaiveDate::from_ymd_opt(date.year(), u8::from(date.month()) as u32, date.day() as u32)
}

/// Convert an appointment date into the `time` date the calendar works with.
pub fn from_naive_date(date: chrono::NaiveDate) -> Option<Date> {
    use chrono::Datelike;
    let month = Month::try_from(date.month() as u8).ok()?;
    Date::from_calendar_date(date.year(), month, date.day() as u8).ok()
}
