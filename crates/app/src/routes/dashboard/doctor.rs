use dioxus::prelude::*;
use shared_types::{AppointmentStatus, AppointmentSummary};
use shared_ui::{
    from_naive_date, to_naive_date, Calendar, CalendarGrid, CalendarHeader, CalendarMonthTitle,
    CalendarNavigation, CalendarNextMonthButton, CalendarPreviousMonthButton, Date, PageHeader,
    StatCard, StatGrid, UtcDateTime,
};

use super::records::{doctor_appointments, lab_queue, on_date, open_tests, upcoming};
use super::{use_first_name, DashboardSection};
use crate::components::{AppointmentTable, Counterpart};
use crate::format_helpers::{format_date_human, pluralize, today};
use crate::routes::Route;

#[component]
pub fn DoctorDashboard() -> Element {
    let first_name = use_first_name();
    let today = today();
    let appointments = doctor_appointments(today);
    let summary = AppointmentSummary::from_appointments(&appointments);
    let todays = on_date(&appointments, today);
    let todays_count = todays.len();
    let checked_in = todays
        .iter()
        .filter(|a| a.status == AppointmentStatus::CheckedIn)
        .count();
    let open_labs = open_tests(&lab_queue(today)).len();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            title: "Good day, Dr. {first_name}",
            subtitle: format_date_human(today),
        }

        StatGrid {
            StatCard {
                label: "Today's patients",
                value: "{todays_count}",
                hint: format!("{checked_in} checked in"),
            }
            StatCard {
                label: "Upcoming",
                value: "{summary.upcoming}",
                hint: "Across all clinic days",
            }
            StatCard {
                label: "Completed",
                value: "{summary.completed}",
                hint: pluralize(summary.cancelled, "cancellation", "cancellations"),
            }
            StatCard {
                label: "Open lab orders",
                value: "{open_labs}",
                hint: "Clinic-wide",
            }
        }

        DashboardSection {
            title: "Today's Clinic",
            view_all: Route::DoctorSchedule {},
            AppointmentTable {
                appointments: todays,
                counterpart: Counterpart::Patient,
                empty_message: "No patients booked today.",
            }
        }
    }
}

#[component]
pub fn DoctorAppointments() -> Element {
    let today = today();
    let appointments = upcoming(&doctor_appointments(today), today);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        PageHeader {
            title: "Appointments",
            subtitle: "Upcoming bookings, earliest first",
        }
        DashboardSection { title: "Upcoming",
            AppointmentTable { appointments, counterpart: Counterpart::Patient }
        }
    }
}

/// Month calendar beside the bookings of the picked day.
#[component]
pub fn DoctorSchedule() -> Element {
    let today = today();
    let mut selected_date = use_signal(move || from_naive_date(today));
    let mut view_date = use_signal(|| UtcDateTime::now().date());

    let day = selected_date().and_then(to_naive_date).unwrap_or(today);
    let appointments = on_date(&doctor_appointments(today), day);
    let heading = format_date_human(day);
    let booked = pluralize(appointments.len(), "appointment", "appointments");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        PageHeader {
            title: "Schedule",
            subtitle: "Pick a day to see who is booked",
        }

        div { class: "schedule-layout",
            div { class: "schedule-calendar",
                Calendar {
                    selected_date: selected_date,
                    on_date_change: move |date: Option<Date>| {
                        selected_date.set(date);
                    },
                    view_date: view_date,
                    on_view_change: move |new_view: Date| {
                        view_date.set(new_view);
                    },
                    CalendarHeader {
                        CalendarNavigation {
                            CalendarPreviousMonthButton { "\u{2039}" }
                            CalendarMonthTitle {}
                            CalendarNextMonthButton { "\u{203a}" }
                        }
                    }
                    CalendarGrid {}
                }
            }
            DashboardSection {
                title: heading,
                description: booked,
                AppointmentTable {
                    appointments,
                    counterpart: Counterpart::Patient,
                    empty_message: "Nothing booked on this day.",
                }
            }
        }
    }
}
