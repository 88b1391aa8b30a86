use dioxus::prelude::*;
use shared_types::{AppointmentSummary, PrescriptionStatus};
use shared_ui::{PageHeader, StatCard, StatGrid};

use super::records::{patient_appointments, patient_lab_results, patient_prescriptions, upcoming};
use super::{use_first_name, DashboardSection};
use crate::components::{AppointmentTable, Counterpart, LabTestTable, PrescriptionTable};
use crate::format_helpers::{format_day_relative, pluralize, today};
use crate::routes::Route;

#[component]
pub fn PatientDashboard() -> Element {
    let first_name = use_first_name();
    let today = today();
    let appointments = patient_appointments(today);
    let summary = AppointmentSummary::from_appointments(&appointments);
    let next = upcoming(&appointments, today);
    let prescriptions = patient_prescriptions(today);
    let refills: u32 = prescriptions.iter().map(|p| p.refills_remaining).sum();
    let results = patient_lab_results(today);
    let ready = results.iter().filter(|t| t.result.is_some()).count();

    let results_hint = format!("of {}", pluralize(results.len(), "test", "tests"));
    let current_rx: Vec<_> = prescriptions
        .iter()
        .filter(|p| p.status == PrescriptionStatus::Active)
        .cloned()
        .collect();
    let active_rx = current_rx.len();
    let next_hint = next
        .first()
        .map(|a| format!("Next: {}", format_day_relative(a.date, today)));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            title: "Welcome back, {first_name}",
            subtitle: "Your care at a glance",
        }

        StatGrid {
            StatCard {
                label: "Upcoming appointments",
                value: "{summary.upcoming}",
                hint: next_hint,
            }
            StatCard {
                label: "Active prescriptions",
                value: "{active_rx}",
                hint: pluralize(refills as usize, "refill left", "refills left"),
            }
            StatCard {
                label: "Lab results ready",
                value: "{ready}",
                hint: results_hint,
            }
        }

        div { class: "dashboard-columns",
            DashboardSection {
                title: "Upcoming Appointments",
                view_all: Route::PatientAppointments {},
                AppointmentTable {
                    appointments: next,
                    counterpart: Counterpart::Doctor,
                    empty_message: "Nothing booked.",
                }
            }
            DashboardSection {
                title: "Current Medication",
                view_all: Route::PatientPrescriptions {},
                PrescriptionTable {
                    prescriptions: current_rx,
                    show_patient: false,
                }
            }
        }
    }
}

#[component]
pub fn PatientAppointments() -> Element {
    let appointments = patient_appointments(today());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        PageHeader {
            title: "Appointments",
            subtitle: "Past and upcoming visits",
        }
        DashboardSection { title: "All Appointments",
            AppointmentTable { appointments, counterpart: Counterpart::Doctor }
        }
    }
}

#[component]
pub fn PatientPrescriptions() -> Element {
    let prescriptions = patient_prescriptions(today());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        PageHeader {
            title: "Prescriptions",
            subtitle: "Medication prescribed to you",
        }
        DashboardSection { title: "My Prescriptions",
            PrescriptionTable { prescriptions, show_patient: false }
        }
    }
}

#[component]
pub fn PatientLabResults() -> Element {
    let tests = patient_lab_results(today());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        PageHeader {
            title: "Lab Results",
            subtitle: "Results appear once the laboratory signs them off",
        }
        DashboardSection { title: "My Tests",
            LabTestTable { tests, technician_view: false }
        }
    }
}
