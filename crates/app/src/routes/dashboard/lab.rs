use dioxus::prelude::*;
use shared_types::{LabPriority, LabTestStatus};
use shared_ui::{PageHeader, StatCard, StatGrid};

use super::records::{lab_queue, open_tests};
use super::{use_first_name, DashboardSection};
use crate::components::LabTestTable;
use crate::format_helpers::today;
use crate::routes::Route;

#[component]
pub fn LabDashboard() -> Element {
    let first_name = use_first_name();
    let tests = lab_queue(today());
    let open = open_tests(&tests);
    let stat = open.iter().filter(|t| t.priority == LabPriority::Stat).count();
    let awaiting_sample = open
        .iter()
        .filter(|t| t.status == LabTestStatus::Requested)
        .count();
    let open_count = open.len();
    let completed = tests.len() - open_count;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            title: "Laboratory",
            subtitle: "Signed in as {first_name}",
        }

        StatGrid {
            StatCard { label: "Open orders", value: "{open_count}" }
            StatCard {
                label: "STAT",
                value: "{stat}",
                hint: "Process immediately",
            }
            StatCard { label: "Awaiting sample", value: "{awaiting_sample}" }
            StatCard { label: "Completed", value: "{completed}" }
        }

        DashboardSection {
            title: "Priority Queue",
            description: "Open orders, most urgent first",
            view_all: Route::LabTests {},
            LabTestTable { tests: open, technician_view: true }
        }
    }
}

#[component]
pub fn LabTests() -> Element {
    let tests = lab_queue(today());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        PageHeader {
            title: "Test Queue",
            subtitle: "Every order received by the laboratory",
        }
        DashboardSection { title: "All Orders",
            LabTestTable { tests, technician_view: true }
        }
    }
}
