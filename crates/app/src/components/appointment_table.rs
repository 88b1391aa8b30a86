use dioxus::prelude::*;
use shared_types::Appointment;
use shared_ui::{
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader,
    DataTableRow,
};

use super::StatusBadge;
use crate::format_helpers::{format_day_relative, format_time_human, today};

/// Which counterpart column an appointment table shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Counterpart {
    /// Patients see who they are booked with.
    Doctor,
    /// Clinicians see who is coming in.
    Patient,
}

fn counterpart_name(appt: &Appointment, counterpart: Counterpart) -> String {
    match counterpart {
        Counterpart::Doctor => appt.doctor_name.clone(),
        Counterpart::Patient => appt.patient_name.clone(),
    }
}

#[component]
pub fn AppointmentTable(
    appointments: Vec<Appointment>,
    counterpart: Counterpart,
    #[props(default = "No appointments.".to_string())] empty_message: String,
) -> Element {
    let today = today();
    let who = match counterpart {
        Counterpart::Doctor => "Doctor",
        Counterpart::Patient => "Patient",
    };

    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Date" }
                DataTableColumn { "Time" }
                DataTableColumn { "{who}" }
                DataTableColumn { "Department" }
                DataTableColumn { "Reason" }
                DataTableColumn { "Status" }
            }
            DataTableBody {
                if appointments.is_empty() {
                    DataTableEmpty { columns: 6, message: empty_message }
                }
                for appt in appointments {
                    DataTableRow { key: "{appt.id}",
                        DataTableCell { {format_day_relative(appt.date, today)} }
                        DataTableCell { {format_time_human(appt.time)} }
                        DataTableCell { {counterpart_name(&appt, counterpart)} }
                        DataTableCell { "{appt.department}" }
                        DataTableCell { "{appt.reason}" }
                        DataTableCell {
                            StatusBadge { label: appt.status.label(), tone: appt.status.tone() }
                        }
                    }
                }
            }
        }
    }
}
