use dioxus::prelude::*;
use shared_types::Prescription;
use shared_ui::{
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader,
    DataTableRow,
};

use super::StatusBadge;
use crate::format_helpers::{format_date_human, pluralize};

/// Prescriptions list. Pharmacists see the patient column, patients see the
/// prescriber instead.
#[component]
pub fn PrescriptionTable(prescriptions: Vec<Prescription>, show_patient: bool) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                if show_patient {
                    DataTableColumn { "Patient" }
                }
                DataTableColumn { "Medication" }
                DataTableColumn { "Dosage" }
                DataTableColumn { "Frequency" }
                if !show_patient {
                    DataTableColumn { "Prescribed By" }
                }
                DataTableColumn { "Issued" }
                DataTableColumn { "Refills" }
                DataTableColumn { "Status" }
            }
            DataTableBody {
                if prescriptions.is_empty() {
                    DataTableEmpty { columns: 7, message: "No prescriptions." }
                }
                for rx in prescriptions {
                    DataTableRow { key: "{rx.id}",
                        if show_patient {
                            DataTableCell { "{rx.patient_name}" }
                        }
                        DataTableCell { "{rx.medication}" }
                        DataTableCell { "{rx.dosage}" }
                        DataTableCell { "{rx.frequency}" }
                        if !show_patient {
                            DataTableCell { "{rx.prescribed_by}" }
                        }
                        DataTableCell { {format_date_human(rx.issued_on)} }
                        DataTableCell {
                            {pluralize(rx.refills_remaining as usize, "refill", "refills")}
                        }
                        DataTableCell {
                            StatusBadge { label: rx.status.label(), tone: rx.status.tone() }
                        }
                    }
                }
            }
        }
    }
}
