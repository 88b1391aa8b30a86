use dioxus::prelude::*;
use shared_types::LabTest;
use shared_ui::{
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader,
    DataTableRow,
};

use super::StatusBadge;
use crate::format_helpers::format_date_human;

/// Lab orders. The technician view adds patient and priority columns; the
/// patient view shows results.
#[component]
pub fn LabTestTable(tests: Vec<LabTest>, technician_view: bool) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                if technician_view {
                    DataTableColumn { "Patient" }
                }
                DataTableColumn { "Test" }
                DataTableColumn { "Requested By" }
                DataTableColumn { "Requested" }
                if technician_view {
                    DataTableColumn { "Priority" }
                }
                DataTableColumn { "Status" }
                if !technician_view {
                    DataTableColumn { "Result" }
                }
            }
            DataTableBody {
                if tests.is_empty() {
                    DataTableEmpty { columns: 6, message: "No lab tests." }
                }
                for test in tests {
                    DataTableRow { key: "{test.id}",
                        if technician_view {
                            DataTableCell { "{test.patient_name}" }
                        }
                        DataTableCell { "{test.test_name}" }
                        DataTableCell { "{test.requested_by}" }
                        DataTableCell { {format_date_human(test.requested_on)} }
                        if technician_view {
                            DataTableCell {
                                StatusBadge { label: test.priority.label(), tone: test.priority.tone() }
                            }
                        }
                        DataTableCell {
                            StatusBadge { label: test.status.label(), tone: test.status.tone() }
                        }
                        if !technician_view {
                            DataTableCell {
                                {test.result.clone().unwrap_or_else(|| "Pending".to_string())}
                            }
                        }
                    }
                }
            }
        }
    }
}
