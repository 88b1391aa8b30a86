use dioxus::prelude::*;
use shared_types::{InventoryItem, PrescriptionStatus};
use shared_ui::{
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader,
    DataTableRow, PageHeader, StatCard, StatGrid,
};

use super::records::{inventory, pharmacy_prescriptions};
use super::{use_first_name, DashboardSection};
use crate::components::{PrescriptionTable, StatusBadge};
use crate::format_helpers::{format_date_human, today};
use crate::routes::Route;

fn needs_reorder(items: &[InventoryItem]) -> Vec<InventoryItem> {
    items.iter().filter(|i| i.is_low_stock()).cloned().collect()
}

#[component]
pub fn PharmacistDashboard() -> Element {
    let first_name = use_first_name();
    let today = today();
    let prescriptions = pharmacy_prescriptions(today);
    let pending: Vec<_> = prescriptions
        .iter()
        .filter(|p| p.status == PrescriptionStatus::Pending)
        .cloned()
        .collect();
    let dispensed = prescriptions
        .iter()
        .filter(|p| p.status == PrescriptionStatus::Dispensed)
        .count();
    let pending_count = pending.len();
    let stock = inventory(today);
    let low = needs_reorder(&stock);
    let low_count = low.len();
    let stocked = format!("of {} stocked", stock.len());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            title: "Pharmacy",
            subtitle: "Signed in as {first_name}",
        }

        StatGrid {
            StatCard {
                label: "Waiting to dispense",
                value: "{pending_count}",
            }
            StatCard { label: "Dispensed", value: "{dispensed}" }
            StatCard {
                label: "Low stock lines",
                value: "{low_count}",
                hint: stocked,
            }
        }

        div { class: "dashboard-columns",
            DashboardSection {
                title: "Dispensing Queue",
                view_all: Route::PharmacistPrescriptions {},
                PrescriptionTable { prescriptions: pending, show_patient: true }
            }
            DashboardSection {
                title: "Reorder Soon",
                view_all: Route::PharmacistInventory {},
                InventoryTable { items: low }
            }
        }
    }
}

#[component]
pub fn PharmacistPrescriptions() -> Element {
    let prescriptions = pharmacy_prescriptions(today());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        PageHeader {
            title: "Prescriptions",
            subtitle: "Orders sent to the pharmacy",
        }
        DashboardSection { title: "All Prescriptions",
            PrescriptionTable { prescriptions, show_patient: true }
        }
    }
}

#[component]
pub fn PharmacistInventory() -> Element {
    let items = inventory(today());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        PageHeader {
            title: "Inventory",
            subtitle: "Stock on hand and reorder levels",
        }
        DashboardSection { title: "Stock",
            InventoryTable { items }
        }
    }
}

#[component]
fn InventoryTable(items: Vec<InventoryItem>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Item" }
                DataTableColumn { "Category" }
                DataTableColumn { "On Hand" }
                DataTableColumn { "Reorder At" }
                DataTableColumn { "Expires" }
                DataTableColumn { "Status" }
            }
            DataTableBody {
                if items.is_empty() {
                    DataTableEmpty { columns: 6, message: "All lines are well stocked." }
                }
                for item in items {
                    DataTableRow { key: "{item.name}",
                        DataTableCell { "{item.name}" }
                        DataTableCell { "{item.category}" }
                        DataTableCell { "{item.stock}" }
                        DataTableCell { "{item.reorder_level}" }
                        DataTableCell { {format_date_human(item.expires_on)} }
                        DataTableCell {
                            StatusBadge { label: item.stock_label(), tone: item.stock_tone() }
                        }
                    }
                }
            }
        }
    }
}
