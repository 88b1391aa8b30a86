use dioxus::prelude::*;
use shared_types::{Role, StaffMember, ALL_ROLES};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardFooter, CardHeader, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, PageHeader, StatCard, StatGrid,
};

use super::records::{
    doctor_appointments, inventory, lab_queue, open_tests, pharmacy_prescriptions, staff_directory,
};
use super::{use_first_name, DashboardSection};
use crate::format_helpers::{pluralize, today};
use crate::routes::Route;

fn count_role(staff: &[StaffMember], role: Role) -> usize {
    staff.iter().filter(|s| s.role == role).count()
}

#[component]
pub fn AdminDashboard() -> Element {
    let first_name = use_first_name();
    let today = today();
    let staff = staff_directory();
    let active = staff.iter().filter(|s| s.active).count();
    let appointments = doctor_appointments(today).len();
    let open_labs = open_tests(&lab_queue(today)).len();
    let low_stock = inventory(today).iter().filter(|i| i.is_low_stock()).count();
    let prescriptions = pharmacy_prescriptions(today).len();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            title: "Administration",
            subtitle: "Signed in as {first_name}",
        }

        StatGrid {
            StatCard {
                label: "Accounts",
                value: "{staff.len()}",
                hint: format!("{active} active"),
            }
            StatCard { label: "Clinic bookings", value: "{appointments}" }
            StatCard { label: "Open lab orders", value: "{open_labs}" }
            StatCard {
                label: "Prescriptions",
                value: "{prescriptions}",
                hint: pluralize(low_stock, "stock alert", "stock alerts"),
            }
        }

        DashboardSection {
            title: "Accounts by Role",
            view_all: Route::AdminUsers {},
            ul { class: "role-breakdown",
                for role in ALL_ROLES.iter().copied() {
                    li { key: "{role}",
                        span { "{role.display_name()}" }
                        Badge { variant: BadgeVariant::Secondary, "{count_role(&staff, role)}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AdminUsers() -> Element {
    let staff = staff_directory();
    let mut selected = use_signal(|| Option::<String>::None);
    let detail = selected()
        .and_then(|id| staff.iter().find(|m| m.id == id).cloned());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        PageHeader {
            title: "Users",
            subtitle: "Everyone with an account on the portal",
        }
        div { class: "users-layout",
            DashboardSection { title: "Directory",
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Name" }
                        DataTableColumn { "Email" }
                        DataTableColumn { "Role" }
                        DataTableColumn { "Department" }
                        DataTableColumn { "Status" }
                    }
                    DataTableBody {
                        for member in staff.clone() {
                            DataTableRow {
                                key: "{member.id}",
                                selected: selected().as_deref() == Some(member.id.as_str()),
                                onclick: {
                                    let id = member.id.clone();
                                    move |_: MouseEvent| selected.set(Some(id.clone()))
                                },
                                DataTableCell { "{member.name}" }
                                DataTableCell { "{member.email}" }
                                DataTableCell { "{member.role.display_name()}" }
                                DataTableCell { "{member.department}" }
                                DataTableCell {
                                    AccountStatus { active: member.active }
                                }
                            }
                        }
                    }
                }
            }
            if let Some(member) = detail {
                Card { class: "dashboard-section user-detail",
                    CardHeader {
                        title: member.name.clone(),
                        description: member.email.clone(),
                    }
                    CardContent {
                        dl { class: "user-detail-fields",
                            dt { "Role" }
                            dd { "{member.role.display_name()}" }
                            dt { "Department" }
                            dd { "{member.department}" }
                            dt { "Dashboard" }
                            dd { code { "{member.role.dashboard_path()}" } }
                            dt { "Status" }
                            dd { AccountStatus { active: member.active } }
                        }
                    }
                    CardFooter {
                        button {
                            class: "dashboard-view-all",
                            r#type: "button",
                            onclick: move |_| selected.set(None),
                            "Close"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AccountStatus(active: bool) -> Element {
    if active {
        rsx! { Badge { variant: BadgeVariant::Success, "Active" } }
    } else {
        rsx! { Badge { variant: BadgeVariant::Outline, "Disabled" } }
    }
}
