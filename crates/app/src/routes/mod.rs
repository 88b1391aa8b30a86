pub mod dashboard;
pub mod login;
pub mod not_found;

use crate::auth::{gate, use_auth, GateDecision};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendar, LdClipboardList, LdClock, LdFlaskConical, LdLayoutDashboard, LdPackage, LdPill,
    LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::Role;
use shared_ui::{
    Badge, BadgeVariant, DropdownMenu, DropdownMenuContent, DropdownMenuItem, DropdownMenuLabel,
    DropdownMenuSeparator, DropdownMenuTrigger, InitialsAvatar, Separator, Sidebar,
    SidebarContent, SidebarFooter, SidebarGroup, SidebarHeader, SidebarInset, SidebarMenuButton,
    SidebarMenuItem, SidebarProvider, SidebarTrigger, Skeleton,
};

use dashboard::admin::{AdminDashboard, AdminUsers};
use dashboard::doctor::{DoctorAppointments, DoctorDashboard, DoctorSchedule};
use dashboard::lab::{LabDashboard, LabTests};
use dashboard::patient::{
    PatientAppointments, PatientDashboard, PatientLabResults, PatientPrescriptions,
};
use dashboard::pharmacist::{PharmacistDashboard, PharmacistInventory, PharmacistPrescriptions};
use login::Login;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/")]
    Home {},
    #[nest("/dashboard")]
        #[layout(DashboardLayout)]
            #[route("/")]
            DashboardIndex {},

            #[route("/patient")]
            PatientDashboard {},
            #[route("/patient/appointments")]
            PatientAppointments {},
            #[route("/patient/prescriptions")]
            PatientPrescriptions {},
            #[route("/patient/lab-results")]
            PatientLabResults {},

            #[route("/doctor")]
            DoctorDashboard {},
            #[route("/doctor/appointments")]
            DoctorAppointments {},
            #[route("/doctor/schedule")]
            DoctorSchedule {},

            #[route("/lab-technician")]
            LabDashboard {},
            #[route("/lab-technician/tests")]
            LabTests {},

            #[route("/pharmacist")]
            PharmacistDashboard {},
            #[route("/pharmacist/prescriptions")]
            PharmacistPrescriptions {},
            #[route("/pharmacist/inventory")]
            PharmacistInventory {},

            #[route("/admin")]
            AdminDashboard {},
            #[route("/admin/users")]
            AdminUsers {},
        #[end_layout]
    #[end_nest]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Root of a role's dashboard section.
pub fn dashboard_home(role: Role) -> Route {
    match role {
        Role::Patient => Route::PatientDashboard {},
        Role::Doctor => Route::DoctorDashboard {},
        Role::LabTechnician => Route::LabDashboard {},
        Role::Pharmacist => Route::PharmacistDashboard {},
        Role::Admin => Route::AdminDashboard {},
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum NavIcon {
    Overview,
    Calendar,
    Schedule,
    Pill,
    Flask,
    Clipboard,
    Package,
    Users,
}

#[derive(Debug, Clone, PartialEq)]
struct NavItem {
    route: Route,
    label: &'static str,
    icon: NavIcon,
}

fn nav(route: Route, label: &'static str, icon: NavIcon) -> NavItem {
    NavItem { route, label, icon }
}

/// Sidebar entries for a role. Only the signed-in role's section is listed.
fn nav_items(role: Role) -> Vec<NavItem> {
    let overview = nav(dashboard_home(role), "Overview", NavIcon::Overview);
    let mut items = vec![overview];
    items.extend(match role {
        Role::Patient => vec![
            nav(Route::PatientAppointments {}, "Appointments", NavIcon::Calendar),
            nav(Route::PatientPrescriptions {}, "Prescriptions", NavIcon::Pill),
            nav(Route::PatientLabResults {}, "Lab Results", NavIcon::Flask),
        ],
        Role::Doctor => vec![
            nav(Route::DoctorAppointments {}, "Appointments", NavIcon::Calendar),
            nav(Route::DoctorSchedule {}, "Schedule", NavIcon::Schedule),
        ],
        Role::LabTechnician => vec![nav(Route::LabTests {}, "Test Queue", NavIcon::Flask)],
        Role::Pharmacist => vec![
            nav(Route::PharmacistPrescriptions {}, "Prescriptions", NavIcon::Clipboard),
            nav(Route::PharmacistInventory {}, "Inventory", NavIcon::Package),
        ],
        Role::Admin => vec![nav(Route::AdminUsers {}, "Users", NavIcon::Users)],
    });
    items
}

fn page_title(route: &Route) -> &'static str {
    match route {
        Route::PatientDashboard {}
        | Route::DoctorDashboard {}
        | Route::LabDashboard {}
        | Route::PharmacistDashboard {}
        | Route::AdminDashboard {} => "Overview",
        Route::PatientAppointments {} | Route::DoctorAppointments {} => "Appointments",
        Route::PatientPrescriptions {} | Route::PharmacistPrescriptions {} => "Prescriptions",
        Route::PatientLabResults {} => "Lab Results",
        Route::DoctorSchedule {} => "Schedule",
        Route::LabTests {} => "Test Queue",
        Route::PharmacistInventory {} => "Inventory",
        Route::AdminUsers {} => "Users",
        _ => "",
    }
}

#[component]
fn NavIconView(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Overview => rsx! {
            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
        },
        NavIcon::Calendar => rsx! {
            Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 }
        },
        NavIcon::Schedule => rsx! {
            Icon::<LdClock> { icon: LdClock, width: 18, height: 18 }
        },
        NavIcon::Pill => rsx! {
            Icon::<LdPill> { icon: LdPill, width: 18, height: 18 }
        },
        NavIcon::Flask => rsx! {
            Icon::<LdFlaskConical> { icon: LdFlaskConical, width: 18, height: 18 }
        },
        NavIcon::Clipboard => rsx! {
            Icon::<LdClipboardList> { icon: LdClipboardList, width: 18, height: 18 }
        },
        NavIcon::Package => rsx! {
            Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 }
        },
        NavIcon::Users => rsx! {
            Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
        },
    }
}

/// Placeholder shown while the stored session is checked or a redirect is pending.
#[component]
fn SessionPending(message: String) -> Element {
    rsx! {
        div { class: "session-pending",
            Skeleton { class: "session-pending-bar" }
            p { "{message}" }
        }
    }
}

/// `/` sends visitors to their dashboard, or to the login page.
#[component]
fn Home() -> Element {
    let auth = use_auth();

    if !auth.is_restored() {
        return rsx! { SessionPending { message: "Loading..." } };
    }

    let role = auth.current_user.read().as_ref().map(|u| u.role);
    match role {
        Some(role) => navigator().replace(dashboard_home(role)),
        None => navigator().replace(Route::Login {}),
    };

    rsx! { SessionPending { message: "Redirecting..." } }
}

/// `/dashboard` with no role segment. The layout gate redirects away from it.
#[component]
fn DashboardIndex() -> Element {
    rsx! {}
}

/// Layout for every dashboard page: enforces the auth gate, then renders the
/// role's sidebar and the header around the page.
#[component]
fn DashboardLayout() -> Element {
    let auth = use_auth();
    let route: Route = use_route();

    if !auth.is_restored() {
        return rsx! { SessionPending { message: "Loading your dashboard..." } };
    }

    let user = auth.current_user.read().clone();
    match gate(user.as_ref(), &route.to_string()) {
        GateDecision::Allow => {}
        GateDecision::RedirectToLogin => {
            tracing::debug!(path = %route, "no session, redirecting to login");
            navigator().replace(Route::Login {});
            return rsx! { SessionPending { message: "Redirecting to login..." } };
        }
        GateDecision::RedirectTo(path) => {
            tracing::debug!(from = %route, to = %path, "role mismatch, redirecting");
            let target = match (path.parse::<Route>(), user.as_ref()) {
                (Ok(target), _) => target,
                (Err(_), Some(user)) => dashboard_home(user.role),
                (Err(_), None) => Route::Login {},
            };
            navigator().replace(target);
            return rsx! { SessionPending { message: "Redirecting..." } };
        }
    }

    let Some(user) = user else {
        return rsx! {};
    };
    let role = user.role;
    let title = page_title(&route);
    let full_name = user.full_name();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: false,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-name", "CareDesk" }
                        span { class: "sidebar-brand-tagline", "{role.display_name()} portal" }
                    }
                }
                SidebarContent {
                    SidebarGroup { label: "{role.display_name()}",
                        for item in nav_items(role) {
                            SidebarMenuItem { key: "{item.route}",
                                Link { to: item.route.clone(),
                                    SidebarMenuButton { active: item.route == route,
                                        NavIconView { icon: item.icon }
                                        "{item.label}"
                                    }
                                }
                            }
                        }
                    }
                }
                SidebarFooter {
                    span { class: "sidebar-footer-email", "{user.email}" }
                }
            }

            SidebarInset {
                header { class: "topbar",
                    SidebarTrigger {
                        span { class: "topbar-trigger-icon", "\u{2630}" }
                    }
                    Separator { horizontal: false }
                    span { class: "topbar-title", "{title}" }
                    div { class: "topbar-spacer" }
                    div { class: "topbar-user",
                        span { class: "topbar-user-name", "{full_name}" }
                        Badge { variant: BadgeVariant::Outline, "{role.display_name()}" }
                    }
                    DropdownMenu {
                        DropdownMenuTrigger {
                            InitialsAvatar { initials: user.initials() }
                        }
                        DropdownMenuContent {
                            DropdownMenuLabel { title: full_name.clone(), subtitle: user.email.clone() }
                            DropdownMenuSeparator {}
                            DropdownMenuItem::<String> {
                                value: "dashboard".to_string(),
                                index: 0usize,
                                on_select: move |_: String| {
                                    navigator().push(dashboard_home(role));
                                },
                                "My Dashboard"
                            }
                            DropdownMenuSeparator {}
                            DropdownMenuItem::<String> {
                                value: "logout".to_string(),
                                index: 1usize,
                                on_select: move |_: String| {
                                    crate::session::sign_out(auth);
                                },
                                "Sign Out"
                            }
                        }
                    }
                }

                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
