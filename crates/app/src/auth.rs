use dioxus::prelude::*;
use shared_types::{AuthUser, Role};

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
    /// Set once the stored session has been checked, whatever the outcome.
    /// The dashboard gate waits on this so a page reload does not bounce a
    /// signed-in user to the login page.
    pub restored: Signal<bool>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
            restored: Signal::new(false),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn is_restored(&self) -> bool {
        *self.restored.read()
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }

    pub fn mark_restored(&mut self) {
        self.restored.set(true);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Role of the signed-in user, if any.
pub fn use_current_role() -> Option<Role> {
    let auth = use_auth();
    let role = auth.current_user.read().as_ref().map(|u| u.role);
    role
}

/// Outcome of checking a dashboard path against the signed-in user.
#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    Allow,
    RedirectToLogin,
    /// Send the user to this path instead, their own dashboard root.
    RedirectTo(String),
}

/// Decide whether `user` may view the dashboard page at `path`.
///
/// The role is read from the second path segment, so `/dashboard/doctor/schedule`
/// belongs to doctors. Query string and fragment are ignored and the segment
/// is compared case-insensitively.
pub fn gate(user: Option<&AuthUser>, path: &str) -> GateDecision {
    let Some(user) = user else {
        return GateDecision::RedirectToLogin;
    };

    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segment = path.split('/').filter(|s| !s.is_empty()).nth(1);

    match segment {
        Some(segment) if segment.eq_ignore_ascii_case(user.role.as_str()) => GateDecision::Allow,
        _ => GateDecision::RedirectTo(user.role.dashboard_path()),
    }
}
