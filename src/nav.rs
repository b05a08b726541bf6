//! Role set, session state machine, and the route/navigation gate.
//!
//! The external router owns redirects; this module only answers which
//! routes a role may reach and which sidebar entries it sees. The two
//! answers are kept consistent: no entry is ever returned for a route
//! `is_route_allowed` would reject.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::models::UnknownValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Operations,
}

impl Role {
    pub const VALUES: &'static [Role] = &[Role::Admin, Role::Operations];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Operations => "operations",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "operations" => Ok(Role::Operations),
            _ => Err(UnknownValue {
                field: "Role",
                value: s.to_string(),
            }),
        }
    }
}

pub mod routes {
    pub const LOGIN: &str = "/";
    pub const DASHBOARD: &str = "/dashboard";
    pub const DIGITAL_REQUESTS: &str = "/digital-requests";
    pub const ADMISSIONS: &str = "/admissions";
    pub const IT_ASSETS: &str = "/it-assets";
    pub const SETTINGS: &str = "/settings";
}

/// One sidebar entry. The icon is an opaque name for the rendering
/// layer's icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub label: &'static str,
    pub route: &'static str,
    pub icon: &'static str,
}

const ADMIN_NAV: &[NavEntry] = &[
    NavEntry { label: "Dashboard", route: routes::DASHBOARD, icon: "layout-dashboard" },
    NavEntry { label: "Digital Requests", route: routes::DIGITAL_REQUESTS, icon: "file-text" },
    NavEntry { label: "Admissions", route: routes::ADMISSIONS, icon: "users" },
    NavEntry { label: "IT Assets", route: routes::IT_ASSETS, icon: "monitor" },
    NavEntry { label: "Settings", route: routes::SETTINGS, icon: "settings" },
];

// Operations shares the layout but never sees admissions or settings.
const OPERATIONS_NAV: &[NavEntry] = &[
    NavEntry { label: "Dashboard", route: routes::DASHBOARD, icon: "layout-dashboard" },
    NavEntry { label: "Digital Requests", route: routes::DIGITAL_REQUESTS, icon: "file-text" },
    NavEntry { label: "IT Assets", route: routes::IT_ASSETS, icon: "monitor" },
];

pub fn landing_route(role: Role) -> &'static str {
    match role {
        Role::Admin | Role::Operations => routes::DASHBOARD,
    }
}

pub fn visible_nav_entries(role: Role) -> &'static [NavEntry] {
    match role {
        Role::Admin => ADMIN_NAV,
        Role::Operations => OPERATIONS_NAV,
    }
}

/// Unknown routes are denied for every role; the router redirects to
/// `/`. Denial is reported, never raised as an error.
pub fn is_route_allowed(role: Role, route: &str) -> bool {
    if route == routes::LOGIN {
        return true;
    }
    visible_nav_entries(role).iter().any(|entry| entry.route == route)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated(Role),
}

/// Per-session login state. Credentials are accepted unconditionally in
/// this mock trust model; the chosen role is client-trusted.
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Session {
            state: SessionState::Unauthenticated,
        }
    }

    /// Always succeeds; returns the landing route for the router.
    pub fn login(&mut self, role: Role, _email: &str, _password: &str) -> &'static str {
        self.state = SessionState::Authenticated(role);
        landing_route(role)
    }

    pub fn logout(&mut self) {
        self.state = SessionState::Unauthenticated;
    }

    pub fn role(&self) -> Option<Role> {
        match self.state {
            SessionState::Unauthenticated => None,
            SessionState::Authenticated(role) => Some(role),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_entries_are_always_reachable() {
        for role in Role::VALUES.iter().copied() {
            for entry in visible_nav_entries(role) {
                assert!(
                    is_route_allowed(role, entry.route),
                    "{role} nav shows {} but the route is denied",
                    entry.route
                );
            }
            assert!(is_route_allowed(role, landing_route(role)));
        }
    }

    #[test]
    fn operations_cannot_reach_admissions_or_settings() {
        assert!(!is_route_allowed(Role::Operations, routes::ADMISSIONS));
        assert!(!is_route_allowed(Role::Operations, routes::SETTINGS));
        assert!(is_route_allowed(Role::Operations, routes::IT_ASSETS));
        assert!(is_route_allowed(Role::Admin, routes::ADMISSIONS));
    }

    #[test]
    fn unknown_routes_are_denied() {
        for role in Role::VALUES.iter().copied() {
            assert!(!is_route_allowed(role, "/payroll"));
            assert!(is_route_allowed(role, routes::LOGIN));
        }
    }

    #[test]
    fn login_and_logout_drive_the_state_machine() {
        let mut session = Session::new();
        assert_eq!(session.role(), None);

        let landing = session.login(Role::Operations, "ops@achariya.in", "anything");
        assert_eq!(landing, routes::DASHBOARD);
        assert_eq!(session.role(), Some(Role::Operations));

        session.logout();
        assert_eq!(session.state(), SessionState::Unauthenticated);
    }

    #[test]
    fn login_ignores_credentials() {
        let mut session = Session::new();
        session.login(Role::Admin, "", "");
        assert_eq!(session.role(), Some(Role::Admin));
    }
}
