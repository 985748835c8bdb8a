//! View gating: which views a session may reach.
//!
//! # Invariants
//! - Every view requiring the admin role also requires a signed-in
//!   identity, so the anonymous check runs first.
//! - Unknown route names fall back to the home view instead of erroring.

use log::info;

use crate::session::Session;

/// The portal's known views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Login,
    Register,
    VerifyEmail,
    Profile,
    Accounts,
    Employees,
    Department,
    Requests,
}

impl View {
    /// Parses a route name ("login", "verify-email", ...). Unknown names
    /// resolve to [`View::Home`].
    pub fn from_route(route: &str) -> View {
        match route.trim_start_matches('/') {
            "" => View::Home,
            "login" => View::Login,
            "register" => View::Register,
            "verify-email" => View::VerifyEmail,
            "profile" => View::Profile,
            "accounts" => View::Accounts,
            "employees" => View::Employees,
            "department" => View::Department,
            "requests" => View::Requests,
            _ => View::Home,
        }
    }

    pub fn route(&self) -> &'static str {
        match self {
            View::Home => "",
            View::Login => "login",
            View::Register => "register",
            View::VerifyEmail => "verify-email",
            View::Profile => "profile",
            View::Accounts => "accounts",
            View::Employees => "employees",
            View::Department => "department",
            View::Requests => "requests",
        }
    }

    fn requires_login(self) -> bool {
        matches!(
            self,
            View::Profile | View::Accounts | View::Employees | View::Department | View::Requests
        )
    }

    fn requires_admin(self) -> bool {
        matches!(self, View::Accounts | View::Employees | View::Department)
    }
}

/// Applies the access rules: protected views send anonymous sessions to
/// the login view, admin-only views send non-admin identities home, and
/// anything else is shown as requested.
pub fn resolve_view(requested: View, session: &Session) -> View {
    if requested.requires_login() && !session.is_authenticated() {
        info!(
            "event=view_redirect module=session status=login_required view={}",
            requested.route()
        );
        return View::Login;
    }
    if requested.requires_admin() && !session.is_admin() {
        info!(
            "event=view_redirect module=session status=admin_required view={}",
            requested.route()
        );
        return View::Home;
    }
    requested
}

#[cfg(test)]
mod tests {
    use super::{resolve_view, View};
    use crate::model::account::{Account, Role};
    use crate::session::Session;

    fn account(role: Role) -> Account {
        Account {
            first_name: "Sam".to_string(),
            last_name: "Lee".to_string(),
            email: "sam@example.com".to_string(),
            password: "secret1".to_string(),
            role,
            verified: true,
        }
    }

    #[test]
    fn unknown_routes_fall_back_to_home() {
        assert_eq!(View::from_route("no-such-page"), View::Home);
        assert_eq!(View::from_route(""), View::Home);
    }

    #[test]
    fn route_names_round_trip() {
        for view in [
            View::Home,
            View::Login,
            View::Register,
            View::VerifyEmail,
            View::Profile,
            View::Accounts,
            View::Employees,
            View::Department,
            View::Requests,
        ] {
            assert_eq!(View::from_route(view.route()), view);
        }
    }

    #[test]
    fn anonymous_sessions_are_sent_to_login_from_protected_views() {
        let session = Session::Anonymous;
        assert_eq!(resolve_view(View::Profile, &session), View::Login);
        assert_eq!(resolve_view(View::Requests, &session), View::Login);
        assert_eq!(resolve_view(View::Accounts, &session), View::Login);
        assert_eq!(resolve_view(View::Home, &session), View::Home);
        assert_eq!(resolve_view(View::Register, &session), View::Register);
    }

    #[test]
    fn non_admin_identities_are_sent_home_from_admin_views() {
        let session = Session::Authenticated(account(Role::User));
        assert_eq!(resolve_view(View::Accounts, &session), View::Home);
        assert_eq!(resolve_view(View::Employees, &session), View::Home);
        assert_eq!(resolve_view(View::Department, &session), View::Home);
        assert_eq!(resolve_view(View::Profile, &session), View::Profile);
        assert_eq!(resolve_view(View::Requests, &session), View::Requests);
    }

    #[test]
    fn admins_reach_every_view() {
        let session = Session::Authenticated(account(Role::Admin));
        assert_eq!(resolve_view(View::Accounts, &session), View::Accounts);
        assert_eq!(resolve_view(View::Department, &session), View::Department);
        assert_eq!(resolve_view(View::Profile, &session), View::Profile);
    }
}
