use leptos::*;
use leptos_router::*;

use crate::{
    components::guard::{RedirectIfAuthed, RequireAuth},
    pages::{
        AssignmentsPage, CoursesPage, DashboardPage, ForgotPasswordPage, HomePage, LoginPage,
        ProfilePage, SignupPage,
    },
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/signup",
    "/forgot-password",
    "/dashboard",
    "/courses",
    "/assignments",
    "/profile",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/dashboard", "/courses", "/assignments", "/profile"];

pub const GUEST_ROUTE_PATHS: &[&str] = &["/login", "/signup", "/forgot-password"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=GuestLogin/>
                    <Route path="/signup" view=GuestSignup/>
                    <Route path="/forgot-password" view=GuestForgotPassword/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/courses" view=ProtectedCourses/>
                    <Route path="/assignments" view=ProtectedAssignments/>
                    <Route path="/profile" view=ProtectedProfile/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn GuestLogin() -> impl IntoView {
    view! { <RedirectIfAuthed><LoginPage/></RedirectIfAuthed> }
}

#[component]
fn GuestSignup() -> impl IntoView {
    view! { <RedirectIfAuthed><SignupPage/></RedirectIfAuthed> }
}

#[component]
fn GuestForgotPassword() -> impl IntoView {
    view! { <RedirectIfAuthed><ForgotPasswordPage/></RedirectIfAuthed> }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedCourses() -> impl IntoView {
    view! { <RequireAuth><CoursesPage/></RequireAuth> }
}

#[component]
fn ProtectedAssignments() -> impl IntoView {
    view! { <RequireAuth><AssignmentsPage/></RequireAuth> }
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! { <RequireAuth><ProfilePage/></RequireAuth> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::guard::{PageAccess, PageKind};
    use std::collections::HashSet;

    #[test]
    fn protected_and_guest_routes_are_subsets_of_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in PROTECTED_ROUTE_PATHS.iter().chain(GUEST_ROUTE_PATHS) {
            assert!(all.contains(path), "missing from ROUTE_PATHS: {}", path);
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn route_tables_agree_with_page_classification() {
        for path in PROTECTED_ROUTE_PATHS {
            assert_eq!(PageKind::from_path(path).access(), PageAccess::Protected);
        }
        for path in GUEST_ROUTE_PATHS {
            assert_eq!(PageKind::from_path(path).access(), PageAccess::Guest);
        }
    }
}
