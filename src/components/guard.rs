use leptos::*;

use crate::state::auth::{use_auth, AuthState};

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Explicit page identity, supplied by the router rather than re-derived
/// from the URL inside the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Home,
    Login,
    Signup,
    ForgotPassword,
    Dashboard,
    Courses,
    Assignments,
    Profile,
    Other,
}

impl PageKind {
    /// Maps a location to a page identity. Accepts both SPA paths
    /// (`/dashboard`) and the hosted static-page names (`dashboard.html`).
    pub fn from_path(path: &str) -> Self {
        let last = path.rsplit('/').next().unwrap_or(path);
        let name = last.strip_suffix(".html").unwrap_or(last);
        match name {
            "" | "index" => PageKind::Home,
            "login" => PageKind::Login,
            "signup" => PageKind::Signup,
            "forgot-password" => PageKind::ForgotPassword,
            "dashboard" => PageKind::Dashboard,
            "courses" => PageKind::Courses,
            "assignments" => PageKind::Assignments,
            "profile" => PageKind::Profile,
            _ => PageKind::Other,
        }
    }

    pub fn access(self) -> PageAccess {
        match self {
            PageKind::Dashboard | PageKind::Courses | PageKind::Assignments | PageKind::Profile => {
                PageAccess::Protected
            }
            PageKind::Login | PageKind::Signup | PageKind::ForgotPassword => PageAccess::Guest,
            PageKind::Home | PageKind::Other => PageAccess::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAccess {
    Protected,
    Guest,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    RedirectToDashboard,
}

/// Evaluated once per page load; a redirect abandons the render.
pub fn decide(access: PageAccess, authenticated: bool) -> GuardDecision {
    match (access, authenticated) {
        (PageAccess::Protected, false) => GuardDecision::RedirectToLogin,
        (PageAccess::Guest, true) => GuardDecision::RedirectToDashboard,
        _ => GuardDecision::Allow,
    }
}

fn redirect_to(target: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(target);
    }
}

fn apply(decision: GuardDecision) {
    match decision {
        GuardDecision::Allow => {}
        GuardDecision::RedirectToLogin => redirect_to(LOGIN_PATH),
        GuardDecision::RedirectToDashboard => redirect_to(DASHBOARD_PATH),
    }
}

/// Snapshot of the guard decision at mount. The transition is terminal for
/// the page load: later auth changes never issue a second redirect, though
/// the `Show` wrappers still react by hiding gated content.
fn decision_on_load(access: PageAccess, auth: ReadSignal<AuthState>) -> GuardDecision {
    decide(access, auth.get_untracked().is_authenticated)
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let decision = decision_on_load(PageAccess::Protected, auth);
    create_effect(move |_| apply(decision));
    view! {
        <Show when=move || is_authenticated.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

#[component]
pub fn RedirectIfAuthed(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_guest = create_memo(move |_| !auth.get().is_authenticated);
    let decision = decision_on_load(PageAccess::Guest, auth);
    create_effect(move |_| apply(decision));
    view! {
        <Show when=move || is_guest.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROTECTED: [PageKind; 4] = [
        PageKind::Dashboard,
        PageKind::Courses,
        PageKind::Assignments,
        PageKind::Profile,
    ];
    const GUEST: [PageKind; 3] = [PageKind::Login, PageKind::Signup, PageKind::ForgotPassword];

    #[test]
    fn protected_pages_redirect_unauthenticated_users_to_login() {
        for page in PROTECTED {
            assert_eq!(
                decide(page.access(), false),
                GuardDecision::RedirectToLogin,
                "{:?}",
                page
            );
        }
    }

    #[test]
    fn guest_pages_redirect_authenticated_users_to_dashboard() {
        for page in GUEST {
            assert_eq!(
                decide(page.access(), true),
                GuardDecision::RedirectToDashboard,
                "{:?}",
                page
            );
        }
    }

    #[test]
    fn every_other_combination_renders() {
        for page in PROTECTED {
            assert_eq!(decide(page.access(), true), GuardDecision::Allow);
        }
        for page in GUEST {
            assert_eq!(decide(page.access(), false), GuardDecision::Allow);
        }
        for authed in [true, false] {
            assert_eq!(decide(PageKind::Home.access(), authed), GuardDecision::Allow);
            assert_eq!(decide(PageKind::Other.access(), authed), GuardDecision::Allow);
        }
    }

    #[test]
    fn load_decision_is_a_point_in_time_snapshot() {
        let runtime = create_runtime();
        let (auth, set_auth) = create_signal(AuthState::default());

        let decision = decision_on_load(PageAccess::Protected, auth);
        assert_eq!(decision, GuardDecision::RedirectToLogin);

        set_auth.set(AuthState {
            email: Some("a@example.com".into()),
            name: None,
            is_authenticated: true,
        });
        // Signing in mid-page never re-runs the redirect; only a fresh page
        // load re-evaluates.
        assert_eq!(decision, GuardDecision::RedirectToLogin);
        assert_eq!(
            decision_on_load(PageAccess::Protected, auth),
            GuardDecision::Allow
        );
        runtime.dispose();
    }

    #[test]
    fn page_kind_recognizes_spa_paths_and_legacy_names() {
        assert_eq!(PageKind::from_path("/dashboard"), PageKind::Dashboard);
        assert_eq!(PageKind::from_path("dashboard.html"), PageKind::Dashboard);
        assert_eq!(
            PageKind::from_path("/app/forgot-password.html"),
            PageKind::ForgotPassword
        );
        assert_eq!(PageKind::from_path("/"), PageKind::Home);
        assert_eq!(PageKind::from_path("index.html"), PageKind::Home);
        assert_eq!(PageKind::from_path("/pricing"), PageKind::Other);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{RedirectIfAuthed, RequireAuth};
    use crate::state::auth::AuthState;
    use crate::test_support::helpers::provide_auth_state;
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn require_auth_renders_children_when_authenticated() {
        let html = render_to_string(move || {
            provide_auth_state(AuthState {
                email: Some("a@example.com".into()),
                name: None,
                is_authenticated: true,
            });
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_when_unauthenticated() {
        let html = render_to_string(move || {
            provide_auth_state(AuthState::default());
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn guest_page_hides_children_for_authenticated_user() {
        let html = render_to_string(move || {
            provide_auth_state(AuthState {
                email: None,
                name: None,
                is_authenticated: true,
            });
            view! {
                <RedirectIfAuthed>
                    {|| view! { <div>"guest-content"</div> }}
                </RedirectIfAuthed>
            }
        });
        assert!(!html.contains("guest-content"));
    }
}
