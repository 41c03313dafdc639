#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::state::auth::{AuthContext, AuthState};
    use leptos::*;

    pub fn provide_auth_state(state: AuthState) -> AuthContext {
        let (auth, set_auth) = create_signal(state);
        provide_context::<AuthContext>((auth, set_auth));
        (auth, set_auth)
    }

    pub fn authenticated_state() -> AuthState {
        AuthState {
            email: Some("student@example.com".into()),
            name: Some("Student Example".into()),
            is_authenticated: true,
        }
    }
}
