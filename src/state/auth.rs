use std::rc::Rc;

use leptos::*;

use crate::{
    api::ApiClient,
    error::AuthError,
    session::{BrowserSession, Session, SessionStore},
};

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

/// Reactive mirror of the persisted session. Derived from the store on every
/// page load; the stored token remains the source of truth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub email: Option<String>,
    pub name: Option<String>,
    pub is_authenticated: bool,
}

impl AuthState {
    pub fn from_session(session: &Session) -> Self {
        Self {
            is_authenticated: session.is_authenticated(),
            email: session.user_email.clone(),
            name: session.user_name.clone(),
        }
    }
}

/// Form payload for the login action. Never persisted; it exists only for
/// the duration of the submit handler.
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

/// Form payload for the signup action.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub fn session_store_from_context() -> Rc<dyn SessionStore> {
    use_context::<Rc<dyn SessionStore>>().unwrap_or_else(|| Rc::new(BrowserSession))
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>()
        .unwrap_or_else(|| ApiClient::with_store(session_store_from_context()))
}

fn create_auth_context() -> AuthContext {
    let store = session_store_from_context();
    create_signal(AuthState::from_session(&Session::load(&*store)))
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    api: &ApiClient,
    credentials: &LoginCredentials,
    set_auth: WriteSignal<AuthState>,
) -> Result<(), AuthError> {
    let session = api
        .login(
            &credentials.email,
            &credentials.password,
            credentials.remember_me,
        )
        .await?;
    set_auth.set(AuthState::from_session(&session));
    Ok(())
}

pub async fn register_request(
    api: &ApiClient,
    form: &RegistrationForm,
    set_auth: WriteSignal<AuthState>,
) -> Result<(), AuthError> {
    let session = api
        .register(&form.full_name, &form.email, &form.password, &form.confirm_password)
        .await?;
    set_auth.set(AuthState::from_session(&session));
    Ok(())
}

/// Clears the persisted session and the reactive mirror. Synchronous: there
/// is no server-side session to invalidate.
pub fn perform_logout(api: &ApiClient, set_auth: WriteSignal<AuthState>) {
    api.logout();
    set_auth.set(AuthState::default());
}

pub fn use_login_action() -> Action<LoginCredentials, Result<(), AuthError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_api_client();
    create_action(move |credentials: &LoginCredentials| {
        let credentials = credentials.clone();
        let api = api.clone();
        async move { login_request(&api, &credentials, set_auth).await }
    })
}

pub fn use_register_action() -> Action<RegistrationForm, Result<(), AuthError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_api_client();
    create_action(move |form: &RegistrationForm| {
        let form = form.clone();
        let api = api.clone();
        async move { register_request(&api, &form, set_auth).await }
    })
}

pub fn use_reset_action() -> Action<String, Result<(), AuthError>> {
    let api = use_api_client();
    create_action(move |email: &String| {
        let email = email.clone();
        let api = api.clone();
        async move { api.request_password_reset(&email).await }
    })
}
