use leptos::{ev::SubmitEvent, *};

use crate::{
    components::{
        forms::{ErrorMessage, SubmitButton, TextField},
        guard,
    },
    pages::login::utils,
    state::auth::{self, LoginCredentials},
};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (remember_me, set_remember_me) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let login_action = auth::use_login_action();
    let pending = login_action.pending();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => {
                    set_error.set(None);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(guard::DASHBOARD_PATH);
                    }
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();

        if let Err(message) = utils::validate_credentials(&email_value, &password_value) {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);

        login_action.dispatch(LoginCredentials {
            email: email_value,
            password: password_value,
            remember_me: remember_me.get_untracked(),
        });
    };

    let email_input = Callback::new(move |value: String| set_email.set(value));
    let password_input = Callback::new(move |value: String| set_password.set(value));

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
            <div class="max-w-md w-full bg-white rounded-lg shadow-sm p-8">
                <h2 class="text-2xl font-bold text-gray-800 mb-6">"Sign in to LearnHub"</h2>
                <ErrorMessage message=error />
                <form on:submit=handle_submit>
                    <TextField
                        label="Email"
                        input_type="email"
                        value=email
                        on_input=email_input
                        placeholder="you@example.com"
                    />
                    <TextField
                        label="Password"
                        input_type="password"
                        value=password
                        on_input=password_input
                    />
                    <label class="flex items-center mb-6 text-sm text-gray-600">
                        <input
                            type="checkbox"
                            class="mr-2"
                            prop:checked=move || remember_me.get()
                            on:change=move |ev| set_remember_me.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>
                    <SubmitButton label="Sign In" pending=pending pending_label="Signing in..." />
                </form>
                <div class="mt-4 flex justify-between text-sm">
                    <a href="/forgot-password" class="text-primary hover:underline">
                        "Forgot password?"
                    </a>
                    <a href="/signup" class="text-primary hover:underline">
                        "Create an account"
                    </a>
                </div>
            </div>
        </div>
    }
}
