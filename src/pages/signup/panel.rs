use leptos::{ev::SubmitEvent, *};

use crate::{
    api::REDIRECT_DELAY_MS,
    components::{
        forms::{ErrorMessage, SubmitButton, SuccessMessage, TextField},
        guard,
    },
    state::auth::{self, RegistrationForm},
    utils::timing::sleep_ms,
};

#[component]
pub fn SignupPanel() -> impl IntoView {
    let (full_name, set_full_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm_password, set_confirm_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (success, set_success) = create_signal(None::<String>);

    let register_action = auth::use_register_action();
    let pending = register_action.pending();

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(()) => {
                    set_error.set(None);
                    set_success.set(Some("Account created successfully! Redirecting...".into()));
                    // Hold the success message on screen before moving on.
                    spawn_local(async move {
                        sleep_ms(REDIRECT_DELAY_MS).await;
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(guard::DASHBOARD_PATH);
                        }
                    });
                }
                Err(err) => {
                    set_success.set(None);
                    set_error.set(Some(err.to_string()));
                }
            }
        }
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        set_error.set(None);
        set_success.set(None);
        register_action.dispatch(RegistrationForm {
            full_name: full_name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        });
    };

    let name_input = Callback::new(move |value: String| set_full_name.set(value));
    let email_input = Callback::new(move |value: String| set_email.set(value));
    let password_input = Callback::new(move |value: String| set_password.set(value));
    let confirm_input = Callback::new(move |value: String| set_confirm_password.set(value));

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
            <div class="max-w-md w-full bg-white rounded-lg shadow-sm p-8">
                <h2 class="text-2xl font-bold text-gray-800 mb-6">"Create your account"</h2>
                <ErrorMessage message=error />
                <SuccessMessage message=success />
                <form on:submit=handle_submit>
                    <TextField label="Full name" value=full_name on_input=name_input />
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
                    <TextField
                        label="Confirm password"
                        input_type="password"
                        value=confirm_password
                        on_input=confirm_input
                    />
                    <SubmitButton label="Sign Up" pending=pending pending_label="Creating account..." />
                </form>
                <p class="mt-4 text-sm text-gray-600">
                    "Already have an account? "
                    <a href="/login" class="text-primary hover:underline">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
