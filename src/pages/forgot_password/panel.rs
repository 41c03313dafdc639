use leptos::{ev::SubmitEvent, *};

use crate::{
    components::forms::{ErrorMessage, SubmitButton, SuccessMessage, TextField},
    state::auth,
};

#[component]
pub fn ForgotPasswordPanel() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (success, set_success) = create_signal(None::<String>);

    let reset_action = auth::use_reset_action();
    let pending = reset_action.pending();

    create_effect(move |_| {
        if let Some(result) = reset_action.value().get() {
            match result {
                Ok(()) => {
                    set_error.set(None);
                    set_success.set(Some(
                        "Password reset link has been sent to your email address.".into(),
                    ));
                    set_email.set(String::new());
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
        reset_action.dispatch(email.get_untracked());
    };

    let email_input = Callback::new(move |value: String| set_email.set(value));

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
            <div class="max-w-md w-full bg-white rounded-lg shadow-sm p-8">
                <h2 class="text-2xl font-bold text-gray-800 mb-2">"Reset your password"</h2>
                <p class="text-sm text-gray-600 mb-6">
                    "Enter your email address and we will send you a reset link."
                </p>
                <ErrorMessage message=error />
                <SuccessMessage message=success />
                <form on:submit=handle_submit>
                    <TextField
                        label="Email"
                        input_type="email"
                        value=email
                        on_input=email_input
                        placeholder="you@example.com"
                    />
                    <SubmitButton label="Send Reset Link" pending=pending pending_label="Sending..." />
                </form>
                <p class="mt-4 text-sm">
                    <a href="/login" class="text-primary hover:underline">"Back to sign in"</a>
                </p>
            </div>
        </div>
    }
}
