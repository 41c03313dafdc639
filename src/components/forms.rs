use leptos::*;

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into, default = String::from("text"))] input_type: String,
    #[prop(into, default = String::new())] placeholder: String,
) -> impl IntoView {
    view! {
        <label class="block mb-4">
            <span class="block text-sm font-medium text-gray-700 mb-1">{label}</span>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
                class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-primary focus:border-transparent"
            />
        </label>
    }
}

/// Message area backed by a signal; hidden while empty, mirroring the
/// show/hide helpers of the static pages.
#[component]
pub fn ErrorMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <div class="mb-4 p-3 rounded-lg bg-red-50 text-red-700 text-sm">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <div class="mb-4 p-3 rounded-lg bg-green-50 text-green-700 text-sm">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

/// Submit button that disables itself and swaps to a loader label while the
/// request is in flight, then re-enables on both outcomes.
#[component]
pub fn SubmitButton(
    #[prop(into)] label: String,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into, default = String::from("Please wait..."))] pending_label: String,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || pending.get()
            class="w-full bg-primary text-white py-2 px-4 rounded-lg hover:bg-secondary transition-colors disabled:opacity-50"
        >
            {move || {
                if pending.get() {
                    pending_label.clone()
                } else {
                    label.clone()
                }
            }}
        </button>
    }
}
