use leptos::*;

use crate::api::AssignmentStatus;

#[component]
pub fn StatusBadge(status: AssignmentStatus) -> impl IntoView {
    view! {
        <span class=format!("inline-block px-2 py-1 text-xs rounded-full {}", status.css_class())>
            {status.label()}
        </span>
    }
}

#[component]
pub fn ProgressBar(#[prop(into)] progress: Signal<u32>) -> impl IntoView {
    view! {
        <div>
            <div class="flex justify-between text-sm text-gray-600 mb-1">
                <span>"Progress"</span>
                <span>{move || format!("{}%", progress.get())}</span>
            </div>
            <div class="w-full bg-gray-200 rounded-full h-2">
                <div
                    class="bg-primary h-2 rounded-full transition-all duration-500"
                    style=move || format!("width: {}%", progress.get().min(100))
                ></div>
            </div>
        </div>
    }
}

#[component]
pub fn StatCard(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-sm p-6">
            <p class="text-3xl font-bold text-gray-800">{value}</p>
            <p class="text-sm text-gray-600 mt-1">{label}</p>
        </div>
    }
}
