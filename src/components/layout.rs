use leptos::*;

use crate::{
    components::guard,
    state::auth::{self, use_auth},
};

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center py-12">
            <div class="animate-spin rounded-full h-10 w-10 border-b-2 border-primary"></div>
        </div>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (auth_state, set_auth) = use_auth();
    let api = auth::use_api_client();
    let display_name = move || {
        let state = auth_state.get();
        state.name.or(state.email).unwrap_or_default()
    };

    let on_logout = move |_| {
        auth::perform_logout(&api, set_auth);
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(guard::LOGIN_PATH);
        }
    };

    view! {
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-primary">"LearnHub"</h1>
                    <nav class="flex items-center space-x-4">
                        <a href="/dashboard" class="text-gray-600 hover:text-gray-900 px-3 py-2 text-sm font-medium">
                            "Dashboard"
                        </a>
                        <a href="/courses" class="text-gray-600 hover:text-gray-900 px-3 py-2 text-sm font-medium">
                            "Courses"
                        </a>
                        <a href="/assignments" class="text-gray-600 hover:text-gray-900 px-3 py-2 text-sm font-medium">
                            "Assignments"
                        </a>
                        <a href="/profile" class="text-gray-600 hover:text-gray-900 px-3 py-2 text-sm font-medium">
                            {display_name}
                        </a>
                        <button
                            on:click=on_logout
                            class="text-gray-600 hover:text-gray-900 px-3 py-2 text-sm font-medium"
                        >
                            "Logout"
                        </button>
                    </nav>
                </div>
            </div>
        </header>
    }
}
