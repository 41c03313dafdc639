use leptos::*;

use crate::{components::layout::Header, state::auth::use_auth};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let name = move || auth_state.get().name.unwrap_or_else(|| "Not set".into());
    let email = move || auth_state.get().email.unwrap_or_else(|| "Not set".into());

    view! {
        <div class="min-h-screen bg-gray-50">
            <Header />
            <main class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="bg-white rounded-lg shadow-sm p-8">
                    <h2 class="text-2xl font-bold text-gray-800 mb-6">"Profile"</h2>
                    <dl class="space-y-4">
                        <div>
                            <dt class="text-sm text-gray-500">"Name"</dt>
                            <dd class="text-gray-800">{name}</dd>
                        </div>
                        <div>
                            <dt class="text-sm text-gray-500">"Email"</dt>
                            <dd class="text-gray-800">{email}</dd>
                        </div>
                    </dl>
                </div>
            </main>
        </div>
    }
}
