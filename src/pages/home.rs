use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-50 px-4 text-center">
            <h1 class="text-4xl font-bold text-gray-800 mb-4">"LearnHub"</h1>
            <p class="text-gray-600 mb-8">"Courses, assignments and progress in one place."</p>
            <div class="flex gap-4">
                <a href="/login" class="bg-primary text-white px-6 py-2 rounded-lg hover:bg-secondary transition-colors">
                    "Sign In"
                </a>
                <a href="/signup" class="border border-primary text-primary px-6 py-2 rounded-lg hover:bg-gray-100 transition-colors">
                    "Create Account"
                </a>
            </div>
        </div>
    }
}
