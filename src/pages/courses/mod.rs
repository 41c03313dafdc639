use leptos::*;

pub mod repository;
pub mod utils;

mod panel;

pub use panel::CoursesPanel;

#[component]
pub fn CoursesPage() -> impl IntoView {
    view! { <CoursesPanel /> }
}
