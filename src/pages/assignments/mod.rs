use leptos::*;

pub mod repository;
pub mod utils;

mod panel;

pub use panel::AssignmentsPanel;

#[component]
pub fn AssignmentsPage() -> impl IntoView {
    view! { <AssignmentsPanel /> }
}
