use leptos::*;

use crate::{
    api::{AssignmentStatus, AssignmentSummary},
    components::{
        cards::StatusBadge,
        layout::{Header, LoadingSpinner},
    },
    pages::assignments::{repository, utils},
    state::auth,
    utils::format::format_due_date,
};

const TABS: [(&str, &str); 5] = [
    ("all", "All"),
    ("pending", "Pending"),
    ("submitted", "Submitted"),
    ("graded", "Graded"),
    ("overdue", "Overdue"),
];

#[component]
pub fn AssignmentsPanel() -> impl IntoView {
    let api = auth::use_api_client();
    let assignments = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { repository::load_assignments(&api).await }
        },
    );

    let (tab, set_tab) = create_signal(String::from("all"));

    let filtered = move || {
        assignments
            .get()
            .map(|all| utils::filter_by_status(&all, utils::parse_status_tab(&tab.get())))
    };

    view! {
        <div class="min-h-screen bg-gray-50">
            <Header />
            <main class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="flex gap-2 border-b border-gray-200 mb-8">
                    {TABS
                        .into_iter()
                        .map(|(value, label)| {
                            let is_active = move || tab.get() == value;
                            view! {
                                <button
                                    class="px-4 py-2 text-sm font-medium border-b-2"
                                    class:border-primary=is_active
                                    class:text-primary=is_active
                                    class:border-transparent=move || !is_active()
                                    class:text-gray-500=move || !is_active()
                                    on:click=move |_| set_tab.set(value.to_string())
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {move || match filtered() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(assignments) => view! {
                        <div class="space-y-4">
                            {assignments
                                .into_iter()
                                .map(|assignment| view! { <AssignmentCard assignment=assignment /> })
                                .collect_view()}
                        </div>
                    }
                    .into_view(),
                }}
            </main>
        </div>
    }
}

#[component]
fn AssignmentCard(assignment: AssignmentSummary) -> impl IntoView {
    let id = assignment.id;
    let status = assignment.status;

    view! {
        <div class="bg-white rounded-lg shadow-sm border border-gray-200 p-6">
            <div class="flex justify-between items-start mb-4">
                <div>
                    <h3 class="text-xl font-semibold text-gray-800">{assignment.title.clone()}</h3>
                    <p class="text-gray-600">{assignment.course.clone()}</p>
                </div>
                <StatusBadge status=status />
            </div>
            <p class="text-gray-600 mb-4">{assignment.description.clone()}</p>
            <div class="flex justify-between items-center">
                <div class="text-sm text-gray-500">
                    <p>{format!("Due: {}", format_due_date(&assignment.due_date))}</p>
                    <p>{format!("Points: {}", assignment.points)}</p>
                </div>
                <div class="flex gap-2">
                    <button
                        on:click=move |_| repository::view_assignment(id)
                        class="bg-primary text-white px-4 py-2 rounded-lg hover:bg-secondary transition-colors"
                    >
                        "View Details"
                    </button>
                    <Show when=move || status == AssignmentStatus::Pending fallback=|| ()>
                        <button
                            on:click=move |_| repository::submit_assignment(id)
                            class="bg-green-500 text-white px-4 py-2 rounded-lg hover:bg-green-600 transition-colors"
                        >
                            "Submit"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
