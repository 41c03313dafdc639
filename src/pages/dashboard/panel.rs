use leptos::*;

use crate::{
    components::{
        cards::{ProgressBar, StatCard, StatusBadge},
        layout::{Header, LoadingSpinner},
    },
    pages::dashboard::repository,
    state::auth,
    utils::format::format_due_date,
};

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let api = auth::use_api_client();
    let data = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { repository::load_dashboard(&api).await }
        },
    );

    view! {
        <div class="min-h-screen bg-gray-50">
            <Header />
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                {move || match data.get() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(data) => {
                        let stats = data.stats.clone();
                        view! {
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
                                <StatCard label="Active Courses" value=stats.active_courses.to_string() />
                                <StatCard label="Completed Courses" value=stats.completed_courses.to_string() />
                                <StatCard label="Pending Assignments" value=stats.pending_assignments.to_string() />
                                <StatCard label="Study Hours" value=stats.study_hours.to_string() />
                            </div>
                            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                                <section class="bg-white rounded-lg shadow-sm p-6">
                                    <h2 class="text-lg font-semibold text-gray-800 mb-4">"Recent Courses"</h2>
                                    {data
                                        .recent_courses
                                        .iter()
                                        .map(|course| {
                                            let progress = course.progress;
                                            view! {
                                                <div class="flex items-center space-x-4 p-4 border border-gray-200 rounded-lg mb-3">
                                                    <img
                                                        src=course.thumbnail.clone()
                                                        alt=course.title.clone()
                                                        class="w-16 h-12 object-cover rounded"
                                                    />
                                                    <div class="flex-1">
                                                        <h3 class="font-semibold text-gray-800">{course.title.clone()}</h3>
                                                        <p class="text-sm text-gray-600">{format!("by {}", course.instructor)}</p>
                                                        <div class="mt-2">
                                                            <ProgressBar progress=Signal::derive(move || progress) />
                                                        </div>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </section>
                                <section class="bg-white rounded-lg shadow-sm p-6">
                                    <h2 class="text-lg font-semibold text-gray-800 mb-4">"Upcoming Assignments"</h2>
                                    {data
                                        .upcoming_assignments
                                        .iter()
                                        .map(|assignment| {
                                            view! {
                                                <div class="p-4 border border-gray-200 rounded-lg mb-3">
                                                    <h3 class="font-semibold text-gray-800">{assignment.title.clone()}</h3>
                                                    <p class="text-sm text-gray-600">{assignment.course.clone()}</p>
                                                    <p class="text-sm text-gray-500">
                                                        {format!("Due: {}", format_due_date(&assignment.due_date))}
                                                    </p>
                                                    <div class="mt-2">
                                                        <StatusBadge status=assignment.status />
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </section>
                            </div>
                            <section class="bg-white rounded-lg shadow-sm p-6 mt-8">
                                <h2 class="text-lg font-semibold text-gray-800 mb-4">"Course Progress"</h2>
                                {data
                                    .course_progress
                                    .iter()
                                    .map(|entry| {
                                        let progress = entry.progress;
                                        view! {
                                            <div class="mb-4">
                                                <p class="text-sm text-gray-600 mb-1">{entry.course.clone()}</p>
                                                <ProgressBar progress=Signal::derive(move || progress) />
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </section>
                        }
                        .into_view()
                    }
                }}
            </main>
        </div>
    }
}
