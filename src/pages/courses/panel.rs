use leptos::*;

use crate::{
    api::{CourseStatus, CourseSummary},
    components::{
        cards::ProgressBar,
        layout::{Header, LoadingSpinner},
    },
    pages::courses::{repository, utils},
    state::auth,
};

#[component]
pub fn CoursesPanel() -> impl IntoView {
    let api = auth::use_api_client();
    let courses = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { repository::load_courses(&api).await }
        },
    );

    let (query, set_query) = create_signal(String::new());
    let (category, set_category) = create_signal(String::from("all"));
    let (status, set_status) = create_signal(String::from("all"));

    let filtered = move || {
        courses.get().map(|all| {
            let category_value = category.get();
            let category_filter = (category_value != "all").then_some(category_value.as_str());
            utils::filter_courses(
                &all,
                &query.get(),
                category_filter,
                utils::parse_status_filter(&status.get()),
            )
        })
    };

    view! {
        <div class="min-h-screen bg-gray-50">
            <Header />
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="flex flex-col sm:flex-row gap-4 mb-8">
                    <input
                        type="text"
                        placeholder="Search courses..."
                        class="flex-1 px-4 py-2 border border-gray-300 rounded-lg"
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                    <select
                        class="px-4 py-2 border border-gray-300 rounded-lg"
                        on:change=move |ev| set_category.set(event_target_value(&ev))
                    >
                        <option value="all">"All Categories"</option>
                        <option value="programming">"Programming"</option>
                        <option value="design">"Design"</option>
                        <option value="marketing">"Marketing"</option>
                    </select>
                    <select
                        class="px-4 py-2 border border-gray-300 rounded-lg"
                        on:change=move |ev| set_status.set(event_target_value(&ev))
                    >
                        <option value="all">"All Statuses"</option>
                        <option value="enrolled">"Enrolled"</option>
                        <option value="completed">"Completed"</option>
                        <option value="not-started">"Not Started"</option>
                    </select>
                </div>
                {move || match filtered() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(courses) => view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {courses
                                .into_iter()
                                .map(|course| view! { <CourseCard course=course /> })
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
fn CourseCard(course: CourseSummary) -> impl IntoView {
    let id = course.id;
    let status = course.status;
    let progress = course.progress;
    let on_primary = move |_| match status {
        CourseStatus::Enrolled | CourseStatus::Completed => repository::continue_course(id),
        CourseStatus::NotStarted => log::info!("viewing course {id}"),
    };

    view! {
        <div class="bg-white rounded-lg shadow-sm overflow-hidden">
            <img src=course.thumbnail.clone() alt=course.title.clone() class="w-full h-48 object-cover" />
            <div class="p-6">
                <div class="flex justify-between items-start mb-2">
                    <span class="text-sm text-gray-500">{course.category.clone()}</span>
                    <span class="text-sm font-medium text-primary">{format!("${}", course.price)}</span>
                </div>
                <h3 class="text-xl font-semibold text-gray-800 mb-2">{course.title.clone()}</h3>
                <p class="text-gray-600 text-sm mb-4">{course.description.clone()}</p>
                <div class="flex items-center justify-between text-sm text-gray-500 mb-4">
                    <span>{format!("by {}", course.instructor)}</span>
                    <span>{format!("{} ({})", course.rating, course.students)}</span>
                </div>
                <div class="flex items-center justify-between text-sm text-gray-500 mb-4">
                    <span>{course.level.clone()}</span>
                    <span>{course.duration.clone()}</span>
                </div>
                <Show when=move || status == CourseStatus::Enrolled fallback=|| ()>
                    <div class="mb-4">
                        <ProgressBar progress=Signal::derive(move || progress) />
                    </div>
                </Show>
                <div class="flex gap-2">
                    <button
                        on:click=on_primary
                        class="flex-1 bg-primary text-white py-2 px-4 rounded-lg hover:bg-secondary transition-colors"
                    >
                        {status.action_label()}
                    </button>
                    <Show when=move || status == CourseStatus::NotStarted fallback=|| ()>
                        <button
                            on:click=move |_| repository::enroll_course(id)
                            class="bg-green-500 text-white py-2 px-4 rounded-lg hover:bg-green-600 transition-colors"
                        >
                            "Enroll"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
