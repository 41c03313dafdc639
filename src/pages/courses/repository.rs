use crate::api::{mock, ApiClient, CourseSummary};

/// Fetch-with-fallback over `GET /courses`; failures of any kind substitute
/// the fixed demo catalog silently (diagnostic log only).
pub async fn load_courses(api: &ApiClient) -> Vec<CourseSummary> {
    match api.get_courses().await {
        Ok(courses) => courses,
        Err(err) => {
            log::warn!("courses request failed, using demo data: {err}");
            mock::courses()
        }
    }
}

/// Enrollment is logged, not committed; the demo API has no write endpoint.
pub fn enroll_course(course_id: u32) {
    log::info!("enrolling in course {course_id}");
}

pub fn continue_course(course_id: u32) {
    log::info!("continuing course {course_id}");
}
