use crate::api::{CourseStatus, CourseSummary};

/// Client-side catalog filtering. `category`/`status` of `None` mean "all".
pub fn filter_courses(
    courses: &[CourseSummary],
    query: &str,
    category: Option<&str>,
    status: Option<CourseStatus>,
) -> Vec<CourseSummary> {
    let query = query.trim().to_lowercase();
    courses
        .iter()
        .filter(|course| {
            query.is_empty()
                || course.title.to_lowercase().contains(&query)
                || course.instructor.to_lowercase().contains(&query)
        })
        .filter(|course| category.map_or(true, |c| course.category == c))
        .filter(|course| status.map_or(true, |s| course.status == s))
        .cloned()
        .collect()
}

pub fn parse_status_filter(raw: &str) -> Option<CourseStatus> {
    match raw {
        "enrolled" => Some(CourseStatus::Enrolled),
        "completed" => Some(CourseStatus::Completed),
        "not-started" => Some(CourseStatus::NotStarted),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock;

    #[test]
    fn empty_filters_return_everything() {
        let all = mock::courses();
        assert_eq!(filter_courses(&all, "", None, None), all);
    }

    #[test]
    fn query_matches_title_case_insensitively() {
        let filtered = filter_courses(&mock::courses(), "JAVASCRIPT", None, None);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn query_matches_instructor() {
        let filtered = filter_courses(&mock::courses(), "emily", None, None);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 3);
    }

    #[test]
    fn category_and_status_filters_combine() {
        let filtered = filter_courses(
            &mock::courses(),
            "",
            Some("design"),
            Some(CourseStatus::Enrolled),
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);

        let filtered = filter_courses(
            &mock::courses(),
            "",
            Some("design"),
            Some(CourseStatus::Completed),
        );
        assert!(filtered.is_empty());
    }

    #[test]
    fn status_filter_parses_wire_values() {
        assert_eq!(parse_status_filter("enrolled"), Some(CourseStatus::Enrolled));
        assert_eq!(
            parse_status_filter("not-started"),
            Some(CourseStatus::NotStarted)
        );
        assert_eq!(parse_status_filter("all"), None);
    }
}
