//! Fixed fallback datasets shown when a live fetch fails. Shipping fake
//! data silently is a demo-environment trade-off: availability over
//! correctness. A production deployment would need a visible offline/demo
//! indicator before reusing this policy.

use super::types::{
    AssignmentStatus, AssignmentSummary, CourseProgress, CourseStatus, CourseSummary,
    DashboardData, DashboardStats, RecentCourse, UpcomingAssignment,
};

const THUMBNAIL: &str = "https://via.placeholder.com/300x200";

pub fn dashboard_data() -> DashboardData {
    DashboardData {
        stats: DashboardStats {
            active_courses: 3,
            completed_courses: 12,
            pending_assignments: 5,
            study_hours: 24,
        },
        recent_courses: vec![
            RecentCourse {
                id: 1,
                title: "JavaScript Fundamentals".into(),
                instructor: "Sarah Johnson".into(),
                progress: 75,
                thumbnail: THUMBNAIL.into(),
                category: "Programming".into(),
            },
            RecentCourse {
                id: 2,
                title: "UI/UX Design Principles".into(),
                instructor: "Mike Chen".into(),
                progress: 45,
                thumbnail: THUMBNAIL.into(),
                category: "Design".into(),
            },
            RecentCourse {
                id: 3,
                title: "Digital Marketing Strategy".into(),
                instructor: "Emily Davis".into(),
                progress: 90,
                thumbnail: THUMBNAIL.into(),
                category: "Marketing".into(),
            },
        ],
        upcoming_assignments: vec![
            UpcomingAssignment {
                id: 1,
                title: "JavaScript Project Submission".into(),
                course: "JavaScript Fundamentals".into(),
                due_date: "2025-01-15".into(),
                status: AssignmentStatus::Pending,
            },
            UpcomingAssignment {
                id: 2,
                title: "Design Portfolio Review".into(),
                course: "UI/UX Design Principles".into(),
                due_date: "2025-01-18".into(),
                status: AssignmentStatus::Pending,
            },
            UpcomingAssignment {
                id: 3,
                title: "Marketing Campaign Analysis".into(),
                course: "Digital Marketing Strategy".into(),
                due_date: "2025-01-20".into(),
                status: AssignmentStatus::Submitted,
            },
        ],
        course_progress: vec![
            CourseProgress {
                course: "JavaScript Fundamentals".into(),
                progress: 75,
            },
            CourseProgress {
                course: "UI/UX Design Principles".into(),
                progress: 45,
            },
            CourseProgress {
                course: "Digital Marketing Strategy".into(),
                progress: 90,
            },
        ],
    }
}

pub fn courses() -> Vec<CourseSummary> {
    vec![
        CourseSummary {
            id: 1,
            title: "JavaScript Fundamentals".into(),
            description: "Learn the basics of JavaScript programming language".into(),
            instructor: "Sarah Johnson".into(),
            thumbnail: THUMBNAIL.into(),
            category: "programming".into(),
            duration: "8 weeks".into(),
            level: "Beginner".into(),
            rating: 4.8,
            students: 1250,
            price: 99,
            status: CourseStatus::Enrolled,
            progress: 75,
        },
        CourseSummary {
            id: 2,
            title: "UI/UX Design Principles".into(),
            description: "Master the fundamentals of user interface and user experience design"
                .into(),
            instructor: "Mike Chen".into(),
            thumbnail: THUMBNAIL.into(),
            category: "design".into(),
            duration: "6 weeks".into(),
            level: "Intermediate".into(),
            rating: 4.9,
            students: 890,
            price: 149,
            status: CourseStatus::Enrolled,
            progress: 45,
        },
        CourseSummary {
            id: 3,
            title: "Digital Marketing Strategy".into(),
            description: "Learn how to create effective digital marketing campaigns".into(),
            instructor: "Emily Davis".into(),
            thumbnail: THUMBNAIL.into(),
            category: "marketing".into(),
            duration: "10 weeks".into(),
            level: "Advanced".into(),
            rating: 4.7,
            students: 2100,
            price: 199,
            status: CourseStatus::Completed,
            progress: 100,
        },
    ]
}

pub fn assignments() -> Vec<AssignmentSummary> {
    vec![
        AssignmentSummary {
            id: 1,
            title: "JavaScript Project Submission".into(),
            course: "JavaScript Fundamentals".into(),
            description: "Create a todo list application using vanilla JavaScript".into(),
            due_date: "2025-01-15".into(),
            status: AssignmentStatus::Pending,
            points: 100,
        },
        AssignmentSummary {
            id: 2,
            title: "Design Portfolio Review".into(),
            course: "UI/UX Design Principles".into(),
            description: "Submit your design portfolio for peer review".into(),
            due_date: "2025-01-18".into(),
            status: AssignmentStatus::Pending,
            points: 150,
        },
        AssignmentSummary {
            id: 3,
            title: "Marketing Campaign Analysis".into(),
            course: "Digital Marketing Strategy".into(),
            description: "Analyze a real-world marketing campaign".into(),
            due_date: "2025-01-20".into(),
            status: AssignmentStatus::Submitted,
            points: 200,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datasets_have_three_entries_with_stable_ids() {
        let ids: Vec<u32> = courses().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        let ids: Vec<u32> = assignments().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn dashboard_stats_match_demo_content() {
        let data = dashboard_data();
        assert_eq!(data.stats.active_courses, 3);
        assert_eq!(data.stats.study_hours, 24);
        assert_eq!(data.recent_courses.len(), 3);
        assert_eq!(data.course_progress.len(), 3);
    }
}
