use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseStatus {
    Enrolled,
    Completed,
    NotStarted,
}

impl CourseStatus {
    /// Label of the card's primary action for this status.
    pub fn action_label(self) -> &'static str {
        match self {
            CourseStatus::Enrolled => "Continue",
            CourseStatus::Completed => "Review",
            CourseStatus::NotStarted => "View Details",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Pending,
    Submitted,
    Graded,
    Overdue,
}

impl AssignmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "Pending",
            AssignmentStatus::Submitted => "Submitted",
            AssignmentStatus::Graded => "Graded",
            AssignmentStatus::Overdue => "Overdue",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "status-pending",
            AssignmentStatus::Submitted => "status-submitted",
            AssignmentStatus::Graded => "status-graded",
            AssignmentStatus::Overdue => "status-overdue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub thumbnail: String,
    pub category: String,
    pub duration: String,
    pub level: String,
    pub rating: f64,
    pub students: u32,
    pub price: u32,
    pub status: CourseStatus,
    pub progress: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentSummary {
    pub id: u32,
    pub title: String,
    pub course: String,
    pub description: String,
    pub due_date: String,
    pub status: AssignmentStatus,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub active_courses: u32,
    pub completed_courses: u32,
    pub pending_assignments: u32,
    pub study_hours: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentCourse {
    pub id: u32,
    pub title: String,
    pub instructor: String,
    pub progress: u32,
    pub thumbnail: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingAssignment {
    pub id: u32,
    pub title: String,
    pub course: String,
    pub due_date: String,
    pub status: AssignmentStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseProgress {
    pub course: String,
    pub progress: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub recent_courses: Vec<RecentCourse>,
    pub upcoming_assignments: Vec<UpcomingAssignment>,
    pub course_progress: Vec<CourseProgress>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoursesResponse {
    pub courses: Vec<CourseSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentsResponse {
    pub assignments: Vec<AssignmentSummary>,
}

/// Extracts the duck-typed fields the auth flows care about from a response
/// body, tolerating whatever else the demo API returns alongside them.
pub fn body_field<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key).and_then(Value::as_str)
}
