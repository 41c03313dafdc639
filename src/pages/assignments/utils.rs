use crate::api::{AssignmentStatus, AssignmentSummary};

/// Status-tab filter; `None` is the "all" tab.
pub fn filter_by_status(
    assignments: &[AssignmentSummary],
    status: Option<AssignmentStatus>,
) -> Vec<AssignmentSummary> {
    assignments
        .iter()
        .filter(|a| status.map_or(true, |s| a.status == s))
        .cloned()
        .collect()
}

pub fn parse_status_tab(raw: &str) -> Option<AssignmentStatus> {
    match raw {
        "pending" => Some(AssignmentStatus::Pending),
        "submitted" => Some(AssignmentStatus::Submitted),
        "graded" => Some(AssignmentStatus::Graded),
        "overdue" => Some(AssignmentStatus::Overdue),
        _ => None,
    }
}
