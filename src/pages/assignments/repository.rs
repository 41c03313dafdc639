use crate::api::{mock, ApiClient, AssignmentSummary};

/// Fetch-with-fallback over `GET /assignments`.
pub async fn load_assignments(api: &ApiClient) -> Vec<AssignmentSummary> {
    match api.get_assignments().await {
        Ok(assignments) => assignments,
        Err(err) => {
            log::warn!("assignments request failed, using demo data: {err}");
            mock::assignments()
        }
    }
}

/// Submission is logged, not committed; the demo API has no write endpoint.
pub fn submit_assignment(assignment_id: u32) {
    log::info!("submitting assignment {assignment_id}");
}

pub fn view_assignment(assignment_id: u32) {
    log::info!("viewing assignment {assignment_id}");
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::session::MemorySession;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn http_failure_substitutes_demo_assignments() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/assignments");
            then.status(500).json_body(json!({}));
        });
        let api = ApiClient::new_with_base_url(server.base_url(), MemorySession::shared());

        let assignments = load_assignments(&api).await;
        assert_eq!(assignments, mock::assignments());
    }

    #[tokio::test]
    async fn malformed_body_also_falls_back() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/assignments");
            then.status(200).json_body(json!({ "unexpected": true }));
        });
        let api = ApiClient::new_with_base_url(server.base_url(), MemorySession::shared());

        assert_eq!(load_assignments(&api).await, mock::assignments());
    }
}
