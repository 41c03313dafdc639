use super::{
    client::ApiClient,
    types::{AssignmentSummary, AssignmentsResponse, CourseSummary, CoursesResponse, DashboardData},
};
use crate::error::LoadError;

impl ApiClient {
    pub async fn get_dashboard(&self) -> Result<DashboardData, LoadError> {
        self.get_json("dashboard").await
    }

    pub async fn get_courses(&self) -> Result<Vec<CourseSummary>, LoadError> {
        let response: CoursesResponse = self.get_json("courses").await?;
        Ok(response.courses)
    }

    pub async fn get_assignments(&self) -> Result<Vec<AssignmentSummary>, LoadError> {
        let response: AssignmentsResponse = self.get_json("assignments").await?;
        Ok(response.assignments)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        resource: &str,
    ) -> Result<T, LoadError> {
        let base_url = self.resolved_base_url();
        let response = self
            .http_client()
            .get(format!("{}/{}", base_url, resource))
            .headers(self.auth_headers())
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }
        response
            .json()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))
    }
}
