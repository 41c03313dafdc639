use crate::api::{mock, ApiClient, DashboardData};

/// Fetch-with-fallback: on any network or HTTP failure the fixed demo
/// dataset is substituted silently. Intentional for this demo environment;
/// a production build would surface an offline/demo-data indicator instead.
pub async fn load_dashboard(api: &ApiClient) -> DashboardData {
    match api.get_dashboard().await {
        Ok(data) => data,
        Err(err) => {
            log::warn!("dashboard request failed, using demo data: {err}");
            mock::dashboard_data()
        }
    }
}
