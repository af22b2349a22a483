use axum::{extract::State, response::IntoResponse, routing::get, Router};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::{
    errors::ServiceError, handlers::common::success_response,
    services::dashboard::DashboardStats, AppState,
};

/// Envelope the legacy dashboard frontend expects around the snapshot.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsResponse {
    pub success: bool,
    pub data: DashboardStats,
}

/// Create the dashboard router
pub fn dashboard_router() -> Router<AppState> {
    Router::new().route("/stats", get(get_dashboard_stats))
}

/// Compute and return the dashboard statistics snapshot
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    responses(
        (status = 200, description = "Dashboard statistics snapshot", body = DashboardStatsResponse),
        (status = 500, description = "Aggregation failed", body = crate::errors::ErrorResponse)
    ),
    tag = "dashboard"
)]
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let stats = state.services.dashboard.get_dashboard_stats().await?;

    info!("Served dashboard statistics snapshot");

    Ok(success_response(DashboardStatsResponse {
        success: true,
        data: stats,
    }))
}
