use std::sync::Arc;

use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::api::SessionAuth;
use crate::app_data::AppData;
use crate::coordinators::TaskCoordinator;
use crate::errors::task::TaskError;
use crate::services::SessionService;
use crate::types::dto::task::DashboardResponse;

/// Dashboard API endpoints
pub struct DashboardApi {
    coordinator: TaskCoordinator,
    session_service: Arc<SessionService>,
}

impl DashboardApi {
    pub fn new(app_data: &Arc<AppData>) -> Self {
        Self {
            coordinator: TaskCoordinator::new(app_data),
            session_service: Arc::clone(&app_data.session_service),
        }
    }
}

/// API tags for dashboard endpoints
#[derive(Tags)]
enum DashboardTags {
    /// Dashboard endpoints
    Dashboard,
}

#[OpenApi(prefix_path = "/dashboard")]
impl DashboardApi {
    /// Tasks visible to the session user, with aggregate counts
    ///
    /// Administrators see every task, managers their team's tasks, and
    /// everyone else only their own.
    #[oai(path = "/", method = "get", tag = "DashboardTags::Dashboard")]
    async fn dashboard(&self, auth: SessionAuth) -> Result<Json<DashboardResponse>, TaskError> {
        let principal = self
            .session_service
            .resolve(&auth.0.key)
            .ok_or_else(TaskError::unauthenticated)?;

        let response = self.coordinator.dashboard(&principal).await?;
        Ok(Json(response))
    }
}
