use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::api::SessionAuth;
use crate::app_data::AppData;
use crate::coordinators::TaskCoordinator;
use crate::errors::task::TaskError;
use crate::services::SessionService;
use crate::types::dto::common::MessageResponse;
use crate::types::dto::task::{
    AssignableUsersResponse, CreateTaskRequest, TaskResponse, UpdateTaskRequest,
};
use crate::types::internal::Principal;

/// Task API endpoints
pub struct TaskApi {
    coordinator: TaskCoordinator,
    session_service: Arc<SessionService>,
}

impl TaskApi {
    pub fn new(app_data: &Arc<AppData>) -> Self {
        Self {
            coordinator: TaskCoordinator::new(app_data),
            session_service: Arc::clone(&app_data.session_service),
        }
    }

    fn principal(&self, auth: &SessionAuth) -> Result<Principal, TaskError> {
        self.session_service
            .resolve(&auth.0.key)
            .ok_or_else(TaskError::unauthenticated)
    }
}

/// API tags for task endpoints
#[derive(Tags)]
enum TaskTags {
    /// Task endpoints
    Tasks,
}

#[OpenApi(prefix_path = "/tasks")]
impl TaskApi {
    /// Create a task
    ///
    /// Users without assignment privileges always end up as the assignee,
    /// regardless of what the request says.
    #[oai(path = "/", method = "post", tag = "TaskTags::Tasks")]
    async fn create_task(
        &self,
        auth: SessionAuth,
        body: Json<CreateTaskRequest>,
    ) -> Result<Json<TaskResponse>, TaskError> {
        let principal = self.principal(&auth)?;
        let task = self.coordinator.create_task(&principal, body.0).await?;
        Ok(Json(task))
    }

    /// Users the session user may assign tasks to
    #[oai(path = "/assignable-users", method = "get", tag = "TaskTags::Tasks")]
    async fn assignable_users(
        &self,
        auth: SessionAuth,
    ) -> Result<Json<AssignableUsersResponse>, TaskError> {
        let principal = self.principal(&auth)?;
        let users = self.coordinator.assignable_users(&principal).await?;
        Ok(Json(users))
    }

    /// Fetch a single task
    #[oai(path = "/:task_id", method = "get", tag = "TaskTags::Tasks")]
    async fn get_task(
        &self,
        auth: SessionAuth,
        task_id: Path<i32>,
    ) -> Result<Json<TaskResponse>, TaskError> {
        let principal = self.principal(&auth)?;
        let task = self.coordinator.get_task(&principal, task_id.0).await?;
        Ok(Json(task))
    }

    /// Update a task
    #[oai(path = "/:task_id", method = "put", tag = "TaskTags::Tasks")]
    async fn update_task(
        &self,
        auth: SessionAuth,
        task_id: Path<i32>,
        body: Json<UpdateTaskRequest>,
    ) -> Result<Json<TaskResponse>, TaskError> {
        let principal = self.principal(&auth)?;
        let task = self
            .coordinator
            .update_task(&principal, task_id.0, body.0)
            .await?;
        Ok(Json(task))
    }

    /// Delete a task
    ///
    /// Only administrators and managers may delete, regardless of who the
    /// task is assigned to.
    #[oai(path = "/:task_id", method = "delete", tag = "TaskTags::Tasks")]
    async fn delete_task(
        &self,
        auth: SessionAuth,
        task_id: Path<i32>,
    ) -> Result<Json<MessageResponse>, TaskError> {
        let principal = self.principal(&auth)?;
        self.coordinator.delete_task(&principal, task_id.0).await?;
        Ok(Json(MessageResponse {
            message: "Task deleted successfully".to_string(),
        }))
    }
}
