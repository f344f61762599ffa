use std::collections::HashSet;
use std::sync::Arc;

use crate::app_data::AppData;
use crate::errors::task::TaskError;
use crate::services::access_policy::{self, Scope};
use crate::stores::task_store::{NewTask, TaskUpdate};
use crate::stores::{TaskStore, UserStore};
use crate::types::db::task;
use crate::types::dto::task::{
    AssignableUserResponse, AssignableUsersResponse, CreateTaskRequest, DashboardResponse,
    TaskResponse, TaskStatsResponse, UpdateTaskRequest,
};
use crate::types::internal::{Principal, TaskPriority, TaskStatus};

/// Orchestrates task reads and writes, honoring the access policy's
/// decisions
pub struct TaskCoordinator {
    task_store: Arc<TaskStore>,
    user_store: Arc<UserStore>,
}

impl TaskCoordinator {
    pub fn new(app_data: &Arc<AppData>) -> Self {
        Self {
            task_store: Arc::clone(&app_data.task_store),
            user_store: Arc::clone(&app_data.user_store),
        }
    }

    /// The dashboard: tasks visible under the principal's scope, with
    /// counts computed over that same set
    pub async fn dashboard(&self, principal: &Principal) -> Result<DashboardResponse, TaskError> {
        let rows = match access_policy::scope_for(principal) {
            Scope::All => self.task_store.list_all().await,
            Scope::Team(manager_id) => self.task_store.list_for_team(manager_id).await,
            Scope::Own(user_id) => self.task_store.list_for_user(user_id).await,
        }
        .map_err(TaskError::from_internal)?;

        let count_by = |status: &str| rows.iter().filter(|t| t.status == status).count() as i64;
        let stats = TaskStatsResponse {
            total: rows.len() as i64,
            open: count_by("open"),
            in_progress: count_by("in_progress"),
            completed: count_by("completed"),
        };

        let tasks = self.with_names(rows).await?;
        Ok(DashboardResponse { tasks, stats })
    }

    pub async fn create_task(
        &self,
        principal: &Principal,
        request: CreateTaskRequest,
    ) -> Result<TaskResponse, TaskError> {
        if request.title.trim().is_empty() {
            return Err(TaskError::validation("Title is required"));
        }
        if request.task_type.trim().is_empty() {
            return Err(TaskError::validation("Type is required"));
        }

        let priority = match &request.priority {
            Some(value) => TaskPriority::parse(value)
                .ok_or_else(|| TaskError::validation(format!("Unknown priority: {}", value)))?,
            None => TaskPriority::Medium,
        };

        // Non-privileged roles are silently forced to self; privileged
        // targets must point at an existing active user.
        let assigned_to = access_policy::resolve_assignee(principal, request.assigned_to);
        if assigned_to != principal.user_id {
            let target = self
                .user_store
                .find_by_id(assigned_to)
                .await
                .map_err(TaskError::from_internal)?;
            match target {
                Some(user) if user.is_active() => {}
                _ => return Err(TaskError::validation("Assignee must be an active user")),
            }
        }

        let created = self
            .task_store
            .create(NewTask {
                title: request.title,
                description: request.description,
                task_type: request.task_type,
                status: TaskStatus::Open.as_str().to_string(),
                priority: priority.as_str().to_string(),
                assigned_to,
                created_by: principal.user_id,
                due_date: request.due_date,
            })
            .await
            .map_err(TaskError::from_internal)?;

        tracing::info!(
            "Task {} created by user {} for user {}",
            created.id,
            principal.user_id,
            assigned_to
        );

        let mut tasks = self.with_names(vec![created]).await?;
        Ok(tasks.remove(0))
    }

    pub async fn get_task(
        &self,
        principal: &Principal,
        task_id: i32,
    ) -> Result<TaskResponse, TaskError> {
        let row = self
            .task_store
            .find_by_id(task_id)
            .await
            .map_err(TaskError::from_internal)?
            .ok_or_else(TaskError::not_found)?;

        if !access_policy::can_view(principal, row.assigned_to) {
            return Err(TaskError::forbidden(
                "You do not have permission to view this task",
            ));
        }

        let mut tasks = self.with_names(vec![row]).await?;
        Ok(tasks.remove(0))
    }

    pub async fn update_task(
        &self,
        principal: &Principal,
        task_id: i32,
        request: UpdateTaskRequest,
    ) -> Result<TaskResponse, TaskError> {
        let row = self
            .task_store
            .find_by_id(task_id)
            .await
            .map_err(TaskError::from_internal)?
            .ok_or_else(TaskError::not_found)?;

        if !access_policy::can_edit(principal, row.assigned_to) {
            return Err(TaskError::forbidden(
                "You do not have permission to edit this task",
            ));
        }

        if request.title.trim().is_empty() {
            return Err(TaskError::validation("Title is required"));
        }
        if request.task_type.trim().is_empty() {
            return Err(TaskError::validation("Type is required"));
        }
        let status = TaskStatus::parse(&request.status)
            .ok_or_else(|| TaskError::validation(format!("Unknown status: {}", request.status)))?;
        let priority = TaskPriority::parse(&request.priority).ok_or_else(|| {
            TaskError::validation(format!("Unknown priority: {}", request.priority))
        })?;

        // Omitted assignee keeps the current one
        let assigned_to = request.assigned_to.unwrap_or(row.assigned_to);

        self.task_store
            .update(
                task_id,
                TaskUpdate {
                    title: request.title,
                    description: request.description,
                    task_type: request.task_type,
                    status: status.as_str().to_string(),
                    priority: priority.as_str().to_string(),
                    assigned_to,
                    due_date: request.due_date,
                },
            )
            .await
            .map_err(TaskError::from_internal)?;

        let updated = self
            .task_store
            .find_by_id(task_id)
            .await
            .map_err(TaskError::from_internal)?
            .ok_or_else(TaskError::not_found)?;

        let mut tasks = self.with_names(vec![updated]).await?;
        Ok(tasks.remove(0))
    }

    pub async fn delete_task(&self, principal: &Principal, task_id: i32) -> Result<(), TaskError> {
        let row = self
            .task_store
            .find_by_id(task_id)
            .await
            .map_err(TaskError::from_internal)?
            .ok_or_else(TaskError::not_found)?;

        if !access_policy::can_delete(principal) {
            return Err(TaskError::forbidden(
                "You do not have permission to delete tasks",
            ));
        }

        self.task_store
            .delete(row.id)
            .await
            .map_err(TaskError::from_internal)?;

        tracing::info!("Task {} deleted by user {}", task_id, principal.user_id);
        Ok(())
    }

    /// Users the principal may assign tasks to
    ///
    /// Empty for roles that can only assign to themselves, mirroring the
    /// empty dropdown those users see.
    pub async fn assignable_users(
        &self,
        principal: &Principal,
    ) -> Result<AssignableUsersResponse, TaskError> {
        if !access_policy::can_assign_others(principal) {
            return Ok(AssignableUsersResponse { users: vec![] });
        }

        let users = self
            .user_store
            .list_active()
            .await
            .map_err(TaskError::from_internal)?;

        Ok(AssignableUsersResponse {
            users: users
                .into_iter()
                .map(|u| AssignableUserResponse {
                    id: u.id,
                    username: u.username.clone(),
                    display_name: u.display_name(),
                })
                .collect(),
        })
    }

    /// Resolve assignee/creator display names for a batch of task rows
    async fn with_names(&self, rows: Vec<task::Model>) -> Result<Vec<TaskResponse>, TaskError> {
        let user_ids: Vec<i32> = rows
            .iter()
            .flat_map(|t| [t.assigned_to, t.created_by])
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let names = self
            .user_store
            .display_names(&user_ids)
            .await
            .map_err(TaskError::from_internal)?;

        // A deleted user leaves dangling references; render a placeholder
        // rather than failing the whole listing.
        let name_of = |id: i32| {
            names
                .get(&id)
                .cloned()
                .unwrap_or_else(|| "Unknown".to_string())
        };

        Ok(rows
            .into_iter()
            .map(|t| TaskResponse {
                id: t.id,
                title: t.title,
                description: t.description,
                task_type: t.task_type,
                status: t.status,
                priority: t.priority,
                assigned_to: t.assigned_to,
                assigned_to_name: name_of(t.assigned_to),
                created_by: t.created_by,
                created_by_name: name_of(t.created_by),
                due_date: t.due_date,
                created_at: t.created_at,
                updated_at: t.updated_at,
            })
            .collect())
    }
}
