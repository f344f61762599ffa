use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// A task with assignee and creator display names resolved
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Task id
    pub id: i32,

    /// Task title
    pub title: String,

    /// Task description
    pub description: Option<String>,

    /// Free-text category
    #[oai(rename = "type")]
    pub task_type: String,

    /// "open", "in_progress", "completed" or "cancelled"
    pub status: String,

    /// "low", "medium" or "high"
    pub priority: String,

    /// Assignee user id
    pub assigned_to: i32,

    /// Assignee display name
    pub assigned_to_name: String,

    /// Creator user id
    pub created_by: i32,

    /// Creator display name
    pub created_by_name: String,

    /// Due date (YYYY-MM-DD), if set
    pub due_date: Option<String>,

    /// Creation time (unix seconds)
    pub created_at: i64,

    /// Last update time (unix seconds)
    pub updated_at: i64,
}

/// Aggregate task counts for the dashboard
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct TaskStatsResponse {
    /// Total visible tasks
    pub total: i64,

    /// Tasks with status "open"
    pub open: i64,

    /// Tasks with status "in_progress"
    pub in_progress: i64,

    /// Tasks with status "completed"
    pub completed: i64,
}

/// Response model for the dashboard
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// Tasks visible to the caller, newest first
    pub tasks: Vec<TaskResponse>,

    /// Counts over the visible tasks
    pub stats: TaskStatsResponse,
}

/// Request model for creating a task
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    /// Task title
    pub title: String,

    /// Task description
    pub description: Option<String>,

    /// Free-text category
    #[oai(rename = "type")]
    pub task_type: String,

    /// Priority, defaults to "medium"
    pub priority: Option<String>,

    /// Requested assignee; silently overridden to the caller for
    /// non-privileged roles
    pub assigned_to: Option<i32>,

    /// Due date (YYYY-MM-DD)
    pub due_date: Option<String>,
}

/// Request model for updating a task
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    /// Task title
    pub title: String,

    /// Task description
    pub description: Option<String>,

    /// Free-text category
    #[oai(rename = "type")]
    pub task_type: String,

    /// New status
    pub status: String,

    /// New priority
    pub priority: String,

    /// New assignee; falls back to the current assignee when omitted
    pub assigned_to: Option<i32>,

    /// Due date (YYYY-MM-DD)
    pub due_date: Option<String>,
}

/// A user selectable as a task assignee
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct AssignableUserResponse {
    /// User id
    pub id: i32,

    /// Username
    pub username: String,

    /// Display name
    pub display_name: String,
}

/// Response model for the assignable-users listing
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct AssignableUsersResponse {
    /// Active users the caller may assign tasks to; empty for roles that
    /// can only assign to themselves
    pub users: Vec<AssignableUserResponse>,
}
