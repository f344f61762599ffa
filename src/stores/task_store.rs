use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

use crate::errors::InternalError;
use crate::types::db::{task, user};

/// Fields for a new task row
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub task_type: String,
    pub status: String,
    pub priority: String,
    pub assigned_to: i32,
    pub created_by: i32,
    pub due_date: Option<String>,
}

/// Fields for a task update
pub struct TaskUpdate {
    pub title: String,
    pub description: Option<String>,
    pub task_type: String,
    pub status: String,
    pub priority: String,
    pub assigned_to: i32,
    pub due_date: Option<String>,
}

/// TaskStore manages task rows and the scoped listing queries
///
/// The three listing shapes mirror the visibility scopes: all tasks, a
/// manager's team (direct reports' tasks plus the manager's own), and a
/// single user's tasks. Which one applies is decided by the access policy,
/// not here.
pub struct TaskStore {
    db: DatabaseConnection,
}

impl TaskStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, new_task: NewTask) -> Result<task::Model, InternalError> {
        let now = Utc::now().timestamp();

        let row = task::ActiveModel {
            title: Set(new_task.title),
            description: Set(new_task.description),
            task_type: Set(new_task.task_type),
            status: Set(new_task.status),
            priority: Set(new_task.priority),
            assigned_to: Set(new_task.assigned_to),
            created_by: Set(new_task.created_by),
            due_date: Set(new_task.due_date),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        row.insert(&self.db)
            .await
            .map_err(|e| InternalError::database("create_task", e))
    }

    pub async fn find_by_id(&self, task_id: i32) -> Result<Option<task::Model>, InternalError> {
        task::Entity::find_by_id(task_id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_task_by_id", e))
    }

    /// Every task, newest first
    pub async fn list_all(&self) -> Result<Vec<task::Model>, InternalError> {
        task::Entity::find()
            .order_by_desc(task::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_all_tasks", e))
    }

    /// Tasks assigned to anyone reporting to the manager, plus the
    /// manager's own tasks, newest first
    pub async fn list_for_team(&self, manager_id: i32) -> Result<Vec<task::Model>, InternalError> {
        task::Entity::find()
            .join(JoinType::InnerJoin, task::Relation::Assignee.def())
            .filter(
                Condition::any()
                    .add(user::Column::ManagerId.eq(manager_id))
                    .add(task::Column::AssignedTo.eq(manager_id)),
            )
            .order_by_desc(task::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_team_tasks", e))
    }

    /// Tasks assigned to a single user, newest first
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<task::Model>, InternalError> {
        task::Entity::find()
            .filter(task::Column::AssignedTo.eq(user_id))
            .order_by_desc(task::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_user_tasks", e))
    }

    pub async fn update(
        &self,
        task_id: i32,
        update: TaskUpdate,
    ) -> Result<(), InternalError> {
        let row = task::ActiveModel {
            id: Set(task_id),
            title: Set(update.title),
            description: Set(update.description),
            task_type: Set(update.task_type),
            status: Set(update.status),
            priority: Set(update.priority),
            assigned_to: Set(update.assigned_to),
            due_date: Set(update.due_date),
            updated_at: Set(Utc::now().timestamp()),
            ..Default::default()
        };

        row.update(&self.db)
            .await
            .map_err(|e| InternalError::database("update_task", e))?;

        Ok(())
    }

    pub async fn delete(&self, task_id: i32) -> Result<(), InternalError> {
        task::Entity::delete_by_id(task_id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_task", e))?;

        Ok(())
    }
}
