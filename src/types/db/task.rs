use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: Option<String>,

    // Free-text category, e.g. "Follow-up", "Demo"
    #[sea_orm(column_name = "type")]
    pub task_type: String,

    // "open", "in_progress", "completed" or "cancelled"
    pub status: String,
    // "low", "medium" or "high"
    pub priority: String,

    pub assigned_to: i32,
    pub created_by: i32,

    // ISO date (YYYY-MM-DD), optional
    pub due_date: Option<String>,

    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AssignedTo",
        to = "super::user::Column::Id"
    )]
    Assignee,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id"
    )]
    Creator,
}

impl ActiveModelBehavior for ActiveModel {}
