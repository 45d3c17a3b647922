//! Phase entity - A named stage of a project's design workflow.
//!
//! Phases are ordered by their explicit `sequence`, which reflects the studio
//! workflow (brief, technical visit, concept design, execution plans), never
//! by name. `completion_percentage` is clamped to [0, 100] on every write but
//! readers clamp again, since rows may predate this rule or come from external
//! edits.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Workflow phase database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "phases")]
pub struct Model {
    /// Unique identifier for the phase
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the project this phase belongs to
    pub project_id: i64,
    /// Phase name (e.g., "Technical visit")
    pub name: String,
    /// What the phase covers, if described
    pub description: Option<String>,
    /// Position in the project workflow; lower comes first
    pub sequence: i32,
    /// How far along this phase is, from 0 to 100
    pub completion_percentage: f64,
}

/// Defines relationships between Phase and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each phase belongs to one project
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::ProjectId",
        to = "super::project::Column::Id"
    )]
    Project,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
