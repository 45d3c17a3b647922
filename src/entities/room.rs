//! Room entity - A room within a conception project.
//!
//! Rooms optionally carry a "before" photo and a "concept" render. A room with
//! both images is comparable and shows up in the before/after view; rooms with
//! only one image (or none) are simply not comparable yet.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Room database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    /// Unique identifier for the room
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the project this room belongs to
    pub project_id: i64,
    /// Room name (e.g., "Master bedroom")
    pub name: String,
    /// URL of the "before" photo, if uploaded
    pub before_image_url: Option<String>,
    /// URL of the concept render, if produced
    pub concept_image_url: Option<String>,
}

/// Defines relationships between Room and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each room belongs to one project
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
