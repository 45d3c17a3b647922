//! Furniture entity - A furniture line item on a conception project.
//!
//! Unlike materials, furniture is priced per piece with a single total cost.
//! The cost is nullable for pieces still being sourced. Removing a piece from
//! the plan deletes the row outright.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Furniture line item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "furniture")]
pub struct Model {
    /// Unique identifier for the furniture line
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the project this piece belongs to
    pub project_id: i64,
    /// Piece name (e.g., "Walnut sideboard")
    pub name: String,
    /// Category tag for grouping (e.g., "seating", "storage")
    pub category: String,
    /// Total cost for the piece; None while still being sourced
    pub cost: Option<f64>,
    /// Supplier reference, if known
    pub supplier: Option<String>,
}

/// Defines relationships between Furniture and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each piece belongs to one project
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
