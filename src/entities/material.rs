//! Material entity - A material line item on a conception project.
//!
//! Materials are quantified goods (tiling, paint, fabric) priced per unit.
//! `unit_cost` is nullable because staff often sketch the plan before pricing
//! it; unpriced lines contribute zero to the budget rather than blocking the
//! aggregation. Removing a material from the plan deletes the row outright.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Material line item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "materials")]
pub struct Model {
    /// Unique identifier for the material line
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the project this material belongs to
    pub project_id: i64,
    /// Material name (e.g., "Terracotta floor tile")
    pub name: String,
    /// Category tag for grouping (e.g., "flooring", "paint")
    pub category: String,
    /// Quantity in the given unit
    pub quantity: f64,
    /// Unit of measure (e.g., `"m²"`, `"roll"`), if any
    pub unit: Option<String>,
    /// Cost per unit; None while the line is still unpriced
    pub unit_cost: Option<f64>,
}

/// Defines relationships between Material and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each material belongs to one project
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
