//! Project entity - Represents a conception (design) project.
//!
//! A project owns its rooms, materials, furniture, and phases. The optional
//! `budget_max` is the ceiling staff declare at creation or edit time; the
//! budget summary builder reads it to derive usage percentages. Immutability
//! of archived projects is an application-level rule enforced outside this
//! crate.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Conception project database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    /// Unique identifier for the project
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the client this project belongs to
    pub client_id: i64,
    /// Human-readable project name (e.g., "Villa Nkolbisson refresh")
    pub name: String,
    /// Free-form project brief, if any
    pub description: Option<String>,
    /// Declared budget ceiling; None means no budget has been set
    pub budget_max: Option<f64>,
    /// Display currency code for this project's amounts (e.g., "XAF")
    pub currency: String,
    /// Whether the project has been archived at the end of the engagement
    pub is_archived: bool,
    /// When the project record was created
    pub created_at: DateTimeUtc,
    /// Soft delete flag - if true, project is hidden but data is preserved
    pub is_deleted: bool,
}

/// Defines relationships between Project and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each project belongs to one client
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id"
    )]
    Client,
    /// One project has many material line items
    #[sea_orm(has_many = "super::material::Entity")]
    Materials,
    /// One project has many furniture line items
    #[sea_orm(has_many = "super::furniture::Entity")]
    Furniture,
    /// One project has many rooms
    #[sea_orm(has_many = "super::room::Entity")]
    Rooms,
    /// One project has many workflow phases
    #[sea_orm(has_many = "super::phase::Entity")]
    Phases,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Materials.def()
    }
}

impl Related<super::furniture::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Furniture.def()
    }
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rooms.def()
    }
}

impl Related<super::phase::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Phases.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
