//! Client entity - Represents a customer of the studio.
//!
//! Clients are the CRM side of the back office; every conception project
//! belongs to exactly one client. Clients are soft-deleted so their project
//! history is preserved.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Client database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    /// Unique identifier for the client
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Client's full name as used on quotes and reports
    pub full_name: String,
    /// Contact email, if provided
    pub email: Option<String>,
    /// Contact phone number, if provided
    pub phone: Option<String>,
    /// When the client record was created
    pub created_at: DateTimeUtc,
    /// Soft delete flag - if true, client is hidden but data is preserved
    pub is_deleted: bool,
}

/// Defines relationships between Client and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One client has many conception projects
    #[sea_orm(has_many = "super::project::Entity")]
    Projects,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
