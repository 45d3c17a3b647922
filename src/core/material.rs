//! Material business logic - Handles material line items on a project.
//!
//! Materials are created and repriced by staff during the design phase and
//! removed outright when they leave the plan. Write-time validation keeps
//! obvious junk out of the store; the budget aggregation stays tolerant of
//! unpriced lines regardless.

use crate::{
    entities::{Material, material},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

fn validate_cost_fields(quantity: f64, unit_cost: Option<f64>) -> Result<()> {
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(Error::InvalidAmount { amount: quantity });
    }
    if let Some(cost) = unit_cost {
        if !cost.is_finite() || cost < 0.0 {
            return Err(Error::InvalidAmount { amount: cost });
        }
    }
    Ok(())
}

/// Retrieves a project's material lines, ordered alphabetically by name.
pub async fn get_materials_for_project(
    db: &DatabaseConnection,
    project_id: i64,
) -> Result<Vec<material::Model>> {
    Material::find()
        .filter(material::Column::ProjectId.eq(project_id))
        .order_by_asc(material::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates a new material line on a project.
///
/// The unit cost may be left unset while the line is being priced; such lines
/// contribute zero to the budget until a cost arrives.
pub async fn create_material(
    db: &DatabaseConnection,
    project_id: i64,
    name: String,
    category: String,
    quantity: f64,
    unit: Option<String>,
    unit_cost: Option<f64>,
) -> Result<material::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Material name cannot be empty".to_string(),
        });
    }

    validate_cost_fields(quantity, unit_cost)?;

    let material = material::ActiveModel {
        project_id: Set(project_id),
        name: Set(name.trim().to_string()),
        category: Set(category),
        quantity: Set(quantity),
        unit: Set(unit),
        unit_cost: Set(unit_cost),
        ..Default::default()
    };

    material.insert(db).await.map_err(Into::into)
}

/// Reprices a material line: new quantity and unit cost.
pub async fn update_material_cost(
    db: &DatabaseConnection,
    material_id: i64,
    quantity: f64,
    unit_cost: Option<f64>,
) -> Result<material::Model> {
    validate_cost_fields(quantity, unit_cost)?;

    let material = Material::find_by_id(material_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::MaterialNotFound {
            reference: material_id.to_string(),
        })?;

    let mut active: material::ActiveModel = material.into();
    active.quantity = Set(quantity);
    active.unit_cost = Set(unit_cost);

    active.update(db).await.map_err(Into::into)
}

/// Removes a material from the plan. This is a hard delete.
pub async fn remove_material(db: &DatabaseConnection, material_id: i64) -> Result<()> {
    let result = Material::delete_by_id(material_id).exec(db).await?;

    if result.rows_affected == 0 {
        return Err(Error::MaterialNotFound {
            reference: material_id.to_string(),
        });
    }

    Ok(())
}
