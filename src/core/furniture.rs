//! Furniture business logic - Handles furniture line items on a project.
//!
//! Mirrors the material operations, with a single total cost per piece
//! instead of quantity times unit cost.

use crate::{
    entities::{Furniture, furniture},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

fn validate_cost(cost: Option<f64>) -> Result<()> {
    if let Some(amount) = cost {
        if !amount.is_finite() || amount < 0.0 {
            return Err(Error::InvalidAmount { amount });
        }
    }
    Ok(())
}

/// Retrieves a project's furniture lines, ordered alphabetically by name.
pub async fn get_furniture_for_project(
    db: &DatabaseConnection,
    project_id: i64,
) -> Result<Vec<furniture::Model>> {
    Furniture::find()
        .filter(furniture::Column::ProjectId.eq(project_id))
        .order_by_asc(furniture::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates a new furniture line on a project.
///
/// The cost may be left unset while the piece is being sourced; such pieces
/// contribute zero to the budget until a price arrives.
pub async fn create_furniture(
    db: &DatabaseConnection,
    project_id: i64,
    name: String,
    category: String,
    cost: Option<f64>,
    supplier: Option<String>,
) -> Result<furniture::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Furniture name cannot be empty".to_string(),
        });
    }

    validate_cost(cost)?;

    let piece = furniture::ActiveModel {
        project_id: Set(project_id),
        name: Set(name.trim().to_string()),
        category: Set(category),
        cost: Set(cost),
        supplier: Set(supplier),
        ..Default::default()
    };

    piece.insert(db).await.map_err(Into::into)
}

/// Reprices a furniture line.
pub async fn update_furniture_cost(
    db: &DatabaseConnection,
    furniture_id: i64,
    cost: Option<f64>,
) -> Result<furniture::Model> {
    validate_cost(cost)?;

    let piece = Furniture::find_by_id(furniture_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::FurnitureNotFound {
            reference: furniture_id.to_string(),
        })?;

    let mut active: furniture::ActiveModel = piece.into();
    active.cost = Set(cost);

    active.update(db).await.map_err(Into::into)
}

/// Removes a piece from the plan. This is a hard delete.
pub async fn remove_furniture(db: &DatabaseConnection, furniture_id: i64) -> Result<()> {
    let result = Furniture::delete_by_id(furniture_id).exec(db).await?;

    if result.rows_affected == 0 {
        return Err(Error::FurnitureNotFound {
            reference: furniture_id.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{create_test_furniture, setup_with_project};

    #[tokio::test]
    async fn test_furniture_lifecycle() -> Result<()> {
        let (db, project) = setup_with_project().await?;

        let chair = create_furniture(
            &db,
            project.id,
            "Rattan armchair".to_string(),
            "seating".to_string(),
            None,
            Some("Studio Wicker".to_string()),
        )
        .await?;
        assert_eq!(chair.cost, None);

        let priced = update_furniture_cost(&db, chair.id, Some(145_000.0)).await?;
        assert_eq!(priced.cost, Some(145_000.0));

        remove_furniture(&db, chair.id).await?;
        assert!(get_furniture_for_project(&db, project.id).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_furniture_rejects_bad_cost() -> Result<()> {
        let (db, project) = setup_with_project().await?;

        let negative = create_furniture(
            &db,
            project.id,
            "Sofa".to_string(),
            "seating".to_string(),
            Some(-5.0),
            None,
        )
        .await;
        assert!(matches!(negative, Err(Error::InvalidAmount { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_unknown_furniture_fails() -> Result<()> {
        let (db, _project) = setup_with_project().await?;

        let result = remove_furniture(&db, 999).await;
        assert!(matches!(result, Err(Error::FurnitureNotFound { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_furniture_listed_alphabetically() -> Result<()> {
        let (db, project) = setup_with_project().await?;

        create_test_furniture(&db, project.id, "Walnut sideboard", Some(300_000.0)).await?;
        create_test_furniture(&db, project.id, "Coffee table", Some(90_000.0)).await?;

        let pieces = get_furniture_for_project(&db, project.id).await?;
        let names: Vec<&str> = pieces.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Coffee table", "Walnut sideboard"]);

        Ok(())
    }
}
