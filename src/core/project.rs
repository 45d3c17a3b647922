//! Project business logic - Handles all conception project operations.
//!
//! Provides functions for creating, retrieving, updating, and archiving
//! projects. Budget ceilings are validated at write time (finite,
//! non-negative); the aggregation side in [`crate::core::budget`] stays
//! tolerant of whatever is already in the store.

use crate::{
    core::currency::Currency,
    entities::{Project, project},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

fn validate_budget(budget_max: Option<f64>) -> Result<()> {
    if let Some(amount) = budget_max {
        if !amount.is_finite() || amount < 0.0 {
            return Err(Error::InvalidAmount { amount });
        }
    }
    Ok(())
}

/// Creates a new conception project for a client.
///
/// The name must be non-blank and the optional budget ceiling finite and
/// non-negative. The currency code is normalized through the supported
/// currency table, so unknown codes land on the studio default instead of
/// propagating junk into every later display.
pub async fn create_project(
    db: &DatabaseConnection,
    client_id: i64,
    name: String,
    description: Option<String>,
    budget_max: Option<f64>,
    currency: &str,
) -> Result<project::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Project name cannot be empty".to_string(),
        });
    }

    validate_budget(budget_max)?;

    let now = chrono::Utc::now();

    let project = project::ActiveModel {
        client_id: Set(client_id),
        name: Set(name.trim().to_string()),
        description: Set(description),
        budget_max: Set(budget_max),
        currency: Set(Currency::from_code(currency).code().to_string()),
        is_archived: Set(false),
        created_at: Set(now),
        is_deleted: Set(false),
        ..Default::default()
    };

    project.insert(db).await.map_err(Into::into)
}

/// Finds a project by its unique ID.
pub async fn get_project_by_id(
    db: &DatabaseConnection,
    project_id: i64,
) -> Result<Option<project::Model>> {
    Project::find_by_id(project_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all active (non-deleted) projects, ordered alphabetically by name.
pub async fn get_all_active_projects(db: &DatabaseConnection) -> Result<Vec<project::Model>> {
    Project::find()
        .filter(project::Column::IsDeleted.eq(false))
        .order_by_asc(project::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a client's active projects, ordered alphabetically by name.
pub async fn get_projects_for_client(
    db: &DatabaseConnection,
    client_id: i64,
) -> Result<Vec<project::Model>> {
    Project::find()
        .filter(project::Column::ClientId.eq(client_id))
        .filter(project::Column::IsDeleted.eq(false))
        .order_by_asc(project::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Updates a project's declared budget ceiling.
///
/// `None` clears the ceiling, which turns budget usage into "not applicable"
/// everywhere downstream. Negative and non-finite ceilings are rejected.
pub async fn update_project_budget(
    db: &DatabaseConnection,
    project_id: i64,
    budget_max: Option<f64>,
) -> Result<project::Model> {
    validate_budget(budget_max)?;

    let project = get_project_by_id(db, project_id)
        .await?
        .ok_or_else(|| Error::ProjectNotFound {
            reference: project_id.to_string(),
        })?;

    let mut active: project::ActiveModel = project.into();
    active.budget_max = Set(budget_max);

    active.update(db).await.map_err(Into::into)
}

/// Marks a project as archived at the end of the engagement.
///
/// Archived projects stay queryable; immutability of their line items is an
/// application-level rule enforced by the calling layer.
pub async fn archive_project(
    db: &DatabaseConnection,
    project_id: i64,
) -> Result<project::Model> {
    let project = get_project_by_id(db, project_id)
        .await?
        .ok_or_else(|| Error::ProjectNotFound {
            reference: project_id.to_string(),
        })?;

    let mut active: project::ActiveModel = project.into();
    active.is_archived = Set(true);

    active.update(db).await.map_err(Into::into)
}

/// Soft-deletes a project, hiding it from active listings while preserving
/// its data.
pub async fn delete_project(db: &DatabaseConnection, project_id: i64) -> Result<project::Model> {
    let project = get_project_by_id(db, project_id)
        .await?
        .ok_or_else(|| Error::ProjectNotFound {
            reference: project_id.to_string(),
        })?;

    let mut active: project::ActiveModel = project.into();
    active.is_deleted = Set(true);

    active.update(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{create_test_client, create_test_project, setup_test_db};

    #[tokio::test]
    async fn test_create_project_normalizes_currency() -> Result<()> {
        let db = setup_test_db().await?;
        let client = create_test_client(&db, "Ama Mensah").await?;

        let project = create_project(
            &db,
            client.id,
            "  Villa refresh  ".to_string(),
            None,
            Some(2_000_000.0),
            "eur",
        )
        .await?;

        assert_eq!(project.name, "Villa refresh");
        assert_eq!(project.currency, "EUR");
        assert_eq!(project.budget_max, Some(2_000_000.0));
        assert!(!project.is_archived);

        // Unknown currency codes land on the studio default
        let other = create_project(&db, client.id, "Duplex".to_string(), None, None, "GBP").await?;
        assert_eq!(other.currency, "XAF");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_project_rejects_bad_input() -> Result<()> {
        let db = setup_test_db().await?;
        let client = create_test_client(&db, "Ama Mensah").await?;

        let blank = create_project(&db, client.id, "  ".to_string(), None, None, "XAF").await;
        assert!(matches!(blank, Err(Error::Config { .. })));

        let negative = create_project(
            &db,
            client.id,
            "Loft".to_string(),
            None,
            Some(-1.0),
            "XAF",
        )
        .await;
        assert!(matches!(negative, Err(Error::InvalidAmount { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_project_budget() -> Result<()> {
        let db = setup_test_db().await?;
        let client = create_test_client(&db, "Ama Mensah").await?;
        let project = create_test_project(&db, client.id, "Loft").await?;
        assert_eq!(project.budget_max, None);

        let updated = update_project_budget(&db, project.id, Some(750_000.0)).await?;
        assert_eq!(updated.budget_max, Some(750_000.0));

        let cleared = update_project_budget(&db, project.id, None).await?;
        assert_eq!(cleared.budget_max, None);

        let rejected = update_project_budget(&db, project.id, Some(f64::NAN)).await;
        assert!(matches!(rejected, Err(Error::InvalidAmount { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_archive_and_delete_project() -> Result<()> {
        let db = setup_test_db().await?;
        let client = create_test_client(&db, "Ama Mensah").await?;
        let project = create_test_project(&db, client.id, "Loft").await?;

        let archived = archive_project(&db, project.id).await?;
        assert!(archived.is_archived);

        // Archived projects still show up in active listings
        assert_eq!(get_all_active_projects(&db).await?.len(), 1);

        delete_project(&db, project.id).await?;
        assert!(get_all_active_projects(&db).await?.is_empty());

        // But the record itself is preserved
        assert!(get_project_by_id(&db, project.id).await?.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_get_projects_for_client() -> Result<()> {
        let db = setup_test_db().await?;
        let ama = create_test_client(&db, "Ama Mensah").await?;
        let kofi = create_test_client(&db, "Kofi Adjei").await?;

        create_test_project(&db, ama.id, "Zen loft").await?;
        create_test_project(&db, ama.id, "Beach house").await?;
        create_test_project(&db, kofi.id, "Office floor").await?;

        let projects = get_projects_for_client(&db, ama.id).await?;
        let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Beach house", "Zen loft"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_project_fails() -> Result<()> {
        let db = setup_test_db().await?;

        let result = update_project_budget(&db, 999, Some(1.0)).await;
        assert!(matches!(result, Err(Error::ProjectNotFound { .. })));

        Ok(())
    }
}
