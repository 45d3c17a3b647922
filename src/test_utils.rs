//! Shared test utilities for `AtelierDesk`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{client, furniture, material, phase, project, room},
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test client with no contact details.
pub async fn create_test_client(
    db: &DatabaseConnection,
    full_name: &str,
) -> Result<entities::client::Model> {
    client::create_client(db, full_name.to_string(), None, None).await
}

/// Creates a test project with sensible defaults.
///
/// # Defaults
/// * `description`: None
/// * `budget_max`: None (no budget set)
/// * `currency`: "XAF"
pub async fn create_test_project(
    db: &DatabaseConnection,
    client_id: i64,
    name: &str,
) -> Result<entities::project::Model> {
    project::create_project(db, client_id, name.to_string(), None, None, "XAF").await
}

/// Creates a test project with an explicit budget ceiling and currency.
/// Use this when a test needs budget usage figures.
pub async fn create_custom_project(
    db: &DatabaseConnection,
    client_id: i64,
    name: &str,
    budget_max: Option<f64>,
    currency: &str,
) -> Result<entities::project::Model> {
    project::create_project(db, client_id, name.to_string(), None, budget_max, currency).await
}

/// Creates a test material with sensible defaults.
///
/// # Defaults
/// * `category`: "general"
/// * `quantity`: 1.0
/// * `unit`: None
pub async fn create_test_material(
    db: &DatabaseConnection,
    project_id: i64,
    name: &str,
    unit_cost: Option<f64>,
) -> Result<entities::material::Model> {
    material::create_material(
        db,
        project_id,
        name.to_string(),
        "general".to_string(),
        1.0,
        None,
        unit_cost,
    )
    .await
}

/// Creates a test material with custom parameters.
pub async fn create_custom_material(
    db: &DatabaseConnection,
    project_id: i64,
    name: &str,
    category: &str,
    quantity: f64,
    unit: Option<&str>,
    unit_cost: Option<f64>,
) -> Result<entities::material::Model> {
    material::create_material(
        db,
        project_id,
        name.to_string(),
        category.to_string(),
        quantity,
        unit.map(String::from),
        unit_cost,
    )
    .await
}

/// Creates a test furniture piece with sensible defaults.
///
/// # Defaults
/// * `category`: "general"
/// * `supplier`: None
pub async fn create_test_furniture(
    db: &DatabaseConnection,
    project_id: i64,
    name: &str,
    cost: Option<f64>,
) -> Result<entities::furniture::Model> {
    furniture::create_furniture(
        db,
        project_id,
        name.to_string(),
        "general".to_string(),
        cost,
        None,
    )
    .await
}

/// Creates a test room and optionally attaches imagery in one step.
pub async fn create_test_room(
    db: &DatabaseConnection,
    project_id: i64,
    name: &str,
    before_image_url: Option<&str>,
    concept_image_url: Option<&str>,
) -> Result<entities::room::Model> {
    let created = room::create_room(db, project_id, name.to_string()).await?;

    if before_image_url.is_none() && concept_image_url.is_none() {
        return Ok(created);
    }

    room::update_room_images(
        db,
        created.id,
        before_image_url.map(String::from),
        concept_image_url.map(String::from),
    )
    .await
}

/// Creates a test phase at 0% completion.
pub async fn create_test_phase(
    db: &DatabaseConnection,
    project_id: i64,
    name: &str,
    sequence: i32,
) -> Result<entities::phase::Model> {
    phase::create_phase(db, project_id, name.to_string(), None, sequence).await
}

/// Sets up a complete test environment with a client and a project.
/// Returns (db, project) for common test scenarios.
pub async fn setup_with_project() -> Result<(DatabaseConnection, entities::project::Model)> {
    let db = setup_test_db().await?;
    let client = create_test_client(&db, "Test Client").await?;
    let project = create_test_project(&db, client.id, "Test Project").await?;
    Ok((db, project))
}
