//! Database configuration module for `AtelierDesk`.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all necessary tables
//! based on the entity definitions. The module uses `SeaORM`'s `Schema::create_table_from_entity`
//! method to automatically generate SQL statements from the entity models, ensuring that the
//! database schema matches the Rust struct definitions without requiring manual SQL.

use crate::entities::{Client, Furniture, Material, Phase, Project, Room};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from environment variable or returns default `SQLite` path.
///
/// This function looks for `DATABASE_URL` in the environment and falls back to
/// a default local `SQLite` file if not found.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/atelier_desk.sqlite".to_string())
}

/// Establishes a connection to the `SQLite` database using the `DATABASE_URL` environment variable.
///
/// Falls back to a default local `SQLite` file if no environment variable is set.
/// This function handles connection errors and provides a clean interface for database access
/// throughout the application.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();

    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates all necessary database tables using `SeaORM`'s schema generation from entity definitions.
///
/// This function uses the `DeriveEntityModel` macros to automatically generate proper SQL
/// statements for table creation, ensuring the database schema matches the Rust struct definitions.
/// It creates tables for clients, projects, materials, furniture, rooms, and phases.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    // if_not_exists keeps startup idempotent against an existing database file
    let mut client_table = schema.create_table_from_entity(Client);
    client_table.if_not_exists();
    let mut project_table = schema.create_table_from_entity(Project);
    project_table.if_not_exists();
    let mut material_table = schema.create_table_from_entity(Material);
    material_table.if_not_exists();
    let mut furniture_table = schema.create_table_from_entity(Furniture);
    furniture_table.if_not_exists();
    let mut room_table = schema.create_table_from_entity(Room);
    room_table.if_not_exists();
    let mut phase_table = schema.create_table_from_entity(Phase);
    phase_table.if_not_exists();

    db.execute(builder.build(&client_table)).await?;
    db.execute(builder.build(&project_table)).await?;
    db.execute(builder.build(&material_table)).await?;
    db.execute(builder.build(&furniture_table)).await?;
    db.execute(builder.build(&room_table)).await?;
    db.execute(builder.build(&phase_table)).await?;

    Ok(())
}
