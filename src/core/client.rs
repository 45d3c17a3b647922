//! Client business logic - the CRM side of the back office.
//!
//! Clients are soft-deleted so that their project history survives; the
//! conception data hanging off a project is never orphaned by a CRM cleanup.

use crate::{
    entities::{Client, client},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves all active (non-deleted) clients, ordered alphabetically by name.
pub async fn get_all_active_clients(db: &DatabaseConnection) -> Result<Vec<client::Model>> {
    Client::find()
        .filter(client::Column::IsDeleted.eq(false))
        .order_by_asc(client::Column::FullName)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a client by its unique ID.
pub async fn get_client_by_id(
    db: &DatabaseConnection,
    client_id: i64,
) -> Result<Option<client::Model>> {
    Client::find_by_id(client_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new client record.
pub async fn create_client(
    db: &DatabaseConnection,
    full_name: String,
    email: Option<String>,
    phone: Option<String>,
) -> Result<client::Model> {
    if full_name.trim().is_empty() {
        return Err(Error::Config {
            message: "Client name cannot be empty".to_string(),
        });
    }

    let client = client::ActiveModel {
        full_name: Set(full_name.trim().to_string()),
        email: Set(email),
        phone: Set(phone),
        created_at: Set(chrono::Utc::now()),
        is_deleted: Set(false),
        ..Default::default()
    };

    client.insert(db).await.map_err(Into::into)
}

/// Soft-deletes a client, hiding it from active listings while preserving
/// its data and project history.
pub async fn delete_client(db: &DatabaseConnection, client_id: i64) -> Result<client::Model> {
    let client = get_client_by_id(db, client_id)
        .await?
        .ok_or_else(|| Error::ClientNotFound {
            reference: client_id.to_string(),
        })?;

    let mut active: client::ActiveModel = client.into();
    active.is_deleted = Set(true);

    active.update(db).await.map_err(Into::into)
}
