//! Unified error types and result handling for `AtelierDesk`.
//!
//! Errors only arise at the persistence and configuration boundaries. The pure
//! aggregation functions in [`crate::core`] recover malformed data with safe
//! defaults instead of failing, so they never appear in this taxonomy.

use thiserror::Error;

/// Unified error type for all back-office operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration loading or validation failure
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// Database operation failure (wraps `SeaORM` errors)
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A monetary amount failed write-time validation (negative or non-finite)
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// A client lookup found nothing
    #[error("Client not found: {reference}")]
    ClientNotFound {
        /// The id or name that was looked up
        reference: String,
    },

    /// A project lookup found nothing
    #[error("Project not found: {reference}")]
    ProjectNotFound {
        /// The id or name that was looked up
        reference: String,
    },

    /// A material line item lookup found nothing
    #[error("Material not found: {reference}")]
    MaterialNotFound {
        /// The id that was looked up
        reference: String,
    },

    /// A furniture line item lookup found nothing
    #[error("Furniture not found: {reference}")]
    FurnitureNotFound {
        /// The id that was looked up
        reference: String,
    },

    /// A room lookup found nothing
    #[error("Room not found: {reference}")]
    RoomNotFound {
        /// The id that was looked up
        reference: String,
    },

    /// A phase lookup found nothing
    #[error("Phase not found: {reference}")]
    PhaseNotFound {
        /// The id that was looked up
        reference: String,
    },
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
