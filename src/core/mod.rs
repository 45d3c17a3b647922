//! Core business logic - framework-agnostic back-office operations.
//!
//! The pure aggregation functions (budget summaries, phase progress, room
//! pairing, currency normalization) live here alongside the persistence
//! operations that materialize their input snapshots. The pure functions are
//! total: malformed data is recovered with safe defaults, never propagated as
//! an error.

/// Cost aggregation and budget summary building
pub mod budget;
/// Client CRM operations
pub mod client;
/// Currency normalization - parsing and formatting of monetary amounts
pub mod currency;
/// Furniture line item operations
pub mod furniture;
/// Material line item operations
pub mod material;
/// Workflow phase operations and progress tracking
pub mod phase;
/// Conception project operations
pub mod project;
/// Project report assembly for the display and export layers
pub mod report;
/// Room operations and the before/after comparison index
pub mod room;
