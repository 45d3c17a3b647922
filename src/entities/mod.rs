//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod client;
pub mod furniture;
pub mod material;
pub mod phase;
pub mod project;
pub mod room;

// Re-export specific types to avoid conflicts
pub use client::{Column as ClientColumn, Entity as Client, Model as ClientModel};
pub use furniture::{Column as FurnitureColumn, Entity as Furniture, Model as FurnitureModel};
pub use material::{Column as MaterialColumn, Entity as Material, Model as MaterialModel};
pub use phase::{Column as PhaseColumn, Entity as Phase, Model as PhaseModel};
pub use project::{Column as ProjectColumn, Entity as Project, Model as ProjectModel};
pub use room::{Column as RoomColumn, Entity as Room, Model as RoomModel};
