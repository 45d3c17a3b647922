//! Room business logic - room management and the before/after index.
//!
//! The before/after index is a pure filter: a room appears in the comparison
//! view iff it has both a "before" photo and a "concept" render, in the order
//! the rooms were added to the project. No qualifying rooms is a normal state
//! ("no comparisons yet"), not an error.

use crate::{
    entities::{Room, room},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

fn has_image(url: Option<&String>) -> bool {
    url.is_some_and(|u| !u.is_empty())
}

/// Whether a room can appear in the before/after comparison view.
#[must_use]
pub fn is_comparable(room: &room::Model) -> bool {
    has_image(room.before_image_url.as_ref()) && has_image(room.concept_image_url.as_ref())
}

/// Filters a room list down to the comparable rooms, preserving order.
///
/// Returns the subsequence of rooms where both image URLs are present and
/// non-empty. An empty result is the valid "no comparisons yet" state.
#[must_use]
pub fn comparable_rooms(rooms: &[room::Model]) -> Vec<room::Model> {
    rooms.iter().filter(|r| is_comparable(r)).cloned().collect()
}

/// Retrieves a project's rooms in the order they were added.
pub async fn get_rooms_for_project(
    db: &DatabaseConnection,
    project_id: i64,
) -> Result<Vec<room::Model>> {
    Room::find()
        .filter(room::Column::ProjectId.eq(project_id))
        .order_by_asc(room::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates a new room on a project, with no imagery yet.
pub async fn create_room(
    db: &DatabaseConnection,
    project_id: i64,
    name: String,
) -> Result<room::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Room name cannot be empty".to_string(),
        });
    }

    let room = room::ActiveModel {
        project_id: Set(project_id),
        name: Set(name.trim().to_string()),
        before_image_url: Set(None),
        concept_image_url: Set(None),
        ..Default::default()
    };

    room.insert(db).await.map_err(Into::into)
}

/// Replaces a room's before/concept imagery.
///
/// Passing `None` clears the corresponding image, which also removes the room
/// from the comparison view until both images are present again.
pub async fn update_room_images(
    db: &DatabaseConnection,
    room_id: i64,
    before_image_url: Option<String>,
    concept_image_url: Option<String>,
) -> Result<room::Model> {
    let room = Room::find_by_id(room_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::RoomNotFound {
            reference: room_id.to_string(),
        })?;

    let mut active: room::ActiveModel = room.into();
    active.before_image_url = Set(before_image_url);
    active.concept_image_url = Set(concept_image_url);

    active.update(db).await.map_err(Into::into)
}
