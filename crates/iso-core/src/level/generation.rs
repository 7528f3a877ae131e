//! Room placement.
//!
//! Repeatedly samples an anchor and a shape, and accepts the candidate
//! only if it stays inside the playable bounds and keeps the padding
//! margin from the reserved center and every room placed before it.

use super::errors::LevelError;
use super::point::Point;
use super::rect::Rect;
use super::room::Room;
use super::shape::{create_room_shape, RoomShape};
use crate::rng::LevelRng;
use crate::{MAX_PLACEMENT_ATTEMPTS, TARGET_ROOM_COUNT};

/// Place up to [`TARGET_ROOM_COUNT`] rooms on a map of the given size.
///
/// Best effort: the loop stops after [`MAX_PLACEMENT_ATTEMPTS`] samples,
/// so a crowded or tiny map yields fewer rooms without an error. Anchors
/// are drawn from [1, map] on each axis. Identical seeds produce
/// identical room lists.
pub fn generate_rooms(
    map_size: Point,
    center: Rect,
    rng: &mut LevelRng,
) -> Result<Vec<Room>, LevelError> {
    let mut rooms = Vec::new();
    let mut attempts = 0;
    while attempts < MAX_PLACEMENT_ATTEMPTS && rooms.len() < TARGET_ROOM_COUNT {
        attempts += 1;

        let anchor = Point::new(
            1 + rng.below(map_size.x as u32) as i32,
            1 + rng.below(map_size.y as u32) as i32,
        );
        let shape = RoomShape::ALL[rng.below(RoomShape::ALL.len() as u32) as usize];
        let rects = create_room_shape(anchor, shape, rng);

        if room_can_be_placed(map_size, &center, &rects, &rooms) {
            rooms.push(Room::new(rects, shape, rng)?);
        }
    }

    Ok(rooms)
}

/// Acceptance test for a candidate footprint.
///
/// Every rectangle must lie strictly inside the map with a 1-cell border
/// inset, and its oversized form must miss both the oversized center and
/// all previously accepted footprints. Padding one side of each pair is
/// enough: the margin is fixed, so the test is symmetric.
pub fn room_can_be_placed(
    map_size: Point,
    center: &Rect,
    rects: &[Rect],
    rooms: &[Room],
) -> bool {
    for rect in rects {
        if rect.origin.x <= 0
            || rect.right() >= map_size.x - 1
            || rect.origin.y <= 0
            || rect.bottom() >= map_size.y - 1
        {
            return false;
        }

        let padded = rect.oversized();
        if padded.intersects(&center.oversized()) {
            return false;
        }
        for room in rooms {
            if room.rects.iter().any(|other| padded.intersects(other)) {
                return false;
            }
        }
    }

    true
}
