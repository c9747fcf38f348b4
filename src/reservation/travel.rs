//! Travel time between the rooms of a booking
//!
//! Vertical movement costs 2 minutes per floor and horizontal movement 1
//! minute per room. Only the lowest and highest rooms matter: the metric is
//! the walk from one end of the group to the other, not a tour of every room.

use super::error::Result;
use super::types::{
    floor_of, position_of, RoomId, HORIZONTAL_MINUTES_PER_ROOM, VERTICAL_MINUTES_PER_FLOOR,
};

/// Travel time in minutes between the extreme rooms of `rooms`.
///
/// Rooms on one floor cost the corridor distance between them. Rooms on
/// different floors cost the walk from each end room back to the stairs at
/// position 1, plus the floors climbed. Fewer than two rooms cost nothing.
///
/// The input is only read; its order does not matter.
pub fn travel_time(rooms: &[u32]) -> u32 {
    if rooms.len() <= 1 {
        return 0;
    }

    let (Some(&first), Some(&last)) = (rooms.iter().min(), rooms.iter().max()) else {
        return 0;
    };

    let first_floor = floor_of(first);
    let last_floor = floor_of(last);

    let vertical = first_floor.abs_diff(last_floor) * VERTICAL_MINUTES_PER_FLOOR;

    let horizontal = if first_floor == last_floor {
        (last - first) * HORIZONTAL_MINUTES_PER_ROOM
    } else {
        let first_to_stairs = position_of(first).saturating_sub(1);
        let last_to_stairs = position_of(last).saturating_sub(1);
        (first_to_stairs + last_to_stairs) * HORIZONTAL_MINUTES_PER_ROOM
    };

    vertical + horizontal
}

/// Like [`travel_time`], but rejects identifiers outside the building layout.
pub fn checked_travel_time(rooms: &[u32]) -> Result<u32> {
    RoomId::parse_all(rooms)?;
    Ok(travel_time(rooms))
}
