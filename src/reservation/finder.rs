//! Same-floor-first room selection
//!
//! A booking goes to the lowest floor that can hold the whole group, even
//! when splitting it across floors would give a shorter travel time. Only
//! when no floor is big enough does the multi-floor search run.

use log::debug;
use std::collections::BTreeMap;

use super::multi_floor::combine_across_floors;
use super::same_floor::select_on_floor;
use super::types::{floor_of, FLOOR_COUNT};

/// Groups rooms by floor. Each floor's rooms come out ascending and
/// without duplicates; the input is left untouched.
pub fn group_by_floor(rooms: &[u32]) -> BTreeMap<u32, Vec<u32>> {
    let mut grouped: BTreeMap<u32, Vec<u32>> = BTreeMap::new();
    for &room in rooms {
        grouped.entry(floor_of(room)).or_default().push(room);
    }
    for floor_rooms in grouped.values_mut() {
        floor_rooms.sort_unstable();
        floor_rooms.dedup();
    }
    grouped
}

/// Chooses `count` rooms out of `available` for one booking.
///
/// Returns exactly `count` distinct rooms, or an empty selection when the
/// request cannot be met. A `count` of 0 also yields an empty selection.
pub fn find_optimal_rooms(available: &[u32], count: usize) -> Vec<u32> {
    if count == 0 || available.len() < count {
        debug!(
            "Cannot pick {} rooms from {} available",
            count,
            available.len()
        );
        return Vec::new();
    }

    let by_floor = group_by_floor(available);

    for floor in 1..=FLOOR_COUNT {
        if let Some(floor_rooms) = by_floor.get(&floor).filter(|rooms| rooms.len() >= count) {
            debug!(
                "Floor {} has {} free rooms, booking {} there",
                floor,
                floor_rooms.len(),
                count
            );
            return select_on_floor(floor_rooms, count);
        }
    }

    debug!("No single floor fits {} rooms, searching across floors", count);
    combine_across_floors(available, count)
}
