//! Best group of rooms on a single floor

use super::travel::travel_time;

/// Picks the `count` consecutive rooms of `floor_rooms` with the lowest
/// travel time.
///
/// `floor_rooms` must hold rooms of one floor in ascending order. Travel time
/// on a floor grows with the span between the end rooms, so the best group is
/// always a contiguous run of the sorted list and checking every window is
/// exhaustive. Ties go to the window nearest the stairs.
///
/// Returns an empty selection when the floor has fewer than `count` rooms.
pub fn select_on_floor(floor_rooms: &[u32], count: usize) -> Vec<u32> {
    if count == 0 || floor_rooms.len() < count {
        return Vec::new();
    }

    let mut best: Option<(u32, &[u32])> = None;
    for window in floor_rooms.windows(count) {
        let time = travel_time(window);
        if best.map_or(true, |(best_time, _)| time < best_time) {
            best = Some((time, window));
        }
    }

    best.map(|(_, window)| window.to_vec()).unwrap_or_default()
}
