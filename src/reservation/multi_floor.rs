//! Backtracking search for bookings that have to span several floors
//!
//! Every way of splitting the requested count across the floors is tried,
//! taking a contiguous run of rooms from each floor. This is brute force: the
//! work grows exponentially with the number of floors and runs per floor. It
//! is only meant for this building (10 floors, at most 10 rooms each) and
//! bookings of a handful of rooms.
//!
//! Only contiguous runs per floor are considered, so the answer is the best
//! contiguous-per-floor selection rather than the best over every possible
//! subset of rooms.

use log::debug;

use super::finder::group_by_floor;
use super::travel::travel_time;

/// Finds the `count` rooms across floors with the lowest travel time.
///
/// Floors are visited lowest first, and on each floor the number of rooms
/// taken and the run start both ascend. The first selection reaching the
/// lowest time wins ties. Returns an empty selection when `available` cannot
/// supply `count` rooms.
pub fn combine_across_floors(available: &[u32], count: usize) -> Vec<u32> {
    if count == 0 {
        return Vec::new();
    }

    let by_floor = group_by_floor(available);
    let mut search = CombinationSearch {
        floors: by_floor.values().map(Vec::as_slice).collect(),
        current: Vec::with_capacity(count),
        best: None,
        evaluated: 0,
    };
    search.explore(0, count);

    debug!(
        "Multi-floor search for {} rooms evaluated {} combinations, best time {:?}",
        count,
        search.evaluated,
        search.best.as_ref().map(|(time, _)| *time)
    );

    search.best.map(|(_, rooms)| rooms).unwrap_or_default()
}

/// State of one depth-first walk over the floors
struct CombinationSearch<'a> {
    /// Available rooms per floor, floors ascending, rooms ascending
    floors: Vec<&'a [u32]>,
    /// Rooms picked on the floors visited so far
    current: Vec<u32>,
    /// Lowest travel time found and its rooms
    best: Option<(u32, Vec<u32>)>,
    evaluated: usize,
}

impl CombinationSearch<'_> {
    fn explore(&mut self, floor_idx: usize, remaining: usize) {
        if remaining == 0 {
            self.evaluated += 1;
            let time = travel_time(&self.current);
            if self.best.as_ref().map_or(true, |(best_time, _)| time < *best_time) {
                self.best = Some((time, self.current.clone()));
            }
            return;
        }

        let Some(&rooms) = self.floors.get(floor_idx) else {
            return;
        };

        // Skipping the floor is a single branch.
        self.explore(floor_idx + 1, remaining);

        for take in 1..=remaining.min(rooms.len()) {
            for start in 0..=rooms.len() - take {
                self.current.extend_from_slice(&rooms[start..start + take]);
                self.explore(floor_idx + 1, remaining - take);
                self.current.truncate(self.current.len() - take);
            }
        }
    }
}
