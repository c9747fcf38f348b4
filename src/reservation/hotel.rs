//! Occupancy state of the hotel
//!
//! Keeps track of which rooms are taken and turns booking requests into
//! selections from the allocation core. This is the layer a front end talks
//! to; the core itself never sees the occupied set.

use log::{info, warn};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::Rng;
use rand::SeedableRng;
use std::collections::BTreeSet;

use super::error::{ReservationError, Result};
use super::finder::find_optimal_rooms;
use super::travel::travel_time;
use super::types::{
    all_rooms, rooms_on_floor, RoomId, FLOOR_COUNT, MAX_BOOKING, MIN_BOOKING, TOTAL_ROOMS,
};

/// Fewest rooms occupied by a random occupancy
pub const RANDOM_OCCUPANCY_MIN: usize = 20;

/// Upper bound (exclusive) on rooms occupied by a random occupancy
pub const RANDOM_OCCUPANCY_MAX: usize = 70;

/// Rooms handed to a guest by a successful booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    /// Booked rooms, ascending
    pub rooms: Vec<u32>,
    /// Travel time between the booked rooms in minutes
    pub travel_time: u32,
}

/// The hotel's current occupancy
#[derive(Debug, Clone)]
pub struct Hotel {
    occupied: BTreeSet<u32>,
    last_booking: Option<Booking>,
    /// Optional seeded RNG for reproducible occupancy
    rng: Option<StdRng>,
}

impl Default for Hotel {
    fn default() -> Self {
        Self::new()
    }
}

impl Hotel {
    fn new_internal(rng: Option<StdRng>) -> Self {
        Self {
            occupied: BTreeSet::new(),
            last_booking: None,
            rng,
        }
    }

    /// Create an empty hotel
    pub fn new() -> Self {
        Self::new_internal(None)
    }

    /// Create an empty hotel with a seeded RNG for reproducible random occupancy
    pub fn new_with_seed(seed: u64) -> Self {
        Self::new_internal(Some(StdRng::seed_from_u64(seed)))
    }

    /// Get a random value in the given range, using seeded RNG if available
    fn random_range(&mut self, range: std::ops::Range<usize>) -> usize {
        match &mut self.rng {
            Some(rng) => rng.random_range(range),
            None => rand::rng().random_range(range),
        }
    }

    /// Rooms not currently occupied, ascending
    pub fn available_rooms(&self) -> Vec<u32> {
        all_rooms()
            .into_iter()
            .filter(|room| !self.occupied.contains(room))
            .collect()
    }

    pub fn is_occupied(&self, room: u32) -> bool {
        self.occupied.contains(&room)
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    pub fn available_count(&self) -> usize {
        TOTAL_ROOMS - self.occupied.len()
    }

    pub fn last_booking(&self) -> Option<&Booking> {
        self.last_booking.as_ref()
    }

    /// Book `count` rooms for one guest and mark them occupied.
    ///
    /// Fails with `InvalidRoomCount` outside 1-5 and with `InfeasibleRequest`
    /// when the free rooms cannot cover the request. Occupancy is unchanged
    /// on failure.
    pub fn book(&mut self, count: usize) -> Result<Booking> {
        if !(MIN_BOOKING..=MAX_BOOKING).contains(&count) {
            return Err(ReservationError::InvalidRoomCount {
                count,
                min: MIN_BOOKING,
                max: MAX_BOOKING,
            });
        }

        let available = self.available_rooms();
        let mut rooms = find_optimal_rooms(&available, count);

        if rooms.len() != count {
            warn!(
                "Could not book {} rooms, only {} available",
                count,
                available.len()
            );
            return Err(ReservationError::InfeasibleRequest {
                requested: count,
                available: available.len(),
            });
        }

        rooms.sort_unstable();
        let booking = Booking {
            travel_time: travel_time(&rooms),
            rooms,
        };
        self.occupied.extend(booking.rooms.iter().copied());
        self.last_booking = Some(booking.clone());

        info!(
            "Booked rooms {:?} (travel time: {} min)",
            booking.rooms, booking.travel_time
        );
        Ok(booking)
    }

    /// Mark specific rooms as occupied. Nothing changes if any room lies
    /// outside the layout.
    pub fn occupy(&mut self, rooms: &[u32]) -> Result<()> {
        let rooms = RoomId::parse_all(rooms)?;
        self.occupied.extend(rooms.into_iter().map(RoomId::get));
        Ok(())
    }

    /// Replace the occupancy with a random set of taken rooms.
    /// Returns how many rooms are now occupied.
    pub fn randomize_occupancy(&mut self) -> usize {
        self.reset();

        let amount = self.random_range(RANDOM_OCCUPANCY_MIN..RANDOM_OCCUPANCY_MAX);
        let rooms = all_rooms();
        let chosen: Vec<u32> = match &mut self.rng {
            Some(rng) => rooms.choose_multiple(rng, amount).copied().collect(),
            None => rooms.choose_multiple(&mut rand::rng(), amount).copied().collect(),
        };
        self.occupied.extend(chosen);

        info!("Generated random occupancy: {} rooms occupied", self.occupied.len());
        self.occupied.len()
    }

    /// Free every room and forget the last booking
    pub fn reset(&mut self) {
        self.occupied.clear();
        self.last_booking = None;
    }

    /// Get a summary string for display
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Occupied: {} / {} | Available: {}",
            self.occupied_count(),
            TOTAL_ROOMS,
            self.available_count()
        );
        if let Some(booking) = &self.last_booking {
            summary.push_str(&format!(" | Last Booking: {} rooms", booking.rooms.len()));
        }
        summary
    }

    /// Text map of the building, top floor first.
    ///
    /// `.` is a free room, `#` an occupied room and `*` a room from the last
    /// booking.
    pub fn draw_map(&self) -> String {
        let booked: &[u32] = self
            .last_booking
            .as_ref()
            .map(|booking| booking.rooms.as_slice())
            .unwrap_or(&[]);

        let mut map = String::new();
        for floor in (1..=FLOOR_COUNT).rev() {
            map.push_str(&format!("Floor {:>2} |", floor));
            for position in 1..=rooms_on_floor(floor) {
                let room = floor * 100 + position;
                let cell = if booked.contains(&room) {
                    '*'
                } else if self.occupied.contains(&room) {
                    '#'
                } else {
                    '.'
                };
                map.push(' ');
                map.push(cell);
            }
            map.push('\n');
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_marks_rooms_occupied() {
        let mut hotel = Hotel::new();
        let booking = hotel.book(3).unwrap();
        assert_eq!(booking.rooms, vec![101, 102, 103]);
        assert_eq!(booking.travel_time, 2);
        assert_eq!(hotel.occupied_count(), 3);
        assert!(hotel.is_occupied(102));

        let next = hotel.book(2).unwrap();
        assert_eq!(next.rooms, vec![104, 105]);
    }

    #[test]
    fn test_draw_map_marks_booking() {
        let mut hotel = Hotel::new();
        hotel.occupy(&[1001]).unwrap();
        hotel.book(1).unwrap();

        let map = hotel.draw_map();
        let lines: Vec<&str> = map.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "Floor 10 | # . . . . . .");
        assert_eq!(lines[9], "Floor  1 | * . . . . . . . . .");
    }
}
