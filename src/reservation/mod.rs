//! Room allocation for the hotel
//!
//! The allocation core (`travel_time`, `find_optimal_rooms` and the two
//! selectors behind it) is pure and stateless. `Hotel` wraps it with the
//! occupancy bookkeeping a front end needs.

mod error;
mod finder;
mod hotel;
mod multi_floor;
mod same_floor;
mod travel;
mod types;

pub use error::{ReservationError, Result};
pub use finder::{find_optimal_rooms, group_by_floor};
pub use hotel::{Booking, Hotel, RANDOM_OCCUPANCY_MAX, RANDOM_OCCUPANCY_MIN};
pub use multi_floor::combine_across_floors;
pub use same_floor::select_on_floor;
pub use travel::{checked_travel_time, travel_time};
pub use types::{
    all_rooms, floor_of, is_valid_room, position_of, rooms_on_floor, RoomId, FLOOR_COUNT,
    HORIZONTAL_MINUTES_PER_ROOM, MAX_BOOKING, MIN_BOOKING, ROOMS_PER_FLOOR, TOP_FLOOR_ROOMS,
    TOTAL_ROOMS, VERTICAL_MINUTES_PER_FLOOR,
};
