//! Building layout and room identifiers
//!
//! Rooms are numbered `floor * 100 + position`. Floors 1-9 hold ten rooms
//! each; the top floor holds seven (1001-1007).

use super::error::{ReservationError, Result};

/// Number of floors in the building
pub const FLOOR_COUNT: u32 = 10;

/// Rooms on each of floors 1-9
pub const ROOMS_PER_FLOOR: u32 = 10;

/// Rooms on the top floor
pub const TOP_FLOOR_ROOMS: u32 = 7;

/// Total rooms in the building
pub const TOTAL_ROOMS: usize = 97;

/// Smallest booking the front end accepts
pub const MIN_BOOKING: usize = 1;

/// Largest booking the front end accepts
pub const MAX_BOOKING: usize = 5;

/// Minutes to move one floor up or down
pub const VERTICAL_MINUTES_PER_FLOOR: u32 = 2;

/// Minutes to walk past one room along a corridor
pub const HORIZONTAL_MINUTES_PER_ROOM: u32 = 1;

/// Floor a room identifier belongs to
pub fn floor_of(room: u32) -> u32 {
    room / 100
}

/// 1-based position of a room along its floor's corridor.
/// Position 1 sits next to the stairs and lift.
pub fn position_of(room: u32) -> u32 {
    room % 100
}

/// Number of rooms on a floor, 0 for floors outside the building
pub fn rooms_on_floor(floor: u32) -> u32 {
    match floor {
        1..=9 => ROOMS_PER_FLOOR,
        FLOOR_COUNT => TOP_FLOOR_ROOMS,
        _ => 0,
    }
}

pub fn is_valid_room(room: u32) -> bool {
    let position = position_of(room);
    position >= 1 && position <= rooms_on_floor(floor_of(room))
}

/// Every room in the building in ascending order
pub fn all_rooms() -> Vec<u32> {
    (1..=FLOOR_COUNT)
        .flat_map(|floor| (1..=rooms_on_floor(floor)).map(move |position| floor * 100 + position))
        .collect()
}

/// A room identifier known to lie inside the building layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(u32);

impl RoomId {
    pub fn new(raw: u32) -> Result<Self> {
        if is_valid_room(raw) {
            Ok(Self(raw))
        } else {
            Err(ReservationError::InvalidRoomIdentifier(raw))
        }
    }

    /// Validates every identifier, failing on the first one outside the layout
    pub fn parse_all(rooms: &[u32]) -> Result<Vec<Self>> {
        rooms.iter().map(|&room| Self::new(room)).collect()
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn floor(self) -> u32 {
        floor_of(self.0)
    }

    pub fn position(self) -> u32 {
        position_of(self.0)
    }
}

impl TryFrom<u32> for RoomId {
    type Error = ReservationError;

    fn try_from(raw: u32) -> Result<Self> {
        Self::new(raw)
    }
}

impl From<RoomId> for u32 {
    fn from(room: RoomId) -> Self {
        room.0
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_has_97_rooms() {
        let rooms = all_rooms();
        assert_eq!(rooms.len(), TOTAL_ROOMS);
        assert_eq!(rooms.first(), Some(&101));
        assert_eq!(rooms.last(), Some(&1007));
        assert!(rooms.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_room_validation() {
        assert!(is_valid_room(101));
        assert!(is_valid_room(910));
        assert!(is_valid_room(1007));
        assert!(!is_valid_room(100));
        assert!(!is_valid_room(111));
        assert!(!is_valid_room(1008));
        assert!(!is_valid_room(1101));
        assert!(!is_valid_room(5));
    }

    #[test]
    fn test_room_id_derives_floor_and_position() {
        let room = RoomId::new(1004).unwrap();
        assert_eq!(room.floor(), 10);
        assert_eq!(room.position(), 4);
        assert_eq!(
            RoomId::try_from(211),
            Err(ReservationError::InvalidRoomIdentifier(211))
        );
    }

    #[test]
    fn test_parse_all_stops_at_first_bad_room() {
        let rooms = RoomId::parse_all(&[1007, 101]).unwrap();
        assert_eq!(rooms.iter().map(|room| room.get()).collect::<Vec<_>>(), vec![1007, 101]);
        assert_eq!(
            RoomId::parse_all(&[101, 100, 1008]),
            Err(ReservationError::InvalidRoomIdentifier(100))
        );
    }
}
