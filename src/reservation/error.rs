use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReservationError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    #[error("Could not book {requested} rooms. Only {available} available.")]
    InfeasibleRequest { requested: usize, available: usize },

    #[error("Invalid room count {count}: expected a number between {min} and {max}")]
    InvalidRoomCount { count: usize, min: usize, max: usize },

    #[error("Invalid room identifier: {0}")]
    InvalidRoomIdentifier(u32),
}
