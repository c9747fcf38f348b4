//! Hotel Room Reservation Library
//!
//! Picks rooms for a booking in a fixed ten-floor hotel so that the guest's
//! walk between rooms is as short as possible, keeping the group on one floor
//! whenever a floor can hold it.

pub mod reservation;
