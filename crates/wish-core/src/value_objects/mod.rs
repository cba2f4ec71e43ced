//! Value objects - immutable types that represent domain concepts

mod reservation_status;

pub use reservation_status::{InvalidStatusError, ReservationStatus};
