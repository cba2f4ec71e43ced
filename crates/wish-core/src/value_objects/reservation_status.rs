//! Reservation status value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a reservation
///
/// `Reserved` is the only active state. `Purchased` and `Cancelled` are
/// terminal by convention only; the owner may move a reservation between any
/// two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Reserved,
    Purchased,
    Cancelled,
}

impl ReservationStatus {
    /// All statuses, in lifecycle order
    pub const ALL: [Self; 3] = [Self::Reserved, Self::Purchased, Self::Cancelled];

    /// Storage / wire representation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reserved => "reserved",
            Self::Purchased => "purchased",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether this status blocks other reservations on the same item
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Reserved)
    }

    #[inline]
    pub fn is_cancelled(self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid reservation status: {0}")]
pub struct InvalidStatusError(pub String);

impl FromStr for ReservationStatus {
    type Err = InvalidStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reserved" => Ok(Self::Reserved),
            "purchased" => Ok(Self::Purchased),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(InvalidStatusError(other.to_string())),
        }
    }
}
