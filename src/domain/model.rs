use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::utils::error::{BookingError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Customer {
    pub fn new(customer_id: &str, name: &str, email: &str, phone: &str) -> Self {
        Self {
            customer_id: customer_id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }
}

/// A hotel and the rooms currently held against it. `reservations` maps
/// reservation id to customer id; one entry means one occupied room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub hotel_id: String,
    pub name: String,
    pub location: String,
    pub total_rooms: u32,
    #[serde(default)]
    pub reservations: BTreeMap<String, String>,
}

impl Hotel {
    /// The only fallible constructor in the model: a hotel must have at
    /// least one room.
    pub fn new(hotel_id: &str, name: &str, location: &str, total_rooms: i64) -> Result<Self> {
        if total_rooms <= 0 || total_rooms > i64::from(u32::MAX) {
            return Err(BookingError::InvalidRoomCount { value: total_rooms });
        }
        Ok(Self {
            hotel_id: hotel_id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            total_rooms: total_rooms as u32,
            reservations: BTreeMap::new(),
        })
    }

    /// Rooms not held by any reservation. Signed and unclamped: a snapshot
    /// edited behind our back reads back as a negative count rather than
    /// wrapping.
    pub fn available_rooms(&self) -> i64 {
        i64::from(self.total_rooms) - self.reservations.len() as i64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub reservation_id: String,
    pub customer_id: String,
    pub hotel_id: String,
    pub check_in: String,
    pub check_out: String,
}

impl Reservation {
    pub fn new(
        reservation_id: &str,
        customer_id: &str,
        hotel_id: &str,
        check_in: &str,
        check_out: &str,
    ) -> Self {
        Self {
            reservation_id: reservation_id.to_string(),
            customer_id: customer_id.to_string(),
            hotel_id: hotel_id.to_string(),
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
        }
    }
}

/// Patch payload for customer updates. `None` leaves a field alone;
/// `Some` sets it, including to the empty string.
#[derive(Debug, Clone, Default)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Patch payload for hotel updates.
#[derive(Debug, Clone, Default)]
pub struct HotelUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub total_rooms: Option<i64>,
}
