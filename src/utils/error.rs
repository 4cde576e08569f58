use std::fmt;

use thiserror::Error;

/// Entity kinds, for error messages that name their subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Customer,
    Hotel,
    Reservation,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Customer => write!(f, "customer"),
            Entity::Hotel => write!(f, "hotel"),
            Entity::Reservation => write!(f, "reservation"),
        }
    }
}

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("{entity} {id} not found")]
    NotFound { entity: Entity, id: String },

    #[error("{entity} {id} already exists")]
    Duplicate { entity: Entity, id: String },

    #[error("no rooms available in hotel {hotel_id}")]
    NoRoomsAvailable { hotel_id: String },

    #[error("total rooms must be a positive integer, got {value}")]
    InvalidRoomCount { value: i64 },

    #[error("hotel {hotel_id} has {occupied} rooms occupied, cannot shrink to {requested}")]
    ShrinkBelowOccupancy {
        hotel_id: String,
        occupied: usize,
        requested: i64,
    },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BookingError>;
