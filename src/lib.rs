pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::storage::{LocalStorage, MemoryStorage};
pub use config::CliConfig;
pub use core::{customers::CustomerStore, hotels::HotelStore, reservations::ReservationStore};
pub use domain::model::{Customer, CustomerUpdate, Hotel, HotelUpdate, Reservation};
pub use utils::error::{BookingError, Result};
