pub mod customers;
pub mod hotels;
pub mod reservations;
pub mod snapshot;

pub use crate::domain::model::{Customer, Hotel, Reservation};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
