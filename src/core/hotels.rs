use crate::core::snapshot::Collection;
use crate::domain::model::{Hotel, HotelUpdate};
use crate::domain::ports::Storage;
use crate::utils::error::{BookingError, Entity, Result};

const HOTELS_DOCUMENT: &str = "hotels.json";

pub struct HotelStore<S> {
    collection: Collection<S, Hotel>,
}

impl<S: Storage> HotelStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            collection: Collection::new(storage, HOTELS_DOCUMENT),
        }
    }

    pub fn create(&self, hotel_id: &str, name: &str, location: &str, total_rooms: i64) -> Result<Hotel> {
        // Room-count validation happens before any collection access.
        let hotel = Hotel::new(hotel_id, name, location, total_rooms)?;

        let mut hotels = self.collection.load();
        if hotels.contains_key(hotel_id) {
            return Err(BookingError::Duplicate {
                entity: Entity::Hotel,
                id: hotel_id.to_string(),
            });
        }

        hotels.insert(hotel.hotel_id.clone(), hotel.clone());
        self.collection.save(&hotels);
        tracing::info!("hotel {} created with {} rooms", hotel.hotel_id, hotel.total_rooms);
        Ok(hotel)
    }

    pub fn delete(&self, hotel_id: &str) -> Result<()> {
        let mut hotels = self.collection.load();
        if hotels.remove(hotel_id).is_none() {
            return Err(Self::not_found(hotel_id));
        }

        self.collection.save(&hotels);
        tracing::info!("hotel {} deleted", hotel_id);
        Ok(())
    }

    pub fn get(&self, hotel_id: &str) -> Result<Hotel> {
        self.collection
            .load()
            .remove(hotel_id)
            .ok_or_else(|| Self::not_found(hotel_id))
    }

    /// Applies the fields present in `update`. A supplied room count must
    /// be positive and may not shrink the hotel below its current
    /// occupancy; on either violation nothing is changed.
    pub fn update(&self, hotel_id: &str, update: HotelUpdate) -> Result<Hotel> {
        let mut hotels = self.collection.load();
        let hotel = hotels
            .get_mut(hotel_id)
            .ok_or_else(|| Self::not_found(hotel_id))?;

        if let Some(total_rooms) = update.total_rooms {
            if total_rooms <= 0 || total_rooms > i64::from(u32::MAX) {
                return Err(BookingError::InvalidRoomCount { value: total_rooms });
            }
            let occupied = hotel.reservations.len();
            if total_rooms < occupied as i64 {
                return Err(BookingError::ShrinkBelowOccupancy {
                    hotel_id: hotel_id.to_string(),
                    occupied,
                    requested: total_rooms,
                });
            }
            hotel.total_rooms = total_rooms as u32;
        }
        if let Some(name) = update.name {
            hotel.name = name;
        }
        if let Some(location) = update.location {
            hotel.location = location;
        }

        let updated = hotel.clone();
        self.collection.save(&hotels);
        tracing::info!("hotel {} updated", hotel_id);
        Ok(updated)
    }

    /// Holds one room under `reservation_id`. Fails without touching the
    /// occupancy map when the hotel is missing, full, or already holds
    /// that reservation id.
    pub fn reserve_room(&self, hotel_id: &str, reservation_id: &str, customer_id: &str) -> Result<()> {
        let mut hotels = self.collection.load();
        let hotel = hotels
            .get_mut(hotel_id)
            .ok_or_else(|| Self::not_found(hotel_id))?;

        if hotel.available_rooms() <= 0 {
            return Err(BookingError::NoRoomsAvailable {
                hotel_id: hotel_id.to_string(),
            });
        }
        if hotel.reservations.contains_key(reservation_id) {
            return Err(BookingError::Duplicate {
                entity: Entity::Reservation,
                id: reservation_id.to_string(),
            });
        }

        hotel
            .reservations
            .insert(reservation_id.to_string(), customer_id.to_string());
        self.collection.save(&hotels);
        tracing::info!("room held in hotel {} under reservation {}", hotel_id, reservation_id);
        Ok(())
    }

    /// Releases the room held under `reservation_id`.
    pub fn release_room(&self, hotel_id: &str, reservation_id: &str) -> Result<()> {
        let mut hotels = self.collection.load();
        let hotel = hotels
            .get_mut(hotel_id)
            .ok_or_else(|| Self::not_found(hotel_id))?;

        if hotel.reservations.remove(reservation_id).is_none() {
            return Err(BookingError::NotFound {
                entity: Entity::Reservation,
                id: reservation_id.to_string(),
            });
        }

        self.collection.save(&hotels);
        tracing::info!("room released in hotel {} for reservation {}", hotel_id, reservation_id);
        Ok(())
    }

    fn not_found(hotel_id: &str) -> BookingError {
        BookingError::NotFound {
            entity: Entity::Hotel,
            id: hotel_id.to_string(),
        }
    }
}
