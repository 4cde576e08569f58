use crate::core::hotels::HotelStore;
use crate::core::snapshot::Collection;
use crate::domain::model::Reservation;
use crate::domain::ports::Storage;
use crate::utils::error::{BookingError, Entity, Result};

const RESERVATIONS_DOCUMENT: &str = "reservations.json";

/// Reservation records plus the one cross-entity rule in the system: a
/// booking holds a room in the hotel's occupancy map before its record is
/// written, and a cancellation releases that room again.
pub struct ReservationStore<S> {
    collection: Collection<S, Reservation>,
    hotels: HotelStore<S>,
}

impl<S: Storage + Clone> ReservationStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            collection: Collection::new(storage.clone(), RESERVATIONS_DOCUMENT),
            hotels: HotelStore::new(storage),
        }
    }
}

impl<S: Storage> ReservationStore<S> {
    /// Books a room. The customer id is not checked against the customer
    /// collection; a reservation may name a customer that was never
    /// created.
    pub fn book(
        &self,
        reservation_id: &str,
        customer_id: &str,
        hotel_id: &str,
        check_in: &str,
        check_out: &str,
    ) -> Result<Reservation> {
        let mut reservations = self.collection.load();
        if reservations.contains_key(reservation_id) {
            return Err(BookingError::Duplicate {
                entity: Entity::Reservation,
                id: reservation_id.to_string(),
            });
        }

        // Hold the room first; the reservation record is only written once
        // the hotel side has committed.
        self.hotels.reserve_room(hotel_id, reservation_id, customer_id)?;

        let reservation = Reservation::new(reservation_id, customer_id, hotel_id, check_in, check_out);
        reservations.insert(reservation.reservation_id.clone(), reservation.clone());
        self.collection.save(&reservations);
        tracing::info!("reservation {} booked at hotel {}", reservation_id, hotel_id);
        Ok(reservation)
    }

    pub fn cancel(&self, reservation_id: &str) -> Result<()> {
        let mut reservations = self.collection.load();
        let reservation = reservations
            .remove(reservation_id)
            .ok_or_else(|| Self::not_found(reservation_id))?;

        // The room may already be gone (hotel deleted, snapshot edited);
        // the cancellation still goes through.
        if let Err(err) = self.hotels.release_room(&reservation.hotel_id, reservation_id) {
            tracing::warn!(
                "could not release room for reservation {}: {}",
                reservation_id,
                err
            );
        }

        self.collection.save(&reservations);
        tracing::info!("reservation {} cancelled", reservation_id);
        Ok(())
    }

    pub fn get(&self, reservation_id: &str) -> Result<Reservation> {
        self.collection
            .load()
            .remove(reservation_id)
            .ok_or_else(|| Self::not_found(reservation_id))
    }

    fn not_found(reservation_id: &str) -> BookingError {
        BookingError::NotFound {
            entity: Entity::Reservation,
            id: reservation_id.to_string(),
        }
    }
}
