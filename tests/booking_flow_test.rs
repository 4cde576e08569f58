use roomdesk::{BookingError, CustomerStore, HotelStore, LocalStorage, ReservationStore};
use tempfile::TempDir;

fn storage(temp_dir: &TempDir) -> LocalStorage {
    LocalStorage::new(temp_dir.path())
}

#[test]
fn test_single_room_capacity_cycle() {
    let temp_dir = TempDir::new().unwrap();
    let hotels = HotelStore::new(storage(&temp_dir));
    let reservations = ReservationStore::new(storage(&temp_dir));

    hotels.create("H1", "Casa Azul", "Morelos", 1).unwrap();

    // One room: the first booking wins, the second bounces.
    reservations
        .book("R1", "C1", "H1", "2026-09-01", "2026-09-03")
        .unwrap();
    let err = reservations
        .book("R2", "C2", "H1", "2026-09-02", "2026-09-04")
        .unwrap_err();
    assert!(matches!(err, BookingError::NoRoomsAvailable { .. }));

    // Cancelling R1 frees the room for R2.
    reservations.cancel("R1").unwrap();
    reservations
        .book("R2", "C2", "H1", "2026-09-02", "2026-09-04")
        .unwrap();

    let hotel = hotels.get("H1").unwrap();
    assert_eq!(hotel.available_rooms(), 0);
    assert_eq!(hotel.reservations["R2"], "C2");
}

#[test]
fn test_occupancy_matches_reservation_records_after_mixed_operations() {
    let temp_dir = TempDir::new().unwrap();
    let hotels = HotelStore::new(storage(&temp_dir));
    let reservations = ReservationStore::new(storage(&temp_dir));

    hotels.create("H1", "Casa Azul", "Morelos", 5).unwrap();
    for (reservation_id, customer_id) in [("R1", "C1"), ("R2", "C2"), ("R3", "C3")] {
        reservations
            .book(reservation_id, customer_id, "H1", "2026-09-01", "2026-09-05")
            .unwrap();
    }
    reservations.cancel("R2").unwrap();

    let hotel = hotels.get("H1").unwrap();
    assert_eq!(hotel.available_rooms(), 3);
    assert_eq!(hotel.reservations.len(), 2);
    for reservation_id in hotel.reservations.keys() {
        assert!(reservations.get(reservation_id).is_ok());
    }
    assert!(reservations.get("R2").is_err());
}

#[test]
fn test_booking_failure_leaves_no_trace_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let reservations = ReservationStore::new(storage(&temp_dir));

    let err = reservations
        .book("R1", "C1", "H404", "2026-09-01", "2026-09-03")
        .unwrap_err();
    assert!(matches!(err, BookingError::NotFound { .. }));

    // No hotel write succeeded, so no reservation document may exist.
    assert!(!temp_dir.path().join("reservations.json").exists());
}

#[test]
fn test_state_survives_fresh_store_instances() {
    let temp_dir = TempDir::new().unwrap();

    {
        let hotels = HotelStore::new(storage(&temp_dir));
        let customers = CustomerStore::new(storage(&temp_dir));
        let reservations = ReservationStore::new(storage(&temp_dir));
        hotels.create("H1", "Casa Azul", "Morelos", 2).unwrap();
        customers
            .create("C1", "Ana", "ana@example.com", "555-0001")
            .unwrap();
        reservations
            .book("R1", "C1", "H1", "2026-09-01", "2026-09-03")
            .unwrap();
    }

    // Fresh stores over the same directory see everything.
    let hotels = HotelStore::new(storage(&temp_dir));
    let customers = CustomerStore::new(storage(&temp_dir));
    let reservations = ReservationStore::new(storage(&temp_dir));

    assert_eq!(hotels.get("H1").unwrap().available_rooms(), 1);
    assert_eq!(customers.get("C1").unwrap().name, "Ana");
    assert_eq!(reservations.get("R1").unwrap().customer_id, "C1");
}

#[test]
fn test_booking_does_not_require_the_customer_to_exist() {
    let temp_dir = TempDir::new().unwrap();
    let hotels = HotelStore::new(storage(&temp_dir));
    let reservations = ReservationStore::new(storage(&temp_dir));

    hotels.create("H1", "Casa Azul", "Morelos", 1).unwrap();
    let booked = reservations
        .book("R1", "ghost", "H1", "2026-09-01", "2026-09-03")
        .unwrap();
    assert_eq!(booked.customer_id, "ghost");
}
