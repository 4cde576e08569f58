use clap::Parser;
use roomdesk::config::{CliConfig, Command, CustomerCommand, HotelCommand, ReservationCommand};
use roomdesk::utils::{logger, validation::Validate};
use roomdesk::{
    Customer, CustomerStore, CustomerUpdate, Hotel, HotelStore, HotelUpdate, LocalStorage,
    Reservation, ReservationStore, Result,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    let config = cli.resolve()?;

    logger::init_cli_logger(config.verbose);

    if let Err(e) = config.validate() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    tracing::debug!("using data directory {}", config.data_dir);
    let storage = LocalStorage::new(config.data_dir.as_str());

    match run(cli.command, storage) {
        Ok(report) => {
            println!("{}", report);
            Ok(())
        }
        Err(err) => {
            tracing::error!("command failed: {}", err);
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}

fn run(command: Command, storage: LocalStorage) -> Result<String> {
    match command {
        Command::Customer(command) => {
            let store = CustomerStore::new(storage);
            match command {
                CustomerCommand::Add { id, name, email, phone } => {
                    let customer = store.create(&id, &name, &email, &phone)?;
                    Ok(format!("customer {} created", customer.customer_id))
                }
                CustomerCommand::Remove { id } => {
                    store.delete(&id)?;
                    Ok(format!("customer {} removed", id))
                }
                CustomerCommand::Show { id } => Ok(render_customer(&store.get(&id)?)),
                CustomerCommand::Update { id, name, email, phone } => {
                    let customer = store.update(&id, CustomerUpdate { name, email, phone })?;
                    Ok(format!("customer {} updated", customer.customer_id))
                }
            }
        }
        Command::Hotel(command) => {
            let store = HotelStore::new(storage);
            match command {
                HotelCommand::Add { id, name, location, rooms } => {
                    let hotel = store.create(&id, &name, &location, rooms)?;
                    Ok(format!(
                        "hotel {} created with {} rooms",
                        hotel.hotel_id, hotel.total_rooms
                    ))
                }
                HotelCommand::Remove { id } => {
                    store.delete(&id)?;
                    Ok(format!("hotel {} removed", id))
                }
                HotelCommand::Show { id } => Ok(render_hotel(&store.get(&id)?)),
                HotelCommand::Update { id, name, location, rooms } => {
                    let hotel = store.update(
                        &id,
                        HotelUpdate {
                            name,
                            location,
                            total_rooms: rooms,
                        },
                    )?;
                    Ok(format!("hotel {} updated", hotel.hotel_id))
                }
            }
        }
        Command::Reservation(command) => {
            let store = ReservationStore::new(storage);
            match command {
                ReservationCommand::Book { id, customer, hotel, check_in, check_out } => {
                    let reservation = store.book(&id, &customer, &hotel, &check_in, &check_out)?;
                    Ok(format!(
                        "reservation {} booked at hotel {}",
                        reservation.reservation_id, reservation.hotel_id
                    ))
                }
                ReservationCommand::Cancel { id } => {
                    store.cancel(&id)?;
                    Ok(format!("reservation {} cancelled", id))
                }
                ReservationCommand::Show { id } => Ok(render_reservation(&store.get(&id)?)),
            }
        }
    }
}

fn render_customer(customer: &Customer) -> String {
    format!(
        "--- Customer ---\n\
         ID    : {}\n\
         Name  : {}\n\
         Email : {}\n\
         Phone : {}",
        customer.customer_id, customer.name, customer.email, customer.phone
    )
}

fn render_hotel(hotel: &Hotel) -> String {
    format!(
        "--- Hotel ---\n\
         ID       : {}\n\
         Name     : {}\n\
         Location : {}\n\
         Rooms    : {} total, {} available",
        hotel.hotel_id,
        hotel.name,
        hotel.location,
        hotel.total_rooms,
        hotel.available_rooms()
    )
}

fn render_reservation(reservation: &Reservation) -> String {
    format!(
        "--- Reservation ---\n\
         ID        : {}\n\
         Customer  : {}\n\
         Hotel     : {}\n\
         Check-in  : {}\n\
         Check-out : {}",
        reservation.reservation_id,
        reservation.customer_id,
        reservation.hotel_id,
        reservation.check_in,
        reservation.check_out
    )
}
