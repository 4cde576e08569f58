pub mod file;

use clap::{Parser, Subcommand};

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use file::FileConfig;

const DEFAULT_DATA_DIR: &str = "./data";

#[derive(Debug, Clone, Parser)]
#[command(name = "roomdesk")]
#[command(about = "Hotel, customer and reservation ledger over JSON snapshot files")]
pub struct CliConfig {
    #[arg(long, help = "Directory holding the snapshot documents (default ./data)")]
    pub data_dir: Option<String>,

    #[arg(long, help = "TOML config file supplying defaults for the flags above")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Folds config-file values in under any explicitly passed flags.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let file = match self.config.as_deref() {
            Some(path) => Some(FileConfig::from_path(path)?),
            None => None,
        };

        let data_dir = self
            .data_dir
            .clone()
            .or_else(|| file.as_ref().and_then(|f| f.data_dir.clone()))
            .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
        let verbose = self.verbose || file.as_ref().and_then(|f| f.verbose).unwrap_or(false);

        Ok(ResolvedConfig { data_dir, verbose })
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub data_dir: String,
    pub verbose: bool,
}

impl ConfigProvider for ResolvedConfig {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for ResolvedConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir)
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Manage customer records
    #[command(subcommand)]
    Customer(CustomerCommand),
    /// Manage hotel records
    #[command(subcommand)]
    Hotel(HotelCommand),
    /// Book, cancel and inspect reservations
    #[command(subcommand)]
    Reservation(ReservationCommand),
}

#[derive(Debug, Clone, Subcommand)]
pub enum CustomerCommand {
    /// Add a new customer
    Add {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
    },
    /// Remove a customer
    Remove { id: String },
    /// Show a customer record
    Show { id: String },
    /// Change the supplied fields of a customer
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum HotelCommand {
    /// Add a new hotel
    Add {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        location: String,
        #[arg(long)]
        rooms: i64,
    },
    /// Remove a hotel
    Remove { id: String },
    /// Show a hotel record, including availability
    Show { id: String },
    /// Change the supplied fields of a hotel
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        rooms: Option<i64>,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ReservationCommand {
    /// Book a room at a hotel
    Book {
        id: String,
        #[arg(long)]
        customer: String,
        #[arg(long)]
        hotel: String,
        #[arg(long)]
        check_in: String,
        #[arg(long)]
        check_out: String,
    },
    /// Cancel a reservation and release its room
    Cancel { id: String },
    /// Show a reservation record
    Show { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let cli = CliConfig::parse_from(["roomdesk", "customer", "show", "C1"]);
        let config = cli.resolve().unwrap();
        assert_eq!(config.data_dir, DEFAULT_DATA_DIR);
        assert!(!config.verbose);
    }

    #[test]
    fn test_flag_overrides_default() {
        let cli = CliConfig::parse_from([
            "roomdesk",
            "--data-dir",
            "/tmp/bookings",
            "--verbose",
            "hotel",
            "show",
            "H1",
        ]);
        let config = cli.resolve().unwrap();
        assert_eq!(config.data_dir, "/tmp/bookings");
        assert!(config.verbose);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = CliConfig::parse_from([
            "roomdesk",
            "--config",
            "/no/such/file.toml",
            "customer",
            "show",
            "C1",
        ]);
        assert!(cli.resolve().is_err());
    }
}
