use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::model::Amount;
use crate::types::{BookingStatus, FuelType, Transmission, VehicleCategory};

/// DriveEasy - browse cars and professional drivers, quote and book rentals
#[derive(Parser, Debug)]
#[command(name = "driveeasy")]
#[command(about = "Car rental with professional drivers, in your terminal")]
#[command(version)]
pub struct Cli {
    /// Load catalog data from a JSON fixture file instead of the built-in set
    #[arg(long, global = true)]
    pub fixtures: Option<PathBuf>,

    /// Write logs to this file (the interactive UI otherwise discards them)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive terminal UI
    Browse,
    /// List vehicles matching filters
    Cars(CarsArgs),
    /// List drivers matching filters
    Drivers(DriversArgs),
    /// Price a rental without booking it
    Quote(QuoteArgs),
    /// List bookings
    Bookings(BookingsArgs),
    /// Show dashboard figures
    Stats {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Fixture file tools
    Fixtures {
        #[command(subcommand)]
        action: FixtureCommands,
    },
}

#[derive(Args, Debug, Default)]
pub struct CarsArgs {
    /// Match make or model, case-insensitive
    #[arg(short, long)]
    pub search: Option<String>,
    /// luxury, sports, suv, sedan or economy
    #[arg(short, long)]
    pub category: Option<VehicleCategory>,
    #[arg(long)]
    pub min_price: Option<Amount>,
    #[arg(long)]
    pub max_price: Option<Amount>,
    /// automatic or manual
    #[arg(short, long)]
    pub transmission: Option<Transmission>,
    /// petrol, diesel, electric or hybrid
    #[arg(short, long)]
    pub fuel: Option<FuelType>,
    /// Include unavailable vehicles
    #[arg(long)]
    pub all: bool,
    /// price-low, price-high, rating or year; other keys keep catalog order
    #[arg(long)]
    pub sort: Option<String>,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Default)]
pub struct DriversArgs {
    /// Match driver name, case-insensitive
    #[arg(short, long)]
    pub search: Option<String>,
    #[arg(short, long)]
    pub language: Option<String>,
    #[arg(long)]
    pub specialty: Option<String>,
    /// License class, e.g. CDL-A
    #[arg(long)]
    pub license: Option<String>,
    #[arg(long)]
    pub min_price: Option<Amount>,
    #[arg(long)]
    pub max_price: Option<Amount>,
    /// Minimum years of experience
    #[arg(long)]
    pub min_experience: Option<u8>,
    /// Include unavailable drivers
    #[arg(long)]
    pub all: bool,
    /// rating, price-low, price-high, experience or reviews
    #[arg(long)]
    pub sort: Option<String>,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Vehicle id
    #[arg(long)]
    pub car: String,
    /// Driver id; adds driver service
    #[arg(long)]
    pub driver: Option<String>,
    /// Pickup date (YYYY-MM-DD)
    #[arg(long)]
    pub pickup: Option<String>,
    /// Return date (YYYY-MM-DD)
    #[arg(long = "return")]
    pub return_date: Option<String>,
    /// hourly, half-day, full-day or multi-day
    #[arg(long, default_value = "full-day")]
    pub service: String,
    /// Driver hours for hourly service (clamped to 2-12)
    #[arg(long)]
    pub hours: Option<u8>,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Default)]
pub struct BookingsArgs {
    /// Match customer name or booking id
    #[arg(short, long)]
    pub search: Option<String>,
    /// pending, confirmed, completed or cancelled
    #[arg(long)]
    pub status: Option<BookingStatus>,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum FixtureCommands {
    /// Check a fixture file for bad ids, ratings, prices and references
    Validate {
        file: PathBuf,
    },
    /// Write the built-in fixture set to a file
    Export {
        file: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
