//! DriveEasy - Main entry point
//!
//! Parses the command line, sets up logging, then either launches the
//! terminal UI or runs a one-shot catalog command.

use anyhow::Context;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, error, info};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use driveeasy::app::App;
use driveeasy::booking_state::BookingDraft;
use driveeasy::cli::{BookingsArgs, CarsArgs, Cli, Commands, DriversArgs, FixtureCommands, QuoteArgs};
use driveeasy::fixtures::Fixtures;
use driveeasy::logic::{
    self, BookingCriteria, DashboardStats, DriverCriteria, PriceRange, VehicleCriteria,
};
use driveeasy::types::SortKey;

/// Initialize tracing.
///
/// `RUST_LOG` wins; otherwise `info`, or `debug` with `-v`. One-shot
/// commands log to stderr so stdout stays clean for `--json`. The TUI owns
/// the screen, so it logs only to `--log-file` when given.
fn init_tracing(cli: &Cli, tui: bool) -> anyhow::Result<()> {
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let (writer, ansi) = match (&cli.log_file, tui) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {:?}", path))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        (None, true) => (BoxMakeWriter::new(std::io::sink), false),
        (None, false) => (BoxMakeWriter::new(std::io::stderr), true),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .init();
    Ok(())
}

/// Main application entry point
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let tui = matches!(cli.command, None | Some(Commands::Browse));
    init_tracing(&cli, tui)?;
    info!("DriveEasy starting up");
    debug!(?cli, "CLI arguments parsed");

    // Fixture tools work on their own files, not the catalog in use
    if let Some(Commands::Fixtures { action }) = &cli.command {
        run_fixture_command(action);
        return Ok(());
    }

    let fixtures = load_fixtures(cli.fixtures.as_deref());

    match cli.command {
        None | Some(Commands::Browse) => {
            info!("Launching terminal UI");
            run_tui(fixtures)?;
        }
        Some(Commands::Cars(args)) => run_cars(&fixtures, &args)?,
        Some(Commands::Drivers(args)) => run_drivers(&fixtures, &args)?,
        Some(Commands::Quote(args)) => run_quote(&fixtures, &args)?,
        Some(Commands::Bookings(args)) => run_bookings(&fixtures, &args)?,
        Some(Commands::Stats { json }) => run_stats(&fixtures, json)?,
        Some(Commands::Fixtures { .. }) => {}
    }

    Ok(())
}

/// Built-in catalog, or the validated file passed with `--fixtures`.
/// Exits with status 1 when the file cannot be used.
fn load_fixtures(path: Option<&Path>) -> Fixtures {
    let Some(path) = path else {
        debug!("Using built-in fixtures");
        return Fixtures::builtin();
    };

    info!("Loading fixtures from {:?}", path);
    match Fixtures::load_from_file(path).and_then(|f| f.validate().map(|_| f)) {
        Ok(fixtures) => fixtures,
        Err(e) => {
            error!("Fixture file rejected: {:#}", e);
            eprintln!("✗ Failed to load fixtures: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Run the terminal UI
fn run_tui(fixtures: Fixtures) -> anyhow::Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode().context("Failed to enable raw mode")?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(fixtures);
    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result.map_err(Into::into)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn price_range(min: Option<u64>, max: Option<u64>, limit: PriceRange) -> Option<PriceRange> {
    if min.is_none() && max.is_none() {
        return None;
    }
    Some(PriceRange::new(min.unwrap_or(limit.min), max.unwrap_or(u64::MAX)))
}

// ============================================================================
// Catalog commands
// ============================================================================

fn run_cars(fixtures: &Fixtures, args: &CarsArgs) -> anyhow::Result<()> {
    let criteria = VehicleCriteria {
        search: args.search.clone().unwrap_or_default(),
        category: args.category,
        price_range: price_range(args.min_price, args.max_price, VehicleCriteria::PRICE_LIMIT),
        transmission: args.transmission,
        fuel_type: args.fuel,
        available_only: !args.all,
        sort: args.sort.as_deref().and_then(SortKey::parse),
    };
    info!(?criteria, "Listing vehicles");
    let vehicles = logic::browse_vehicles(&fixtures.vehicles, &criteria);

    if args.json {
        return print_json(&vehicles);
    }

    println!(
        "{:<4} {:<22} {:<6} {:<8} {:<10} {:<9} {:>8} {:>7}",
        "ID", "Vehicle", "Year", "Type", "Gearbox", "Fuel", "Per day", "Rating"
    );
    for v in &vehicles {
        println!(
            "{:<4} {:<22} {:<6} {:<8} {:<10} {:<9} {:>8} {:>7.1}",
            v.id,
            v.display_name(),
            v.year,
            v.category,
            v.transmission,
            v.fuel_type,
            format!("${}", v.price_per_day),
            v.rating
        );
    }
    println!("{} vehicles found", vehicles.len());
    Ok(())
}

fn run_drivers(fixtures: &Fixtures, args: &DriversArgs) -> anyhow::Result<()> {
    let criteria = DriverCriteria {
        search: args.search.clone().unwrap_or_default(),
        language: args.language.clone(),
        specialty: args.specialty.clone(),
        license: args.license.clone(),
        price_range: price_range(args.min_price, args.max_price, DriverCriteria::PRICE_LIMIT),
        min_experience: args.min_experience,
        available_only: !args.all,
        sort: args.sort.as_deref().and_then(SortKey::parse),
    };
    info!(?criteria, "Listing drivers");
    let drivers = logic::browse_drivers(&fixtures.drivers, &criteria);

    if args.json {
        return print_json(&drivers);
    }

    println!(
        "{:<4} {:<18} {:<8} {:>5} {:>7} {:>7}  {}",
        "ID", "Driver", "License", "Exp.", "Rate", "Rating", "Languages"
    );
    for d in &drivers {
        println!(
            "{:<4} {:<18} {:<8} {:>5} {:>7} {:>7.1}  {}",
            d.id,
            d.name,
            d.license,
            d.experience,
            format!("${}/h", d.price_per_hour),
            d.rating,
            d.languages.join(", ")
        );
    }
    println!("{} drivers found", drivers.len());
    Ok(())
}

fn run_quote(fixtures: &Fixtures, args: &QuoteArgs) -> anyhow::Result<()> {
    let Some(vehicle) = logic::find_vehicle(&fixtures.vehicles, &args.car) else {
        eprintln!("✗ Vehicle not found: {}", args.car);
        std::process::exit(1);
    };
    let driver = match args.driver.as_deref() {
        Some(id) => match logic::find_driver(&fixtures.drivers, id) {
            Some(driver) => Some(driver),
            None => {
                eprintln!("✗ Driver not found: {}", id);
                std::process::exit(1);
            }
        },
        None => None,
    };

    let mut draft = BookingDraft {
        pickup_date: args.pickup.clone().unwrap_or_default(),
        return_date: args.return_date.clone().unwrap_or_default(),
        driver_service: driver.is_some(),
        ..BookingDraft::default()
    };
    draft.set_service_type(&args.service);
    if let Some(hours) = args.hours {
        draft.set_driver_hours(hours);
    }

    let price = logic::quote(&draft, Some(vehicle), driver);
    info!(vehicle = %vehicle.id, total = price.total, "Quote computed");

    if args.json {
        return print_json(&price);
    }

    let day_word = if price.days == 1 { "day" } else { "days" };
    println!("{} for {} {}", vehicle.display_name(), price.days, day_word);
    println!("  {:<28} ${:>6}", "Vehicle", price.vehicle_cost);
    if let Some(driver) = driver {
        println!("  {:<28} ${:>6}", format!("Driver: {} ({})", driver.name, args.service), price.driver_cost);
    }
    println!("  {:<28} ${:>6}", "Service fee", price.service_fee);
    println!("  {:<28} ${:>6}", "Insurance", price.insurance);
    println!("  {:<28} ${:>6}", "Total", price.total);
    Ok(())
}

fn run_bookings(fixtures: &Fixtures, args: &BookingsArgs) -> anyhow::Result<()> {
    let criteria = BookingCriteria {
        search: args.search.clone().unwrap_or_default(),
        status: args.status,
    };
    let bookings = logic::filter_bookings(&fixtures.bookings, &criteria);

    if args.json {
        return print_json(&bookings);
    }

    println!(
        "{:<4} {:<18} {:<16} {:<24} {:>7}  {}",
        "ID", "Customer", "Vehicle", "Dates", "Total", "Status"
    );
    for b in &bookings {
        let vehicle = logic::find_vehicle(&fixtures.vehicles, &b.vehicle_id)
            .map_or_else(|| format!("#{}", b.vehicle_id), |v| v.display_name());
        println!(
            "{:<4} {:<18} {:<16} {:<24} {:>7}  {}",
            b.id,
            b.customer_name,
            vehicle,
            format!("{} → {}", b.start_date, b.end_date),
            format!("${}", b.total_amount),
            b.status
        );
    }
    println!("{} bookings found", bookings.len());
    Ok(())
}

fn run_stats(fixtures: &Fixtures, json: bool) -> anyhow::Result<()> {
    let stats = DashboardStats::from_fixtures(fixtures);
    if json {
        return print_json(&stats);
    }

    println!("Total bookings:     {}", stats.total_bookings);
    for (status, count) in &stats.by_status {
        println!("  {:<17} {}", status, count);
    }
    println!("Revenue:            ${}", stats.revenue);
    println!(
        "Available vehicles: {} of {}",
        stats.available_vehicles, stats.total_vehicles
    );
    println!("Active drivers:     {} of {}", stats.active_drivers, stats.total_drivers);
    println!("Average rating:     {:.1}", stats.average_rating);
    Ok(())
}

// ============================================================================
// Fixture tools
// ============================================================================

fn run_fixture_command(action: &FixtureCommands) {
    match action {
        FixtureCommands::Validate { file } => {
            info!("Validating fixture file: {:?}", file);
            match Fixtures::load_from_file(file) {
                Ok(fixtures) => match fixtures.validate() {
                    Ok(()) => {
                        info!("Fixture validation successful");
                        println!(
                            "✓ Fixture file is valid: {} vehicles, {} drivers, {} bookings",
                            fixtures.vehicles.len(),
                            fixtures.drivers.len(),
                            fixtures.bookings.len()
                        );
                    }
                    Err(e) => {
                        error!("Fixture validation failed: {:#}", e);
                        eprintln!("✗ Fixture validation failed: {:#}", e);
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    error!("Failed to load fixture file: {:#}", e);
                    eprintln!("✗ Failed to load fixture file: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        FixtureCommands::Export { file } => match Fixtures::builtin().save_to_file(file) {
            Ok(()) => {
                info!("Built-in fixtures exported to {:?}", file);
                println!("✓ Built-in fixtures written to {}", file.display());
            }
            Err(e) => {
                error!("Fixture export failed: {:#}", e);
                eprintln!("✗ Failed to export fixtures: {:#}", e);
                std::process::exit(1);
            }
        },
    }
}
