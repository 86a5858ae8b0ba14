//! DriveEasy Library
//!
//! Catalog filtering, sorting, pricing and the booking wizard for a car and
//! driver rental marketplace, plus the terminal UI built on top of them.

pub mod app;
pub mod booking_state;
pub mod cli;
pub mod components;
pub mod error;
pub mod fixtures;
pub mod input;
pub mod logic;
pub mod model;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use booking_state::{
    BookingConfirmation, BookingDraft, BookingStep, BookingTransitionError, BookingWizard,
    DetailField,
};
pub use error::{DriveEasyError, Result};
pub use fixtures::Fixtures;
pub use logic::{
    compute_total, filter_bookings, filter_drivers, filter_vehicles, quote, sort_drivers,
    sort_vehicles, BookingCriteria, DashboardStats, DriverCriteria, PriceBreakdown, PriceRange,
    VehicleCriteria,
};
pub use model::{AdminUser, Amount, Booking, DriverProfile, Vehicle};
pub use types::{
    AdminRole, BookingStatus, DriverServiceType, FuelType, SortKey, StatusAction,
    StatusTransitionError, Transmission, VehicleCategory,
};
