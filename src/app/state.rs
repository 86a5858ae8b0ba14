//! Application state definitions
//!
//! Contains AppState, AppMode and the booking form field list. Everything the
//! renderer draws is derived from this struct on every frame.

use strum::{Display, EnumIter};

use crate::booking_state::{BookingConfirmation, BookingDraft, BookingWizard, DetailField};
use crate::fixtures::Fixtures;
use crate::logic::{
    self, BookingCriteria, DriverCriteria, VehicleCriteria, filter_bookings,
};
use crate::model::{Booking, DriverProfile, Vehicle};

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum AppMode {
    /// Landing menu
    #[strum(serialize = "Home")]
    Home,
    /// Vehicle catalog with filters
    #[strum(serialize = "Browse Cars")]
    Cars,
    /// Driver catalog with filters
    #[strum(serialize = "Browse Drivers")]
    Drivers,
    /// Four-step booking wizard
    #[strum(serialize = "Book a Ride")]
    Booking,
    /// Dashboard and booking management
    #[strum(serialize = "Admin Dashboard")]
    Admin,
}

impl AppMode {
    /// Entries on the home menu, in display order
    pub const MENU: [AppMode; 4] = [Self::Cars, Self::Drivers, Self::Booking, Self::Admin];

    pub const fn description(self) -> &'static str {
        match self {
            Self::Home => "Premium car rental with professional drivers",
            Self::Cars => "Filter and sort the vehicle fleet",
            Self::Drivers => "Find a professional driver by language and specialty",
            Self::Booking => "Reserve a vehicle, optionally with a driver",
            Self::Admin => "Bookings, revenue and fleet overview",
        }
    }
}

/// Editable fields on the booking details step, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum FormField {
    PickupDate,
    ReturnDate,
    PickupTime,
    ReturnTime,
    PickupLocation,
    DropoffLocation,
    CustomerName,
    CustomerEmail,
    CustomerPhone,
    SpecialRequests,
}

impl FormField {
    pub const ALL: [FormField; 10] = [
        Self::PickupDate,
        Self::ReturnDate,
        Self::PickupTime,
        Self::ReturnTime,
        Self::PickupLocation,
        Self::DropoffLocation,
        Self::CustomerName,
        Self::CustomerEmail,
        Self::CustomerPhone,
        Self::SpecialRequests,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::PickupDate => "Pickup Date",
            Self::ReturnDate => "Return Date",
            Self::PickupTime => "Pickup Time",
            Self::ReturnTime => "Return Time",
            Self::PickupLocation => "Pickup Location",
            Self::DropoffLocation => "Drop-off Location",
            Self::CustomerName => "Full Name",
            Self::CustomerEmail => "Email",
            Self::CustomerPhone => "Phone Number",
            Self::SpecialRequests => "Special Requests",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::PickupDate | Self::ReturnDate => "YYYY-MM-DD",
            Self::PickupTime | Self::ReturnTime => "HH:MM",
            Self::PickupLocation => "Enter pickup address",
            Self::DropoffLocation => "Same as pickup",
            Self::CustomerName => "John Doe",
            Self::CustomerEmail => "john@example.com",
            Self::CustomerPhone => "+1 (555) 123-4567",
            Self::SpecialRequests => "Any special requirements...",
        }
    }

    /// The required-field check this field feeds, if any
    pub const fn required(self) -> Option<DetailField> {
        match self {
            Self::PickupDate => Some(DetailField::PickupDate),
            Self::ReturnDate => Some(DetailField::ReturnDate),
            Self::PickupLocation => Some(DetailField::PickupLocation),
            Self::CustomerName => Some(DetailField::CustomerName),
            Self::CustomerEmail => Some(DetailField::CustomerEmail),
            Self::CustomerPhone => Some(DetailField::CustomerPhone),
            _ => None,
        }
    }

    pub fn value(self, draft: &BookingDraft) -> &str {
        match self {
            Self::PickupDate => &draft.pickup_date,
            Self::ReturnDate => &draft.return_date,
            Self::PickupTime => &draft.pickup_time,
            Self::ReturnTime => &draft.return_time,
            Self::PickupLocation => &draft.pickup_location,
            Self::DropoffLocation => &draft.dropoff_location,
            Self::CustomerName => &draft.customer_name,
            Self::CustomerEmail => &draft.customer_email,
            Self::CustomerPhone => &draft.customer_phone,
            Self::SpecialRequests => &draft.special_requests,
        }
    }

    pub fn value_mut(self, draft: &mut BookingDraft) -> &mut String {
        match self {
            Self::PickupDate => &mut draft.pickup_date,
            Self::ReturnDate => &mut draft.return_date,
            Self::PickupTime => &mut draft.pickup_time,
            Self::ReturnTime => &mut draft.return_time,
            Self::PickupLocation => &mut draft.pickup_location,
            Self::DropoffLocation => &mut draft.dropoff_location,
            Self::CustomerName => &mut draft.customer_name,
            Self::CustomerEmail => &mut draft.customer_email,
            Self::CustomerPhone => &mut draft.customer_phone,
            Self::SpecialRequests => &mut draft.special_requests,
        }
    }
}

/// What a confirmed text or selection dialog writes back to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    VehicleSearch,
    VehicleSort,
    DriverSearch,
    DriverSort,
    BookingSearch,
    Draft(FormField),
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Catalog data
    pub fixtures: Fixtures,
    /// Admin booking list; starts from the fixtures and grows with each
    /// confirmed wizard booking
    pub bookings: Vec<Booking>,
    pub vehicle_criteria: VehicleCriteria,
    pub driver_criteria: DriverCriteria,
    pub booking_criteria: BookingCriteria,
    pub home_selection: usize,
    pub vehicle_selection: usize,
    pub driver_selection: usize,
    pub booking_selection: usize,
    /// Booking wizard (select services, details, payment, confirmation)
    pub wizard: BookingWizard,
    /// Cursor on the current wizard step: vehicle row on step 1, form
    /// field on step 2
    pub wizard_cursor: usize,
    /// Set once the wizard submits
    pub confirmation: Option<BookingConfirmation>,
    /// Status message for user feedback
    pub status_message: String,
    /// Whether help overlay is visible
    pub help_visible: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Fixtures::builtin())
    }
}

impl AppState {
    pub fn new(fixtures: Fixtures) -> Self {
        Self {
            mode: AppMode::Home,
            bookings: fixtures.bookings.clone(),
            fixtures,
            vehicle_criteria: VehicleCriteria::storefront(),
            driver_criteria: DriverCriteria::storefront(),
            booking_criteria: BookingCriteria::default(),
            home_selection: 0,
            vehicle_selection: 0,
            driver_selection: 0,
            booking_selection: 0,
            wizard: BookingWizard::new(),
            wizard_cursor: 0,
            confirmation: None,
            status_message: "Welcome to DriveEasy".to_string(),
            help_visible: false,
        }
    }

    /// Vehicle listing after filters and sort
    pub fn visible_vehicles(&self) -> Vec<Vehicle> {
        logic::browse_vehicles(&self.fixtures.vehicles, &self.vehicle_criteria)
    }

    /// Driver listing after filters and sort
    pub fn visible_drivers(&self) -> Vec<DriverProfile> {
        logic::browse_drivers(&self.fixtures.drivers, &self.driver_criteria)
    }

    /// Admin booking list after search and status filter
    pub fn visible_bookings(&self) -> Vec<Booking> {
        filter_bookings(&self.bookings, &self.booking_criteria)
    }

    /// Vehicles offered on the wizard's first step
    pub fn bookable_vehicles(&self) -> Vec<&Vehicle> {
        logic::available_vehicles(&self.fixtures.vehicles)
    }

    /// Drivers the wizard can cycle through on the first step
    pub fn bookable_drivers(&self) -> Vec<&DriverProfile> {
        logic::recommended_drivers(&self.fixtures.drivers, None)
    }

    /// Id for the next booking the wizard appends
    pub fn next_booking_id(&self) -> String {
        let highest = self
            .bookings
            .iter()
            .filter_map(|b| b.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (highest + 1).to_string()
    }
}

/// Step `current` forward through `options`, wrapping through `None`
/// ("all") after the last entry.
pub fn cycle_option<T: Clone + PartialEq>(current: Option<&T>, options: &[T]) -> Option<T> {
    match current {
        None => options.first().cloned(),
        Some(value) => options
            .iter()
            .position(|o| o == value)
            .and_then(|i| options.get(i + 1))
            .cloned(),
    }
}
