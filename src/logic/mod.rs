//! Pure catalog logic
//!
//! No I/O and no UI state. Front ends hand these functions fixture slices and
//! form values, and render whatever comes back.
//!
//! - `filter` - predicate evaluation over vehicles, drivers and bookings
//! - `sort` - stable ordering by a [`SortKey`](crate::types::SortKey)
//! - `pricing` - rental days, driver cost and booking totals
//! - `catalog` - lookups by id, recommendations, filter facets
//! - `analytics` - admin dashboard figures

pub mod analytics;
pub mod catalog;
pub mod filter;
pub mod pricing;
pub mod sort;

pub use analytics::DashboardStats;
pub use catalog::{
    available_vehicles, find_driver, find_vehicle, language_facets, license_facets,
    recommended_drivers, specialty_facets, RECOMMENDED_DRIVER_LIMIT,
};
pub use filter::{
    filter_bookings, filter_drivers, filter_vehicles, BookingCriteria, DriverCriteria,
    PriceRange, VehicleCriteria,
};
pub use pricing::{compute_total, driver_cost, quote, rental_days, PriceBreakdown};
pub use sort::{sort_drivers, sort_vehicles, Sortable};

use crate::model::{DriverProfile, Vehicle};

/// Filter then sort the vehicle catalog, as the cars screen does on every change
pub fn browse_vehicles(vehicles: &[Vehicle], criteria: &VehicleCriteria) -> Vec<Vehicle> {
    sort_vehicles(&filter_vehicles(vehicles, criteria), criteria.sort)
}

/// Filter then sort the driver catalog, as the drivers screen does on every change
pub fn browse_drivers(drivers: &[DriverProfile], criteria: &DriverCriteria) -> Vec<DriverProfile> {
    sort_drivers(&filter_drivers(drivers, criteria), criteria.sort)
}
