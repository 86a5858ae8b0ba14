//! Catalog filtering
//!
//! Each criteria struct holds optional predicates; `None` (or an empty search
//! string, or `available_only == false`) disables that predicate. An entry is
//! kept only when every active predicate holds. Results preserve the input
//! order and never alias the input.

use tracing::debug;

use crate::model::{Amount, Booking, DriverProfile, Vehicle};
use crate::types::{BookingStatus, FuelType, SortKey, Transmission, VehicleCategory};

/// Inclusive price bounds. The range widget keeps `min <= max`; nothing here
/// re-checks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Amount,
    pub max: Amount,
}

impl PriceRange {
    pub const fn new(min: Amount, max: Amount) -> Self {
        Self { min, max }
    }

    /// `min <= price <= max`
    #[inline]
    pub const fn contains(self, price: Amount) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Case-insensitive substring match of `term` against any of `fields`.
/// An empty term matches everything.
fn matches_search(term: &str, fields: &[&str]) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[inline]
fn matches_option<T: PartialEq>(wanted: Option<&T>, actual: &T) -> bool {
    wanted.is_none_or(|w| w == actual)
}

// ============================================================================
// Vehicles
// ============================================================================

/// Filters for the vehicle listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleCriteria {
    /// Matched against make or model
    pub search: String,
    pub category: Option<VehicleCategory>,
    /// Daily price bounds
    pub price_range: Option<PriceRange>,
    pub transmission: Option<Transmission>,
    pub fuel_type: Option<FuelType>,
    pub available_only: bool,
    /// Ordering applied after filtering; not a predicate
    pub sort: Option<SortKey>,
}

impl VehicleCriteria {
    /// Daily price slider bounds on the cars screen
    pub const PRICE_LIMIT: PriceRange = PriceRange::new(0, 200);

    /// What the cars screen shows before the user touches anything:
    /// full price slider, available vehicles only, cheapest first.
    pub fn storefront() -> Self {
        Self {
            price_range: Some(Self::PRICE_LIMIT),
            available_only: true,
            sort: Some(SortKey::PriceLow),
            ..Self::default()
        }
    }

    /// True when every active predicate holds for `vehicle`
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        matches_search(&self.search, &[&vehicle.make, &vehicle.model])
            && matches_option(self.category.as_ref(), &vehicle.category)
            && self
                .price_range
                .is_none_or(|range| range.contains(vehicle.price_per_day))
            && matches_option(self.transmission.as_ref(), &vehicle.transmission)
            && matches_option(self.fuel_type.as_ref(), &vehicle.fuel_type)
            && (!self.available_only || vehicle.available)
    }

    /// True if the user has narrowed the listing in any way
    pub fn is_narrowed(&self) -> bool {
        !self.search.is_empty()
            || self.category.is_some()
            || self.transmission.is_some()
            || self.fuel_type.is_some()
    }
}

/// Vehicles satisfying all active criteria, in catalog order
pub fn filter_vehicles(vehicles: &[Vehicle], criteria: &VehicleCriteria) -> Vec<Vehicle> {
    let matched: Vec<Vehicle> = vehicles
        .iter()
        .filter(|vehicle| criteria.matches(vehicle))
        .cloned()
        .collect();
    debug!(
        total = vehicles.len(),
        matched = matched.len(),
        "Filtered vehicle catalog"
    );
    matched
}

// ============================================================================
// Drivers
// ============================================================================

/// Filters for the driver listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverCriteria {
    /// Matched against the driver's name
    pub search: String,
    /// Driver must speak this language
    pub language: Option<String>,
    /// Driver must list this specialty
    pub specialty: Option<String>,
    /// Exact license class
    pub license: Option<String>,
    /// Hourly price bounds
    pub price_range: Option<PriceRange>,
    pub min_experience: Option<u8>,
    pub available_only: bool,
    /// Ordering applied after filtering; not a predicate
    pub sort: Option<SortKey>,
}

impl DriverCriteria {
    /// Hourly price slider bounds on the drivers screen
    pub const PRICE_LIMIT: PriceRange = PriceRange::new(0, 50);

    /// Experience slider upper bound
    pub const MAX_EXPERIENCE: u8 = 20;

    /// Drivers screen defaults: full slider, available only, best rated first
    pub fn storefront() -> Self {
        Self {
            price_range: Some(Self::PRICE_LIMIT),
            available_only: true,
            sort: Some(SortKey::Rating),
            ..Self::default()
        }
    }

    /// True when every active predicate holds for `driver`
    pub fn matches(&self, driver: &DriverProfile) -> bool {
        matches_search(&self.search, &[&driver.name])
            && self
                .language
                .as_ref()
                .is_none_or(|lang| driver.languages.contains(lang))
            && self
                .specialty
                .as_ref()
                .is_none_or(|spec| driver.specialties.contains(spec))
            && matches_option(self.license.as_ref(), &driver.license)
            && self
                .price_range
                .is_none_or(|range| range.contains(driver.price_per_hour))
            && self
                .min_experience
                .is_none_or(|min| driver.experience >= min)
            && (!self.available_only || driver.available)
    }

    pub fn is_narrowed(&self) -> bool {
        !self.search.is_empty()
            || self.language.is_some()
            || self.specialty.is_some()
            || self.license.is_some()
            || self.min_experience.is_some_and(|min| min > 0)
    }
}

/// Drivers satisfying all active criteria, in catalog order
pub fn filter_drivers(drivers: &[DriverProfile], criteria: &DriverCriteria) -> Vec<DriverProfile> {
    let matched: Vec<DriverProfile> = drivers
        .iter()
        .filter(|driver| criteria.matches(driver))
        .cloned()
        .collect();
    debug!(
        total = drivers.len(),
        matched = matched.len(),
        "Filtered driver catalog"
    );
    matched
}

// ============================================================================
// Bookings
// ============================================================================

/// Filters for the admin and manage-bookings lists
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingCriteria {
    /// Matched against customer name or booking id
    pub search: String,
    pub status: Option<BookingStatus>,
}

impl BookingCriteria {
    pub fn matches(&self, booking: &Booking) -> bool {
        matches_search(&self.search, &[&booking.customer_name, &booking.id])
            && matches_option(self.status.as_ref(), &booking.status)
    }

    pub fn is_narrowed(&self) -> bool {
        !self.search.is_empty() || self.status.is_some()
    }
}

/// Bookings satisfying all active criteria, in list order
pub fn filter_bookings(bookings: &[Booking], criteria: &BookingCriteria) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|booking| criteria.matches(booking))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;

    fn ids<T>(items: &[T], id: impl Fn(&T) -> &str) -> Vec<String> {
        items.iter().map(|item| id(item).to_string()).collect()
    }

    #[test]
    fn test_unset_criteria_is_identity() {
        let fixtures = Fixtures::builtin();
        assert_eq!(
            filter_vehicles(&fixtures.vehicles, &VehicleCriteria::default()),
            fixtures.vehicles
        );
        assert_eq!(
            filter_drivers(&fixtures.drivers, &DriverCriteria::default()),
            fixtures.drivers
        );
        assert_eq!(
            filter_bookings(&fixtures.bookings, &BookingCriteria::default()),
            fixtures.bookings
        );
    }

    #[test]
    fn test_search_is_case_insensitive_over_make_and_model() {
        let fixtures = Fixtures::builtin();
        let criteria = VehicleCriteria {
            search: "TES".to_string(),
            ..Default::default()
        };
        let found = filter_vehicles(&fixtures.vehicles, &criteria);
        assert_eq!(ids(&found, |v| v.id.as_str()), vec!["3"]);

        let criteria = VehicleCriteria {
            search: "model".to_string(),
            ..Default::default()
        };
        let found = filter_vehicles(&fixtures.vehicles, &criteria);
        assert_eq!(ids(&found, |v| v.id.as_str()), vec!["3"]);
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let fixtures = Fixtures::builtin();
        let criteria = VehicleCriteria {
            price_range: Some(PriceRange::new(45, 85)),
            ..Default::default()
        };
        let found = filter_vehicles(&fixtures.vehicles, &criteria);
        assert_eq!(ids(&found, |v| v.id.as_str()), vec!["1", "3", "6"]);
    }

    #[test]
    fn test_available_only_excludes_unavailable() {
        let fixtures = Fixtures::builtin();
        let criteria = VehicleCriteria {
            available_only: true,
            ..Default::default()
        };
        let found = filter_vehicles(&fixtures.vehicles, &criteria);
        assert_eq!(found.len(), 5);
        assert!(found.iter().all(|v| v.available));
    }

    #[test]
    fn test_storefront_defaults_hide_unavailable_and_expensive() {
        let fixtures = Fixtures::builtin();
        let found = filter_vehicles(&fixtures.vehicles, &VehicleCriteria::storefront());
        assert!(!found.iter().any(|v| v.id == "5"));
        assert_eq!(found.len(), 5);
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let fixtures = Fixtures::builtin();
        let criteria = VehicleCriteria {
            category: Some(VehicleCategory::Luxury),
            fuel_type: Some(FuelType::Petrol),
            transmission: Some(Transmission::Automatic),
            ..Default::default()
        };
        let found = filter_vehicles(&fixtures.vehicles, &criteria);
        assert_eq!(ids(&found, |v| v.id.as_str()), vec!["2"]);
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let fixtures = Fixtures::builtin();
        let criteria = VehicleCriteria {
            category: Some(VehicleCategory::Economy),
            transmission: Some(Transmission::Automatic),
            ..Default::default()
        };
        assert!(filter_vehicles(&fixtures.vehicles, &criteria).is_empty());
    }

    #[test]
    fn test_driver_language_and_specialty_membership() {
        let fixtures = Fixtures::builtin();
        let criteria = DriverCriteria {
            language: Some("Spanish".to_string()),
            ..Default::default()
        };
        let found = filter_drivers(&fixtures.drivers, &criteria);
        assert_eq!(ids(&found, |d| d.id.as_str()), vec!["1", "2"]);

        let criteria = DriverCriteria {
            specialty: Some("Long Distance".to_string()),
            ..Default::default()
        };
        let found = filter_drivers(&fixtures.drivers, &criteria);
        assert_eq!(ids(&found, |d| d.id.as_str()), vec!["3"]);
    }

    #[test]
    fn test_driver_experience_threshold_and_license() {
        let fixtures = Fixtures::builtin();
        let criteria = DriverCriteria {
            min_experience: Some(9),
            ..Default::default()
        };
        let found = filter_drivers(&fixtures.drivers, &criteria);
        assert_eq!(ids(&found, |d| d.id.as_str()), vec!["1", "3", "4"]);

        let criteria = DriverCriteria {
            license: Some("CDL-A".to_string()),
            ..Default::default()
        };
        let found = filter_drivers(&fixtures.drivers, &criteria);
        assert_eq!(ids(&found, |d| d.id.as_str()), vec!["1", "3"]);
    }

    #[test]
    fn test_booking_search_matches_name_or_id() {
        let fixtures = Fixtures::builtin();
        let criteria = BookingCriteria {
            search: "brown".to_string(),
            ..Default::default()
        };
        let found = filter_bookings(&fixtures.bookings, &criteria);
        assert_eq!(ids(&found, |b| b.id.as_str()), vec!["1", "4"]);

        let criteria = BookingCriteria {
            search: "3".to_string(),
            ..Default::default()
        };
        let found = filter_bookings(&fixtures.bookings, &criteria);
        assert_eq!(ids(&found, |b| b.id.as_str()), vec!["3"]);
    }

    #[test]
    fn test_booking_status_filter() {
        let fixtures = Fixtures::builtin();
        let criteria = BookingCriteria {
            status: Some(BookingStatus::Confirmed),
            ..Default::default()
        };
        let found = filter_bookings(&fixtures.bookings, &criteria);
        assert_eq!(ids(&found, |b| b.id.as_str()), vec!["1", "4"]);
    }
}
