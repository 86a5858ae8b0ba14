//! Admin dashboard figures
//!
//! Everything is derived from the booking list and catalog currently held
//! in memory, so the dashboard stays consistent with status changes made in
//! the admin screen.

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::fixtures::Fixtures;
use crate::model::{Amount, Booking, DriverProfile, Vehicle};
use crate::types::BookingStatus;

/// Rows in the "recent bookings" panel
pub const RECENT_BOOKINGS: usize = 5;
/// Rows in the "top drivers" panel
pub const TOP_DRIVERS: usize = 3;
/// Rows in the "popular vehicles" panel
pub const POPULAR_VEHICLES: usize = 4;

/// Headline numbers for the admin dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_bookings: usize,
    /// Sum of totals over bookings that are not cancelled
    pub revenue: Amount,
    /// Count per status, in status declaration order
    pub by_status: Vec<(BookingStatus, usize)>,
    pub available_vehicles: usize,
    pub total_vehicles: usize,
    pub active_drivers: usize,
    pub total_drivers: usize,
    /// Mean vehicle rating; 0.0 for an empty catalog
    pub average_rating: f32,
}

impl DashboardStats {
    pub fn compute(bookings: &[Booking], vehicles: &[Vehicle], drivers: &[DriverProfile]) -> Self {
        let revenue = bookings
            .iter()
            .filter(|b| b.status.is_billable())
            .map(|b| b.total_amount)
            .sum();

        let by_status = BookingStatus::iter()
            .map(|status| (status, bookings.iter().filter(|b| b.status == status).count()))
            .collect();

        let average_rating = if vehicles.is_empty() {
            0.0
        } else {
            vehicles.iter().map(|v| v.rating).sum::<f32>() / vehicles.len() as f32
        };

        Self {
            total_bookings: bookings.len(),
            revenue,
            by_status,
            available_vehicles: vehicles.iter().filter(|v| v.available).count(),
            total_vehicles: vehicles.len(),
            active_drivers: drivers.iter().filter(|d| d.available).count(),
            total_drivers: drivers.len(),
            average_rating,
        }
    }

    /// Stats over a fixture set's own bookings
    pub fn from_fixtures(fixtures: &Fixtures) -> Self {
        Self::compute(&fixtures.bookings, &fixtures.vehicles, &fixtures.drivers)
    }

    pub fn count(&self, status: BookingStatus) -> usize {
        self.by_status
            .iter()
            .find(|(s, _)| *s == status)
            .map_or(0, |(_, n)| *n)
    }
}

pub fn recent_bookings(bookings: &[Booking]) -> &[Booking] {
    &bookings[..bookings.len().min(RECENT_BOOKINGS)]
}

pub fn top_drivers(drivers: &[DriverProfile]) -> Vec<&DriverProfile> {
    drivers.iter().filter(|d| d.available).take(TOP_DRIVERS).collect()
}

pub fn popular_vehicles(vehicles: &[Vehicle]) -> &[Vehicle] {
    &vehicles[..vehicles.len().min(POPULAR_VEHICLES)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_stats() {
        let fixtures = Fixtures::builtin();
        let stats = DashboardStats::from_fixtures(&fixtures);

        assert_eq!(stats.total_bookings, 4);
        assert_eq!(stats.revenue, 195 + 385 + 195 + 275);
        assert_eq!(stats.count(BookingStatus::Confirmed), 2);
        assert_eq!(stats.count(BookingStatus::Pending), 1);
        assert_eq!(stats.count(BookingStatus::Completed), 1);
        assert_eq!(stats.count(BookingStatus::Cancelled), 0);
        assert_eq!(stats.available_vehicles, 5);
        assert_eq!(stats.active_drivers, 3);
        assert!((stats.average_rating - 4.6).abs() < 0.01);
    }

    #[test]
    fn test_cancelled_bookings_earn_nothing() {
        let mut fixtures = Fixtures::builtin();
        fixtures.bookings[1].status = BookingStatus::Cancelled;
        let stats = DashboardStats::from_fixtures(&fixtures);
        assert_eq!(stats.revenue, 195 + 195 + 275);
        assert_eq!(stats.count(BookingStatus::Cancelled), 1);
    }

    #[test]
    fn test_empty_catalog() {
        let stats = DashboardStats::compute(&[], &[], &[]);
        assert_eq!(stats.total_bookings, 0);
        assert_eq!(stats.revenue, 0);
        assert_eq!(stats.average_rating, 0.0);
    }

    #[test]
    fn test_panels_are_capped() {
        let fixtures = Fixtures::builtin();
        assert_eq!(recent_bookings(&fixtures.bookings).len(), 4);
        assert_eq!(popular_vehicles(&fixtures.vehicles).len(), POPULAR_VEHICLES);
        let top: Vec<&str> = top_drivers(&fixtures.drivers)
            .iter()
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(top, vec!["1", "2", "3"]);
    }
}
