//! Booking price calculation
//!
//! Every function here is total. Missing dates fall back to a one-day
//! rental so the summary panel always has something to show.

use chrono::NaiveDate;
use serde::Serialize;

use crate::booking_state::BookingDraft;
use crate::model::{Amount, DriverProfile, Vehicle};
use crate::types::DriverServiceType;

/// Flat fee added to every booking
pub const SERVICE_FEE: Amount = 25;

/// Insurance charged per rental day
pub const INSURANCE_PER_DAY: Amount = 15;

/// Hours billed per day for half-day driver service
pub const HALF_DAY_HOURS: Amount = 4;

/// Hours billed per day for full-day and multi-day driver service
pub const FULL_DAY_HOURS: Amount = 8;

/// Line items shown in the booking summary panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub days: u32,
    pub vehicle_cost: Amount,
    pub driver_cost: Amount,
    pub service_fee: Amount,
    pub insurance: Amount,
    pub total: Amount,
}

/// Number of billable days between two dates.
///
/// Order does not matter. Same-day rentals and missing dates both bill as
/// one day.
pub fn rental_days(pickup: Option<NaiveDate>, ret: Option<NaiveDate>) -> u32 {
    match (pickup, ret) {
        (Some(pickup), Some(ret)) => {
            let diff = (ret - pickup).num_days().unsigned_abs();
            u32::try_from(diff).unwrap_or(u32::MAX).max(1)
        }
        _ => 1,
    }
}

/// Driver charge for the draft's service type.
///
/// Zero unless a driver is selected and driver service is switched on.
pub fn driver_cost(draft: &BookingDraft, driver: Option<&DriverProfile>) -> Amount {
    let Some(driver) = driver.filter(|_| draft.driver_service) else {
        return 0;
    };
    let rate = driver.price_per_hour;
    let days = Amount::from(draft.rental_days());

    match draft.service_type {
        Some(DriverServiceType::Hourly) => rate * Amount::from(draft.driver_hours),
        Some(DriverServiceType::HalfDay) => rate * HALF_DAY_HOURS * days,
        // Multi-day bills the same as full-day
        Some(DriverServiceType::FullDay | DriverServiceType::MultiDay) => {
            rate * FULL_DAY_HOURS * days
        }
        None => 0,
    }
}

/// Full price summary for a draft and its selections
pub fn quote(
    draft: &BookingDraft,
    vehicle: Option<&Vehicle>,
    driver: Option<&DriverProfile>,
) -> PriceBreakdown {
    let days = draft.rental_days();
    let vehicle_cost = vehicle.map_or(0, |v| v.price_per_day * Amount::from(days));
    let driver_cost = driver_cost(draft, driver);
    let insurance = INSURANCE_PER_DAY * Amount::from(days);

    PriceBreakdown {
        days,
        vehicle_cost,
        driver_cost,
        service_fee: SERVICE_FEE,
        insurance,
        total: vehicle_cost + driver_cost + SERVICE_FEE + insurance,
    }
}

/// Booking total: vehicle + driver + service fee + insurance
pub fn compute_total(
    draft: &BookingDraft,
    vehicle: Option<&Vehicle>,
    driver: Option<&DriverProfile>,
) -> Amount {
    quote(draft, vehicle, driver).total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn draft(pickup: &str, ret: &str) -> BookingDraft {
        BookingDraft {
            pickup_date: pickup.to_string(),
            return_date: ret.to_string(),
            ..BookingDraft::default()
        }
    }

    #[test]
    fn test_rental_days() {
        assert_eq!(rental_days(Some(date("2024-01-15")), Some(date("2024-01-18"))), 3);
        assert_eq!(rental_days(Some(date("2024-01-18")), Some(date("2024-01-15"))), 3);
        assert_eq!(rental_days(Some(date("2024-01-16")), Some(date("2024-01-16"))), 1);
        assert_eq!(rental_days(Some(date("2024-01-16")), None), 1);
        assert_eq!(rental_days(None, None), 1);
    }

    #[test]
    fn test_full_day_driver_quote() {
        let fixtures = Fixtures::builtin();
        // Toyota Camry at 45/day, John Smith at 25/h
        let vehicle = &fixtures.vehicles[0];
        let driver = &fixtures.drivers[0];
        let mut draft = draft("2024-01-15", "2024-01-18");
        draft.driver_service = true;

        let price = quote(&draft, Some(vehicle), Some(driver));
        assert_eq!(
            price,
            PriceBreakdown {
                days: 3,
                vehicle_cost: 135,
                driver_cost: 600,
                service_fee: 25,
                insurance: 45,
                total: 805,
            }
        );
    }

    #[test]
    fn test_same_day_without_driver() {
        let fixtures = Fixtures::builtin();
        let draft = draft("2024-01-16", "2024-01-16");
        assert_eq!(compute_total(&draft, Some(&fixtures.vehicles[0]), None), 85);
    }

    #[test]
    fn test_hourly_ignores_days() {
        let fixtures = Fixtures::builtin();
        // David Chen at 30/h
        let driver = &fixtures.drivers[2];
        let mut draft = draft("2024-01-15", "2024-01-25");
        draft.driver_service = true;
        draft.service_type = Some(DriverServiceType::Hourly);
        draft.driver_hours = 5;
        assert_eq!(driver_cost(&draft, Some(driver)), 150);
    }

    #[test]
    fn test_half_day_and_multi_day() {
        let fixtures = Fixtures::builtin();
        let driver = &fixtures.drivers[0];
        let mut draft = draft("2024-01-15", "2024-01-17");
        draft.driver_service = true;

        draft.service_type = Some(DriverServiceType::HalfDay);
        assert_eq!(driver_cost(&draft, Some(driver)), 25 * 4 * 2);

        draft.service_type = Some(DriverServiceType::MultiDay);
        let multi = driver_cost(&draft, Some(driver));
        draft.service_type = Some(DriverServiceType::FullDay);
        assert_eq!(multi, driver_cost(&draft, Some(driver)));
    }

    #[test]
    fn test_driver_cost_needs_driver_and_service() {
        let fixtures = Fixtures::builtin();
        let driver = &fixtures.drivers[0];
        let mut draft = draft("2024-01-15", "2024-01-18");

        assert_eq!(driver_cost(&draft, Some(driver)), 0);
        draft.driver_service = true;
        assert_eq!(driver_cost(&draft, None), 0);
        draft.service_type = None;
        assert_eq!(driver_cost(&draft, Some(driver)), 0);
    }

    #[test]
    fn test_no_dates_bills_one_day() {
        let fixtures = Fixtures::builtin();
        let draft = BookingDraft::default();
        let price = quote(&draft, Some(&fixtures.vehicles[0]), None);
        assert_eq!(price.days, 1);
        assert_eq!(price.total, 45 + 25 + 15);
    }

    #[test]
    fn test_no_vehicle_still_charges_fees() {
        let draft = BookingDraft::default();
        let price = quote(&draft, None, None);
        assert_eq!(price.vehicle_cost, 0);
        assert_eq!(price.total, SERVICE_FEE + INSURANCE_PER_DAY);
    }
}
