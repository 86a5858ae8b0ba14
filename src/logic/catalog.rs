//! Lookups by id, recommendations and filter facets

use crate::model::{DriverProfile, Vehicle};

/// How many recommended drivers the booking screen lists
pub const RECOMMENDED_DRIVER_LIMIT: usize = 3;

pub fn find_vehicle<'a>(vehicles: &'a [Vehicle], id: &str) -> Option<&'a Vehicle> {
    vehicles.iter().find(|v| v.id == id)
}

pub fn find_driver<'a>(drivers: &'a [DriverProfile], id: &str) -> Option<&'a DriverProfile> {
    drivers.iter().find(|d| d.id == id)
}

/// Available drivers other than `exclude_id`, in catalog order.
///
/// Callers take the first [`RECOMMENDED_DRIVER_LIMIT`] for display.
pub fn recommended_drivers<'a>(
    drivers: &'a [DriverProfile],
    exclude_id: Option<&str>,
) -> Vec<&'a DriverProfile> {
    drivers
        .iter()
        .filter(|d| d.available && Some(d.id.as_str()) != exclude_id)
        .collect()
}

/// Vehicles that can be booked right now
pub fn available_vehicles(vehicles: &[Vehicle]) -> Vec<&Vehicle> {
    vehicles.iter().filter(|v| v.available).collect()
}

fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.contains(value) {
            seen.push(value.clone());
        }
    }
    seen
}

/// Every language any driver speaks, first-seen order
pub fn language_facets(drivers: &[DriverProfile]) -> Vec<String> {
    distinct(drivers.iter().flat_map(|d| d.languages.iter()))
}

/// Every driver specialty, first-seen order
pub fn specialty_facets(drivers: &[DriverProfile]) -> Vec<String> {
    distinct(drivers.iter().flat_map(|d| d.specialties.iter()))
}

/// License classes held by any driver, first-seen order
pub fn license_facets(drivers: &[DriverProfile]) -> Vec<String> {
    distinct(drivers.iter().map(|d| &d.license))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;

    #[test]
    fn test_find_by_id() {
        let fixtures = Fixtures::builtin();
        assert_eq!(
            find_vehicle(&fixtures.vehicles, "3").map(Vehicle::display_name),
            Some("Tesla Model 3".to_string())
        );
        assert!(find_vehicle(&fixtures.vehicles, "42").is_none());
        assert_eq!(
            find_driver(&fixtures.drivers, "2").map(|d| d.name.as_str()),
            Some("Maria Garcia")
        );
        assert!(find_driver(&fixtures.drivers, "").is_none());
    }

    #[test]
    fn test_recommended_drivers_skip_selected_and_unavailable() {
        let fixtures = Fixtures::builtin();
        let ids: Vec<&str> = recommended_drivers(&fixtures.drivers, Some("1"))
            .iter()
            .map(|d| d.id.as_str())
            .collect();
        // Sarah Johnson (4) is unavailable
        assert_eq!(ids, vec!["2", "3"]);

        let all = recommended_drivers(&fixtures.drivers, None);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_available_vehicles() {
        let fixtures = Fixtures::builtin();
        let available = available_vehicles(&fixtures.vehicles);
        assert_eq!(available.len(), 5);
        assert!(available.iter().all(|v| v.id != "5"));
    }

    #[test]
    fn test_facets_first_seen_order() {
        let fixtures = Fixtures::builtin();
        assert_eq!(
            language_facets(&fixtures.drivers),
            vec!["English", "Spanish", "French", "Mandarin", "Cantonese"]
        );
        assert_eq!(license_facets(&fixtures.drivers), vec!["CDL-A", "CDL-B", "Regular"]);
        let specialties = specialty_facets(&fixtures.drivers);
        assert_eq!(specialties.len(), 12);
        assert_eq!(specialties[0], "City Tours");
    }
}
