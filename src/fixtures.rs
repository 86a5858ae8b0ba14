//! Catalog fixtures: the built-in sample data and fixture-file handling.
//!
//! The storefront has no backend. Everything it lists comes from a
//! [`Fixtures`] value, either the compiled-in sample catalog or a JSON file
//! passed with `--fixtures`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::model::{AdminUser, Booking, DriverProfile, Vehicle};
use crate::types::{AdminRole, BookingStatus, FuelType, Transmission, VehicleCategory};

/// Everything the storefront and admin console display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixtures {
    pub vehicles: Vec<Vehicle>,
    pub drivers: Vec<DriverProfile>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub admin_users: Vec<AdminUser>,
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Fixtures {
    /// The compiled-in sample catalog
    pub fn builtin() -> Self {
        Self {
            vehicles: builtin_vehicles(),
            drivers: builtin_drivers(),
            bookings: builtin_bookings(),
            admin_users: builtin_admin_users(),
        }
    }

    /// Save fixtures to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize fixtures to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write fixtures to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load fixtures from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read fixtures from {:?}", path.as_ref()))?;

        let fixtures: Self =
            serde_json::from_str(&content).context("Failed to parse fixtures JSON")?;

        Ok(fixtures)
    }

    /// Validate the fixture data.
    ///
    /// Ids must be non-empty and unique per collection, ratings within 0-5,
    /// prices non-zero, and every booking must reference a known vehicle
    /// (and driver, when it has one).
    pub fn validate(&self) -> Result<()> {
        check_unique_ids("vehicle", self.vehicles.iter().map(|v| v.id.as_str()))?;
        check_unique_ids("driver", self.drivers.iter().map(|d| d.id.as_str()))?;
        check_unique_ids("booking", self.bookings.iter().map(|b| b.id.as_str()))?;
        check_unique_ids("admin user", self.admin_users.iter().map(|u| u.id.as_str()))?;

        for vehicle in &self.vehicles {
            if vehicle.make.trim().is_empty() || vehicle.model.trim().is_empty() {
                anyhow::bail!("Vehicle {} must have a make and model", vehicle.id);
            }
            check_rating("Vehicle", &vehicle.id, vehicle.rating)?;
            if vehicle.price_per_day == 0 {
                anyhow::bail!("Vehicle {} must have a non-zero daily price", vehicle.id);
            }
            if vehicle.seats == 0 {
                anyhow::bail!("Vehicle {} must have at least one seat", vehicle.id);
            }
        }

        for driver in &self.drivers {
            if driver.name.trim().is_empty() {
                anyhow::bail!("Driver {} must have a name", driver.id);
            }
            check_rating("Driver", &driver.id, driver.rating)?;
            if driver.price_per_hour == 0 {
                anyhow::bail!("Driver {} must have a non-zero hourly price", driver.id);
            }
        }

        let vehicle_ids: HashSet<&str> = self.vehicles.iter().map(|v| v.id.as_str()).collect();
        let driver_ids: HashSet<&str> = self.drivers.iter().map(|d| d.id.as_str()).collect();
        for booking in &self.bookings {
            if !vehicle_ids.contains(booking.vehicle_id.as_str()) {
                anyhow::bail!(
                    "Booking {} references unknown vehicle {}",
                    booking.id,
                    booking.vehicle_id
                );
            }
            if let Some(driver_id) = booking.driver_id.as_deref() {
                if !driver_ids.contains(driver_id) {
                    anyhow::bail!("Booking {} references unknown driver {}", booking.id, driver_id);
                }
            }
        }

        Ok(())
    }
}

fn check_unique_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            anyhow::bail!("Every {} must have an id", kind);
        }
        if !seen.insert(id) {
            anyhow::bail!("Duplicate {} id: {}", kind, id);
        }
    }
    Ok(())
}

fn check_rating(kind: &str, id: &str, rating: f32) -> Result<()> {
    if !(0.0..=5.0).contains(&rating) {
        anyhow::bail!("{} {} has rating {} outside 0-5", kind, id, rating);
    }
    Ok(())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn vehicle(
    id: &str,
    make: &str,
    model: &str,
    year: u16,
    category: VehicleCategory,
    seats: u8,
    transmission: Transmission,
    fuel_type: FuelType,
    price_per_day: u64,
    image: &str,
    features: &[&str],
    available: bool,
    rating: f32,
    reviews: u32,
) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        make: make.to_string(),
        model: model.to_string(),
        year,
        category,
        seats,
        transmission,
        fuel_type,
        price_per_day,
        image: image.to_string(),
        features: strings(features),
        available,
        rating,
        reviews,
    }
}

fn builtin_vehicles() -> Vec<Vehicle> {
    use FuelType::*;
    use Transmission::*;
    use VehicleCategory::*;

    vec![
        vehicle(
            "1", "Toyota", "Camry", 2023, Sedan, 5, Automatic, Petrol, 45,
            "/toyota-camry-sedan.png",
            &["Air Conditioning", "GPS Navigation", "Bluetooth", "Backup Camera"],
            true, 4.5, 128,
        ),
        vehicle(
            "2", "BMW", "X5", 2023, Luxury, 7, Automatic, Petrol, 120,
            "/bmw-x5-luxury-suv.jpg",
            &["Leather Seats", "Sunroof", "Premium Sound", "Heated Seats", "GPS Navigation"],
            true, 4.8, 89,
        ),
        vehicle(
            "3", "Tesla", "Model 3", 2023, Sports, 5, Automatic, Electric, 85,
            "/tesla-model-3.png",
            &["Autopilot", "Supercharging", "Premium Interior", "Glass Roof"],
            true, 4.7, 156,
        ),
        vehicle(
            "4", "Honda", "Civic", 2022, Economy, 5, Manual, Petrol, 35,
            "/honda-civic-economy-car.jpg",
            &["Air Conditioning", "Bluetooth", "USB Ports"],
            true, 4.3, 203,
        ),
        vehicle(
            "5", "Mercedes", "GLE", 2023, Luxury, 5, Automatic, Hybrid, 150,
            "/mercedes-gle-luxury-suv.jpg",
            &["Massage Seats", "Ambient Lighting", "Premium Sound", "Panoramic Roof"],
            false, 4.9, 67,
        ),
        vehicle(
            "6", "Ford", "Explorer", 2023, Suv, 7, Automatic, Petrol, 75,
            "/ford-explorer-suv.png",
            &["Third Row Seating", "Towing Capacity", "All-Wheel Drive", "Cargo Space"],
            true, 4.4, 142,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn driver(
    id: &str,
    name: &str,
    age: u8,
    experience: u8,
    rating: f32,
    reviews: u32,
    languages: &[&str],
    specialties: &[&str],
    price_per_hour: u64,
    image: &str,
    available: bool,
    license: &str,
) -> DriverProfile {
    DriverProfile {
        id: id.to_string(),
        name: name.to_string(),
        age,
        experience,
        rating,
        reviews,
        languages: strings(languages),
        specialties: strings(specialties),
        price_per_hour,
        image: image.to_string(),
        available,
        license: license.to_string(),
    }
}

fn builtin_drivers() -> Vec<DriverProfile> {
    vec![
        driver(
            "1", "John Smith", 35, 12, 4.8, 245,
            &["English", "Spanish"],
            &["City Tours", "Airport Transfers", "Business Travel"],
            25, "/professional-driver-headshot.jpg", true, "CDL-A",
        ),
        driver(
            "2", "Maria Garcia", 29, 8, 4.9, 189,
            &["English", "Spanish", "French"],
            &["Luxury Service", "Wedding Events", "VIP Transport"],
            35, "/professional-female-driver.jpg", true, "CDL-B",
        ),
        driver(
            "3", "David Chen", 42, 18, 4.7, 312,
            &["English", "Mandarin", "Cantonese"],
            &["Long Distance", "Corporate Events", "Safe Driving"],
            30, "/placeholder-bro9y.png", true, "CDL-A",
        ),
        driver(
            "4", "Sarah Johnson", 31, 9, 4.6, 156,
            &["English"],
            &["Family Friendly", "Pet Transport", "Medical Appointments"],
            28, "/placeholder-5y8oq.png", false, "Regular",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn booking(
    id: &str,
    vehicle_id: &str,
    driver_id: Option<&str>,
    customer: (&str, &str, &str),
    dates: (&str, &str),
    locations: (&str, &str),
    total_amount: u64,
    status: BookingStatus,
    created_at: &str,
) -> Booking {
    Booking {
        id: id.to_string(),
        vehicle_id: vehicle_id.to_string(),
        driver_id: driver_id.map(str::to_string),
        customer_name: customer.0.to_string(),
        customer_email: customer.1.to_string(),
        customer_phone: customer.2.to_string(),
        start_date: dates.0.to_string(),
        end_date: dates.1.to_string(),
        pickup_location: locations.0.to_string(),
        dropoff_location: locations.1.to_string(),
        total_amount,
        status,
        created_at: created_at.to_string(),
    }
}

fn builtin_bookings() -> Vec<Booking> {
    use BookingStatus::*;

    vec![
        booking(
            "1", "1", Some("1"),
            ("Alice Brown", "alice@example.com", "+1-555-0123"),
            ("2024-01-15", "2024-01-18"),
            ("Downtown Hotel", "Airport Terminal 1"),
            195, Confirmed, "2024-01-10T10:00:00Z",
        ),
        booking(
            "2", "2", Some("2"),
            ("John Doe", "john@example.com", "+1-555-0456"),
            ("2024-01-20", "2024-01-22"),
            ("City Center Hotel", "International Airport"),
            385, Pending, "2024-01-15T14:30:00Z",
        ),
        booking(
            "3", "3", None,
            ("Emma Wilson", "emma@example.com", "+1-555-0789"),
            ("2024-01-25", "2024-01-27"),
            ("Downtown Office", "Downtown Office"),
            195, Completed, "2024-01-12T09:15:00Z",
        ),
        booking(
            "4", "1", Some("1"),
            ("Michael Brown", "michael@example.com", "+1-555-0321"),
            ("2024-01-28", "2024-01-30"),
            ("Airport Terminal 2", "Business District"),
            275, Confirmed, "2024-01-18T11:20:00Z",
        ),
    ]
}

fn builtin_admin_users() -> Vec<AdminUser> {
    vec![
        AdminUser {
            id: "1".to_string(),
            name: "Admin User".to_string(),
            email: "admin@driveeasy.com".to_string(),
            role: AdminRole::Admin,
            permissions: strings(&[
                "manage_cars",
                "manage_drivers",
                "manage_bookings",
                "view_analytics",
                "manage_users",
            ]),
            last_login: "2024-01-20T09:30:00Z".to_string(),
            avatar: Some("/placeholder.svg".to_string()),
        },
        AdminUser {
            id: "2".to_string(),
            name: "Fleet Manager".to_string(),
            email: "manager@driveeasy.com".to_string(),
            role: AdminRole::Manager,
            permissions: strings(&["manage_cars", "manage_drivers", "view_analytics"]),
            last_login: "2024-01-19T14:15:00Z".to_string(),
            avatar: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_fixtures_are_valid() {
        let fixtures = Fixtures::builtin();
        assert_eq!(fixtures.vehicles.len(), 6);
        assert_eq!(fixtures.drivers.len(), 4);
        assert_eq!(fixtures.bookings.len(), 4);
        assert_eq!(fixtures.admin_users.len(), 2);
        fixtures.validate().unwrap();
    }

    #[test]
    fn test_save_and_load_preserves_catalog() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fixtures.json");

        let fixtures = Fixtures::builtin();
        fixtures.save_to_file(&path).unwrap();
        let loaded = Fixtures::load_from_file(&path).unwrap();

        assert_eq!(loaded, fixtures);
    }

    #[test]
    fn test_file_uses_camel_case_field_names() {
        let json = serde_json::to_string(&Fixtures::builtin()).unwrap();
        assert!(json.contains("\"pricePerDay\":45"));
        assert!(json.contains("\"fuelType\":\"electric\""));
        assert!(json.contains("\"type\":\"luxury\""));
        assert!(json.contains("\"carId\":\"1\""));
        assert!(json.contains("\"adminUsers\""));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempdir().unwrap();
        let err = Fixtures::load_from_file(dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read fixtures"));
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut fixtures = Fixtures::builtin();
        fixtures.vehicles[1].id = "1".to_string();
        let err = fixtures.validate().unwrap_err();
        assert_eq!(err.to_string(), "Duplicate vehicle id: 1");
    }

    #[test]
    fn test_validate_rejects_bad_rating() {
        let mut fixtures = Fixtures::builtin();
        fixtures.drivers[0].rating = 5.5;
        assert!(fixtures.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_dangling_booking() {
        let mut fixtures = Fixtures::builtin();
        fixtures.bookings[0].driver_id = Some("99".to_string());
        let err = fixtures.validate().unwrap_err();
        assert!(err.to_string().contains("unknown driver 99"));
    }

    #[test]
    fn test_bookings_and_admins_are_optional_in_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let minimal = serde_json::json!({
            "vehicles": serde_json::to_value(&Fixtures::builtin().vehicles).unwrap(),
            "drivers": [],
        });
        std::fs::write(&path, minimal.to_string()).unwrap();

        let loaded = Fixtures::load_from_file(&path).unwrap();
        assert_eq!(loaded.vehicles.len(), 6);
        assert!(loaded.bookings.is_empty());
        assert!(loaded.admin_users.is_empty());
        loaded.validate().unwrap();
    }
}
