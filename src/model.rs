//! Catalog records
//!
//! Plain value types for the fixture data. Field names serialize in camelCase
//! (`pricePerDay`, `fuelType`, ...).

use serde::{Deserialize, Serialize};

use crate::types::{AdminRole, BookingStatus, FuelType, Transmission, VehicleCategory};

/// Whole currency units. Fixture prices are integral and every pricing
/// operation is a sum of products, so totals stay integral too.
pub type Amount = u64;

/// A rentable vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: u16,
    #[serde(rename = "type")]
    pub category: VehicleCategory,
    pub seats: u8,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub price_per_day: Amount,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub available: bool,
    /// 0.0 to 5.0
    pub rating: f32,
    pub reviews: u32,
}

impl Vehicle {
    /// "Make Model" as shown in listings
    pub fn display_name(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

/// A professional driver offered alongside vehicles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverProfile {
    pub id: String,
    pub name: String,
    pub age: u8,
    /// Years behind the wheel
    pub experience: u8,
    pub rating: f32,
    pub reviews: u32,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub price_per_hour: Amount,
    #[serde(default)]
    pub image: String,
    pub available: bool,
    pub license: String,
}

/// A booking record as listed on the admin and manage screens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    #[serde(rename = "carId")]
    pub vehicle_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub start_date: String,
    pub end_date: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub total_amount: Amount,
    pub status: BookingStatus,
    pub created_at: String,
}

/// Back-office account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: AdminRole,
    #[serde(default)]
    pub permissions: Vec<String>,
    pub last_login: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
