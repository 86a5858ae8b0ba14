//! Type-safe vocabularies for the rental catalog
//!
//! Every closed set of values the storefront works with (vehicle categories,
//! fuel types, booking statuses, sort keys, ...) is a Rust enum here so that
//! filters and form fields get exhaustive matching instead of string compares.
//! String forms match the fixture data and the CLI flags.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

/// Vehicle category shown as a badge and used by the category filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VehicleCategory {
    Sedan,
    Suv,
    Luxury,
    Economy,
    Sports,
}

impl VehicleCategory {
    /// Short badge glyph used in list rows
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Luxury => "✨",
            Self::Sports => "🏎️",
            Self::Suv => "🚙",
            Self::Sedan => "🚗",
            Self::Economy => "💰",
        }
    }
}

/// Gearbox type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Transmission {
    Automatic,
    Manual,
}

/// Fuel / drivetrain type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

/// How a chauffeur is booked alongside the vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
pub enum DriverServiceType {
    #[strum(serialize = "hourly")]
    Hourly,
    #[strum(serialize = "half-day")]
    HalfDay,
    #[default]
    #[strum(serialize = "full-day")]
    FullDay,
    #[strum(serialize = "multi-day")]
    MultiDay,
}

impl DriverServiceType {
    /// Human-readable label for the service picker
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hourly => "Hourly",
            Self::HalfDay => "Half day (4h/day)",
            Self::FullDay => "Full day (8h/day)",
            Self::MultiDay => "Multi-day",
        }
    }
}

/// Lifecycle status of a booking record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

/// Admin-side actions on an existing booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum StatusAction {
    Confirm,
    Cancel,
    Complete,
}

/// Rejected status change
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Cannot {action} a booking that is {from}")]
pub struct StatusTransitionError {
    pub from: BookingStatus,
    pub action: StatusAction,
}

impl BookingStatus {
    /// Apply an admin action, returning the resulting status.
    ///
    /// - `confirm`: pending → confirmed
    /// - `cancel`: pending | confirmed → cancelled
    /// - `complete`: confirmed → completed
    pub fn apply(self, action: StatusAction) -> Result<Self, StatusTransitionError> {
        match (self, action) {
            (Self::Pending, StatusAction::Confirm) => Ok(Self::Confirmed),
            (Self::Pending | Self::Confirmed, StatusAction::Cancel) => Ok(Self::Cancelled),
            (Self::Confirmed, StatusAction::Complete) => Ok(Self::Completed),
            (from, action) => Err(StatusTransitionError { from, action }),
        }
    }

    /// Bookings that still count towards revenue
    pub const fn is_billable(self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

/// Back-office role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AdminRole {
    Admin,
    Manager,
    Staff,
}

/// Ordering applied to a catalog listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Price ascending
    #[strum(serialize = "price-low")]
    PriceLow,
    /// Price descending
    #[strum(serialize = "price-high")]
    PriceHigh,
    /// Rating descending
    #[strum(serialize = "rating")]
    Rating,
    /// Model year descending ("newest first")
    #[strum(serialize = "year")]
    Year,
    /// Years of experience descending
    #[strum(serialize = "experience")]
    Experience,
    /// Review count descending
    #[strum(serialize = "reviews")]
    Reviews,
}

impl SortKey {
    /// Parse a sort key from its string form. Unknown keys yield `None`,
    /// which the sorter treats as "keep the current order".
    pub fn parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    /// Label for the sort selector
    pub const fn label(self) -> &'static str {
        match self {
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Rating => "Highest Rated",
            Self::Year => "Newest First",
            Self::Experience => "Most Experienced",
            Self::Reviews => "Most Reviews",
        }
    }

    /// Keys offered on the vehicle listing
    pub const VEHICLE_KEYS: [SortKey; 4] = [Self::PriceLow, Self::PriceHigh, Self::Rating, Self::Year];

    /// Keys offered on the driver listing
    pub const DRIVER_KEYS: [SortKey; 5] = [
        Self::Rating,
        Self::PriceLow,
        Self::PriceHigh,
        Self::Experience,
        Self::Reviews,
    ];
}
