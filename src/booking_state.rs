//! Booking Wizard State Machine
//!
//! This module is the single source of truth for where a customer is in the
//! booking flow and what they have entered so far. It gates every forward
//! transition on the fields the current step requires.
//!
//! # Step Flow
//!
//! ```text
//! SelectServices   (vehicle required)
//!     ↓  ↑
//! BookingDetails   (dates, pickup location, name, email, phone required)
//!     ↓  ↑
//! Payment          (submit is unconditional)
//!     ↓
//! Confirmation     (terminal)
//! ```
//!
//! Going back one step is always allowed until the booking is confirmed.
//! Nothing here is persisted: dropping the wizard discards the draft.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::logic::pricing::{self, PriceBreakdown};
use crate::model::{Booking, DriverProfile, Vehicle};
use crate::types::{BookingStatus, DriverServiceType};

/// Date format used by the pickup/return fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Hourly driver service bounds, in hours
pub const MIN_DRIVER_HOURS: u8 = 2;
pub const MAX_DRIVER_HOURS: u8 = 12;
pub const DEFAULT_DRIVER_HOURS: u8 = 8;

/// Wizard steps in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum BookingStep {
    /// Pick a vehicle and, optionally, a driver
    #[default]
    SelectServices = 1,
    /// Dates, locations and contact details
    BookingDetails = 2,
    /// Review the price summary and submit
    Payment = 3,
    /// Booking submitted (terminal)
    Confirmation = 4,
}

impl BookingStep {
    /// Total number of steps.
    pub const TOTAL_STEPS: usize = 4;

    /// 1-indexed step number for display
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Confirmation)
    }

    /// Returns the next step, or None at Confirmation
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::SelectServices => Some(Self::BookingDetails),
            Self::BookingDetails => Some(Self::Payment),
            Self::Payment => Some(Self::Confirmation),
            Self::Confirmation => None,
        }
    }

    /// Returns the previous step, or None where going back is not allowed
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::SelectServices => None,
            Self::BookingDetails => Some(Self::SelectServices),
            Self::Payment => Some(Self::BookingDetails),
            // Cannot go back once the booking is submitted
            Self::Confirmation => None,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::SelectServices => "Select Services",
            Self::BookingDetails => "Booking Details",
            Self::Payment => "Payment",
            Self::Confirmation => "Booking Confirmed!",
        }
    }

    pub const fn all_steps() -> &'static [Self] {
        &[
            Self::SelectServices,
            Self::BookingDetails,
            Self::Payment,
            Self::Confirmation,
        ]
    }
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Fields the details step requires before payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum DetailField {
    #[strum(serialize = "pickup date")]
    PickupDate,
    #[strum(serialize = "return date")]
    ReturnDate,
    #[strum(serialize = "pickup location")]
    PickupLocation,
    #[strum(serialize = "full name")]
    CustomerName,
    #[strum(serialize = "email")]
    CustomerEmail,
    #[strum(serialize = "phone number")]
    CustomerPhone,
}

impl DetailField {
    pub const REQUIRED: [DetailField; 6] = [
        Self::PickupDate,
        Self::ReturnDate,
        Self::PickupLocation,
        Self::CustomerName,
        Self::CustomerEmail,
        Self::CustomerPhone,
    ];

    /// Current value of this field in `draft`
    pub fn value(self, draft: &BookingDraft) -> &str {
        match self {
            Self::PickupDate => &draft.pickup_date,
            Self::ReturnDate => &draft.return_date,
            Self::PickupLocation => &draft.pickup_location,
            Self::CustomerName => &draft.customer_name,
            Self::CustomerEmail => &draft.customer_email,
            Self::CustomerPhone => &draft.customer_phone,
        }
    }
}

fn join_fields(fields: &[DetailField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors that can occur during wizard transitions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingTransitionError {
    /// Tried to leave SelectServices with no vehicle
    #[error("Select a vehicle before continuing")]
    VehicleNotSelected,

    /// Tried to leave BookingDetails with required fields empty
    #[error("Missing required booking details: {}", join_fields(.missing))]
    MissingDetails { missing: Vec<DetailField> },

    /// Tried to go back from the first step
    #[error("Already at the first step ({step})")]
    AtFirstStep { step: BookingStep },

    /// Tried to move after the booking was confirmed
    #[error("Cannot leave {from} (booking already submitted)")]
    FromTerminalStep { from: BookingStep },

    /// Tried to submit from a step other than Payment
    #[error("Bookings are submitted from the payment step, not {at}")]
    NotAtPayment { at: BookingStep },
}

impl From<BookingTransitionError> for crate::error::DriveEasyError {
    fn from(err: BookingTransitionError) -> Self {
        crate::error::DriveEasyError::BookingTransition(err.to_string())
    }
}

/// Form state collected while the wizard is open.
///
/// Text fields hold exactly what was typed; required-field checks compare
/// against the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    /// `YYYY-MM-DD`
    pub pickup_date: String,
    /// `YYYY-MM-DD`
    pub return_date: String,
    pub pickup_time: String,
    pub return_time: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub special_requests: String,
    /// Whether a professional driver is added to the booking
    pub driver_service: bool,
    /// `None` when the form carries a type this version does not know;
    /// such a service prices to zero
    pub service_type: Option<DriverServiceType>,
    /// Hours for hourly service
    pub driver_hours: u8,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            pickup_date: String::new(),
            return_date: String::new(),
            pickup_time: "09:00".to_string(),
            return_time: "18:00".to_string(),
            pickup_location: String::new(),
            dropoff_location: String::new(),
            customer_name: String::new(),
            customer_email: String::new(),
            customer_phone: String::new(),
            special_requests: String::new(),
            driver_service: false,
            service_type: Some(DriverServiceType::default()),
            driver_hours: DEFAULT_DRIVER_HOURS,
        }
    }
}

impl BookingDraft {
    fn parse_date(value: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
    }

    /// Parsed pickup date; `None` when empty or not a valid date
    pub fn pickup_day(&self) -> Option<NaiveDate> {
        Self::parse_date(&self.pickup_date)
    }

    /// Parsed return date; `None` when empty or not a valid date
    pub fn return_day(&self) -> Option<NaiveDate> {
        Self::parse_date(&self.return_date)
    }

    /// Rental length in days (at least 1)
    pub fn rental_days(&self) -> u32 {
        pricing::rental_days(self.pickup_day(), self.return_day())
    }

    /// Set the service type from its form value. Unknown values are kept as
    /// "unrecognised" rather than rejected.
    pub fn set_service_type(&mut self, value: &str) {
        self.service_type = value.parse().ok();
        if self.service_type.is_none() {
            warn!(value, "Unrecognised driver service type");
        }
    }

    /// Set hourly service length, clamped to the hour picker's range
    pub fn set_driver_hours(&mut self, hours: u8) {
        self.driver_hours = hours.clamp(MIN_DRIVER_HOURS, MAX_DRIVER_HOURS);
    }

    /// Required detail fields that are still empty, in form order
    pub fn missing_details(&self) -> Vec<DetailField> {
        DetailField::REQUIRED
            .into_iter()
            .filter(|field| field.value(self).is_empty())
            .collect()
    }

    /// True when every required detail field is filled in
    pub fn details_complete(&self) -> bool {
        DetailField::REQUIRED
            .iter()
            .all(|field| !field.value(self).is_empty())
    }
}

/// Guard for SelectServices → BookingDetails
#[inline]
pub fn services_selected(vehicle: Option<&Vehicle>) -> bool {
    vehicle.is_some()
}

/// Guard for BookingDetails → Payment
#[inline]
pub fn details_complete(draft: &BookingDraft) -> bool {
    draft.details_complete()
}

/// What the confirmation screen shows after submit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingConfirmation {
    pub vehicle: Option<Vehicle>,
    /// Present only when driver service was enabled
    pub driver: Option<DriverProfile>,
    pub draft: BookingDraft,
    pub price: PriceBreakdown,
}

impl BookingConfirmation {
    /// Turn the confirmation into a pending booking record for the admin
    /// list. Returns `None` if no vehicle was selected.
    pub fn to_booking(&self, id: impl Into<String>, created_at: impl Into<String>) -> Option<Booking> {
        let vehicle = self.vehicle.as_ref()?;
        Some(Booking {
            id: id.into(),
            vehicle_id: vehicle.id.clone(),
            driver_id: self.driver.as_ref().map(|d| d.id.clone()),
            customer_name: self.draft.customer_name.clone(),
            customer_email: self.draft.customer_email.clone(),
            customer_phone: self.draft.customer_phone.clone(),
            start_date: self.draft.pickup_date.clone(),
            end_date: self.draft.return_date.clone(),
            pickup_location: self.draft.pickup_location.clone(),
            dropoff_location: self.draft.dropoff_location.clone(),
            total_amount: self.price.total,
            status: BookingStatus::Pending,
            created_at: created_at.into(),
        })
    }
}

/// Booking wizard context.
///
/// Owns the current step, the selections and the draft. Forward moves are
/// validated against the step's guard; invalid moves return errors and leave
/// the state unchanged.
///
/// # Example
///
/// ```
/// use driveeasy::booking_state::{BookingStep, BookingWizard};
/// use driveeasy::fixtures::Fixtures;
///
/// let fixtures = Fixtures::builtin();
/// let mut wizard = BookingWizard::new();
/// assert!(!wizard.can_advance());
///
/// wizard.select_vehicle(fixtures.vehicles[0].clone());
/// assert_eq!(wizard.advance().unwrap(), BookingStep::BookingDetails);
///
/// // Details are still empty
/// assert!(wizard.advance().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BookingWizard {
    current: BookingStep,
    draft: BookingDraft,
    vehicle: Option<Vehicle>,
    driver: Option<DriverProfile>,
    /// Steps entered, in order
    history: Vec<BookingStep>,
}

impl BookingWizard {
    /// Start an empty wizard at SelectServices
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a wizard preselected from a deep link (`?carId=..&driverId=..`).
    ///
    /// Ids that match nothing leave that selection empty. Passing a driver id
    /// turns driver service on even if the id is unknown.
    pub fn seeded(
        vehicles: &[Vehicle],
        drivers: &[DriverProfile],
        vehicle_id: Option<&str>,
        driver_id: Option<&str>,
    ) -> Self {
        let mut wizard = Self::new();
        if let Some(id) = vehicle_id {
            wizard.vehicle = crate::logic::find_vehicle(vehicles, id).cloned();
            if wizard.vehicle.is_none() {
                debug!(id, "Deep-linked vehicle not found");
            }
        }
        if let Some(id) = driver_id {
            wizard.driver = crate::logic::find_driver(drivers, id).cloned();
            wizard.draft.driver_service = true;
            if wizard.driver.is_none() {
                debug!(id, "Deep-linked driver not found");
            }
        }
        wizard
    }

    #[inline]
    pub fn current_step(&self) -> BookingStep {
        self.current
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut BookingDraft {
        &mut self.draft
    }

    pub fn selected_vehicle(&self) -> Option<&Vehicle> {
        self.vehicle.as_ref()
    }

    pub fn selected_driver(&self) -> Option<&DriverProfile> {
        self.driver.as_ref()
    }

    /// The driver that is actually booked: the selected one, if driver
    /// service is on
    pub fn booked_driver(&self) -> Option<&DriverProfile> {
        self.driver.as_ref().filter(|_| self.draft.driver_service)
    }

    /// Steps entered so far, in order
    pub fn history(&self) -> &[BookingStep] {
        &self.history
    }

    pub fn is_confirmed(&self) -> bool {
        self.current.is_terminal()
    }

    pub fn select_vehicle(&mut self, vehicle: Vehicle) {
        debug!(vehicle = %vehicle.id, "Vehicle selected");
        self.vehicle = Some(vehicle);
    }

    pub fn clear_vehicle(&mut self) {
        self.vehicle = None;
    }

    pub fn select_driver(&mut self, driver: DriverProfile) {
        debug!(driver = %driver.id, "Driver selected");
        self.driver = Some(driver);
    }

    pub fn clear_driver(&mut self) {
        self.driver = None;
    }

    /// Toggle the "I need a professional driver" option
    pub fn set_driver_service(&mut self, enabled: bool) {
        self.draft.driver_service = enabled;
    }

    /// Whether the forward control on the current step is enabled.
    ///
    /// Re-evaluated on every keystroke by the UI.
    pub fn can_advance(&self) -> bool {
        match self.current {
            BookingStep::SelectServices => services_selected(self.vehicle.as_ref()),
            BookingStep::BookingDetails => details_complete(&self.draft),
            BookingStep::Payment => true,
            BookingStep::Confirmation => false,
        }
    }

    /// Whether the back control on the current step is enabled
    pub fn can_go_back(&self) -> bool {
        self.current.previous().is_some()
    }

    /// Move to the next step if the current step's guard holds.
    ///
    /// # Errors
    ///
    /// - `VehicleNotSelected` leaving SelectServices without a vehicle
    /// - `MissingDetails` leaving BookingDetails with empty required fields
    /// - `FromTerminalStep` at Confirmation
    pub fn advance(&mut self) -> Result<BookingStep, BookingTransitionError> {
        let next = match self.current {
            BookingStep::SelectServices if !services_selected(self.vehicle.as_ref()) => {
                Err(BookingTransitionError::VehicleNotSelected)
            }
            BookingStep::BookingDetails if !details_complete(&self.draft) => {
                Err(BookingTransitionError::MissingDetails {
                    missing: self.draft.missing_details(),
                })
            }
            step => step
                .next()
                .ok_or(BookingTransitionError::FromTerminalStep { from: step }),
        };

        match next {
            Ok(step) => {
                debug!(from = %self.current, to = %step, "Booking wizard advanced");
                self.enter(step);
                Ok(step)
            }
            Err(err) => {
                warn!(step = %self.current, "Booking wizard blocked: {}", err);
                Err(err)
            }
        }
    }

    /// Move back one step. Never guarded, except that there is nothing
    /// before SelectServices and nothing leaves Confirmation.
    pub fn go_back(&mut self) -> Result<BookingStep, BookingTransitionError> {
        let step = self.current;
        if step.is_terminal() {
            return Err(BookingTransitionError::FromTerminalStep { from: step });
        }
        let previous = step
            .previous()
            .ok_or(BookingTransitionError::AtFirstStep { step })?;

        debug!(from = %step, to = %previous, "Booking wizard went back");
        self.enter(previous);
        Ok(previous)
    }

    /// Submit from Payment and move to Confirmation.
    ///
    /// No payment is taken and nothing is stored; the confirmation only
    /// carries what the summary screen displays.
    pub fn submit(&mut self) -> Result<BookingConfirmation, BookingTransitionError> {
        if self.current != BookingStep::Payment {
            return Err(BookingTransitionError::NotAtPayment { at: self.current });
        }

        let confirmation = BookingConfirmation {
            vehicle: self.vehicle.clone(),
            driver: self.booked_driver().cloned(),
            draft: self.draft.clone(),
            price: self.quote(),
        };
        self.enter(BookingStep::Confirmation);

        info!(
            vehicle = confirmation.vehicle.as_ref().map(|v| v.id.as_str()).unwrap_or("-"),
            total = confirmation.price.total,
            "Booking submitted"
        );
        Ok(confirmation)
    }

    /// Live price summary for the current selections
    pub fn quote(&self) -> PriceBreakdown {
        pricing::quote(&self.draft, self.vehicle.as_ref(), self.driver.as_ref())
    }

    /// Drop all selections and start over at SelectServices
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn enter(&mut self, step: BookingStep) {
        self.history.push(step);
        self.current = step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;

    fn filled_draft(draft: &mut BookingDraft) {
        draft.pickup_date = "2024-01-15".to_string();
        draft.return_date = "2024-01-18".to_string();
        draft.pickup_location = "Downtown Hotel".to_string();
        draft.customer_name = "Alice Brown".to_string();
        draft.customer_email = "alice@example.com".to_string();
        draft.customer_phone = "+1-555-0123".to_string();
    }

    // =========================================================================
    // BookingStep Tests
    // =========================================================================

    #[test]
    fn test_step_numbers_are_sequential() {
        for (i, step) in BookingStep::all_steps().iter().enumerate() {
            assert_eq!(step.number() as usize, i + 1);
        }
        assert_eq!(BookingStep::all_steps().len(), BookingStep::TOTAL_STEPS);
    }

    #[test]
    fn test_step_next_forms_chain() {
        let mut current = BookingStep::SelectServices;
        let mut count = 0;
        while let Some(next) = current.next() {
            current = next;
            count += 1;
        }
        assert_eq!(current, BookingStep::Confirmation);
        assert_eq!(count, 3);
    }

    #[test]
    fn test_confirmation_has_no_previous() {
        assert_eq!(BookingStep::Confirmation.previous(), None);
        assert_eq!(BookingStep::SelectServices.previous(), None);
        assert_eq!(
            BookingStep::Payment.previous(),
            Some(BookingStep::BookingDetails)
        );
    }

    // =========================================================================
    // Guards
    // =========================================================================

    #[test]
    fn test_cannot_advance_without_vehicle() {
        let mut wizard = BookingWizard::new();
        assert!(!wizard.can_advance());
        assert_eq!(
            wizard.advance(),
            Err(BookingTransitionError::VehicleNotSelected)
        );
        assert_eq!(wizard.current_step(), BookingStep::SelectServices);
    }

    #[test]
    fn test_can_advance_with_vehicle() {
        let fixtures = Fixtures::builtin();
        let mut wizard = BookingWizard::new();
        wizard.select_vehicle(fixtures.vehicles[0].clone());
        assert!(wizard.can_advance());
        assert_eq!(wizard.advance(), Ok(BookingStep::BookingDetails));
    }

    #[test]
    fn test_each_empty_detail_blocks_payment() {
        let fixtures = Fixtures::builtin();
        for field in DetailField::REQUIRED {
            let mut wizard = BookingWizard::new();
            wizard.select_vehicle(fixtures.vehicles[0].clone());
            wizard.advance().unwrap();
            filled_draft(wizard.draft_mut());
            assert!(wizard.can_advance());

            let draft = wizard.draft_mut();
            match field {
                DetailField::PickupDate => draft.pickup_date.clear(),
                DetailField::ReturnDate => draft.return_date.clear(),
                DetailField::PickupLocation => draft.pickup_location.clear(),
                DetailField::CustomerName => draft.customer_name.clear(),
                DetailField::CustomerEmail => draft.customer_email.clear(),
                DetailField::CustomerPhone => draft.customer_phone.clear(),
            }

            assert!(!wizard.can_advance(), "{} should be required", field);
            assert_eq!(
                wizard.advance(),
                Err(BookingTransitionError::MissingDetails {
                    missing: vec![field]
                })
            );
        }
    }

    #[test]
    fn test_optional_fields_do_not_block() {
        let mut draft = BookingDraft::default();
        filled_draft(&mut draft);
        assert!(draft.dropoff_location.is_empty());
        assert!(draft.special_requests.is_empty());
        assert!(draft.details_complete());
    }

    #[test]
    fn test_missing_details_lists_all_in_form_order() {
        let draft = BookingDraft::default();
        assert_eq!(draft.missing_details(), DetailField::REQUIRED.to_vec());
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    #[test]
    fn test_full_flow_to_confirmation() {
        let fixtures = Fixtures::builtin();
        let mut wizard = BookingWizard::new();
        wizard.select_vehicle(fixtures.vehicles[0].clone());
        wizard.advance().unwrap();
        filled_draft(wizard.draft_mut());
        assert_eq!(wizard.advance(), Ok(BookingStep::Payment));

        let confirmation = wizard.submit().unwrap();
        assert_eq!(wizard.current_step(), BookingStep::Confirmation);
        assert!(wizard.is_confirmed());
        assert_eq!(confirmation.price.days, 3);
        assert_eq!(
            wizard.history(),
            &[
                BookingStep::BookingDetails,
                BookingStep::Payment,
                BookingStep::Confirmation
            ]
        );
    }

    #[test]
    fn test_back_transitions_are_unguarded() {
        let fixtures = Fixtures::builtin();
        let mut wizard = BookingWizard::new();
        wizard.select_vehicle(fixtures.vehicles[0].clone());
        wizard.advance().unwrap();
        filled_draft(wizard.draft_mut());
        wizard.advance().unwrap();

        // Emptying a field does not block going back
        wizard.draft_mut().customer_name.clear();
        assert_eq!(wizard.go_back(), Ok(BookingStep::BookingDetails));
        wizard.clear_vehicle();
        assert_eq!(wizard.go_back(), Ok(BookingStep::SelectServices));
        assert_eq!(
            wizard.go_back(),
            Err(BookingTransitionError::AtFirstStep {
                step: BookingStep::SelectServices
            })
        );
    }

    #[test]
    fn test_confirmation_is_terminal() {
        let fixtures = Fixtures::builtin();
        let mut wizard = BookingWizard::new();
        wizard.select_vehicle(fixtures.vehicles[0].clone());
        wizard.advance().unwrap();
        filled_draft(wizard.draft_mut());
        wizard.advance().unwrap();
        wizard.submit().unwrap();

        assert!(!wizard.can_advance());
        assert!(!wizard.can_go_back());
        let terminal = BookingTransitionError::FromTerminalStep {
            from: BookingStep::Confirmation,
        };
        assert_eq!(wizard.advance(), Err(terminal.clone()));
        assert_eq!(wizard.go_back(), Err(terminal));
    }

    #[test]
    fn test_submit_only_from_payment() {
        let mut wizard = BookingWizard::new();
        assert_eq!(
            wizard.submit(),
            Err(BookingTransitionError::NotAtPayment {
                at: BookingStep::SelectServices
            })
        );
    }

    #[test]
    fn test_seeded_from_deep_link() {
        let fixtures = Fixtures::builtin();
        let wizard =
            BookingWizard::seeded(&fixtures.vehicles, &fixtures.drivers, Some("3"), Some("2"));
        assert_eq!(wizard.selected_vehicle().map(|v| v.id.as_str()), Some("3"));
        assert_eq!(wizard.selected_driver().map(|d| d.id.as_str()), Some("2"));
        assert!(wizard.draft().driver_service);
        assert!(wizard.can_advance());
    }

    #[test]
    fn test_seeded_with_unknown_ids() {
        let fixtures = Fixtures::builtin();
        let wizard =
            BookingWizard::seeded(&fixtures.vehicles, &fixtures.drivers, Some("99"), None);
        assert!(wizard.selected_vehicle().is_none());
        assert!(!wizard.draft().driver_service);
        assert!(!wizard.can_advance());
    }

    #[test]
    fn test_driver_only_booked_with_service_enabled() {
        let fixtures = Fixtures::builtin();
        let mut wizard = BookingWizard::new();
        wizard.select_driver(fixtures.drivers[0].clone());
        assert!(wizard.booked_driver().is_none());
        wizard.set_driver_service(true);
        assert_eq!(wizard.booked_driver().map(|d| d.id.as_str()), Some("1"));
    }

    #[test]
    fn test_confirmation_to_pending_booking() {
        let fixtures = Fixtures::builtin();
        let mut wizard =
            BookingWizard::seeded(&fixtures.vehicles, &fixtures.drivers, Some("1"), Some("1"));
        wizard.advance().unwrap();
        filled_draft(wizard.draft_mut());
        wizard.advance().unwrap();
        let confirmation = wizard.submit().unwrap();

        let booking = confirmation
            .to_booking("5", "2024-01-12T08:00:00Z")
            .unwrap();
        assert_eq!(booking.vehicle_id, "1");
        assert_eq!(booking.driver_id.as_deref(), Some("1"));
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.total_amount, 805);
    }

    #[test]
    fn test_hours_are_clamped() {
        let mut draft = BookingDraft::default();
        draft.set_driver_hours(1);
        assert_eq!(draft.driver_hours, MIN_DRIVER_HOURS);
        draft.set_driver_hours(30);
        assert_eq!(draft.driver_hours, MAX_DRIVER_HOURS);
        draft.set_driver_hours(5);
        assert_eq!(draft.driver_hours, 5);
    }

    #[test]
    fn test_unknown_service_type_is_kept_unrecognised() {
        let mut draft = BookingDraft::default();
        draft.set_service_type("weekly");
        assert_eq!(draft.service_type, None);
        draft.set_service_type("half-day");
        assert_eq!(draft.service_type, Some(DriverServiceType::HalfDay));
    }

    #[test]
    fn test_error_display() {
        let err = BookingTransitionError::MissingDetails {
            missing: vec![DetailField::PickupDate, DetailField::CustomerEmail],
        };
        assert_eq!(
            err.to_string(),
            "Missing required booking details: pickup date, email"
        );

        let err = BookingTransitionError::NotAtPayment {
            at: BookingStep::BookingDetails,
        };
        assert_eq!(
            err.to_string(),
            "Bookings are submitted from the payment step, not Booking Details"
        );
    }
}
