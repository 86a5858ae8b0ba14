//! Application module
//!
//! Contains the main application loop, key dispatch and state mutation.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode, FormField, etc.)
//! - Main module - App struct and event loop

mod state;

pub use state::{cycle_option, AppMode, AppState, EditTarget, FormField};

use crate::booking_state::{BookingStep, BookingWizard};
use crate::components::keybindings::KeybindingContext;
use crate::error::Result;
use crate::fixtures::Fixtures;
use crate::input::InputHandler;
use crate::logic::{self, DriverCriteria, PriceRange, VehicleCriteria};
use crate::model::Amount;
use crate::types::{
    BookingStatus, DriverServiceType, FuelType, SortKey, StatusAction, Transmission,
    VehicleCategory,
};
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

/// Daily price slider step on the cars screen
const VEHICLE_PRICE_STEP: Amount = 10;
/// Hourly price slider step on the drivers screen
const DRIVER_PRICE_STEP: Amount = 5;
/// Minimum-experience presets cycled with `e`
const EXPERIENCE_PRESETS: [u8; 4] = [5, 10, 15, DriverCriteria::MAX_EXPERIENCE];

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
    input_handler: InputHandler,
    /// Keybinding context for navigation hints
    keybinding_context: KeybindingContext,
    /// Where the open dialog's value goes on confirm
    pending_edit: Option<EditTarget>,
}

impl App {
    /// Create a new application instance over `fixtures`
    pub fn new(fixtures: Fixtures) -> Self {
        info!(
            vehicles = fixtures.vehicles.len(),
            drivers = fixtures.drivers.len(),
            "Creating new App instance"
        );
        Self {
            state: AppState::new(fixtures),
            ui_renderer: UiRenderer::new(),
            input_handler: InputHandler::new(),
            keybinding_context: KeybindingContext::new(),
            pending_edit: None,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn input_handler(&self) -> &InputHandler {
        &self.input_handler
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
    }

    /// Main loop: poll input, dispatch, redraw. Returns when the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            self.draw(terminal)?;

            if crossterm::event::poll(Duration::from_millis(50))? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    if self.handle_key_event(key_event)? {
                        break;
                    }
                }
            }
        }

        info!("Application loop finished");
        Ok(())
    }

    /// Render one frame
    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|f| {
            self.ui_renderer.render(
                f,
                &self.state,
                &self.input_handler,
                &self.keybinding_context,
            )
        })?;
        Ok(())
    }

    /// Handle keyboard input events. Returns `true` when the app should exit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<bool> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(false);
        }

        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            info!("Ctrl+C pressed, exiting");
            return Ok(true);
        }

        // Open dialogs take every key
        if self.input_handler.is_dialog_active() {
            if let Some(value) = self.input_handler.handle_input(key_event) {
                self.apply_edit(value);
            } else if !self.input_handler.is_dialog_active() {
                self.pending_edit = None;
            }
            return Ok(false);
        }

        // Help overlay - ? or Esc dismisses it
        if self.state.help_visible {
            if matches!(key_event.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.toggle_help();
            }
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Char('?') => {
                self.toggle_help();
                return Ok(false);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                info!("Quit requested");
                return Ok(true);
            }
            _ => {}
        }

        match self.state.mode {
            AppMode::Home => self.handle_home_key(key_event),
            AppMode::Cars => self.handle_cars_key(key_event),
            AppMode::Drivers => self.handle_drivers_key(key_event),
            AppMode::Booking => self.handle_booking_key(key_event),
            AppMode::Admin => self.handle_admin_key(key_event),
        }

        Ok(false)
    }

    fn go_home(&mut self) {
        self.state.mode = AppMode::Home;
        self.state.status_message = "Welcome to DriveEasy".to_string();
    }

    // ========================================================================
    // Home
    // ========================================================================

    fn handle_home_key(&mut self, key_event: KeyEvent) {
        let len = AppMode::MENU.len();
        match key_event.code {
            KeyCode::Up => move_selection(&mut self.state.home_selection, len, -1),
            KeyCode::Down => move_selection(&mut self.state.home_selection, len, 1),
            KeyCode::Enter => {
                let Some(mode) = AppMode::MENU.get(self.state.home_selection).copied() else {
                    return;
                };
                debug!(%mode, "Home menu selection");
                match mode {
                    AppMode::Booking => self.open_booking(None, None),
                    mode => {
                        self.state.mode = mode;
                        self.state.status_message = mode.description().to_string();
                    }
                }
            }
            _ => {}
        }
    }

    // ========================================================================
    // Catalogs
    // ========================================================================

    fn handle_cars_key(&mut self, key_event: KeyEvent) {
        let visible = self.state.visible_vehicles();
        let criteria = &mut self.state.vehicle_criteria;
        let mut changed = true;

        match key_event.code {
            KeyCode::Up => {
                move_selection(&mut self.state.vehicle_selection, visible.len(), -1);
                changed = false;
            }
            KeyCode::Down => {
                move_selection(&mut self.state.vehicle_selection, visible.len(), 1);
                changed = false;
            }
            KeyCode::Enter => {
                match visible.get(self.state.vehicle_selection) {
                    Some(vehicle) if vehicle.available => {
                        let id = vehicle.id.clone();
                        self.open_booking(Some(&id), None);
                    }
                    Some(vehicle) => {
                        debug!(id = %vehicle.id, "Unavailable vehicle not bookable");
                        self.state.status_message =
                            format!("{} is unavailable", vehicle.display_name());
                    }
                    None => {}
                }
                return;
            }
            KeyCode::Esc => {
                self.go_home();
                return;
            }
            KeyCode::Char('/') => {
                self.input_handler.start_text_input(
                    "Search",
                    criteria.search.clone(),
                    "Search by make or model...",
                );
                self.pending_edit = Some(EditTarget::VehicleSearch);
                return;
            }
            KeyCode::Char('s') => {
                let current = criteria.sort.map(SortKey::label).unwrap_or_default();
                let options = SortKey::VEHICLE_KEYS.iter().map(|k| k.label().to_string()).collect();
                self.input_handler.start_selection("Sort", options, current);
                self.pending_edit = Some(EditTarget::VehicleSort);
                return;
            }
            KeyCode::Char('c') => {
                let all: Vec<VehicleCategory> = VehicleCategory::iter().collect();
                criteria.category = cycle_option(criteria.category.as_ref(), &all);
            }
            KeyCode::Char('t') => {
                let all: Vec<Transmission> = Transmission::iter().collect();
                criteria.transmission = cycle_option(criteria.transmission.as_ref(), &all);
            }
            KeyCode::Char('f') => {
                let all: Vec<FuelType> = FuelType::iter().collect();
                criteria.fuel_type = cycle_option(criteria.fuel_type.as_ref(), &all);
            }
            KeyCode::Char('a') => criteria.available_only = !criteria.available_only,
            KeyCode::Char(c @ ('[' | ']' | '{' | '}')) => {
                criteria.price_range = Some(nudge_range(
                    criteria.price_range,
                    VehicleCriteria::PRICE_LIMIT,
                    VEHICLE_PRICE_STEP,
                    c,
                ));
            }
            KeyCode::Char('r') => *criteria = VehicleCriteria::storefront(),
            _ => changed = false,
        }

        if changed {
            self.state.vehicle_selection = 0;
            debug!(criteria = ?self.state.vehicle_criteria, "Vehicle criteria changed");
        }
    }

    fn handle_drivers_key(&mut self, key_event: KeyEvent) {
        let visible = self.state.visible_drivers();
        let drivers = &self.state.fixtures.drivers;
        let criteria = &mut self.state.driver_criteria;
        let mut changed = true;

        match key_event.code {
            KeyCode::Up => {
                move_selection(&mut self.state.driver_selection, visible.len(), -1);
                changed = false;
            }
            KeyCode::Down => {
                move_selection(&mut self.state.driver_selection, visible.len(), 1);
                changed = false;
            }
            KeyCode::Enter => {
                match visible.get(self.state.driver_selection) {
                    Some(driver) if driver.available => {
                        let id = driver.id.clone();
                        self.open_booking(None, Some(&id));
                    }
                    Some(driver) => {
                        debug!(id = %driver.id, "Busy driver not bookable");
                        self.state.status_message = format!("{} is busy", driver.name);
                    }
                    None => {}
                }
                return;
            }
            KeyCode::Esc => {
                self.go_home();
                return;
            }
            KeyCode::Char('/') => {
                self.input_handler.start_text_input(
                    "Search",
                    criteria.search.clone(),
                    "Search drivers by name...",
                );
                self.pending_edit = Some(EditTarget::DriverSearch);
                return;
            }
            KeyCode::Char('s') => {
                let current = criteria.sort.map(SortKey::label).unwrap_or_default();
                let options = SortKey::DRIVER_KEYS.iter().map(|k| k.label().to_string()).collect();
                self.input_handler.start_selection("Sort", options, current);
                self.pending_edit = Some(EditTarget::DriverSort);
                return;
            }
            KeyCode::Char('l') => {
                let facets = logic::language_facets(drivers);
                criteria.language = cycle_option(criteria.language.as_ref(), &facets);
            }
            KeyCode::Char('p') => {
                let facets = logic::specialty_facets(drivers);
                criteria.specialty = cycle_option(criteria.specialty.as_ref(), &facets);
            }
            KeyCode::Char('c') => {
                let facets = logic::license_facets(drivers);
                criteria.license = cycle_option(criteria.license.as_ref(), &facets);
            }
            KeyCode::Char('e') => {
                criteria.min_experience =
                    cycle_option(criteria.min_experience.as_ref(), &EXPERIENCE_PRESETS);
            }
            KeyCode::Char('a') => criteria.available_only = !criteria.available_only,
            KeyCode::Char(c @ ('[' | ']' | '{' | '}')) => {
                criteria.price_range = Some(nudge_range(
                    criteria.price_range,
                    DriverCriteria::PRICE_LIMIT,
                    DRIVER_PRICE_STEP,
                    c,
                ));
            }
            KeyCode::Char('r') => *criteria = DriverCriteria::storefront(),
            _ => changed = false,
        }

        if changed {
            self.state.driver_selection = 0;
            debug!(criteria = ?self.state.driver_criteria, "Driver criteria changed");
        }
    }

    // ========================================================================
    // Booking wizard
    // ========================================================================

    /// Open the wizard, preselecting from a catalog entry when given
    fn open_booking(&mut self, vehicle_id: Option<&str>, driver_id: Option<&str>) {
        self.state.wizard = BookingWizard::seeded(
            &self.state.fixtures.vehicles,
            &self.state.fixtures.drivers,
            vehicle_id,
            driver_id,
        );
        self.state.wizard_cursor = 0;
        self.state.confirmation = None;
        self.state.mode = AppMode::Booking;
        self.state.status_message = BookingStep::SelectServices.title().to_string();
        info!(?vehicle_id, ?driver_id, "Booking wizard opened");
    }

    fn handle_booking_key(&mut self, key_event: KeyEvent) {
        match self.state.wizard.current_step() {
            BookingStep::SelectServices => self.handle_services_key(key_event),
            BookingStep::BookingDetails => self.handle_details_key(key_event),
            BookingStep::Payment => match key_event.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.submit_booking(),
                KeyCode::Esc => self.wizard_back(),
                _ => {}
            },
            BookingStep::Confirmation => {
                if matches!(key_event.code, KeyCode::Enter | KeyCode::Esc) {
                    // The draft does not outlive the wizard
                    self.state.wizard.reset();
                    self.state.confirmation = None;
                    self.go_home();
                }
            }
        }
    }

    fn handle_services_key(&mut self, key_event: KeyEvent) {
        let vehicle_count = self.state.bookable_vehicles().len();
        match key_event.code {
            KeyCode::Up => move_selection(&mut self.state.wizard_cursor, vehicle_count, -1),
            KeyCode::Down => move_selection(&mut self.state.wizard_cursor, vehicle_count, 1),
            KeyCode::Enter => {
                let vehicle = self
                    .state
                    .bookable_vehicles()
                    .get(self.state.wizard_cursor)
                    .map(|v| (*v).clone());
                if let Some(vehicle) = vehicle {
                    self.state.status_message = format!("Selected {}", vehicle.display_name());
                    self.state.wizard.select_vehicle(vehicle);
                }
            }
            KeyCode::Char('d') => {
                let enabled = !self.state.wizard.draft().driver_service;
                self.state.wizard.set_driver_service(enabled);
                if enabled && self.state.wizard.selected_driver().is_none() {
                    self.cycle_driver();
                }
            }
            KeyCode::Char('n') => self.cycle_driver(),
            KeyCode::Char('v') => {
                let all: Vec<DriverServiceType> = DriverServiceType::iter().collect();
                let draft = self.state.wizard.draft_mut();
                // No "all" stop here: wrap straight back to half-day
                draft.service_type = cycle_option(draft.service_type.as_ref(), &all)
                    .or_else(|| all.first().copied());
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let draft = self.state.wizard.draft_mut();
                draft.set_driver_hours(draft.driver_hours.saturating_add(1));
            }
            KeyCode::Char('-') => {
                let draft = self.state.wizard.draft_mut();
                draft.set_driver_hours(draft.driver_hours.saturating_sub(1));
            }
            KeyCode::Char(' ') => self.wizard_advance(),
            KeyCode::Esc => {
                self.state.wizard.reset();
                self.go_home();
            }
            _ => {}
        }
    }

    /// Select the next available driver, wrapping through "no driver"
    fn cycle_driver(&mut self) {
        let drivers: Vec<_> = self
            .state
            .bookable_drivers()
            .into_iter()
            .cloned()
            .collect();
        let next = cycle_option(self.state.wizard.selected_driver(), &drivers);
        match next {
            Some(driver) => {
                self.state.status_message = format!("Driver: {}", driver.name);
                self.state.wizard.select_driver(driver);
            }
            None => {
                self.state.status_message = "No driver selected".to_string();
                self.state.wizard.clear_driver();
            }
        }
    }

    fn handle_details_key(&mut self, key_event: KeyEvent) {
        let field_count = FormField::ALL.len();
        match key_event.code {
            KeyCode::Up | KeyCode::BackTab => {
                move_selection(&mut self.state.wizard_cursor, field_count, -1)
            }
            KeyCode::Down | KeyCode::Tab => {
                move_selection(&mut self.state.wizard_cursor, field_count, 1)
            }
            KeyCode::Enter => {
                if let Some(field) = FormField::ALL.get(self.state.wizard_cursor).copied() {
                    let current = field.value(self.state.wizard.draft()).to_string();
                    self.input_handler
                        .start_text_input(field.label(), current, field.placeholder());
                    self.pending_edit = Some(EditTarget::Draft(field));
                }
            }
            KeyCode::Char(' ') => self.wizard_advance(),
            KeyCode::Esc => self.wizard_back(),
            _ => {}
        }
    }

    fn wizard_advance(&mut self) {
        match self.state.wizard.advance() {
            Ok(step) => {
                self.state.wizard_cursor = 0;
                self.state.status_message = step.title().to_string();
            }
            Err(err) => self.state.status_message = err.to_string(),
        }
    }

    fn wizard_back(&mut self) {
        match self.state.wizard.go_back() {
            Ok(step) => {
                self.state.wizard_cursor = 0;
                self.state.status_message = step.title().to_string();
            }
            Err(err) => self.state.status_message = err.to_string(),
        }
    }

    fn submit_booking(&mut self) {
        let confirmation = match self.state.wizard.submit() {
            Ok(confirmation) => confirmation,
            Err(err) => {
                self.state.status_message = err.to_string();
                return;
            }
        };

        let id = self.state.next_booking_id();
        let created_at = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        match confirmation.to_booking(id.clone(), created_at) {
            Some(booking) => {
                info!(booking = %id, total = booking.total_amount, "Booking added to admin list");
                self.state.bookings.push(booking);
                self.state.status_message = format!("Booking #{} submitted", id);
            }
            None => warn!("Submitted booking has no vehicle, not listing it"),
        }
        self.state.confirmation = Some(confirmation);
    }

    // ========================================================================
    // Admin
    // ========================================================================

    fn handle_admin_key(&mut self, key_event: KeyEvent) {
        let visible = self.state.visible_bookings();
        match key_event.code {
            KeyCode::Up => move_selection(&mut self.state.booking_selection, visible.len(), -1),
            KeyCode::Down => move_selection(&mut self.state.booking_selection, visible.len(), 1),
            KeyCode::Esc => self.go_home(),
            KeyCode::Char('/') => {
                self.input_handler.start_text_input(
                    "Search",
                    self.state.booking_criteria.search.clone(),
                    "Customer name or booking id...",
                );
                self.pending_edit = Some(EditTarget::BookingSearch);
            }
            KeyCode::Char('f') => {
                let all: Vec<BookingStatus> = BookingStatus::iter().collect();
                let criteria = &mut self.state.booking_criteria;
                criteria.status = cycle_option(criteria.status.as_ref(), &all);
                self.state.booking_selection = 0;
            }
            KeyCode::Char('c') => self.apply_status_action(StatusAction::Confirm),
            KeyCode::Char('x') => self.apply_status_action(StatusAction::Cancel),
            KeyCode::Char('m') => self.apply_status_action(StatusAction::Complete),
            _ => {}
        }
    }

    /// Apply `action` to the highlighted booking in the admin list
    fn apply_status_action(&mut self, action: StatusAction) {
        let visible = self.state.visible_bookings();
        let Some(id) = visible.get(self.state.booking_selection).map(|b| b.id.clone()) else {
            return;
        };
        let Some(booking) = self.state.bookings.iter_mut().find(|b| b.id == id) else {
            return;
        };

        match booking.status.apply(action) {
            Ok(status) => {
                info!(booking = %id, from = %booking.status, to = %status, "Booking status changed");
                booking.status = status;
                self.state.status_message = format!("Booking #{} is now {}", id, status);
            }
            Err(err) => {
                warn!(booking = %id, "{}", err);
                self.state.status_message = err.to_string();
            }
        }
    }

    // ========================================================================
    // Dialog results
    // ========================================================================

    fn apply_edit(&mut self, value: String) {
        let Some(target) = self.pending_edit.take() else {
            return;
        };
        debug!(?target, "Dialog confirmed");

        match target {
            EditTarget::VehicleSearch => {
                self.state.vehicle_criteria.search = value;
                self.state.vehicle_selection = 0;
            }
            EditTarget::VehicleSort => {
                self.state.vehicle_criteria.sort = sort_key_for_label(&value);
                self.state.vehicle_selection = 0;
            }
            EditTarget::DriverSearch => {
                self.state.driver_criteria.search = value;
                self.state.driver_selection = 0;
            }
            EditTarget::DriverSort => {
                self.state.driver_criteria.sort = sort_key_for_label(&value);
                self.state.driver_selection = 0;
            }
            EditTarget::BookingSearch => {
                self.state.booking_criteria.search = value;
                self.state.booking_selection = 0;
            }
            EditTarget::Draft(field) => {
                *field.value_mut(self.state.wizard.draft_mut()) = value;
            }
        }
    }
}

/// Move a list cursor by `delta`, clamped to `0..len`
fn move_selection(selection: &mut usize, len: usize, delta: isize) {
    if len == 0 {
        *selection = 0;
        return;
    }
    *selection = selection
        .saturating_add_signed(delta)
        .min(len - 1);
}

/// Move one end of a price range by `step`, staying within `limit` and
/// keeping `min <= max`
fn nudge_range(range: Option<PriceRange>, limit: PriceRange, step: Amount, key: char) -> PriceRange {
    let mut range = range.unwrap_or(limit);
    match key {
        ']' => range.max = (range.max + step).min(limit.max),
        '[' => range.max = range.max.saturating_sub(step).max(range.min),
        '}' => range.min = (range.min + step).min(range.max),
        '{' => range.min = range.min.saturating_sub(step).max(limit.min),
        _ => {}
    }
    range
}

fn sort_key_for_label(label: &str) -> Option<SortKey> {
    SortKey::iter().find(|key| key.label() == label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_selection_clamps() {
        let mut selection = 0;
        move_selection(&mut selection, 3, -1);
        assert_eq!(selection, 0);
        move_selection(&mut selection, 3, 1);
        move_selection(&mut selection, 3, 1);
        move_selection(&mut selection, 3, 1);
        assert_eq!(selection, 2);
        move_selection(&mut selection, 0, 1);
        assert_eq!(selection, 0);
    }

    #[test]
    fn test_nudge_range_keeps_bounds() {
        let limit = PriceRange::new(0, 50);
        let range = nudge_range(None, limit, 5, ']');
        assert_eq!(range, limit);

        let range = nudge_range(Some(PriceRange::new(20, 20)), limit, 5, '[');
        assert_eq!(range, PriceRange::new(20, 20));

        let range = nudge_range(Some(PriceRange::new(0, 50)), limit, 5, '{');
        assert_eq!(range, PriceRange::new(0, 50));

        let range = nudge_range(Some(PriceRange::new(0, 50)), limit, 5, '}');
        assert_eq!(range, PriceRange::new(5, 50));
    }

    #[test]
    fn test_sort_key_for_label() {
        assert_eq!(sort_key_for_label("Newest First"), Some(SortKey::Year));
        assert_eq!(sort_key_for_label("Popularity"), None);
    }
}
