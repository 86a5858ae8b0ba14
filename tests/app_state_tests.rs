//! Tests for Application State Management
//!
//! Drives `App` with key events the way the terminal loop does, and renders
//! frames into a ratatui `TestBackend`.
//!
//! These tests verify:
//! - AppState default initialization
//! - Home menu navigation and mode switches
//! - Catalog filter keys and search dialogs
//! - A full booking through the wizard, landing in the admin list
//! - Admin status actions
//! - Every screen renders without panicking

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use driveeasy::app::{App, AppMode, AppState};
use driveeasy::booking_state::BookingStep;
use driveeasy::fixtures::Fixtures;
use driveeasy::types::{BookingStatus, DriverServiceType, VehicleCategory};
use ratatui::{backend::TestBackend, Terminal};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(app: &mut App, code: KeyCode) -> bool {
    app.handle_key_event(key(code)).expect("key handling never fails")
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn new_app() -> App {
    App::new(Fixtures::builtin())
}

/// Open the home menu entry at `index`
fn open_menu(app: &mut App, index: usize) {
    for _ in 0..index {
        press(app, KeyCode::Down);
    }
    press(app, KeyCode::Enter);
}

fn render(app: &App) -> String {
    let backend = TestBackend::new(140, 45);
    let mut terminal = Terminal::new(backend).unwrap();
    app.draw(&mut terminal).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

// =============================================================================
// AppState Default Tests
// =============================================================================

#[test]
fn test_app_state_default_mode_is_home() {
    let state = AppState::default();
    assert_eq!(state.mode, AppMode::Home);
    assert!(state.status_message.contains("Welcome"));
    assert!(!state.help_visible);
}

#[test]
fn test_app_state_starts_with_fixture_bookings() {
    let state = AppState::default();
    assert_eq!(state.bookings, Fixtures::builtin().bookings);
    assert_eq!(state.wizard.current_step(), BookingStep::SelectServices);
}

#[test]
fn test_storefront_listing_is_available_cheapest_first() {
    let state = AppState::default();
    let ids: Vec<String> = state.visible_vehicles().into_iter().map(|v| v.id).collect();
    assert_eq!(ids, vec!["4", "1", "6", "3", "2"]);
}

#[test]
fn test_storefront_drivers_best_rated_first() {
    let state = AppState::default();
    let names: Vec<String> = state.visible_drivers().into_iter().map(|d| d.name).collect();
    assert_eq!(names, vec!["Maria Garcia", "John Smith", "David Chen"]);
}

// =============================================================================
// Navigation Tests
// =============================================================================

#[test]
fn test_home_menu_opens_each_mode() {
    for (index, mode) in AppMode::MENU.iter().enumerate() {
        let mut app = new_app();
        open_menu(&mut app, index);
        assert_eq!(app.state().mode, *mode);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state().mode, AppMode::Home);
    }
}

#[test]
fn test_quit_keys() {
    let mut app = new_app();
    assert!(press(&mut app, KeyCode::Char('q')));

    let mut app = new_app();
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(app.handle_key_event(ctrl_c).unwrap());
}

#[test]
fn test_help_overlay_swallows_keys() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('?'));
    assert!(app.state().help_visible);

    // q does not quit while help is open
    assert!(!press(&mut app, KeyCode::Char('q')));
    press(&mut app, KeyCode::Esc);
    assert!(!app.state().help_visible);
}

// =============================================================================
// Catalog Tests
// =============================================================================

#[test]
fn test_category_key_cycles_filter() {
    let mut app = new_app();
    open_menu(&mut app, 0);

    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.state().vehicle_criteria.category, Some(VehicleCategory::Sedan));
    assert_eq!(app.state().visible_vehicles().len(), 1);

    // sedan -> suv -> luxury
    press(&mut app, KeyCode::Char('c'));
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.state().vehicle_criteria.category, Some(VehicleCategory::Luxury));
    // The Mercedes is luxury too, but unavailable
    let visible = app.state().visible_vehicles();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].make, "BMW");

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.state().visible_vehicles().len(), 2);

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.state().visible_vehicles().len(), 5);
}

#[test]
fn test_search_dialog_filters_cars() {
    let mut app = new_app();
    open_menu(&mut app, 0);

    press(&mut app, KeyCode::Char('/'));
    assert!(app.input_handler().is_dialog_active());
    // Letters go to the dialog, not the catalog key map
    type_text(&mut app, "tesla");
    press(&mut app, KeyCode::Enter);

    assert!(!app.input_handler().is_dialog_active());
    assert_eq!(app.state().vehicle_criteria.search, "tesla");
    let visible = app.state().visible_vehicles();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "3");
}

#[test]
fn test_cancelled_dialog_keeps_criteria() {
    let mut app = new_app();
    open_menu(&mut app, 0);

    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "bmw");
    press(&mut app, KeyCode::Esc);

    assert!(!app.input_handler().is_dialog_active());
    assert!(app.state().vehicle_criteria.search.is_empty());
    assert_eq!(app.state().mode, AppMode::Cars);
}

#[test]
fn test_price_keys_narrow_range() {
    let mut app = new_app();
    open_menu(&mut app, 0);

    for _ in 0..12 {
        press(&mut app, KeyCode::Char('['));
    }
    let range = app.state().vehicle_criteria.price_range.unwrap();
    assert_eq!(range.max, 80);
    let prices: Vec<u64> = app
        .state()
        .visible_vehicles()
        .iter()
        .map(|v| v.price_per_day)
        .collect();
    assert_eq!(prices, vec![35, 45, 75]);
}

#[test]
fn test_driver_language_filter() {
    let mut app = new_app();
    open_menu(&mut app, 1);

    // English -> Spanish
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.state().driver_criteria.language.as_deref(), Some("Spanish"));
    let names: Vec<String> = app.state().visible_drivers().into_iter().map(|d| d.name).collect();
    assert_eq!(names, vec!["Maria Garcia", "John Smith"]);

    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.state().driver_criteria.min_experience, Some(5));
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.state().driver_criteria.min_experience, Some(10));
    let names: Vec<String> = app.state().visible_drivers().into_iter().map(|d| d.name).collect();
    assert_eq!(names, vec!["John Smith"]);
}

#[test]
fn test_booking_a_car_from_catalog_preselects_it() {
    let mut app = new_app();
    open_menu(&mut app, 0);

    // Third cheapest available: Ford Explorer
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.state().mode, AppMode::Booking);
    let vehicle = app.state().wizard.selected_vehicle().unwrap();
    assert_eq!(vehicle.display_name(), "Ford Explorer");
}

#[test]
fn test_booking_a_driver_enables_driver_service() {
    let mut app = new_app();
    open_menu(&mut app, 1);
    press(&mut app, KeyCode::Enter);

    let wizard = &app.state().wizard;
    assert!(wizard.draft().driver_service);
    assert_eq!(wizard.selected_driver().unwrap().name, "Maria Garcia");
    assert!(wizard.selected_vehicle().is_none());
}

#[test]
fn test_unavailable_car_cannot_be_booked() {
    let mut app = new_app();
    open_menu(&mut app, 0);

    // Show everything; the Mercedes is the most expensive
    press(&mut app, KeyCode::Char('a'));
    for _ in 0..5 {
        press(&mut app, KeyCode::Down);
    }
    let visible = app.state().visible_vehicles();
    let selected = &visible[app.state().vehicle_selection];
    assert_eq!(selected.id, "5");
    assert!(!selected.available);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().mode, AppMode::Cars);
    assert!(app.state().wizard.selected_vehicle().is_none());
    assert_eq!(app.state().wizard.current_step(), BookingStep::SelectServices);
    assert!(app.state().status_message.contains("unavailable"));

    let screen = render(&app);
    assert!(screen.contains("Unavailable for booking"));
    assert!(!screen.contains("Enter to book this car"));
}

#[test]
fn test_busy_driver_cannot_be_booked() {
    let mut app = new_app();
    open_menu(&mut app, 1);

    // Rating order with everyone shown: Maria, John, David, Sarah
    press(&mut app, KeyCode::Char('a'));
    for _ in 0..3 {
        press(&mut app, KeyCode::Down);
    }
    let visible = app.state().visible_drivers();
    assert_eq!(visible[app.state().driver_selection].name, "Sarah Johnson");

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().mode, AppMode::Drivers);
    assert!(app.state().wizard.selected_driver().is_none());
    assert!(!app.state().wizard.draft().driver_service);
    assert!(app.state().status_message.contains("busy"));
}

// =============================================================================
// Booking Wizard Tests
// =============================================================================

/// Fill the details form through text dialogs
fn fill_details(app: &mut App) {
    let values = [
        (0, "2024-01-15"),
        (1, "2024-01-18"),
        (4, "Downtown Hotel"),
        (6, "Alice Brown"),
        (7, "alice@example.com"),
        (8, "+1-555-0123"),
    ];
    let mut cursor = 0;
    for (field, value) in values {
        while cursor < field {
            press(app, KeyCode::Down);
            cursor += 1;
        }
        press(app, KeyCode::Enter);
        type_text(app, value);
        press(app, KeyCode::Enter);
    }
}

#[test]
fn test_cannot_continue_without_vehicle() {
    let mut app = new_app();
    open_menu(&mut app, 2);

    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.state().wizard.current_step(), BookingStep::SelectServices);
    assert!(app.state().status_message.to_lowercase().contains("vehicle"));
}

#[test]
fn test_full_booking_flow() {
    let mut app = new_app();
    open_menu(&mut app, 2);
    assert_eq!(app.state().mode, AppMode::Booking);

    // Toyota Camry is the first bookable vehicle; d adds John Smith
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('d'));
    let wizard = &app.state().wizard;
    assert_eq!(wizard.selected_vehicle().unwrap().id, "1");
    assert_eq!(wizard.selected_driver().unwrap().name, "John Smith");
    assert_eq!(wizard.draft().service_type, Some(DriverServiceType::FullDay));

    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.state().wizard.current_step(), BookingStep::BookingDetails);

    // Details are empty, so Space is refused
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.state().wizard.current_step(), BookingStep::BookingDetails);

    fill_details(&mut app);
    assert!(app.state().wizard.draft().details_complete());
    assert_eq!(app.state().wizard.quote().total, 805);

    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.state().wizard.current_step(), BookingStep::Payment);

    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.state().wizard.current_step(), BookingStep::Confirmation);
    let confirmation = app.state().confirmation.as_ref().unwrap();
    assert_eq!(confirmation.price.total, 805);

    // The new booking joins the admin list as pending
    let booking = app.state().bookings.last().unwrap();
    assert_eq!(booking.id, "5");
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.total_amount, 805);
    assert_eq!(booking.driver_id.as_deref(), Some("1"));

    // Esc cannot reopen a submitted booking; it goes home
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.state().mode, AppMode::Home);
    assert_eq!(app.state().wizard.current_step(), BookingStep::SelectServices);
    assert!(app.state().confirmation.is_none());
}

#[test]
fn test_back_from_details_keeps_selection() {
    let mut app = new_app();
    open_menu(&mut app, 2);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char(' '));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.state().wizard.current_step(), BookingStep::SelectServices);
    assert!(app.state().wizard.selected_vehicle().is_some());

    // Esc at the first step leaves the wizard and discards it
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.state().mode, AppMode::Home);
    assert!(app.state().wizard.selected_vehicle().is_none());
}

#[test]
fn test_hourly_service_controls() {
    let mut app = new_app();
    open_menu(&mut app, 2);
    press(&mut app, KeyCode::Char('d'));

    // full-day -> multi-day -> hourly
    press(&mut app, KeyCode::Char('v'));
    press(&mut app, KeyCode::Char('v'));
    assert_eq!(app.state().wizard.draft().service_type, Some(DriverServiceType::Hourly));

    for _ in 0..10 {
        press(&mut app, KeyCode::Char('+'));
    }
    assert_eq!(app.state().wizard.draft().driver_hours, 12);
    for _ in 0..20 {
        press(&mut app, KeyCode::Char('-'));
    }
    assert_eq!(app.state().wizard.draft().driver_hours, 2);
}

// =============================================================================
// Admin Tests
// =============================================================================

#[test]
fn test_admin_status_actions() {
    let mut app = new_app();
    open_menu(&mut app, 3);
    assert_eq!(app.state().mode, AppMode::Admin);

    // Booking 1 is already confirmed
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.state().bookings[0].status, BookingStatus::Confirmed);
    assert!(app.state().status_message.contains("Cannot confirm"));

    // Booking 2 is pending
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.state().bookings[1].status, BookingStatus::Confirmed);
    press(&mut app, KeyCode::Char('m'));
    assert_eq!(app.state().bookings[1].status, BookingStatus::Completed);

    // Completed bookings cannot be cancelled
    press(&mut app, KeyCode::Char('x'));
    assert_eq!(app.state().bookings[1].status, BookingStatus::Completed);
}

#[test]
fn test_admin_status_filter_targets_visible_row() {
    let mut app = new_app();
    open_menu(&mut app, 3);

    // pending only: booking 2
    press(&mut app, KeyCode::Char('f'));
    assert_eq!(app.state().booking_criteria.status, Some(BookingStatus::Pending));
    assert_eq!(app.state().visible_bookings().len(), 1);

    press(&mut app, KeyCode::Char('x'));
    assert_eq!(app.state().bookings[1].status, BookingStatus::Cancelled);
    assert_eq!(app.state().bookings[0].status, BookingStatus::Confirmed);
}

// =============================================================================
// Rendering Tests
// =============================================================================

#[test]
fn test_home_renders_menu() {
    let app = new_app();
    let screen = render(&app);
    assert!(screen.contains("DriveEasy"));
    assert!(screen.contains("Browse Cars"));
    assert!(screen.contains("Admin Dashboard"));
}

#[test]
fn test_every_screen_renders() {
    for index in 0..AppMode::MENU.len() {
        let mut app = new_app();
        open_menu(&mut app, index);
        let screen = render(&app);
        assert!(screen.contains(&app.state().mode.to_string()));
    }
}

#[test]
fn test_cars_screen_lists_prices() {
    let mut app = new_app();
    open_menu(&mut app, 0);
    let screen = render(&app);
    assert!(screen.contains("Honda Civic"));
    assert!(screen.contains("$35/day"));
    // Unavailable by default
    assert!(!screen.contains("Mercedes GLE"));
}

#[test]
fn test_car_detail_recommends_available_drivers() {
    let mut app = new_app();
    open_menu(&mut app, 0);
    let screen = render(&app);
    assert!(screen.contains("Available Drivers"));
    assert!(screen.contains("John Smith"));
    assert!(screen.contains("Maria Garcia"));
    assert!(screen.contains("David Chen"));
    // Busy
    assert!(!screen.contains("Sarah Johnson"));
}

#[test]
fn test_driver_detail_lists_available_cars() {
    let mut app = new_app();
    open_menu(&mut app, 1);
    let screen = render(&app);
    assert!(screen.contains("Available Cars"));
    assert!(screen.contains("Toyota Camry"));
    assert!(screen.contains("Ford Explorer"));
    assert!(!screen.contains("Mercedes GLE"));
}

#[test]
fn test_booking_screen_shows_summary() {
    let mut app = new_app();
    open_menu(&mut app, 2);
    press(&mut app, KeyCode::Enter);
    let screen = render(&app);
    assert!(screen.contains("Price Summary"));
    assert!(screen.contains("Service fee"));
}

#[test]
fn test_dialog_and_help_render_over_screen() {
    let mut app = new_app();
    open_menu(&mut app, 0);
    press(&mut app, KeyCode::Char('/'));
    let screen = render(&app);
    assert!(screen.contains("Edit Search"));

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('?'));
    let screen = render(&app);
    assert!(screen.contains("DriveEasy Help"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = new_app();
    open_menu(&mut app, 2);
    let backend = TestBackend::new(20, 8);
    let mut terminal = Terminal::new(backend).unwrap();
    app.draw(&mut terminal).unwrap();
}
