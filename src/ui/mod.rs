//! User interface rendering module
//!
//! Organized by screen:
//! - `header` - Title bar, status line and navigation bar
//! - `menus` - Home menu
//! - `catalog` - Vehicle and driver listings with their filter panels
//! - `booking` - Booking wizard steps and price summary
//! - `admin` - Dashboard and booking management
//! - `dialogs` - Input dialog rendering

mod admin;
mod booking;
mod catalog;
mod dialogs;
mod header;
mod menus;

use crate::app::{AppMode, AppState};
use crate::components::keybindings::KeybindingContext;
use crate::input::InputHandler;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// UI renderer for the application
///
/// Main entry point for drawing a frame. Every screen is derived from
/// `AppState`; the renderer itself holds nothing between frames.
#[derive(Debug, Default)]
pub struct UiRenderer;

impl UiRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the complete UI based on application state
    pub fn render(
        &self,
        f: &mut Frame,
        state: &AppState,
        input_handler: &InputHandler,
        keybinding_ctx: &KeybindingContext,
    ) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title bar
                Constraint::Min(1),    // Main content area
                Constraint::Length(1), // Status line
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        header::render_title_bar(f, state, main_chunks[0]);

        let content_area = main_chunks[1];
        match state.mode {
            AppMode::Home => menus::render_home_in_area(f, state, content_area),
            AppMode::Cars => catalog::render_cars_in_area(f, state, content_area),
            AppMode::Drivers => catalog::render_drivers_in_area(f, state, content_area),
            AppMode::Booking => booking::render_booking_in_area(f, state, content_area),
            AppMode::Admin => admin::render_admin_in_area(f, state, content_area),
        }

        header::render_status_line(f, state, main_chunks[2]);
        header::render_nav_bar(f, state, keybinding_ctx, main_chunks[3]);

        // Dialog sits over the screen it edits
        if input_handler.is_dialog_active() {
            dialogs::render_input_dialog(f, input_handler);
        }

        // Help overlay on top of everything
        if state.help_visible {
            header::render_help_overlay(f, state, keybinding_ctx);
        }
    }
}
