//! Colours and styles for the DriveEasy screens
//!
//! Screens never build colours inline; they pick a named style here so the
//! storefront and the admin console stay consistent.
//!
//! ```rust
//! use driveeasy::theme::{Colors, Styles, Theme};
//! use driveeasy::types::BookingStatus;
//! use ratatui::style::Style;
//!
//! let brand = Style::default().fg(Colors::BRAND);
//! let heading = Styles::title();
//! let pending = Theme::status_style(BookingStatus::Pending);
//! ```

use ratatui::style::{Color, Modifier, Style};

use crate::types::BookingStatus;

// =============================================================================
// PALETTE
// =============================================================================

/// Brand palette
pub struct Colors;

impl Colors {
    /// Dialog and popup background
    pub const SURFACE: Color = Color::Rgb(17, 24, 39);

    pub const FG_PRIMARY: Color = Color::White;
    pub const FG_SECONDARY: Color = Color::Gray;
    pub const FG_MUTED: Color = Color::DarkGray;

    /// DriveEasy blue: titles, focused borders, the active menu entry
    pub const BRAND: Color = Color::Rgb(59, 130, 246);

    /// Prices and totals
    pub const MONEY: Color = Color::Rgb(16, 185, 129);

    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Rgb(245, 158, 11);
    pub const ERROR: Color = Color::Rgb(239, 68, 68);
    pub const INFO: Color = Color::LightBlue;

    pub const BORDER_FOCUSED: Color = Self::BRAND;
    pub const BORDER_IDLE: Color = Color::DarkGray;

    /// Highlighted table row
    pub const HIGHLIGHT_BG: Color = Self::BRAND;
    pub const HIGHLIGHT_FG: Color = Color::White;

    pub const RATING: Color = Color::LightYellow;

    pub const STEP_CURRENT: Color = Self::BRAND;
    pub const STEP_DONE: Color = Color::Green;
    pub const STEP_UPCOMING: Color = Color::DarkGray;
}

// =============================================================================
// NAMED STYLES
// =============================================================================

pub struct Styles;

impl Styles {
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    pub fn text_bold() -> Style {
        Self::text().add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Colors::BRAND)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_FOCUSED)
    }

    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_IDLE)
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Colors::SURFACE)
    }

    /// Highlighted row in tables and lists
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::HIGHLIGHT_FG)
            .bg(Colors::HIGHLIGHT_BG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn unselected() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Cursor entry in a list without a row highlight
    pub fn focused() -> Style {
        Self::title()
    }

    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Colors::WARNING)
    }

    pub fn price() -> Style {
        Style::default()
            .fg(Colors::MONEY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn rating() -> Style {
        Style::default().fg(Colors::RATING)
    }

    /// "Continue" / "Confirm" when the wizard can move on
    pub fn button_active() -> Style {
        Style::default()
            .fg(Colors::HIGHLIGHT_FG)
            .bg(Colors::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_inactive() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }
}

// =============================================================================
// STATE-DEPENDENT STYLES
// =============================================================================

pub struct Theme;

impl Theme {
    /// Badge colour for a booking status
    pub fn status_style(status: BookingStatus) -> Style {
        let color = match status {
            BookingStatus::Pending => Colors::WARNING,
            BookingStatus::Confirmed => Colors::SUCCESS,
            BookingStatus::Completed => Colors::INFO,
            BookingStatus::Cancelled => Colors::ERROR,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn availability_style(available: bool) -> Style {
        Style::default().fg(if available { Colors::SUCCESS } else { Colors::ERROR })
    }

    /// Step marker in the booking progress header. Done wins over current.
    pub fn step_style(completed: bool, active: bool) -> Style {
        match (completed, active) {
            (true, _) => Style::default().fg(Colors::STEP_DONE),
            (false, true) => Style::default()
                .fg(Colors::STEP_CURRENT)
                .add_modifier(Modifier::BOLD),
            (false, false) => Style::default().fg(Colors::STEP_UPCOMING),
        }
    }
}
