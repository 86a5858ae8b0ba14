//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current
//! application mode. The registry drives the nav bar and the help overlay;
//! the key dispatch itself lives in `App`.

use crate::app::AppMode;
use crossterm::event::KeyCode;
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    Select,
    Back,
    Quit,
    Help,
    Search,
    Sort,
    CycleFilter,
    ToggleAvailable,
    AdjustPrice,
    ResetFilters,
    Book,
    Continue,
    ToggleDriver,
    ServiceType,
    AdjustHours,
    ConfirmBooking,
    CancelBooking,
    CompleteBooking,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
        ];

        self.mode_bindings.insert(
            AppMode::Home,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Navigate up"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Navigate down"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Open"),
            ],
        );

        // Both catalogs share most keys; filter cycling differs per screen
        let catalog = |filters: &[(char, &str)], price_step: &str| {
            let mut bindings = vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous entry"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next entry"),
                Keybinding::new(KeyCode::Enter, KeyAction::Book, "Enter", "Book selected"),
                Keybinding::new(KeyCode::Char('/'), KeyAction::Search, "/", "Search"),
                Keybinding::new(KeyCode::Char('s'), KeyAction::Sort, "S", "Sort by"),
                Keybinding::new(KeyCode::Char('a'), KeyAction::ToggleAvailable, "A", "Available only"),
                Keybinding::new(KeyCode::Char(']'), KeyAction::AdjustPrice, "[ ]", price_step),
                Keybinding::new(KeyCode::Char('}'), KeyAction::AdjustPrice, "{ }", "Min price"),
                Keybinding::new(KeyCode::Char('r'), KeyAction::ResetFilters, "R", "Reset filters"),
                Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Home"),
            ];
            for (key, label) in filters {
                bindings.push(Keybinding::new(
                    KeyCode::Char(*key),
                    KeyAction::CycleFilter,
                    &key.to_ascii_uppercase().to_string(),
                    label,
                ));
            }
            bindings
        };

        self.mode_bindings.insert(
            AppMode::Cars,
            catalog(
                &[('c', "Category"), ('t', "Transmission"), ('f', "Fuel type")],
                "Max price/day",
            ),
        );
        self.mode_bindings.insert(
            AppMode::Drivers,
            catalog(
                &[
                    ('l', "Language"),
                    ('p', "Specialty"),
                    ('c', "License"),
                    ('e', "Min experience"),
                ],
                "Max price/hour",
            ),
        );

        self.mode_bindings.insert(
            AppMode::Booking,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous item"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next item"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Select / edit"),
                Keybinding::new(KeyCode::Char(' '), KeyAction::Continue, "Space", "Continue"),
                Keybinding::new(KeyCode::Char('d'), KeyAction::ToggleDriver, "D", "Driver on/off"),
                Keybinding::new(KeyCode::Char('n'), KeyAction::ToggleDriver, "N", "Next driver"),
                Keybinding::new(KeyCode::Char('v'), KeyAction::ServiceType, "V", "Service type"),
                Keybinding::new(KeyCode::Char('+'), KeyAction::AdjustHours, "+ -", "Driver hours"),
                Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back"),
            ],
        );

        self.mode_bindings.insert(
            AppMode::Admin,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous booking"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next booking"),
                Keybinding::new(KeyCode::Char('/'), KeyAction::Search, "/", "Search"),
                Keybinding::new(KeyCode::Char('f'), KeyAction::CycleFilter, "F", "Status filter"),
                Keybinding::new(KeyCode::Char('c'), KeyAction::ConfirmBooking, "C", "Confirm"),
                Keybinding::new(KeyCode::Char('x'), KeyAction::CancelBooking, "X", "Cancel"),
                Keybinding::new(KeyCode::Char('m'), KeyAction::CompleteBooking, "M", "Mark completed"),
                Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Home"),
            ],
        );
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();
        if let Some(mode_bindings) = self.mode_bindings.get(&mode) {
            bindings.extend(mode_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());
        bindings
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: AppMode) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(mode);

        let priority_actions = match mode {
            AppMode::Home => vec![
                KeyAction::NavigateUp,
                KeyAction::Select,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::Cars | AppMode::Drivers => vec![
                KeyAction::NavigateUp,
                KeyAction::Book,
                KeyAction::Search,
                KeyAction::Sort,
                KeyAction::Back,
                KeyAction::Help,
            ],
            AppMode::Booking => vec![
                KeyAction::NavigateUp,
                KeyAction::Select,
                KeyAction::Continue,
                KeyAction::Back,
                KeyAction::Help,
            ],
            AppMode::Admin => vec![
                KeyAction::NavigateUp,
                KeyAction::ConfirmBooking,
                KeyAction::CancelBooking,
                KeyAction::CompleteBooking,
                KeyAction::Back,
                KeyAction::Help,
            ],
        };

        let mut items: Vec<NavBarItem> = Vec::new();
        for action in priority_actions {
            if action == KeyAction::NavigateUp {
                // Up/Down collapse into one item
                items.push(NavBarItem {
                    key_display: "Up/Dn".to_string(),
                    action_label: "Navigate".to_string(),
                });
            } else if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                items.push(NavBarItem {
                    key_display: binding.display.clone(),
                    action_label: binding.description.clone(),
                });
            }
        }
        items
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: AppMode) -> Vec<HelpSection> {
        let bindings = self.get_bindings(mode);
        let section = |title: &str, keep: fn(&KeyAction) -> bool| HelpSection {
            title: title.to_string(),
            items: bindings
                .iter()
                .filter(|b| keep(&b.action))
                .map(|b| (b.display.clone(), b.description.clone()))
                .collect(),
        };

        [
            section("Navigation", |a| {
                matches!(a, KeyAction::NavigateUp | KeyAction::NavigateDown)
            }),
            section("Filters", |a| {
                matches!(
                    a,
                    KeyAction::Search
                        | KeyAction::Sort
                        | KeyAction::CycleFilter
                        | KeyAction::ToggleAvailable
                        | KeyAction::AdjustPrice
                        | KeyAction::ResetFilters
                )
            }),
            section("Actions", |a| {
                matches!(
                    a,
                    KeyAction::Select
                        | KeyAction::Book
                        | KeyAction::Continue
                        | KeyAction::ToggleDriver
                        | KeyAction::ServiceType
                        | KeyAction::AdjustHours
                        | KeyAction::ConfirmBooking
                        | KeyAction::CancelBooking
                        | KeyAction::CompleteBooking
                )
            }),
            section("General", |a| {
                matches!(a, KeyAction::Back | KeyAction::Help | KeyAction::Quit)
            }),
        ]
        .into_iter()
        .filter(|s| !s.items.is_empty())
        .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}
