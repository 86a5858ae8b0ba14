//! Reusable UI components
//!
//! - `keybindings` - per-mode key registry feeding the nav bar and help
//! - `help_overlay` - floating help window

pub mod help_overlay;
pub mod keybindings;
