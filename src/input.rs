//! Input handling module
//!
//! Handles the modal dialogs used to edit text fields and pick from option
//! lists. While a dialog is open it receives every key.

use crossterm::event::{KeyCode, KeyEvent};

/// Types of input dialogs
#[derive(Debug, Clone, PartialEq)]
pub enum InputType {
    /// Free text, e.g. search terms and booking form fields
    TextInput {
        field_name: String,
        current_value: String,
        placeholder: String,
    },
    /// Selection from predefined options
    Selection {
        field_name: String,
        options: Vec<String>,
        selected_index: usize,
    },
}

/// Input dialog state
#[derive(Debug, Clone)]
pub struct InputDialog {
    /// Type of input dialog
    pub input_type: InputType,
    /// Title of the dialog
    pub title: String,
    /// Instructions for the user
    pub instructions: String,
}

impl InputDialog {
    /// Create a new input dialog
    pub fn new(input_type: InputType, title: String, instructions: String) -> Self {
        Self {
            input_type,
            title,
            instructions,
        }
    }

    /// Handle keyboard input for the dialog
    pub fn handle_input(&mut self, key_event: KeyEvent) -> InputResult {
        match &mut self.input_type {
            InputType::TextInput { current_value, .. } => match key_event.code {
                KeyCode::Enter => return InputResult::Confirm(current_value.clone()),
                KeyCode::Esc => return InputResult::Cancel,
                KeyCode::Backspace => {
                    current_value.pop();
                }
                KeyCode::Char(c) => current_value.push(c),
                _ => {}
            },
            InputType::Selection {
                options,
                selected_index,
                ..
            } => match key_event.code {
                KeyCode::Up => *selected_index = selected_index.saturating_sub(1),
                KeyCode::Down => {
                    if *selected_index + 1 < options.len() {
                        *selected_index += 1;
                    }
                }
                KeyCode::Home => *selected_index = 0,
                KeyCode::End => *selected_index = options.len().saturating_sub(1),
                KeyCode::Enter => {
                    if let Some(option) = options.get(*selected_index) {
                        return InputResult::Confirm(option.clone());
                    }
                    return InputResult::Cancel;
                }
                KeyCode::Esc => return InputResult::Cancel,
                _ => {}
            },
        }
        InputResult::Continue
    }

    /// Get the current display value for the input
    pub fn get_display_value(&self) -> String {
        match &self.input_type {
            InputType::TextInput {
                current_value,
                placeholder,
                ..
            } => {
                if current_value.is_empty() {
                    placeholder.clone()
                } else {
                    current_value.clone()
                }
            }
            InputType::Selection {
                options,
                selected_index,
                ..
            } => options.get(*selected_index).cloned().unwrap_or_default(),
        }
    }
}

/// Result of input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    /// User confirmed with a value
    Confirm(String),
    /// User cancelled
    Cancel,
    /// Continue processing input
    Continue,
}

/// Input handler for managing the active dialog
#[derive(Debug, Default)]
pub struct InputHandler {
    /// Current active dialog
    pub current_dialog: Option<InputDialog>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a text input dialog
    pub fn start_text_input(&mut self, field_name: &str, current_value: String, placeholder: &str) {
        let input_type = InputType::TextInput {
            field_name: field_name.to_string(),
            current_value,
            placeholder: placeholder.to_string(),
        };

        self.current_dialog = Some(InputDialog::new(
            input_type,
            format!("Edit {}", field_name),
            "Type the value and press Enter to confirm, Esc to cancel".to_string(),
        ));
    }

    /// Start a selection dialog with `current_value` preselected
    pub fn start_selection(&mut self, field_name: &str, options: Vec<String>, current_value: &str) {
        let selected_index = options
            .iter()
            .position(|opt| opt == current_value)
            .unwrap_or(0);

        let input_type = InputType::Selection {
            field_name: field_name.to_string(),
            options,
            selected_index,
        };

        self.current_dialog = Some(InputDialog::new(
            input_type,
            format!("Select {}", field_name),
            "Use ↑↓ to navigate, Enter to select, Esc to cancel".to_string(),
        ));
    }

    /// Handle keyboard input for the current dialog.
    ///
    /// Returns the confirmed value once; the dialog closes on confirm and on
    /// cancel.
    pub fn handle_input(&mut self, key_event: KeyEvent) -> Option<String> {
        let dialog = self.current_dialog.as_mut()?;
        match dialog.handle_input(key_event) {
            InputResult::Confirm(value) => {
                self.current_dialog = None;
                Some(value)
            }
            InputResult::Cancel => {
                self.current_dialog = None;
                None
            }
            InputResult::Continue => None,
        }
    }

    /// Check if a dialog is currently active
    pub fn is_dialog_active(&self) -> bool {
        self.current_dialog.is_some()
    }

    pub fn cancel(&mut self) {
        self.current_dialog = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_text_input_edit_and_confirm() {
        let mut handler = InputHandler::new();
        handler.start_text_input("Search", "ab".to_string(), "Search...");
        assert!(handler.is_dialog_active());

        assert_eq!(handler.handle_input(key(KeyCode::Backspace)), None);
        assert_eq!(handler.handle_input(key(KeyCode::Char('z'))), None);
        assert_eq!(handler.handle_input(key(KeyCode::Enter)), Some("az".to_string()));
        assert!(!handler.is_dialog_active());
    }

    #[test]
    fn test_text_input_cancel_discards() {
        let mut handler = InputHandler::new();
        handler.start_text_input("Search", String::new(), "Search...");
        handler.handle_input(key(KeyCode::Char('x')));
        assert_eq!(handler.handle_input(key(KeyCode::Esc)), None);
        assert!(!handler.is_dialog_active());
    }

    #[test]
    fn test_placeholder_shown_when_empty() {
        let mut handler = InputHandler::new();
        handler.start_text_input("Email", String::new(), "john@example.com");
        let dialog = handler.current_dialog.as_ref().unwrap();
        assert_eq!(dialog.get_display_value(), "john@example.com");
    }

    #[test]
    fn test_selection_preselects_and_clamps() {
        let mut handler = InputHandler::new();
        let options = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        handler.start_selection("Sort", options, "b");

        handler.handle_input(key(KeyCode::Down));
        handler.handle_input(key(KeyCode::Down));
        assert_eq!(handler.handle_input(key(KeyCode::Enter)), Some("c".to_string()));

        let options = vec!["a".to_string(), "b".to_string()];
        handler.start_selection("Sort", options, "missing");
        handler.handle_input(key(KeyCode::Up));
        assert_eq!(handler.handle_input(key(KeyCode::Enter)), Some("a".to_string()));
    }
}
