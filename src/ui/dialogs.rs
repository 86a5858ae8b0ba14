//! Dialog rendering module
//!
//! Draws the active text or selection dialog over the current screen.

use crate::components::help_overlay::centered_rect;
use crate::input::{InputHandler, InputType};
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Render the input dialog
pub fn render_input_dialog(f: &mut Frame, input_handler: &InputHandler) {
    let Some(dialog) = &input_handler.current_dialog else {
        return;
    };

    let dialog_area = centered_rect(60, 50, f.area());
    f.render_widget(Clear, dialog_area);

    let dialog_bg = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border_active())
        .title(format!(" {} ", dialog.title))
        .style(Styles::panel_bg());
    let inner = dialog_bg.inner(dialog_area);
    f.render_widget(dialog_bg, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Instructions
            Constraint::Min(3),    // Content
        ])
        .split(inner);

    let instructions = Paragraph::new(dialog.instructions.clone())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Styles::text_secondary());
    f.render_widget(instructions, chunks[0]);

    match &dialog.input_type {
        InputType::TextInput {
            field_name,
            current_value,
            ..
        } => {
            // Placeholder shows muted until the user types
            let style = if current_value.is_empty() {
                Styles::text_muted()
            } else {
                Style::default().fg(Colors::SUCCESS)
            };
            let input_widget = Paragraph::new(format!("{}▏", dialog.get_display_value()))
                .style(style)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!(" {} ", field_name)),
                );
            f.render_widget(input_widget, chunks[1]);
        }
        InputType::Selection {
            field_name,
            options,
            selected_index,
        } => {
            let items: Vec<ListItem> = options
                .iter()
                .enumerate()
                .map(|(index, option)| {
                    if index == *selected_index {
                        ListItem::new(format!("▸ {}", option)).style(Styles::selected())
                    } else {
                        ListItem::new(format!("  {}", option)).style(Styles::unselected())
                    }
                })
                .collect();

            let list = List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", field_name)),
            );
            f.render_widget(list, chunks[1]);
        }
    }
}
