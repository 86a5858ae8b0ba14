//! Help overlay component
//!
//! Displays context-sensitive help in a centered floating window.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::app::AppMode;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the given mode
    pub fn new(mode: AppMode, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(mode);
        Self {
            content: Self::build_content(&sections, mode),
        }
    }

    fn build_content(sections: &[HelpSection], mode: AppMode) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = vec![
            Line::from(Span::styled("  DriveEasy Help  ", Styles::title())),
            Line::from(""),
            Line::from(vec![
                Span::styled("Current: ", Styles::text_muted()),
                Span::styled(mode.to_string(), Style::default().fg(Colors::BRAND)),
            ]),
            Line::from(""),
        ];

        for section in sections {
            lines.push(Line::from(Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )));
            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format!("{:<10}", key), Styles::focused()),
                    Span::styled(description.clone(), Styles::text()),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines
    }

    pub fn line_count(&self) -> usize {
        self.content.len()
    }

    /// Render the help overlay centered on `parent`
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let area = centered_rect(60, 70, parent);
        f.render_widget(Clear, area);

        let block = Block::default()
            .title(" Help ")
            .title_bottom(Line::from(" Press ? or Esc to close ").centered())
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .style(Styles::panel_bg());

        let paragraph = Paragraph::new(self.content.clone())
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }
}

/// `percent` of `len`, widened so large terminals cannot overflow
fn percent_of(len: u16, percent: u16) -> u16 {
    let scaled = u32::from(len) * u32::from(percent.min(100)) / 100;
    u16::try_from(scaled).unwrap_or(len)
}

/// A rect `percent_x` by `percent_y` of `parent`, centered in it
pub fn centered_rect(percent_x: u16, percent_y: u16, parent: Rect) -> Rect {
    let width = percent_of(parent.width, percent_x);
    let height = percent_of(parent.height, percent_y);
    Rect {
        x: parent.x + (parent.width - width) / 2,
        y: parent.y + (parent.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_parent() {
        let parent = Rect::new(0, 0, 100, 40);
        let area = centered_rect(60, 50, parent);
        assert_eq!(area, Rect::new(20, 10, 60, 20));
    }

    #[test]
    fn test_centered_rect_on_very_wide_terminal() {
        let parent = Rect { x: 0, y: 0, width: 1000, height: 40 };
        let area = centered_rect(60, 50, parent);
        assert_eq!(area.width, 600);
        assert_eq!(area.x, 200);
        assert_eq!(area.height, 20);

        let full = centered_rect(100, 100, Rect { x: 0, y: 0, width: u16::MAX, height: 10 });
        assert_eq!(full.width, u16::MAX);
        assert_eq!(full.x, 0);
    }

    #[test]
    fn test_overlay_lists_mode_bindings() {
        let ctx = KeybindingContext::new();
        let overlay = HelpOverlay::new(AppMode::Admin, &ctx);
        assert!(overlay.line_count() > 10);
    }
}
