//! Title bar, status line and navigation bar

use crate::app::{AppMode, AppState};
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Brand line plus the current screen's name
pub fn render_title_bar(f: &mut Frame, state: &AppState, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let mut spans = vec![Span::styled(" 🚗 DriveEasy ", Styles::title())];
    if state.mode != AppMode::Home {
        spans.push(Span::styled("› ", Styles::text_muted()));
        spans.push(Span::styled(state.mode.to_string(), Styles::text_bold()));
    }

    let title = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_active()),
        )
        .alignment(Alignment::Left);
    f.render_widget(title, area);
}

/// One-line feedback from the last action
pub fn render_status_line(f: &mut Frame, state: &AppState, area: Rect) {
    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(state.status_message.clone(), Styles::text_secondary()),
    ]));
    f.render_widget(status, area);
}

/// Render the navigation bar
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let mut spans = Vec::new();
    for item in keybinding_ctx.get_nav_items(state.mode) {
        spans.push(Span::styled(
            format!(" {} ", item.key_display),
            Style::default().fg(Colors::HIGHLIGHT_FG).bg(Colors::BRAND),
        ));
        spans.push(Span::styled(
            format!(" {}  ", item.action_label),
            Styles::nav_hint(),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let help_overlay = HelpOverlay::new(state.mode, keybinding_ctx);
    help_overlay.render(f, f.area());
}
