//! Home menu rendering

use crate::app::{AppMode, AppState};
use crate::logic::DashboardStats;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Render the home menu in specified area
pub fn render_home_in_area(f: &mut Frame, state: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Tagline
            Constraint::Min(6),    // Menu
            Constraint::Length(3), // Fleet summary
        ])
        .split(area);

    let tagline = Paragraph::new(vec![
        Line::from(Span::styled("Premium Car Rental", Styles::title())),
        Line::from(Span::styled(AppMode::Home.description(), Styles::text_secondary())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(tagline, chunks[0]);

    let menu_items: Vec<ListItem> = AppMode::MENU
        .iter()
        .enumerate()
        .map(|(index, mode)| {
            let selected = index == state.home_selection;
            let prefix = if selected { "▸ " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(Colors::BRAND)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Colors::FG_PRIMARY)
            };
            ListItem::new(vec![
                Line::from(Span::styled(format!("{}{}", prefix, mode), style)),
                Line::from(Span::styled(
                    format!("    {}", mode.description()),
                    Styles::text_muted(),
                )),
            ])
        })
        .collect();

    let menu = List::new(menu_items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .title(" Main Menu "),
    );
    f.render_widget(menu, chunks[1]);

    let stats = DashboardStats::compute(
        &state.bookings,
        &state.fixtures.vehicles,
        &state.fixtures.drivers,
    );
    let summary = Paragraph::new(Line::from(vec![
        Span::styled(format!("{} ", stats.total_vehicles), Styles::price()),
        Span::styled("vehicles   ", Styles::text_secondary()),
        Span::styled(format!("{} ", stats.total_drivers), Styles::price()),
        Span::styled("professional drivers   ", Styles::text_secondary()),
        Span::styled(format!("{:.1}★ ", stats.average_rating), Styles::rating()),
        Span::styled("average rating", Styles::text_secondary()),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP).border_style(Styles::border_inactive()));
    f.render_widget(summary, chunks[2]);
}
