//! Catalog screens: vehicle and driver listings with their filter panels

use crate::app::AppState;
use crate::logic::{
    available_vehicles, recommended_drivers, DriverCriteria, PriceRange, VehicleCriteria,
    RECOMMENDED_DRIVER_LIMIT,
};
use crate::model::{DriverProfile, Vehicle};
use crate::theme::{Styles, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, Wrap},
    Frame,
};

/// Width of the filter panel on both catalog screens
const FILTER_PANEL_WIDTH: u16 = 32;

fn split_panels(area: Rect) -> (Rect, Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(FILTER_PANEL_WIDTH), Constraint::Min(20)])
        .split(area);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(8)])
        .split(columns[1]);
    (columns[0], right[0], right[1])
}

fn filter_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<13}", label), Styles::text_muted()),
        Span::styled(value, Styles::text()),
    ])
}

fn or_all<T: ToString>(value: Option<&T>) -> String {
    value.map_or_else(|| "All".to_string(), ToString::to_string)
}

fn range_text(range: Option<PriceRange>, limit: PriceRange, unit: &str) -> String {
    let range = range.unwrap_or(limit);
    format!("${} - ${}{}", range.min, range.max, unit)
}

fn search_text(search: &str) -> String {
    if search.is_empty() {
        "-".to_string()
    } else {
        format!("\"{}\"", search)
    }
}

fn filter_panel(lines: Vec<Line<'static>>, count: usize, narrowed: bool) -> Paragraph<'static> {
    let mut lines = lines;
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("{} results", count),
        Styles::focused(),
    )));
    if narrowed {
        lines.push(Line::from(Span::styled("r to reset filters", Styles::text_muted())));
    }
    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_inactive())
                .title(" Filters "),
        )
        .wrap(Wrap { trim: true })
}

fn row_style(index: usize, selected: usize) -> ratatui::style::Style {
    if index == selected {
        Styles::selected()
    } else {
        Styles::text()
    }
}

fn empty_message(f: &mut Frame, area: Rect, what: &str) {
    let message = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!("No {} match your filters", what), Styles::warning())),
        Line::from(Span::styled("Press r to reset", Styles::text_muted())),
    ])
    .alignment(ratatui::layout::Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(Styles::border_active()));
    f.render_widget(message, area);
}

// ============================================================================
// Vehicles
// ============================================================================

/// Render the vehicle catalog in specified area
pub fn render_cars_in_area(f: &mut Frame, state: &AppState, area: Rect) {
    let (filter_area, list_area, detail_area) = split_panels(area);
    let criteria = &state.vehicle_criteria;
    let vehicles = state.visible_vehicles();

    let lines = vec![
        filter_line("Search", search_text(&criteria.search)),
        filter_line("Type (c)", or_all(criteria.category.as_ref())),
        filter_line(
            "Price/day",
            range_text(criteria.price_range, VehicleCriteria::PRICE_LIMIT, ""),
        ),
        filter_line("Gearbox (t)", or_all(criteria.transmission.as_ref())),
        filter_line("Fuel (f)", or_all(criteria.fuel_type.as_ref())),
        filter_line(
            "Available (a)",
            if criteria.available_only { "Only" } else { "Any" }.to_string(),
        ),
        filter_line(
            "Sort (s)",
            criteria.sort.map_or("Catalog order", |k| k.label()).to_string(),
        ),
    ];
    f.render_widget(
        filter_panel(lines, vehicles.len(), criteria.is_narrowed()),
        filter_area,
    );

    if vehicles.is_empty() {
        empty_message(f, list_area, "cars");
        f.render_widget(Block::default().borders(Borders::ALL), detail_area);
        return;
    }

    let rows: Vec<Row> = vehicles
        .iter()
        .enumerate()
        .map(|(index, vehicle)| vehicle_row(vehicle).style(row_style(index, state.vehicle_selection)))
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Min(18),
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(9),
            Constraint::Length(14),
        ],
    )
    .header(
        Row::new(["", "Vehicle", "Year", "Type", "Gearbox", "Price", "Rating"])
            .style(Styles::title()),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .title(format!(" {} cars ", vehicles.len())),
    );
    f.render_widget(table, list_area);

    if let Some(vehicle) = vehicles.get(state.vehicle_selection) {
        render_vehicle_detail(f, state, vehicle, detail_area);
    }
}

fn vehicle_row(vehicle: &Vehicle) -> Row<'static> {
    Row::new(vec![
        Cell::from(vehicle.category.badge()),
        Cell::from(vehicle.display_name()),
        Cell::from(vehicle.year.to_string()),
        Cell::from(vehicle.category.to_string()),
        Cell::from(vehicle.transmission.to_string()),
        Cell::from(Span::styled(format!("${}/day", vehicle.price_per_day), Styles::price())),
        Cell::from(Span::styled(
            format!("★ {:.1} ({})", vehicle.rating, vehicle.reviews),
            Styles::rating(),
        )),
    ])
}

/// Detail panel split: description on the left, cross-recommendations on the right
fn split_detail(area: Rect) -> (Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(34)])
        .split(area);
    (columns[0], columns[1])
}

fn booking_hint(available: bool, action: &'static str) -> Line<'static> {
    if available {
        Line::from(Span::styled(action, Styles::focused()))
    } else {
        Line::from(Span::styled("Unavailable for booking", Styles::warning()))
    }
}

fn render_vehicle_detail(f: &mut Frame, state: &AppState, vehicle: &Vehicle, area: Rect) {
    let (info_area, drivers_area) = split_detail(area);
    let lines = vec![
        Line::from(vec![
            Span::styled(vehicle.display_name(), Styles::text_bold()),
            Span::raw("  "),
            Span::styled(
                if vehicle.available { "Available" } else { "Unavailable" },
                Theme::availability_style(vehicle.available),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "{} seats · {} · {}",
                vehicle.seats, vehicle.transmission, vehicle.fuel_type
            ),
            Styles::text_secondary(),
        )),
        Line::from(Span::styled(vehicle.features.join(", "), Styles::text_muted())),
        booking_hint(vehicle.available, "Enter to book this car"),
    ];
    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(Styles::border_inactive()));
    f.render_widget(detail, info_area);

    let items: Vec<ListItem> = recommended_drivers(&state.fixtures.drivers, None)
        .into_iter()
        .take(RECOMMENDED_DRIVER_LIMIT)
        .map(|driver| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<16}", driver.name), Styles::text()),
                Span::styled(format!("★{:.1} ", driver.rating), Styles::rating()),
                Span::styled(format!("${}/h", driver.price_per_hour), Styles::price()),
            ]))
        })
        .collect();
    let drivers = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_inactive())
            .title(" Available Drivers "),
    );
    f.render_widget(drivers, drivers_area);
}

// ============================================================================
// Drivers
// ============================================================================

/// Render the driver catalog in specified area
pub fn render_drivers_in_area(f: &mut Frame, state: &AppState, area: Rect) {
    let (filter_area, list_area, detail_area) = split_panels(area);
    let criteria = &state.driver_criteria;
    let drivers = state.visible_drivers();

    let lines = vec![
        filter_line("Search", search_text(&criteria.search)),
        filter_line("Language (l)", or_all(criteria.language.as_ref())),
        filter_line("Specialty (p)", or_all(criteria.specialty.as_ref())),
        filter_line("License (c)", or_all(criteria.license.as_ref())),
        filter_line(
            "Price/hour",
            range_text(criteria.price_range, DriverCriteria::PRICE_LIMIT, "/h"),
        ),
        filter_line(
            "Experience(e)",
            criteria
                .min_experience
                .map_or_else(|| "Any".to_string(), |years| format!("{}+ years", years)),
        ),
        filter_line(
            "Available (a)",
            if criteria.available_only { "Only" } else { "Any" }.to_string(),
        ),
        filter_line(
            "Sort (s)",
            criteria.sort.map_or("Catalog order", |k| k.label()).to_string(),
        ),
    ];
    f.render_widget(
        filter_panel(lines, drivers.len(), criteria.is_narrowed()),
        filter_area,
    );

    if drivers.is_empty() {
        empty_message(f, list_area, "drivers");
        f.render_widget(Block::default().borders(Borders::ALL), detail_area);
        return;
    }

    let rows: Vec<Row> = drivers
        .iter()
        .enumerate()
        .map(|(index, driver)| driver_row(driver).style(row_style(index, state.driver_selection)))
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(16),
            Constraint::Length(8),
            Constraint::Length(9),
            Constraint::Length(7),
            Constraint::Length(14),
        ],
    )
    .header(
        Row::new(["Driver", "License", "Exp.", "Rate", "Rating"]).style(Styles::title()),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .title(format!(" {} drivers ", drivers.len())),
    );
    f.render_widget(table, list_area);

    if let Some(driver) = drivers.get(state.driver_selection) {
        render_driver_detail(f, state, driver, detail_area);
    }
}

fn driver_row(driver: &DriverProfile) -> Row<'static> {
    Row::new(vec![
        Cell::from(driver.name.clone()),
        Cell::from(driver.license.clone()),
        Cell::from(format!("{} yrs", driver.experience)),
        Cell::from(Span::styled(format!("${}/h", driver.price_per_hour), Styles::price())),
        Cell::from(Span::styled(
            format!("★ {:.1} ({})", driver.rating, driver.reviews),
            Styles::rating(),
        )),
    ])
}

fn render_driver_detail(f: &mut Frame, state: &AppState, driver: &DriverProfile, area: Rect) {
    let (info_area, cars_area) = split_detail(area);
    let lines = vec![
        Line::from(vec![
            Span::styled(driver.name.clone(), Styles::text_bold()),
            Span::styled(format!("  age {}", driver.age), Styles::text_muted()),
            Span::raw("  "),
            Span::styled(
                if driver.available { "Available" } else { "Busy" },
                Theme::availability_style(driver.available),
            ),
        ]),
        Line::from(vec![
            Span::styled("Speaks ", Styles::text_muted()),
            Span::styled(driver.languages.join(", "), Styles::text_secondary()),
        ]),
        Line::from(vec![
            Span::styled("Specialties ", Styles::text_muted()),
            Span::styled(driver.specialties.join(", "), Styles::text_secondary()),
        ]),
        booking_hint(driver.available, "Enter to book with this driver"),
    ];
    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(Styles::border_inactive()));
    f.render_widget(detail, info_area);

    let items: Vec<ListItem> = available_vehicles(&state.fixtures.vehicles)
        .into_iter()
        .map(|vehicle| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<18}", vehicle.display_name()), Styles::text()),
                Span::styled(format!("${}/day", vehicle.price_per_day), Styles::price()),
            ]))
        })
        .collect();
    let cars = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_inactive())
            .title(" Available Cars "),
    );
    f.render_widget(cars, cars_area);
}
