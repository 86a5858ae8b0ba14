//! Admin dashboard: headline stats, booking management, top drivers and
//! popular vehicles

use crate::app::AppState;
use crate::logic::analytics::{popular_vehicles, top_drivers};
use crate::logic::{find_driver, find_vehicle, DashboardStats};
use crate::theme::{Styles, Theme};
use crate::types::BookingStatus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table},
    Frame,
};
use strum::IntoEnumIterator;

/// Render the admin dashboard in specified area
pub fn render_admin_in_area(f: &mut Frame, state: &AppState, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6), Constraint::Length(7)])
        .split(area);

    let stats = DashboardStats::compute(
        &state.bookings,
        &state.fixtures.vehicles,
        &state.fixtures.drivers,
    );
    render_stat_cards(f, &stats, rows[0]);
    render_bookings_table(f, state, rows[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);
    render_top_drivers(f, state, bottom[0]);
    render_popular_vehicles(f, state, bottom[1]);
}

fn stat_card(title: &str, value: String, detail: String) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled(value, Styles::price())),
        Line::from(Span::styled(detail, Styles::text_muted())),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_inactive())
            .title(format!(" {} ", title)),
    )
}

fn render_stat_cards(f: &mut Frame, stats: &DashboardStats, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let pending = stats.count(BookingStatus::Pending);
    f.render_widget(
        stat_card(
            "Total Bookings",
            stats.total_bookings.to_string(),
            format!("{} pending", pending),
        ),
        cards[0],
    );
    f.render_widget(
        stat_card("Revenue", format!("${}", stats.revenue), "excl. cancelled".to_string()),
        cards[1],
    );
    f.render_widget(
        stat_card(
            "Available Cars",
            stats.available_vehicles.to_string(),
            format!("of {} in fleet", stats.total_vehicles),
        ),
        cards[2],
    );
    f.render_widget(
        stat_card(
            "Active Drivers",
            stats.active_drivers.to_string(),
            format!("of {} on roster", stats.total_drivers),
        ),
        cards[3],
    );
}

fn render_bookings_table(f: &mut Frame, state: &AppState, area: Rect) {
    let bookings = state.visible_bookings();
    let vehicles = &state.fixtures.vehicles;
    let drivers = &state.fixtures.drivers;

    let rows: Vec<Row> = bookings
        .iter()
        .enumerate()
        .map(|(index, booking)| {
            let vehicle = find_vehicle(vehicles, &booking.vehicle_id)
                .map_or_else(|| format!("#{}", booking.vehicle_id), |v| v.display_name());
            let driver = booking
                .driver_id
                .as_deref()
                .and_then(|id| find_driver(drivers, id))
                .map_or_else(|| "-".to_string(), |d| d.name.clone());
            let row = Row::new(vec![
                Cell::from(format!("#{}", booking.id)),
                Cell::from(booking.customer_name.clone()),
                Cell::from(vehicle),
                Cell::from(driver),
                Cell::from(format!("{} → {}", booking.start_date, booking.end_date)),
                Cell::from(Span::styled(format!("${}", booking.total_amount), Styles::price())),
                Cell::from(Span::styled(booking.status.to_string(), Theme::status_style(booking.status))),
            ]);
            if index == state.booking_selection {
                row.style(Styles::selected())
            } else {
                row
            }
        })
        .collect();

    let criteria = &state.booking_criteria;
    let mut title = format!(" Bookings ({}) ", bookings.len());
    if let Some(status) = criteria.status {
        title.push_str(&format!("· {} ", status));
    }
    if !criteria.search.is_empty() {
        title.push_str(&format!("· \"{}\" ", criteria.search));
    }

    let status_counts: Vec<Span> = BookingStatus::iter()
        .map(|status| {
            let count = state.bookings.iter().filter(|b| b.status == status).count();
            Span::styled(format!(" {} {} ", count, status), Theme::status_style(status))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Min(14),
            Constraint::Min(14),
            Constraint::Length(16),
            Constraint::Length(25),
            Constraint::Length(7),
            Constraint::Length(10),
        ],
    )
    .header(
        Row::new(["ID", "Customer", "Vehicle", "Driver", "Dates", "Total", "Status"])
            .style(Styles::title()),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .title(title)
            .title_bottom(Line::from(status_counts)),
    );
    f.render_widget(table, area);
}

fn render_top_drivers(f: &mut Frame, state: &AppState, area: Rect) {
    let items: Vec<ListItem> = top_drivers(&state.fixtures.drivers)
        .into_iter()
        .map(|driver| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<18}", driver.name), Styles::text()),
                Span::styled(format!("★ {:.1} ", driver.rating), Styles::rating()),
                Span::styled(format!("{} reviews", driver.reviews), Styles::text_muted()),
            ]))
        })
        .collect();
    f.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_inactive())
                .title(" Top Drivers "),
        ),
        area,
    );
}

fn render_popular_vehicles(f: &mut Frame, state: &AppState, area: Rect) {
    let items: Vec<ListItem> = popular_vehicles(&state.fixtures.vehicles)
        .iter()
        .map(|vehicle| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<18}", vehicle.display_name()), Styles::text()),
                Span::styled(format!("${}/day ", vehicle.price_per_day), Styles::price()),
                Span::styled(format!("★ {:.1}", vehicle.rating), Styles::rating()),
            ]))
        })
        .collect();
    f.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_inactive())
                .title(" Popular Cars "),
        ),
        area,
    );
}
