//! Booking wizard rendering
//!
//! Left: the current step. Right: the running price summary, recomputed from
//! the draft on every frame.

use crate::app::{AppState, FormField};
use crate::booking_state::{BookingConfirmation, BookingStep, BookingWizard};
use crate::logic::{PriceBreakdown, RECOMMENDED_DRIVER_LIMIT, recommended_drivers};
use crate::model::{DriverProfile, Vehicle};
use crate::theme::{Styles, Theme};
use crate::types::DriverServiceType;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Render the booking wizard in specified area
pub fn render_booking_in_area(f: &mut Frame, state: &AppState, area: Rect) {
    let wizard = &state.wizard;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Step progress
            Constraint::Min(8),    // Step content
            Constraint::Length(3), // Buttons
        ])
        .split(area);

    render_step_progress(f, wizard.current_step(), rows[0]);

    if wizard.current_step() == BookingStep::Confirmation {
        if let Some(confirmation) = &state.confirmation {
            render_confirmation(f, confirmation, rows[1]);
        }
        render_buttons(f, wizard, rows[2]);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(36)])
        .split(rows[1]);

    match wizard.current_step() {
        BookingStep::SelectServices => render_select_services(f, state, columns[0]),
        BookingStep::BookingDetails => render_details_form(f, state, columns[0]),
        BookingStep::Payment => render_payment(f, wizard, columns[0]),
        BookingStep::Confirmation => {}
    }

    render_price_summary(
        f,
        &wizard.quote(),
        wizard.selected_vehicle(),
        wizard.booked_driver(),
        columns[1],
    );
    render_buttons(f, wizard, rows[2]);
}

fn render_step_progress(f: &mut Frame, current: BookingStep, area: Rect) {
    let mut spans = Vec::new();
    for step in BookingStep::all_steps() {
        let completed = step.number() < current.number() || current.is_terminal();
        let active = *step == current;
        let marker = if completed { "✓".to_string() } else { step.number().to_string() };
        spans.push(Span::styled(
            format!(" ({}) {} ", marker, step.title()),
            Theme::step_style(completed, active),
        ));
        if !step.is_terminal() {
            spans.push(Span::styled("──", Styles::text_muted()));
        }
    }

    let progress = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM).border_style(Styles::border_inactive()));
    f.render_widget(progress, area);
}

fn render_buttons(f: &mut Frame, wizard: &BookingWizard, area: Rect) {
    let step = wizard.current_step();
    let back = if wizard.can_go_back() { "[Esc] Back" } else { "[Esc] Home" };
    let forward = match step {
        BookingStep::Payment => " [Space] Complete Booking ",
        BookingStep::Confirmation => " [Enter] Done ",
        _ => " [Space] Continue ",
    };
    let forward_style = if wizard.can_advance() || step.is_terminal() {
        Styles::button_active()
    } else {
        Styles::button_inactive()
    };

    let line = Line::from(vec![
        Span::styled(back, Styles::text_secondary()),
        Span::raw("    "),
        Span::styled(forward, forward_style),
    ]);
    f.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Right)
            .block(Block::default().borders(Borders::TOP).border_style(Styles::border_inactive())),
        area,
    );
}

// ============================================================================
// Step 1: Select Services
// ============================================================================

fn render_select_services(f: &mut Frame, state: &AppState, area: Rect) {
    let wizard = &state.wizard;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(8)])
        .split(area);

    let selected_id = wizard.selected_vehicle().map(|v| v.id.as_str());
    let items: Vec<ListItem> = state
        .bookable_vehicles()
        .into_iter()
        .enumerate()
        .map(|(index, vehicle)| {
            let chosen = Some(vehicle.id.as_str()) == selected_id;
            let marker = if chosen { "● " } else { "○ " };
            let style = if index == state.wizard_cursor {
                Styles::selected()
            } else if chosen {
                Styles::success()
            } else {
                Styles::text()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}{} {}", marker, vehicle.category.badge(), vehicle.display_name()), style),
                Span::styled(format!("  ${}/day", vehicle.price_per_day), Styles::price()),
            ]))
        })
        .collect();

    let vehicles = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .title(" Choose Vehicle (Enter) "),
    );
    f.render_widget(vehicles, chunks[0]);

    render_driver_options(f, state, chunks[1]);
}

fn render_driver_options(f: &mut Frame, state: &AppState, area: Rect) {
    let wizard = &state.wizard;
    let draft = wizard.draft();
    let check = if draft.driver_service { "[x]" } else { "[ ]" };

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{} ", check), Styles::focused()),
        Span::styled("I need a professional driver (d)", Styles::text()),
    ])];

    if draft.driver_service {
        let driver = wizard
            .selected_driver()
            .map_or_else(|| "None selected".to_string(), |d| format!("{} (${}/h)", d.name, d.price_per_hour));
        lines.push(Line::from(vec![
            Span::styled("    Driver (n):       ", Styles::text_muted()),
            Span::styled(driver, Styles::text_bold()),
        ]));

        let service = draft
            .service_type
            .map_or_else(|| "Unknown".to_string(), |t| t.label().to_string());
        lines.push(Line::from(vec![
            Span::styled("    Service type (v): ", Styles::text_muted()),
            Span::styled(service, Styles::text()),
        ]));

        if draft.service_type == Some(DriverServiceType::Hourly) {
            lines.push(Line::from(vec![
                Span::styled("    Hours (+/-):      ", Styles::text_muted()),
                Span::styled(draft.driver_hours.to_string(), Styles::text()),
            ]));
        }

        let others = recommended_drivers(
            &state.fixtures.drivers,
            wizard.selected_driver().map(|d| d.id.as_str()),
        );
        let names: Vec<&str> = others
            .iter()
            .take(RECOMMENDED_DRIVER_LIMIT)
            .map(|d| d.name.as_str())
            .collect();
        if !names.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("    Also available:   ", Styles::text_muted()),
                Span::styled(names.join(", "), Styles::text_secondary()),
            ]));
        }
    }

    let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_inactive())
            .title(" Driver Service "),
    );
    f.render_widget(panel, area);
}

// ============================================================================
// Step 2: Booking Details
// ============================================================================

fn render_details_form(f: &mut Frame, state: &AppState, area: Rect) {
    let draft = state.wizard.draft();
    let missing = draft.missing_details();

    let items: Vec<ListItem> = FormField::ALL
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let value = field.value(draft);
            let is_missing = field.required().is_some_and(|r| missing.contains(&r));
            let required_mark = if field.required().is_some() { "*" } else { " " };

            let value_span = if value.is_empty() {
                Span::styled(field.placeholder(), Styles::text_muted())
            } else {
                Span::styled(value.to_string(), Styles::text())
            };
            let label_style = if index == state.wizard_cursor {
                Styles::selected()
            } else if is_missing {
                Styles::warning()
            } else {
                Styles::text_secondary()
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{}{:<18}", required_mark, field.label()), label_style),
                Span::raw(" "),
                value_span,
            ]))
        })
        .collect();

    let title = if missing.is_empty() {
        " Booking Details ".to_string()
    } else {
        format!(" Booking Details ({} required left) ", missing.len())
    };
    let form = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .title(title),
    );
    f.render_widget(form, area);
}

// ============================================================================
// Step 3: Payment
// ============================================================================

fn render_payment(f: &mut Frame, wizard: &BookingWizard, area: Rect) {
    let draft = wizard.draft();
    let vehicle = wizard
        .selected_vehicle()
        .map_or_else(|| "-".to_string(), Vehicle::display_name);

    let mut lines = vec![
        Line::from(Span::styled("Review your booking", Styles::title())),
        Line::from(""),
        review_line("Vehicle", vehicle),
    ];
    if let Some(driver) = wizard.booked_driver() {
        lines.push(review_line("Driver", driver.name.clone()));
    }
    lines.extend([
        review_line(
            "Pickup",
            format!("{} {} at {}", draft.pickup_date, draft.pickup_time, draft.pickup_location),
        ),
        review_line(
            "Return",
            format!(
                "{} {} at {}",
                draft.return_date,
                draft.return_time,
                if draft.dropoff_location.is_empty() { &draft.pickup_location } else { &draft.dropoff_location }
            ),
        ),
        review_line("Customer", draft.customer_name.clone()),
        review_line("Contact", format!("{} · {}", draft.customer_email, draft.customer_phone)),
        Line::from(""),
        Line::from(Span::styled(
            "Payment is collected at pickup. Space to complete the booking.",
            Styles::text_muted(),
        )),
    ]);

    let review = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .title(" Payment "),
    );
    f.render_widget(review, area);
}

fn review_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<10}", label), Styles::text_muted()),
        Span::styled(value, Styles::text()),
    ])
}

// ============================================================================
// Step 4: Confirmation
// ============================================================================

fn render_confirmation(f: &mut Frame, confirmation: &BookingConfirmation, area: Rect) {
    let vehicle = confirmation
        .vehicle
        .as_ref()
        .map_or_else(|| "-".to_string(), Vehicle::display_name);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("✓ Booking Confirmed!", Styles::success())),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Thank you, {}. A confirmation is on its way to {}.",
                confirmation.draft.customer_name, confirmation.draft.customer_email
            ),
            Styles::text(),
        )),
        Line::from(""),
        review_line("Vehicle", vehicle),
    ];
    if let Some(driver) = &confirmation.driver {
        lines.push(review_line("Driver", driver.name.clone()));
    }
    lines.push(review_line(
        "Dates",
        format!("{} → {}", confirmation.draft.pickup_date, confirmation.draft.return_date),
    ));
    lines.push(Line::from(vec![
        Span::styled(format!("{:<10}", "Total"), Styles::text_muted()),
        Span::styled(format!("${}", confirmation.price.total), Styles::price()),
    ]));

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(Styles::border_active()));
    f.render_widget(panel, area);
}

// ============================================================================
// Price summary
// ============================================================================

fn summary_line(label: String, amount: u64) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<24}", label), Styles::text_secondary()),
        Span::styled(format!("${:>6}", amount), Styles::text()),
    ])
}

fn render_price_summary(
    f: &mut Frame,
    price: &PriceBreakdown,
    vehicle: Option<&Vehicle>,
    driver: Option<&DriverProfile>,
    area: Rect,
) {
    let day_word = if price.days == 1 { "day" } else { "days" };
    let mut lines = Vec::new();

    match vehicle {
        Some(vehicle) => lines.push(summary_line(
            format!("{} × {} {}", vehicle.model, price.days, day_word),
            price.vehicle_cost,
        )),
        None => lines.push(Line::from(Span::styled("No vehicle selected", Styles::text_muted()))),
    }
    if let Some(driver) = driver {
        lines.push(summary_line(format!("Driver: {}", driver.name), price.driver_cost));
    }
    lines.push(summary_line("Service fee".to_string(), price.service_fee));
    lines.push(summary_line(
        format!("Insurance × {} {}", price.days, day_word),
        price.insurance,
    ));
    lines.push(Line::from(Span::styled("─".repeat(31), Styles::text_muted())));
    lines.push(Line::from(vec![
        Span::styled(format!("{:<24}", "Total"), Styles::text_bold()),
        Span::styled(format!("${:>6}", price.total), Styles::price()),
    ]));

    let summary = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_inactive())
            .title(" Price Summary "),
    );
    f.render_widget(summary, area);
}
