use super::{fields, Frame, Theme};
use crate::state::{ActiveModal, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Clear},
};

const NOTES_HEIGHT: u16 = 5;

/// Center a modal of the given size within the frame, clamped to fit.
///
fn centered(size: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(size.width);
    let height = height.min(size.height);
    Rect {
        x: size.x + (size.width - width) / 2,
        y: size.y + (size.height - height) / 2,
        width,
        height,
    }
}

pub fn modal(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let active = match state.active_modal() {
        Some(active) => active,
        None => return,
    };
    let height = match active {
        ActiveModal::NewApiary => 3 * fields::FIELD_HEIGHT + NOTES_HEIGHT + 2,
        ActiveModal::NewHarvest => 6 * fields::FIELD_HEIGHT + NOTES_HEIGHT + 2,
        ActiveModal::NewInspection => 5 * fields::FIELD_HEIGHT + NOTES_HEIGHT + 2,
    };
    let area = centered(size, 60, height);
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(active.title())
        .border_style(styling::active_block_border_style(theme))
        .title_style(styling::active_block_title_style());
    frame.render_widget(block, area);
    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    match active {
        ActiveModal::NewApiary => new_apiary(frame, inner, state, theme),
        ActiveModal::NewHarvest => new_harvest(frame, inner, state, theme),
        ActiveModal::NewInspection => new_inspection(frame, inner, state, theme),
    }
}

fn new_apiary(frame: &mut Frame, area: Rect, state: &State, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(fields::FIELD_HEIGHT),
            Constraint::Length(fields::FIELD_HEIGHT),
            Constraint::Length(fields::FIELD_HEIGHT),
            Constraint::Min(NOTES_HEIGHT),
        ])
        .split(area);
    let form = state.apiary_form();
    let errors = state.form_errors();
    let focus = state.form_focus();
    let specs: [(&str, &str, &'static str); 3] = [
        ("Name", form.name.as_str(), "name"),
        ("Location", form.location.as_str(), "location"),
        ("Hives Count", form.hives_count.as_str(), "hivesCount"),
    ];
    for (i, (label, value, name)) in specs.into_iter().enumerate() {
        fields::text_field(
            frame, rows[i], label, value, name, focus == i, false, errors, theme,
        );
    }
    frame.render_widget(state.notes_textarea(), rows[3]);
}

fn new_harvest(frame: &mut Frame, area: Rect, state: &State, theme: &Theme) {
    let mut constraints = vec![Constraint::Length(fields::FIELD_HEIGHT); 6];
    constraints.push(Constraint::Min(NOTES_HEIGHT));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    let form = state.harvest_form();
    let errors = state.form_errors();
    let focus = state.form_focus();
    let specs: [(&str, &str, &'static str); 6] = [
        ("Hive ID", form.hive_id.as_str(), "hiveId"),
        ("Hive Name", form.hive_name.as_str(), "hiveName"),
        ("Honey (kg)", form.honey_amount.as_str(), "honeyAmount"),
        ("Pollen (kg)", form.pollen_amount.as_str(), "pollenAmount"),
        (
            "Propolis (kg)",
            form.propolis_amount.as_str(),
            "propolisAmount",
        ),
        (
            "Harvest Date (YYYY-MM-DD)",
            form.harvest_date.as_str(),
            "harvestDate",
        ),
    ];
    for (i, (label, value, name)) in specs.into_iter().enumerate() {
        fields::text_field(
            frame, rows[i], label, value, name, focus == i, false, errors, theme,
        );
    }
    frame.render_widget(state.notes_textarea(), rows[6]);
}

fn new_inspection(frame: &mut Frame, area: Rect, state: &State, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(fields::FIELD_HEIGHT),
            Constraint::Length(NOTES_HEIGHT),
            Constraint::Length(fields::FIELD_HEIGHT),
            Constraint::Length(fields::FIELD_HEIGHT),
            Constraint::Length(fields::FIELD_HEIGHT),
            Constraint::Min(fields::FIELD_HEIGHT),
        ])
        .split(area);
    let form = state.inspection_form();
    let errors = state.form_errors();
    let focus = state.form_focus();
    fields::text_field(
        frame,
        rows[0],
        "Date (YYYY-MM-DD)",
        &form.date,
        "date",
        focus == 0,
        false,
        errors,
        theme,
    );
    frame.render_widget(state.notes_textarea(), rows[1]);
    let options: [(&str, String); 4] = [
        ("Queen", form.queen_status.to_string()),
        ("Brood", form.brood_status.to_string()),
        ("Honey Stores", form.honey_status.to_string()),
        ("Health", form.health_status.to_string()),
    ];
    for (i, (label, value)) in options.into_iter().enumerate() {
        fields::option_field(frame, rows[i + 2], label, &value, focus == i + 2, theme);
    }
}
