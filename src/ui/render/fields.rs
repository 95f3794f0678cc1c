use super::{Frame, Theme};
use crate::forms::FieldErrors;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

/// Height of a single bordered input field.
pub const FIELD_HEIGHT: u16 = 3;

/// Split an area into stacked field rows of uniform height.
///
pub fn rows(area: Rect, count: usize) -> Vec<Rect> {
    let mut constraints = vec![Constraint::Length(FIELD_HEIGHT); count];
    constraints.push(Constraint::Min(0));
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Render a single-line input field. A pending validation message replaces
/// part of the title and turns the border red until the user types again.
///
#[allow(clippy::too_many_arguments)]
pub fn text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    name: &'static str,
    focused: bool,
    masked: bool,
    errors: &FieldErrors,
    theme: &Theme,
) {
    let error = errors.get(name);
    let border_style = if error.is_some() {
        styling::error_text_style(theme)
    } else if focused {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };
    let title = match error {
        Some(message) => format!("{} ({})", label, message),
        None => label.to_string(),
    };
    let shown = if masked {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let display = if focused {
        format!("{}█", shown)
    } else {
        shown
    };
    let widget = Paragraph::new(display)
        .style(styling::normal_text_style(theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border_style),
        );
    frame.render_widget(widget, area);
}

/// Render a cycling option selector displaying its current value.
///
pub fn option_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let border_style = if focused {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };
    let display = if focused {
        format!("< {} >", value)
    } else {
        value.to_string()
    };
    let widget = Paragraph::new(display)
        .style(styling::normal_text_style(theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(label.to_string())
                .border_style(border_style),
        );
    frame.render_widget(widget, area);
}
