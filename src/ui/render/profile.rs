use super::{fields, Frame, Theme};
use crate::forms::FieldErrors;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

pub fn profile(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let title = if state.profile_editing() {
        "Profile (editing)"
    } else {
        "Profile"
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(styling::active_block_border_style(theme));
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .margin(2)
        .split(size);

    let profile = state.profile();
    let editing = state.profile_editing();
    let focus = state.profile_focus();
    let no_errors = FieldErrors::new();
    let specs: [(&str, &str); 5] = [
        ("First Name", profile.first_name.as_str()),
        ("Last Name", profile.last_name.as_str()),
        ("Email", profile.email.as_str()),
        ("Country", profile.country.as_str()),
        ("Phone", profile.phone.as_str()),
    ];
    let field_rows = fields::rows(rows[0], specs.len());
    for (i, (label, value)) in specs.into_iter().enumerate() {
        fields::text_field(
            frame,
            field_rows[i],
            label,
            value,
            "",
            editing && focus == i,
            false,
            &no_errors,
            theme,
        );
    }

    let hint = if editing {
        "Tab: next field  Enter: save  Esc: discard changes"
    } else {
        "e: edit profile"
    };
    let hint_widget = Paragraph::new(hint)
        .style(styling::muted_text_style(theme))
        .alignment(Alignment::Center);
    frame.render_widget(hint_widget, rows[1]);
}
