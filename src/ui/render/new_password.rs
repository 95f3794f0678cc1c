use super::{fields, Frame, Theme};
use crate::forms::NewPasswordForm;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const REQUIREMENTS: &str =
    "The new password needs at least 6 characters including an uppercase \
     letter, a lowercase letter and a digit.";

pub fn new_password(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Set New Password")
        .border_style(styling::active_block_border_style(theme));
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .margin(2)
        .split(size);

    let requirements = Paragraph::new(REQUIREMENTS)
        .style(styling::muted_text_style(theme))
        .wrap(Wrap { trim: true });
    frame.render_widget(requirements, rows[0]);

    let form = state.new_password_form();
    let errors = state.form_errors();
    let focus = state.form_focus();
    let field_rows = fields::rows(rows[1], NewPasswordForm::FIELD_COUNT);
    fields::text_field(
        frame,
        field_rows[0],
        "New Password",
        &form.new_password,
        "newPassword",
        focus == 0,
        true,
        errors,
        theme,
    );
    fields::text_field(
        frame,
        field_rows[1],
        "Confirm Password",
        &form.confirm_password,
        "confirmPassword",
        focus == 1,
        true,
        errors,
        theme,
    );

    let hint = Paragraph::new("Enter: update password  Esc: back")
        .style(styling::muted_text_style(theme))
        .alignment(Alignment::Center);
    frame.render_widget(hint, rows[2]);
}
