use super::{fields, Frame, Theme};
use crate::forms::RegisterForm;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

pub fn register(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Create Account")
        .border_style(styling::active_block_border_style(theme));
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .margin(2)
        .split(size);

    let form = state.register_form();
    let errors = state.form_errors();
    let focus = state.form_focus();
    let field_rows = fields::rows(rows[0], RegisterForm::FIELD_COUNT);
    let specs: [(&str, &str, &'static str, bool); RegisterForm::FIELD_COUNT] = [
        ("Full Name", form.full_name.as_str(), "fullName", false),
        ("Email", form.email.as_str(), "email", false),
        ("Password", form.password.as_str(), "password", true),
        (
            "Confirm Password",
            form.confirm_password.as_str(),
            "confirmPassword",
            true,
        ),
    ];
    for (i, (label, value, name, masked)) in specs.into_iter().enumerate() {
        fields::text_field(
            frame,
            field_rows[i],
            label,
            value,
            name,
            focus == i,
            masked,
            errors,
            theme,
        );
    }

    let hint = Paragraph::new("Enter: register  Tab: next field  Esc: back to sign in")
        .style(styling::muted_text_style(theme))
        .alignment(Alignment::Center);
    frame.render_widget(hint, rows[1]);
}
