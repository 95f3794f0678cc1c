use super::{fields, Frame, Theme};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const INSTRUCTIONS: &str =
    "Enter the email address of your account and we will send you instructions \
     for resetting your password.";

pub fn forgot_password(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Forgot Password")
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

    let instructions = Paragraph::new(INSTRUCTIONS)
        .style(styling::normal_text_style(theme))
        .wrap(Wrap { trim: true });
    frame.render_widget(instructions, rows[0]);

    let field_rows = fields::rows(rows[1], 1);
    fields::text_field(
        frame,
        field_rows[0],
        "Email",
        &state.forgot_password_form().email,
        "email",
        state.form_focus() == 0,
        false,
        state.form_errors(),
        theme,
    );

    let hint = Paragraph::new("Enter: send instructions  Esc: back")
        .style(styling::muted_text_style(theme))
        .alignment(Alignment::Center);
    frame.render_widget(hint, rows[2]);
}
