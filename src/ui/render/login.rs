use super::{fields, Frame, Theme};
use crate::forms::LoginForm;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Text,
    widgets::{Block, Borders, Paragraph},
};

pub const BANNER: &str = r#"
             _                        _         _
  __ _ _ __ (_) __ _ _ __ _   _      | |_ _   _(_)
 / _` | '_ \| |/ _` | '__| | | |_____| __| | | | |
| (_| | |_) | | (_| | |  | |_| |_____| |_| |_| | |
 \__,_| .__/|_|\__,_|_|   \__, |      \__|\__,_|_|
      |_|                 |___/
"#;

pub fn login(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Sign In")
        .border_style(styling::active_block_border_style(theme));
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .margin(2)
        .split(size);

    let banner = Text::styled(BANNER, styling::banner_style(theme));
    frame.render_widget(Paragraph::new(banner).alignment(Alignment::Center), rows[0]);

    let form = state.login_form();
    let errors = state.form_errors();
    let focus = state.form_focus();
    let field_rows = fields::rows(rows[1], LoginForm::FIELD_COUNT);
    fields::text_field(
        frame,
        field_rows[0],
        "Email",
        &form.email,
        "email",
        focus == 0,
        false,
        errors,
        theme,
    );
    fields::text_field(
        frame,
        field_rows[1],
        "Password",
        &form.password,
        "password",
        focus == 1,
        true,
        errors,
        theme,
    );

    let hint = Paragraph::new("Enter: sign in  Ctrl+R: create account  Ctrl+F: forgot password")
        .style(styling::muted_text_style(theme))
        .alignment(Alignment::Center);
    frame.render_widget(hint, rows[2]);
}
