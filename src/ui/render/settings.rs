use super::{Frame, Theme};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

pub fn settings(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Length(4), Constraint::Min(0)])
        .split(size);

    let info = [
        format!(" Theme: {}", theme.name),
        format!(" Version: {}", env!("CARGO_PKG_VERSION")),
    ]
    .join("\n");
    let info_widget = Paragraph::new(info)
        .style(styling::normal_text_style(theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Settings")
                .border_style(styling::normal_block_border_style(theme)),
        );
    frame.render_widget(info_widget, rows[0]);

    let (text, style) = if state.logout_confirmation_pending() {
        (
            " Sign out of your account? (y/n)",
            styling::error_text_style(theme),
        )
    } else {
        (
            " Press Enter to sign out.",
            styling::normal_text_style(theme),
        )
    };
    let logout_widget = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Account")
            .border_style(styling::active_block_border_style(theme)),
    );
    frame.render_widget(logout_widget, rows[1]);
}
