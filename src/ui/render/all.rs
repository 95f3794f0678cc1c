use super::*;
use crate::state::{State, View};
use ratatui::layout::{Constraint, Direction, Layout};

/// Drawer column width in terminal cells.
const DRAWER_WIDTH: u16 = 22;

/// Render the whole frame according to state. Which screen set renders is a
/// pure function of the authentication phase; while the stored session is
/// still being read, the frame stays blank.
///
pub fn all(frame: &mut Frame, state: &mut State, theme: &Theme) {
    let size = frame.size();
    state.set_terminal_size(size);

    if state.auth().is_loading() {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(size);

    if !state.auth().is_authenticated() {
        match state.current_view() {
            View::Register => register::register(frame, rows[0], state, theme),
            View::ForgotPassword => forgot_password::forgot_password(frame, rows[0], state, theme),
            View::NewPassword => new_password::new_password(frame, rows[0], state, theme),
            _ => login::login(frame, rows[0], state, theme),
        }
        footer::footer(frame, rows[1], state, theme);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(DRAWER_WIDTH), Constraint::Min(0)])
        .split(rows[0]);

    drawer::drawer(frame, columns[0], state, theme);
    match state.current_view() {
        View::Apiaries => apiaries::apiaries(frame, columns[1], state, theme),
        View::ApiaryDetail => apiary_detail::apiary_detail(frame, columns[1], state, theme),
        View::HiveDetail => hive_detail::hive_detail(frame, columns[1], state, theme),
        View::Harvest => harvest::harvest(frame, columns[1], state, theme),
        View::Settings => settings::settings(frame, columns[1], state, theme),
        View::Profile => profile::profile(frame, columns[1], state, theme),
        _ => home::home(frame, columns[1], state, theme),
    }
    footer::footer(frame, rows[1], state, theme);

    // Modal forms render on top of everything
    if state.active_modal().is_some() {
        modals::modal(frame, size, state, theme);
    }
}
