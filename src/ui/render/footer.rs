use super::{Frame, Theme};
use crate::state::{State, View};
use crate::ui::widgets::{spinner, styling};
use ratatui::{layout::Rect, widgets::Paragraph};

/// Return the hotkey hint line for the current view.
///
fn hints_for_view(state: &State) -> &'static str {
    if state.active_modal().is_some() {
        return " Tab: next field  Enter: save  Esc: cancel";
    }
    match state.current_view() {
        View::Login => " Enter: sign in  Ctrl+C: quit",
        View::Register | View::ForgotPassword | View::NewPassword => {
            " Enter: submit  Esc: back  Ctrl+C: quit"
        }
        View::Home => " Tab: menu  q: quit",
        View::Apiaries => " j/k: move  Enter: open  n: new apiary  Tab: menu  q: quit",
        View::ApiaryDetail => {
            " j/k: move  Enter: open hive  f: filter  i: info  Esc: back  q: quit"
        }
        View::HiveDetail => " n: new inspection  Esc: back  q: quit",
        View::Harvest => " h/l: year  n: new harvest  Tab: menu  q: quit",
        View::Settings => " Enter: sign out  Tab: menu  q: quit",
        View::Profile => " e: edit  Tab: menu  q: quit",
    }
}

pub fn footer(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let widget = if state.is_busy() {
        Paragraph::new(format!(" {} Working...", spinner::frame(state.spinner_index())))
            .style(styling::banner_style(theme))
    } else if let Some(message) = state.flash() {
        Paragraph::new(format!(" {}", message)).style(styling::success_text_style(theme))
    } else {
        Paragraph::new(hints_for_view(state)).style(styling::muted_text_style(theme))
    };
    frame.render_widget(widget, size);
}
