use crate::state::{Focus, State, View};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            if event::poll(tick_rate).unwrap() {
                if let CrosstermEvent::Key(key) = event::read().unwrap() {
                    if key.kind != KeyEventKind::Release {
                        tx_clone.send(Event::Input(key)).unwrap();
                    }
                }
            }
            tx_clone.send(Event::Tick).unwrap();
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Tick => {
                state.advance_spinner();
                Ok(true)
            }
            Event::Input(key) => self.handle_key(key, state),
        }
    }

    fn handle_key(&self, key: KeyEvent, state: &mut State) -> Result<bool> {
        if let KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } = key
        {
            debug!("Processing exit terminal event '{:?}'...", key);
            return Ok(false);
        }
        // Swallow input while the session resolves or an operation runs
        if state.auth().is_loading() || state.is_busy() {
            return Ok(true);
        }
        state.clear_flash();
        if state.active_modal().is_some() {
            self.handle_modal_key(key, state);
            return Ok(true);
        }
        if state.auth().is_authenticated() {
            self.handle_main_key(key, state)
        } else {
            self.handle_account_key(key, state);
            Ok(true)
        }
    }

    /// Handle input while a modal form is open. The modal owns all keys
    /// until accepted or dismissed.
    ///
    fn handle_modal_key(&self, key: KeyEvent, state: &mut State) {
        match key {
            KeyEvent {
                code: KeyCode::Esc, ..
            } => state.close_modal(),
            KeyEvent {
                code: KeyCode::Tab, ..
            } => state.form_next_field(),
            KeyEvent {
                code: KeyCode::BackTab,
                ..
            } => state.form_prev_field(),
            KeyEvent {
                code: KeyCode::Enter,
                ..
            } => state.submit(),
            KeyEvent {
                code: KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right,
                ..
            } if state.option_field_focused() => state.form_cycle_option(),
            // The multi-line notes editor takes everything else while focused
            key if state.notes_field_focused() => state.notes_textarea_input(key),
            KeyEvent {
                code: KeyCode::Char(c),
                modifiers,
                ..
            } if modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT => {
                state.form_input_char(c)
            }
            KeyEvent {
                code: KeyCode::Backspace,
                ..
            } => state.form_backspace(),
            _ => {}
        }
    }

    /// Handle input on the unauthenticated screen set.
    ///
    fn handle_account_key(&self, key: KeyEvent, state: &mut State) {
        match key {
            KeyEvent {
                code: KeyCode::Esc, ..
            } => {
                state.pop_view();
            }
            KeyEvent {
                code: KeyCode::Tab, ..
            } => state.form_next_field(),
            KeyEvent {
                code: KeyCode::BackTab,
                ..
            } => state.form_prev_field(),
            KeyEvent {
                code: KeyCode::Enter,
                ..
            } => state.submit(),
            KeyEvent {
                code: KeyCode::Char('r'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } if state.current_view() == View::Login => state.push_view(View::Register),
            KeyEvent {
                code: KeyCode::Char('f'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } if state.current_view() == View::Login => state.push_view(View::ForgotPassword),
            KeyEvent {
                code: KeyCode::Char(c),
                modifiers,
                ..
            } if modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT => {
                state.form_input_char(c)
            }
            KeyEvent {
                code: KeyCode::Backspace,
                ..
            } => state.form_backspace(),
            _ => {}
        }
    }

    /// Handle input on the authenticated screen set. Returns false when the
    /// user requested exit.
    ///
    fn handle_main_key(&self, key: KeyEvent, state: &mut State) -> Result<bool> {
        // Profile editing takes all keys, like a modal
        if state.current_view() == View::Profile && state.profile_editing() {
            match key {
                KeyEvent {
                    code: KeyCode::Esc, ..
                } => state.cancel_profile_editing(),
                KeyEvent {
                    code: KeyCode::Enter,
                    ..
                } => state.save_profile(),
                KeyEvent {
                    code: KeyCode::Tab, ..
                } => state.profile_next_field(),
                KeyEvent {
                    code: KeyCode::Backspace,
                    ..
                } => state.profile_backspace(),
                KeyEvent {
                    code: KeyCode::Char(c),
                    modifiers,
                    ..
                } if modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT => {
                    state.profile_input_char(c)
                }
                _ => {}
            }
            return Ok(true);
        }
        if state.logout_confirmation_pending() {
            match key {
                KeyEvent {
                    code: KeyCode::Char('y') | KeyCode::Enter,
                    ..
                } => state.confirm_logout(),
                KeyEvent {
                    code: KeyCode::Char('n') | KeyCode::Esc,
                    ..
                } => state.cancel_logout(),
                _ => {}
            }
            return Ok(true);
        }
        match key {
            KeyEvent {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::NONE,
                ..
            } => return Ok(false),
            KeyEvent {
                code: KeyCode::Tab, ..
            } => {
                state.toggle_focus();
                return Ok(true);
            }
            _ => {}
        }
        if state.focus() == Focus::Drawer {
            match key {
                KeyEvent {
                    code: KeyCode::Up | KeyCode::Char('k'),
                    ..
                } => state.drawer_prev(),
                KeyEvent {
                    code: KeyCode::Down | KeyCode::Char('j'),
                    ..
                } => state.drawer_next(),
                KeyEvent {
                    code: KeyCode::Enter,
                    ..
                } => state.activate_drawer_item(),
                _ => {}
            }
            return Ok(true);
        }
        match state.current_view() {
            View::Apiaries => match key {
                KeyEvent {
                    code: KeyCode::Up | KeyCode::Char('k'),
                    ..
                } => state.apiaries_prev(),
                KeyEvent {
                    code: KeyCode::Down | KeyCode::Char('j'),
                    ..
                } => state.apiaries_next(),
                KeyEvent {
                    code: KeyCode::Enter,
                    ..
                } => state.open_selected_apiary(),
                KeyEvent {
                    code: KeyCode::Char('n'),
                    ..
                } => state.open_new_apiary_modal(),
                _ => {}
            },
            View::ApiaryDetail => match key {
                KeyEvent {
                    code: KeyCode::Esc, ..
                } => {
                    state.pop_view();
                }
                KeyEvent {
                    code: KeyCode::Up | KeyCode::Char('k'),
                    ..
                } => state.hives_prev(),
                KeyEvent {
                    code: KeyCode::Down | KeyCode::Char('j'),
                    ..
                } => state.hives_next(),
                KeyEvent {
                    code: KeyCode::Enter,
                    ..
                } => state.open_selected_hive(),
                KeyEvent {
                    code: KeyCode::Char('f'),
                    ..
                } => state.cycle_hive_filter(),
                KeyEvent {
                    code: KeyCode::Char('i'),
                    ..
                } => state.toggle_apiary_info(),
                _ => {}
            },
            View::HiveDetail => match key {
                KeyEvent {
                    code: KeyCode::Esc, ..
                } => {
                    state.pop_view();
                }
                KeyEvent {
                    code: KeyCode::Char('n'),
                    ..
                } => state.open_new_inspection_modal(),
                _ => {}
            },
            View::Harvest => match key {
                KeyEvent {
                    code: KeyCode::Left | KeyCode::Char('h'),
                    ..
                } => state.prev_year(),
                KeyEvent {
                    code: KeyCode::Right | KeyCode::Char('l'),
                    ..
                } => state.next_year(),
                KeyEvent {
                    code: KeyCode::Char('n'),
                    ..
                } => state.open_new_harvest_modal(),
                _ => {}
            },
            View::Settings => {
                if let KeyEvent {
                    code: KeyCode::Enter | KeyCode::Char('l'),
                    ..
                } = key
                {
                    state.request_logout()
                }
            }
            View::Profile => {
                if let KeyEvent {
                    code: KeyCode::Char('e'),
                    ..
                } = key
                {
                    state.start_profile_editing()
                }
            }
            _ => {}
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn handler() -> Handler {
        // Build a handler without the polling thread by hand
        let (tx, rx) = mpsc::channel();
        Handler { rx, _tx: tx }
    }

    fn authenticated_state() -> State {
        let mut state = State::default();
        state.resolve_session(true);
        state
    }

    #[test]
    fn test_input_ignored_while_loading() {
        let handler = handler();
        let mut state = State::default();
        assert!(state.auth().is_loading());
        assert!(handler.handle_key(key(KeyCode::Char('q')), &mut state).unwrap());
    }

    #[test]
    fn test_ctrl_c_requests_exit_even_while_loading() {
        let handler = handler();
        let mut state = State::default();
        let exit = handler
            .handle_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &mut state,
            )
            .unwrap();
        assert!(!exit);
    }

    #[test]
    fn test_typing_reaches_login_form() {
        let handler = handler();
        let mut state = State::default();
        state.resolve_session(false);
        handler.handle_key(key(KeyCode::Char('a')), &mut state).unwrap();
        handler.handle_key(key(KeyCode::Char('b')), &mut state).unwrap();
        handler.handle_key(key(KeyCode::Backspace), &mut state).unwrap();
        assert_eq!(state.login_form().email, "a");
    }

    #[test]
    fn test_q_types_on_login_but_quits_when_authenticated() {
        let handler = handler();
        let mut state = State::default();
        state.resolve_session(false);
        assert!(handler.handle_key(key(KeyCode::Char('q')), &mut state).unwrap());
        assert_eq!(state.login_form().email, "q");

        let mut state = authenticated_state();
        assert!(!handler.handle_key(key(KeyCode::Char('q')), &mut state).unwrap());
    }

    #[test]
    fn test_register_shortcut_from_login() {
        let handler = handler();
        let mut state = State::default();
        state.resolve_session(false);
        handler
            .handle_key(
                KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL),
                &mut state,
            )
            .unwrap();
        assert_eq!(state.current_view(), View::Register);
        handler.handle_key(key(KeyCode::Esc), &mut state).unwrap();
        assert_eq!(state.current_view(), View::Login);
    }

    #[test]
    fn test_drawer_cycle_and_activation() {
        let handler = handler();
        let mut state = authenticated_state();
        handler.handle_key(key(KeyCode::Tab), &mut state).unwrap();
        assert_eq!(state.focus(), Focus::Drawer);
        handler.handle_key(key(KeyCode::Char('j')), &mut state).unwrap();
        handler.handle_key(key(KeyCode::Enter), &mut state).unwrap();
        assert_eq!(state.current_view(), View::Apiaries);
        assert_eq!(state.focus(), Focus::View);
    }

    #[test]
    fn test_apiary_detail_navigation() {
        let handler = handler();
        let mut state = authenticated_state();
        state.toggle_focus();
        state.drawer_next();
        state.activate_drawer_item();
        assert_eq!(state.current_view(), View::Apiaries);
        handler.handle_key(key(KeyCode::Char('j')), &mut state).unwrap();
        handler.handle_key(key(KeyCode::Enter), &mut state).unwrap();
        assert_eq!(state.current_view(), View::ApiaryDetail);
        assert!(state.selected_apiary().is_ok());
        handler.handle_key(key(KeyCode::Esc), &mut state).unwrap();
        assert_eq!(state.current_view(), View::Apiaries);
    }

    #[test]
    fn test_modal_owns_keys_until_dismissed() {
        let handler = handler();
        let mut state = authenticated_state();
        state.toggle_focus();
        state.drawer_next();
        state.activate_drawer_item();
        handler.handle_key(key(KeyCode::Char('n')), &mut state).unwrap();
        assert!(state.active_modal().is_some());
        // 'q' types into the name field instead of quitting
        assert!(handler.handle_key(key(KeyCode::Char('q')), &mut state).unwrap());
        assert_eq!(state.apiary_form().name, "q");
        handler.handle_key(key(KeyCode::Esc), &mut state).unwrap();
        assert!(state.active_modal().is_none());
    }

    #[test]
    fn test_harvest_year_keys() {
        let handler = handler();
        let mut state = authenticated_state();
        state.toggle_focus();
        state.drawer_next();
        state.drawer_next();
        state.activate_drawer_item();
        assert_eq!(state.current_view(), View::Harvest);
        handler.handle_key(key(KeyCode::Right), &mut state).unwrap();
        assert_eq!(state.selected_year(), 2023);
        handler.handle_key(key(KeyCode::Left), &mut state).unwrap();
        assert_eq!(state.selected_year(), 2024);
    }

    #[test]
    fn test_tick_advances_spinner() {
        let mut state = State::default();
        assert_eq!(state.spinner_index(), 0);
        state.advance_spinner();
        assert_eq!(state.spinner_index(), 1);
    }
}
