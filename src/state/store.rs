use crate::app::{ConfigSaveSender, SessionEventSender};
use crate::auth::AuthState;
use crate::config::Profile;
use crate::events::session::Event as SessionEvent;
use crate::forms::{
    ApiaryForm, FieldErrors, ForgotPasswordForm, HarvestForm, InspectionForm, LoginForm,
    NewPasswordForm, RegisterForm,
};
use crate::models::{
    mock, Activity, Apiary, HarvestRecord, Hive, InspectionRecord,
};
use crate::ui::SPINNER_FRAME_COUNT;
use log::*;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, ListState};
use std::collections::HashMap;
use tui_textarea::TextArea;

use super::form::ActiveModal;
use super::navigation::{DrawerItem, Focus, HiveFilter, View};
use super::StateError;

/// Houses data representative of application state.
///
/// All mutation happens on the UI thread in response to key events, except
/// for the session completion methods invoked by the session worker.
pub struct State {
    session_sender: Option<SessionEventSender>,
    config_save_sender: Option<ConfigSaveSender>,
    auth: AuthState,
    terminal_size: Rect,
    spinner_index: usize,
    busy: bool,
    flash: Option<String>,
    view_stack: Vec<View>,
    focus: Focus,
    drawer_index: usize,
    // Domain lists, in-memory for the session lifetime only
    apiaries: Vec<Apiary>,
    apiaries_list_state: ListState,
    hives: Vec<Hive>,
    hives_list_state: ListState,
    selected_apiary: Option<Apiary>,
    selected_hive: Option<Hive>,
    hive_filter: HiveFilter,
    apiary_info_expanded: bool,
    harvests: HashMap<i32, Vec<HarvestRecord>>,
    selected_year_index: usize,
    activities: Vec<Activity>,
    inspections: HashMap<u64, Vec<InspectionRecord>>,
    // Beekeeper profile, persisted through the config saver
    profile: Profile,
    profile_editing: bool,
    profile_focus: usize,
    // Form drafts and presentation
    login_form: LoginForm,
    register_form: RegisterForm,
    new_password_form: NewPasswordForm,
    forgot_password_form: ForgotPasswordForm,
    apiary_form: ApiaryForm,
    harvest_form: HarvestForm,
    inspection_form: InspectionForm,
    notes_textarea: TextArea<'static>, // multi-line editor for the open modal's notes field
    active_modal: Option<ActiveModal>,
    form_focus: usize,
    form_errors: FieldErrors,
    confirm_logout: bool,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            session_sender: None,
            config_save_sender: None,
            auth: AuthState::default(),
            terminal_size: Rect::default(),
            spinner_index: 0,
            busy: false,
            flash: None,
            view_stack: vec![View::Login],
            focus: Focus::View,
            drawer_index: 0,
            apiaries: mock::seed_apiaries(),
            apiaries_list_state: ListState::default(),
            hives: mock::seed_hives(),
            hives_list_state: ListState::default(),
            selected_apiary: None,
            selected_hive: None,
            hive_filter: HiveFilter::All,
            apiary_info_expanded: false,
            harvests: mock::seed_harvests(),
            selected_year_index: 0,
            activities: mock::seed_activities(),
            inspections: HashMap::new(),
            profile: Profile::default(),
            profile_editing: false,
            profile_focus: 0,
            login_form: LoginForm::default(),
            register_form: RegisterForm::default(),
            new_password_form: NewPasswordForm::default(),
            forgot_password_form: ForgotPasswordForm::default(),
            apiary_form: ApiaryForm::default(),
            harvest_form: HarvestForm::default(),
            inspection_form: InspectionForm::default(),
            notes_textarea: TextArea::default(),
            active_modal: None,
            form_focus: 0,
            form_errors: FieldErrors::new(),
            confirm_logout: false,
        }
    }
}

impl State {
    pub fn new(
        session_sender: SessionEventSender,
        config_save_sender: ConfigSaveSender,
        profile: Profile,
    ) -> Self {
        State {
            session_sender: Some(session_sender),
            config_save_sender: Some(config_save_sender),
            profile,
            ..State::default()
        }
    }

    fn send_session_event(&self, event: SessionEvent) {
        if let Some(sender) = &self.session_sender {
            if let Err(e) = sender.send(event) {
                error!("Failed to dispatch session event: {}", e);
            }
        }
    }

    // --- Auth -------------------------------------------------------------

    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    /// Resolve the startup session read. Entry point of the resolved screen
    /// set: Login when unauthenticated, Home otherwise.
    ///
    pub fn resolve_session(&mut self, token_present: bool) {
        self.auth.resolve(token_present);
        self.view_stack = if token_present {
            vec![View::Home]
        } else {
            vec![View::Login]
        };
        debug!("Session resolved (token present: {})", token_present);
    }

    pub fn complete_login(&mut self) {
        self.auth.login();
        self.busy = false;
        self.login_form.clear();
        self.form_errors.clear();
        self.form_focus = 0;
        self.focus = Focus::View;
        self.drawer_index = 0;
        self.view_stack = vec![View::Home];
        info!("Login complete");
    }

    pub fn complete_logout(&mut self) {
        self.auth.logout();
        self.busy = false;
        self.confirm_logout = false;
        self.selected_apiary = None;
        self.selected_hive = None;
        self.active_modal = None;
        self.view_stack = vec![View::Login];
        info!("Logout complete");
    }

    pub fn complete_registration(&mut self) {
        self.busy = false;
        self.register_form.clear();
        self.form_focus = 0;
        self.view_stack = vec![View::Login];
        self.set_flash("Account created. You can now sign in.");
    }

    pub fn complete_password_reset_request(&mut self) {
        self.busy = false;
        self.forgot_password_form.clear();
        self.view_stack.push(View::NewPassword);
        self.set_flash("Password reset instructions sent.");
    }

    pub fn complete_password_update(&mut self) {
        self.busy = false;
        self.new_password_form.clear();
        self.form_focus = 0;
        self.view_stack = vec![View::Login];
        self.set_flash("Password updated. Sign in with your new password.");
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    // --- Flash messages ---------------------------------------------------

    pub fn flash(&self) -> Option<&str> {
        self.flash.as_deref()
    }

    pub fn set_flash(&mut self, message: &str) {
        self.flash = Some(message.to_string());
    }

    pub fn clear_flash(&mut self) {
        self.flash = None;
    }

    // --- Navigation -------------------------------------------------------

    pub fn current_view(&self) -> View {
        *self.view_stack.last().unwrap_or(&View::Login)
    }

    pub fn push_view(&mut self, view: View) {
        self.view_stack.push(view);
        self.form_focus = 0;
        self.form_errors.clear();
    }

    /// Pop back one view. Returns false when already at the stack root.
    ///
    pub fn pop_view(&mut self) -> bool {
        if self.view_stack.len() > 1 {
            self.view_stack.pop();
            self.form_focus = 0;
            self.form_errors.clear();
            true
        } else {
            false
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Drawer => Focus::View,
            Focus::View => Focus::Drawer,
        };
    }

    pub fn drawer_index(&self) -> usize {
        self.drawer_index
    }

    pub fn drawer_next(&mut self) {
        self.drawer_index = (self.drawer_index + 1) % DrawerItem::ALL.len();
    }

    pub fn drawer_prev(&mut self) {
        self.drawer_index =
            (self.drawer_index + DrawerItem::ALL.len() - 1) % DrawerItem::ALL.len();
    }

    /// Jump to the highlighted drawer item, collapsing any detail stack.
    ///
    pub fn activate_drawer_item(&mut self) {
        let item = DrawerItem::ALL[self.drawer_index];
        self.view_stack = vec![item.view()];
        self.focus = Focus::View;
        self.confirm_logout = false;
    }

    // --- Apiaries ---------------------------------------------------------

    pub fn apiaries(&self) -> &[Apiary] {
        &self.apiaries
    }

    pub fn apiaries_list_state(&mut self) -> &mut ListState {
        &mut self.apiaries_list_state
    }

    pub fn apiaries_next(&mut self) {
        let len = self.apiaries.len();
        if len == 0 {
            return;
        }
        let next = match self.apiaries_list_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.apiaries_list_state.select(Some(next));
    }

    pub fn apiaries_prev(&mut self) {
        let len = self.apiaries.len();
        if len == 0 {
            return;
        }
        let prev = match self.apiaries_list_state.selected() {
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        self.apiaries_list_state.select(Some(prev));
    }

    /// Navigate to the detail view of the highlighted apiary. Detail entry
    /// requires a selection; there is no fallback record.
    ///
    pub fn open_selected_apiary(&mut self) {
        if let Some(index) = self.apiaries_list_state.selected() {
            if let Some(apiary) = self.apiaries.get(index) {
                self.selected_apiary = Some(apiary.clone());
                self.hive_filter = HiveFilter::All;
                self.apiary_info_expanded = false;
                self.hives_list_state.select(None);
                self.push_view(View::ApiaryDetail);
            }
        }
    }

    pub fn selected_apiary(&self) -> Result<&Apiary, StateError> {
        self.selected_apiary
            .as_ref()
            .ok_or(StateError::ApiaryNotSelected)
    }

    pub fn apiary_info_expanded(&self) -> bool {
        self.apiary_info_expanded
    }

    pub fn toggle_apiary_info(&mut self) {
        self.apiary_info_expanded = !self.apiary_info_expanded;
    }

    // --- Hives ------------------------------------------------------------

    pub fn hives(&self) -> &[Hive] {
        &self.hives
    }

    pub fn hive_filter(&self) -> HiveFilter {
        self.hive_filter
    }

    pub fn cycle_hive_filter(&mut self) {
        let index = HiveFilter::ALL
            .iter()
            .position(|f| *f == self.hive_filter)
            .unwrap_or(0);
        self.hive_filter = HiveFilter::ALL[(index + 1) % HiveFilter::ALL.len()];
        self.hives_list_state.select(None);
    }

    pub fn filtered_hives(&self) -> Vec<&Hive> {
        self.hives
            .iter()
            .filter(|hive| self.hive_filter.matches(hive.status))
            .collect()
    }

    pub fn hives_list_state(&mut self) -> &mut ListState {
        &mut self.hives_list_state
    }

    pub fn hives_next(&mut self) {
        let len = self.filtered_hives().len();
        if len == 0 {
            return;
        }
        let next = match self.hives_list_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.hives_list_state.select(Some(next));
    }

    pub fn hives_prev(&mut self) {
        let len = self.filtered_hives().len();
        if len == 0 {
            return;
        }
        let prev = match self.hives_list_state.selected() {
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        self.hives_list_state.select(Some(prev));
    }

    pub fn open_selected_hive(&mut self) {
        if let Some(index) = self.hives_list_state.selected() {
            let hive = self.filtered_hives().get(index).map(|h| (*h).clone());
            if let Some(hive) = hive {
                self.selected_hive = Some(hive);
                self.push_view(View::HiveDetail);
            }
        }
    }

    pub fn selected_hive(&self) -> Result<&Hive, StateError> {
        self.selected_hive
            .as_ref()
            .ok_or(StateError::HiveNotSelected)
    }

    pub fn inspections_for_selected_hive(&self) -> &[InspectionRecord] {
        match &self.selected_hive {
            Some(hive) => self
                .inspections
                .get(&hive.id)
                .map(Vec::as_slice)
                .unwrap_or(&[]),
            None => &[],
        }
    }

    // --- Harvests ---------------------------------------------------------

    pub fn selected_year(&self) -> i32 {
        mock::HARVEST_YEARS[self.selected_year_index]
    }

    pub fn next_year(&mut self) {
        self.selected_year_index = (self.selected_year_index + 1) % mock::HARVEST_YEARS.len();
    }

    pub fn prev_year(&mut self) {
        self.selected_year_index = (self.selected_year_index + mock::HARVEST_YEARS.len() - 1)
            % mock::HARVEST_YEARS.len();
    }

    pub fn current_year_records(&self) -> &[HarvestRecord] {
        self.harvests
            .get(&self.selected_year())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    // --- Home dashboard ---------------------------------------------------

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    // --- Profile ----------------------------------------------------------

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn profile_editing(&self) -> bool {
        self.profile_editing
    }

    pub fn profile_focus(&self) -> usize {
        self.profile_focus
    }

    pub fn start_profile_editing(&mut self) {
        self.profile_editing = true;
        self.profile_focus = 0;
    }

    pub fn cancel_profile_editing(&mut self) {
        self.profile_editing = false;
    }

    pub fn profile_next_field(&mut self) {
        self.profile_focus = (self.profile_focus + 1) % 5;
    }

    fn profile_field_mut(&mut self) -> &mut String {
        match self.profile_focus {
            0 => &mut self.profile.first_name,
            1 => &mut self.profile.last_name,
            2 => &mut self.profile.email,
            3 => &mut self.profile.country,
            _ => &mut self.profile.phone,
        }
    }

    pub fn profile_input_char(&mut self, c: char) {
        if self.profile_editing {
            self.profile_field_mut().push(c);
        }
    }

    pub fn profile_backspace(&mut self) {
        if self.profile_editing {
            self.profile_field_mut().pop();
        }
    }

    /// Persist the edited profile through the config saver thread.
    ///
    pub fn save_profile(&mut self) {
        self.profile_editing = false;
        if let Some(sender) = &self.config_save_sender {
            if let Err(e) = sender.send(()) {
                error!("Failed to request config save: {}", e);
            }
        }
        self.set_flash("Profile updated.");
    }

    // --- Settings / logout ------------------------------------------------

    pub fn logout_confirmation_pending(&self) -> bool {
        self.confirm_logout
    }

    pub fn request_logout(&mut self) {
        self.confirm_logout = true;
    }

    pub fn cancel_logout(&mut self) {
        self.confirm_logout = false;
    }

    pub fn confirm_logout(&mut self) {
        if self.confirm_logout {
            self.confirm_logout = false;
            self.send_session_event(SessionEvent::Logout);
        }
    }

    // --- Modal forms ------------------------------------------------------

    pub fn active_modal(&self) -> Option<ActiveModal> {
        self.active_modal
    }

    pub fn form_focus(&self) -> usize {
        self.form_focus
    }

    pub fn form_errors(&self) -> &FieldErrors {
        &self.form_errors
    }

    pub fn notes_textarea(&self) -> &TextArea<'static> {
        &self.notes_textarea
    }

    fn open_modal(&mut self, modal: ActiveModal) {
        self.active_modal = Some(modal);
        self.form_focus = 0;
        self.form_errors.clear();
        let mut textarea = TextArea::default();
        let title = match modal {
            ActiveModal::NewInspection => "Observations",
            _ => "Notes",
        };
        textarea.set_block(Block::default().borders(Borders::ALL).title(title));
        self.notes_textarea = textarea;
    }

    pub fn open_new_apiary_modal(&mut self) {
        self.apiary_form.clear();
        self.open_modal(ActiveModal::NewApiary);
    }

    pub fn open_new_harvest_modal(&mut self) {
        self.harvest_form.clear();
        self.open_modal(ActiveModal::NewHarvest);
    }

    pub fn open_new_inspection_modal(&mut self) {
        self.inspection_form.clear();
        self.open_modal(ActiveModal::NewInspection);
    }

    /// Dismissing a form discards the draft.
    ///
    pub fn close_modal(&mut self) {
        match self.active_modal {
            Some(ActiveModal::NewApiary) => self.apiary_form.clear(),
            Some(ActiveModal::NewHarvest) => self.harvest_form.clear(),
            Some(ActiveModal::NewInspection) => self.inspection_form.clear(),
            None => {}
        }
        self.active_modal = None;
        self.form_errors.clear();
        self.form_focus = 0;
    }

    pub fn login_form(&self) -> &LoginForm {
        &self.login_form
    }

    pub fn register_form(&self) -> &RegisterForm {
        &self.register_form
    }

    pub fn new_password_form(&self) -> &NewPasswordForm {
        &self.new_password_form
    }

    pub fn forgot_password_form(&self) -> &ForgotPasswordForm {
        &self.forgot_password_form
    }

    pub fn apiary_form(&self) -> &ApiaryForm {
        &self.apiary_form
    }

    pub fn harvest_form(&self) -> &HarvestForm {
        &self.harvest_form
    }

    pub fn inspection_form(&self) -> &InspectionForm {
        &self.inspection_form
    }

    fn field_count(&self) -> usize {
        if let Some(modal) = self.active_modal {
            return match modal {
                ActiveModal::NewApiary => ApiaryForm::FIELD_COUNT,
                ActiveModal::NewHarvest => HarvestForm::FIELD_COUNT,
                ActiveModal::NewInspection => InspectionForm::FIELD_COUNT,
            };
        }
        match self.current_view() {
            View::Login => LoginForm::FIELD_COUNT,
            View::Register => RegisterForm::FIELD_COUNT,
            View::NewPassword => NewPasswordForm::FIELD_COUNT,
            View::ForgotPassword => ForgotPasswordForm::FIELD_COUNT,
            _ => 0,
        }
    }

    pub fn form_next_field(&mut self) {
        let count = self.field_count();
        if count > 0 {
            self.form_focus = (self.form_focus + 1) % count;
        }
    }

    pub fn form_prev_field(&mut self) {
        let count = self.field_count();
        if count > 0 {
            self.form_focus = (self.form_focus + count - 1) % count;
        }
    }

    /// True when the focused field of the open modal is its multi-line
    /// notes/observations field, which owns raw key input.
    ///
    pub fn notes_field_focused(&self) -> bool {
        match self.active_modal {
            Some(ActiveModal::NewApiary) => self.form_focus == 3,
            Some(ActiveModal::NewHarvest) => self.form_focus == 6,
            Some(ActiveModal::NewInspection) => self.form_focus == 1,
            None => false,
        }
    }

    pub fn notes_textarea_input(&mut self, input: impl Into<tui_textarea::Input>) {
        self.notes_textarea.input(input);
    }

    /// True when the focused field of the open inspection modal is one of
    /// the status selectors.
    ///
    pub fn option_field_focused(&self) -> bool {
        matches!(self.active_modal, Some(ActiveModal::NewInspection)) && self.form_focus >= 2
    }

    /// Cycle the focused status selector of the inspection form.
    ///
    pub fn form_cycle_option(&mut self) {
        if !matches!(self.active_modal, Some(ActiveModal::NewInspection)) {
            return;
        }
        match self.form_focus {
            2 => self.inspection_form.cycle_queen_status(),
            3 => self.inspection_form.cycle_brood_status(),
            4 => self.inspection_form.cycle_honey_status(),
            5 => self.inspection_form.cycle_health_status(),
            _ => {}
        }
    }

    fn focused_field_name(&self) -> Option<&'static str> {
        let names: &[&'static str] = if let Some(modal) = self.active_modal {
            match modal {
                ActiveModal::NewApiary => &ApiaryForm::FIELD_NAMES,
                ActiveModal::NewHarvest => &HarvestForm::FIELD_NAMES,
                ActiveModal::NewInspection => &InspectionForm::FIELD_NAMES,
            }
        } else {
            match self.current_view() {
                View::Login => &LoginForm::FIELD_NAMES,
                View::Register => &RegisterForm::FIELD_NAMES,
                View::NewPassword => &NewPasswordForm::FIELD_NAMES,
                View::ForgotPassword => &ForgotPasswordForm::FIELD_NAMES,
                _ => &[],
            }
        };
        names.get(self.form_focus).copied()
    }

    /// Append a character to the focused text field. Clears any pending
    /// error on that field, as typing restarts validation.
    ///
    pub fn form_input_char(&mut self, c: char) {
        if let Some(name) = self.focused_field_name() {
            self.form_errors.remove(name);
        }
        let focus = self.form_focus;
        if let Some(modal) = self.active_modal {
            match modal {
                ActiveModal::NewApiary => {
                    if let Some(field) = self.apiary_form.fields_mut().get_mut(focus) {
                        field.push(c);
                    }
                }
                ActiveModal::NewHarvest => {
                    if let Some(field) = self.harvest_form.fields_mut().get_mut(focus) {
                        field.push(c);
                    }
                }
                ActiveModal::NewInspection => {
                    if focus == 0 {
                        self.inspection_form.date.push(c);
                    }
                }
            }
            return;
        }
        match self.current_view() {
            View::Login => {
                if let Some(field) = self.login_form.fields_mut().get_mut(focus) {
                    field.push(c);
                }
            }
            View::Register => {
                if let Some(field) = self.register_form.fields_mut().get_mut(focus) {
                    field.push(c);
                }
            }
            View::NewPassword => {
                if let Some(field) = self.new_password_form.fields_mut().get_mut(focus) {
                    field.push(c);
                }
            }
            View::ForgotPassword => {
                if let Some(field) = self.forgot_password_form.fields_mut().get_mut(focus) {
                    field.push(c);
                }
            }
            _ => {}
        }
    }

    pub fn form_backspace(&mut self) {
        let focus = self.form_focus;
        if let Some(modal) = self.active_modal {
            match modal {
                ActiveModal::NewApiary => {
                    if let Some(field) = self.apiary_form.fields_mut().get_mut(focus) {
                        field.pop();
                    }
                }
                ActiveModal::NewHarvest => {
                    if let Some(field) = self.harvest_form.fields_mut().get_mut(focus) {
                        field.pop();
                    }
                }
                ActiveModal::NewInspection => {
                    if focus == 0 {
                        self.inspection_form.date.pop();
                    }
                }
            }
            return;
        }
        match self.current_view() {
            View::Login => {
                if let Some(field) = self.login_form.fields_mut().get_mut(focus) {
                    field.pop();
                }
            }
            View::Register => {
                if let Some(field) = self.register_form.fields_mut().get_mut(focus) {
                    field.pop();
                }
            }
            View::NewPassword => {
                if let Some(field) = self.new_password_form.fields_mut().get_mut(focus) {
                    field.pop();
                }
            }
            View::ForgotPassword => {
                if let Some(field) = self.forgot_password_form.fields_mut().get_mut(focus) {
                    field.pop();
                }
            }
            _ => {}
        }
    }

    // --- Submission -------------------------------------------------------

    /// Validate and submit whichever form owns the focus: the open modal if
    /// any, otherwise the current auth screen.
    ///
    pub fn submit(&mut self) {
        if self.busy {
            return;
        }
        if let Some(modal) = self.active_modal {
            match modal {
                ActiveModal::NewApiary => self.submit_apiary(),
                ActiveModal::NewHarvest => self.submit_harvest(),
                ActiveModal::NewInspection => self.submit_inspection(),
            }
            return;
        }
        match self.current_view() {
            View::Login => self.submit_login(),
            View::Register => self.submit_register(),
            View::ForgotPassword => self.submit_forgot_password(),
            View::NewPassword => self.submit_new_password(),
            _ => {}
        }
    }

    fn submit_login(&mut self) {
        let errors = self.login_form.validate();
        if errors.is_empty() {
            self.form_errors.clear();
            self.busy = true;
            self.send_session_event(SessionEvent::Login {
                email: self.login_form.email.trim().to_string(),
            });
        } else {
            self.form_errors = errors;
        }
    }

    fn submit_register(&mut self) {
        let errors = self.register_form.validate();
        if errors.is_empty() {
            self.form_errors.clear();
            self.busy = true;
            self.send_session_event(SessionEvent::Register {
                full_name: self.register_form.full_name.trim().to_string(),
                email: self.register_form.email.trim().to_string(),
            });
        } else {
            self.form_errors = errors;
        }
    }

    fn submit_forgot_password(&mut self) {
        let errors = self.forgot_password_form.validate();
        if errors.is_empty() {
            self.form_errors.clear();
            self.busy = true;
            self.send_session_event(SessionEvent::SendPasswordReset {
                email: self.forgot_password_form.email.trim().to_string(),
            });
        } else {
            self.form_errors = errors;
        }
    }

    fn submit_new_password(&mut self) {
        let errors = self.new_password_form.validate();
        if errors.is_empty() {
            self.form_errors.clear();
            self.busy = true;
            self.send_session_event(SessionEvent::UpdatePassword);
        } else {
            self.form_errors = errors;
        }
    }

    fn submit_apiary(&mut self) {
        self.apiary_form.notes = self.notes_textarea.lines().join("\n");
        let errors = self.apiary_form.validate();
        if !errors.is_empty() {
            self.form_errors = errors;
            return;
        }
        let apiary = self.apiary_form.build();
        info!("Created apiary '{}'", apiary.name);
        self.apiaries.push(apiary);
        self.close_modal();
        self.set_flash("Apiary saved.");
    }

    fn submit_harvest(&mut self) {
        self.harvest_form.notes = self.notes_textarea.lines().join("\n");
        let errors = self.harvest_form.validate();
        if !errors.is_empty() {
            self.form_errors = errors;
            return;
        }
        let record = self.harvest_form.build();
        info!(
            "Recorded harvest of {} kg honey for hive {}",
            record.honey, record.hive_id
        );
        self.harvests.entry(record.year).or_default().push(record);
        self.close_modal();
        self.set_flash("Harvest saved.");
    }

    fn submit_inspection(&mut self) {
        self.inspection_form.observations = self.notes_textarea.lines().join("\n");
        let errors = self.inspection_form.validate();
        if !errors.is_empty() {
            self.form_errors = errors;
            return;
        }
        let hive_id = match &self.selected_hive {
            Some(hive) => hive.id,
            None => {
                warn!("Inspection submitted without a selected hive");
                self.close_modal();
                return;
            }
        };
        let record = self.inspection_form.build();
        info!("Recorded inspection for hive id {}", hive_id);
        // The inspection date becomes the hive's last inspection
        if let Some(hive) = self.selected_hive.as_mut() {
            hive.last_inspection = record.date.clone();
        }
        if let Some(hive) = self.hives.iter_mut().find(|h| h.id == hive_id) {
            hive.last_inspection = record.date.clone();
        }
        self.inspections.entry(hive_id).or_default().push(record);
        self.close_modal();
        self.set_flash("Inspection recorded.");
    }

    // --- Terminal chrome --------------------------------------------------

    #[allow(dead_code)]
    pub fn terminal_size(&self) -> Rect {
        self.terminal_size
    }

    pub fn set_terminal_size(&mut self, size: Rect) {
        self.terminal_size = size;
    }

    pub fn spinner_index(&self) -> usize {
        self.spinner_index
    }

    pub fn advance_spinner(&mut self) {
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::View;
    use std::sync::mpsc;

    fn state_with_channel() -> (State, mpsc::Receiver<SessionEvent>) {
        let (session_tx, session_rx) = mpsc::channel();
        let (config_tx, _config_rx) = mpsc::channel();
        // Keep the config receiver alive long enough for the test
        std::mem::forget(_config_rx);
        (
            State::new(session_tx, config_tx, Profile::default()),
            session_rx,
        )
    }

    #[test]
    fn test_resolve_session_routes_screen_set() {
        let mut state = State::default();
        assert!(state.auth().is_loading());
        state.resolve_session(false);
        assert_eq!(state.current_view(), View::Login);
        assert!(!state.auth().is_authenticated());

        let mut state = State::default();
        state.resolve_session(true);
        assert_eq!(state.current_view(), View::Home);
        assert!(state.auth().is_authenticated());
    }

    #[test]
    fn test_login_submit_with_errors_stays_put() {
        let (mut state, rx) = state_with_channel();
        state.resolve_session(false);
        state.submit();
        assert!(state.form_errors().contains_key("email"));
        assert!(state.form_errors().contains_key("password"));
        assert!(!state.is_busy());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_login_submit_dispatches_event() {
        let (mut state, rx) = state_with_channel();
        state.resolve_session(false);
        for c in "user@example.com".chars() {
            state.form_input_char(c);
        }
        state.form_next_field();
        for c in "secret123".chars() {
            state.form_input_char(c);
        }
        state.submit();
        assert!(state.is_busy());
        match rx.try_recv().unwrap() {
            SessionEvent::Login { email } => assert_eq!(email, "user@example.com"),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_typing_clears_field_error() {
        let (mut state, _rx) = state_with_channel();
        state.resolve_session(false);
        state.submit();
        assert!(state.form_errors().contains_key("email"));
        state.form_input_char('a');
        assert!(!state.form_errors().contains_key("email"));
        assert!(state.form_errors().contains_key("password"));
    }

    #[test]
    fn test_apiary_modal_rejects_invalid_draft() {
        let mut state = State::default();
        state.resolve_session(true);
        state.view_stack = vec![View::Apiaries];
        let before = state.apiaries().len();
        state.open_new_apiary_modal();
        // name/location blank, hives count invalid
        state.form_focus = 2;
        state.form_input_char('-');
        state.form_input_char('3');
        state.submit();
        assert!(state.form_errors().contains_key("name"));
        assert!(state.form_errors().contains_key("hivesCount"));
        assert_eq!(state.apiaries().len(), before);
        assert!(state.active_modal().is_some());
    }

    #[test]
    fn test_apiary_modal_appends_on_accept() {
        let mut state = State::default();
        state.resolve_session(true);
        state.view_stack = vec![View::Apiaries];
        let before = state.apiaries().len();
        state.open_new_apiary_modal();
        for c in "Garden Apiary".chars() {
            state.form_input_char(c);
        }
        state.form_next_field();
        for c in "East Meadow".chars() {
            state.form_input_char(c);
        }
        state.submit();
        assert_eq!(state.apiaries().len(), before + 1);
        assert!(state.active_modal().is_none());
        let created = state.apiaries().last().unwrap();
        assert_eq!(created.name, "Garden Apiary");
        assert_eq!(created.hives_count, 0);
        assert_eq!(created.honey_production, "0 kg");
    }

    #[test]
    fn test_harvest_modal_appends_by_derived_year() {
        let mut state = State::default();
        state.resolve_session(true);
        state.view_stack = vec![View::Harvest];
        let before = state.current_year_records().len();
        state.open_new_harvest_modal();
        let entries = [
            "HIVE-001",
            "Hive A-1",
            "25.5",
            "",
            "",
            "2024-03-18",
        ];
        for (i, text) in entries.iter().enumerate() {
            state.form_focus = i;
            for c in text.chars() {
                state.form_input_char(c);
            }
        }
        state.submit();
        assert!(state.active_modal().is_none());
        assert_eq!(state.current_year_records().len(), before + 1);
        let record = state.current_year_records().last().unwrap();
        assert_eq!(record.honey, 25.5);
        assert_eq!(record.pollen, 0.0);
        assert_eq!(record.month, "March");
    }

    #[test]
    fn test_inspection_updates_hive_and_log() {
        let mut state = State::default();
        state.resolve_session(true);
        state.view_stack = vec![View::Apiaries];
        state.apiaries_next();
        state.open_selected_apiary();
        state.hives_next();
        state.open_selected_hive();
        assert_eq!(state.current_view(), View::HiveDetail);

        state.open_new_inspection_modal();
        for c in "2024-02-01".chars() {
            state.form_input_char(c);
        }
        state.submit();
        assert!(state.active_modal().is_none());
        assert_eq!(state.inspections_for_selected_hive().len(), 1);
        assert_eq!(state.selected_hive().unwrap().last_inspection, "2024-02-01");
        let hive_id = state.selected_hive().unwrap().id;
        let listed = state.hives().iter().find(|h| h.id == hive_id).unwrap();
        assert_eq!(listed.last_inspection, "2024-02-01");
    }

    #[test]
    fn test_detail_access_requires_selection() {
        let state = State::default();
        assert!(matches!(
            state.selected_apiary(),
            Err(StateError::ApiaryNotSelected)
        ));
        assert!(matches!(
            state.selected_hive(),
            Err(StateError::HiveNotSelected)
        ));
    }

    #[test]
    fn test_hive_filter_cycling() {
        let mut state = State::default();
        assert_eq!(state.filtered_hives().len(), 2);
        state.cycle_hive_filter();
        assert_eq!(state.hive_filter(), HiveFilter::Active);
        assert_eq!(state.filtered_hives().len(), 1);
        state.cycle_hive_filter();
        assert_eq!(state.hive_filter(), HiveFilter::Critical);
        assert_eq!(state.filtered_hives().len(), 1);
        state.cycle_hive_filter();
        assert_eq!(state.hive_filter(), HiveFilter::Dead);
        assert!(state.filtered_hives().is_empty());
        state.cycle_hive_filter();
        assert_eq!(state.hive_filter(), HiveFilter::All);
    }

    #[test]
    fn test_year_cycling_wraps() {
        let mut state = State::default();
        assert_eq!(state.selected_year(), 2024);
        state.next_year();
        assert_eq!(state.selected_year(), 2023);
        state.next_year();
        assert_eq!(state.selected_year(), 2022);
        assert!(state.current_year_records().is_empty());
        state.next_year();
        assert_eq!(state.selected_year(), 2024);
        state.prev_year();
        assert_eq!(state.selected_year(), 2022);
    }

    #[test]
    fn test_drawer_navigation() {
        let mut state = State::default();
        state.resolve_session(true);
        state.toggle_focus();
        assert_eq!(state.focus(), Focus::Drawer);
        state.drawer_next();
        state.drawer_next();
        state.activate_drawer_item();
        assert_eq!(state.current_view(), View::Harvest);
        assert_eq!(state.focus(), Focus::View);
    }

    #[test]
    fn test_logout_confirmation_flow() {
        let (mut state, rx) = state_with_channel();
        state.resolve_session(true);
        state.view_stack = vec![View::Settings];
        state.request_logout();
        assert!(state.logout_confirmation_pending());
        state.cancel_logout();
        assert!(state.logout_confirmation_pending() == false);
        state.request_logout();
        state.confirm_logout();
        assert!(matches!(rx.try_recv().unwrap(), SessionEvent::Logout));
        state.complete_logout();
        assert_eq!(state.current_view(), View::Login);
        assert!(!state.auth().is_authenticated());
    }

    #[test]
    fn test_modal_dismiss_discards_draft() {
        let mut state = State::default();
        state.resolve_session(true);
        state.open_new_apiary_modal();
        for c in "Draft".chars() {
            state.form_input_char(c);
        }
        state.close_modal();
        assert!(state.active_modal().is_none());
        state.open_new_apiary_modal();
        assert!(state.apiary_form().name.is_empty());
    }
}
