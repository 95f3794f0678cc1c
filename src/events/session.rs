use crate::session::SessionStore;
use crate::state::State;
use anyhow::Result;
use chrono::Utc;
use log::*;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Simulated round-trip latencies for authentication operations.
const LOGIN_DELAY: Duration = Duration::from_secs(1);
const REGISTER_DELAY: Duration = Duration::from_secs(2);
const PASSWORD_DELAY: Duration = Duration::from_secs(2);

/// Specify different session event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    CheckSession,
    Login { email: String },
    Logout,
    Register { full_name: String, email: String },
    SendPasswordReset { email: String },
    UpdatePassword,
}

/// Specify struct for managing state with session events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    store: &'a SessionStore,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, store: &'a SessionStore) -> Self {
        Handler { state, store }
    }

    /// Handle session events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing session event '{:?}'...", event);
        match event {
            Event::CheckSession => self.check_session().await,
            Event::Login { email } => self.login(email).await,
            Event::Logout => self.logout().await,
            Event::Register { full_name, email } => self.register(full_name, email).await,
            Event::SendPasswordReset { email } => self.send_password_reset(email).await,
            Event::UpdatePassword => self.update_password().await,
        }
        Ok(())
    }

    /// Resolve the startup authentication phase from the stored token.
    ///
    async fn check_session(&mut self) {
        info!("Checking for a stored session token...");
        let token_present = match self.store.get() {
            Ok(token) => token.is_some(),
            Err(e) => {
                // An unreadable slot counts as no session
                error!("Failed to read session token: {}", e);
                false
            }
        };
        let mut state = self.state.lock().await;
        state.resolve_session(token_present);
    }

    /// Store a session token and flip the application to authenticated.
    /// Token persistence failures do not abort the login; the session then
    /// simply does not survive a restart.
    ///
    async fn login(&mut self, email: String) {
        info!("Signing in as '{}'...", email);
        tokio::time::sleep(LOGIN_DELAY).await;
        let token = format!("session-{}", Utc::now().timestamp_millis());
        if let Err(e) = self.store.set(&token) {
            error!("Failed to persist session token: {}", e);
        }
        let mut state = self.state.lock().await;
        state.complete_login();
    }

    /// Clear the session slot and flip the application to unauthenticated.
    /// Like login, a failed clear is logged but does not block the flow.
    ///
    async fn logout(&mut self) {
        info!("Signing out...");
        if let Err(e) = self.store.clear() {
            error!("Failed to clear session token: {}", e);
        }
        let mut state = self.state.lock().await;
        state.complete_logout();
    }

    /// Simulate account creation. Registration does not sign the user in;
    /// it routes back to the login screen.
    ///
    async fn register(&mut self, full_name: String, email: String) {
        info!("Registering account for '{}' ({})...", full_name, email);
        tokio::time::sleep(REGISTER_DELAY).await;
        let mut state = self.state.lock().await;
        state.complete_registration();
    }

    async fn send_password_reset(&mut self, email: String) {
        info!("Sending password reset instructions to '{}'...", email);
        tokio::time::sleep(PASSWORD_DELAY).await;
        let mut state = self.state.lock().await;
        state.complete_password_reset_request();
    }

    async fn update_password(&mut self) {
        info!("Updating password...");
        tokio::time::sleep(PASSWORD_DELAY).await;
        let mut state = self.state.lock().await;
        state.complete_password_update();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::View;
    use std::fs;

    fn temp_store(label: &str) -> (SessionStore, std::path::PathBuf) {
        let dir = std::env::temp_dir().join(format!(
            "apiary-tui-session-events-{}-{}",
            label,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        (SessionStore::new(&dir), dir)
    }

    #[tokio::test]
    async fn test_check_session_without_token() {
        let (store, dir) = temp_store("none");
        let state = Arc::new(Mutex::new(State::default()));
        let mut handler = Handler::new(&state, &store);
        handler.handle(Event::CheckSession).await.unwrap();
        let state = state.lock().await;
        assert!(!state.auth().is_loading());
        assert!(!state.auth().is_authenticated());
        assert_eq!(state.current_view(), View::Login);
        fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_check_session_with_token() {
        let (store, dir) = temp_store("some");
        store.set("session-1").unwrap();
        let state = Arc::new(Mutex::new(State::default()));
        let mut handler = Handler::new(&state, &store);
        handler.handle(Event::CheckSession).await.unwrap();
        let state = state.lock().await;
        assert!(state.auth().is_authenticated());
        assert_eq!(state.current_view(), View::Home);
        fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_login_stores_token_and_authenticates() {
        let (store, dir) = temp_store("login");
        let state = Arc::new(Mutex::new(State::default()));
        {
            let mut state = state.lock().await;
            state.resolve_session(false);
            state.set_busy(true);
        }
        let mut handler = Handler::new(&state, &store);
        handler
            .handle(Event::Login {
                email: "user@example.com".to_string(),
            })
            .await
            .unwrap();
        let state = state.lock().await;
        assert!(state.auth().is_authenticated());
        assert!(!state.is_busy());
        assert_eq!(state.current_view(), View::Home);
        assert!(store.get().unwrap().is_some());
        fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_logout_clears_token() {
        let (store, dir) = temp_store("logout");
        store.set("session-1").unwrap();
        let state = Arc::new(Mutex::new(State::default()));
        {
            let mut state = state.lock().await;
            state.resolve_session(true);
        }
        let mut handler = Handler::new(&state, &store);
        handler.handle(Event::Logout).await.unwrap();
        let state = state.lock().await;
        assert!(!state.auth().is_authenticated());
        assert_eq!(state.current_view(), View::Login);
        assert!(store.get().unwrap().is_none());
        fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_logout_completes_even_without_store_dir() {
        // Point the store at a path whose parent cannot exist as a directory
        let dir = std::env::temp_dir().join(format!(
            "apiary-tui-session-events-missing-{}",
            std::process::id()
        ));
        let store = SessionStore::new(&dir);
        let state = Arc::new(Mutex::new(State::default()));
        {
            let mut state = state.lock().await;
            state.resolve_session(true);
        }
        let mut handler = Handler::new(&state, &store);
        handler.handle(Event::Logout).await.unwrap();
        let state = state.lock().await;
        assert!(!state.auth().is_authenticated());
    }
}
