//! Authentication state machine.
//!
//! Three phases: `Loading` while the session store is read once at startup,
//! then `Unauthenticated` or `Authenticated`. Login and logout are the only
//! other transitions; there is no token expiry or refresh.

/// Specifying the authentication phases.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AuthPhase {
    Loading,
    Unauthenticated,
    Authenticated,
}

/// Holds the current authentication phase and applies transitions.
///
#[derive(Debug, Clone, Copy)]
pub struct AuthState {
    phase: AuthPhase,
}

impl Default for AuthState {
    fn default() -> AuthState {
        AuthState {
            phase: AuthPhase::Loading,
        }
    }
}

impl AuthState {
    pub fn phase(&self) -> AuthPhase {
        self.phase
    }

    /// True only during the initial session store read.
    ///
    pub fn is_loading(&self) -> bool {
        self.phase == AuthPhase::Loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == AuthPhase::Authenticated
    }

    /// Resolve the startup read: a present token authenticates, anything
    /// else (including a failed read) lands on the login screen.
    ///
    pub fn resolve(&mut self, token_present: bool) {
        self.phase = if token_present {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Unauthenticated
        };
    }

    /// Flip to authenticated. Called once the store write attempt has
    /// completed; a failed write does not block the transition.
    ///
    pub fn login(&mut self) {
        self.phase = AuthPhase::Authenticated;
    }

    /// Flip to unauthenticated after the store clear attempt.
    ///
    pub fn logout(&mut self) {
        self.phase = AuthPhase::Unauthenticated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase_is_loading() {
        let auth = AuthState::default();
        assert!(auth.is_loading());
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_resolve_without_token() {
        let mut auth = AuthState::default();
        auth.resolve(false);
        assert_eq!(auth.phase(), AuthPhase::Unauthenticated);
    }

    #[test]
    fn test_resolve_with_token() {
        let mut auth = AuthState::default();
        auth.resolve(true);
        assert_eq!(auth.phase(), AuthPhase::Authenticated);
    }

    #[test]
    fn test_login_then_logout() {
        let mut auth = AuthState::default();
        auth.resolve(false);
        auth.login();
        assert!(auth.is_authenticated());
        auth.logout();
        assert!(!auth.is_authenticated());
        assert!(!auth.is_loading());
    }
}
