use leptos::prelude::*;

// The fixed administrative credential pair. A toy gate for the demo admin
// area, not a security boundary: no hashing, no tokens, no server.
const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin";

/// Fixed message shown on any failed login. No lockout, no retry counting.
pub const LOGIN_ERROR_MESSAGE: &str = "Usuário ou senha inválidos.";

/// Pure credential predicate, kept out of the reactive state so the rule is
/// testable on the host.
pub fn credentials_valid(username: &str, password: &str) -> bool {
    username == ADMIN_USERNAME && password == ADMIN_PASSWORD
}

/// Process-wide session gate: {LoggedOut, LoggedIn}.
///
/// Created once at app start, initial state LoggedOut, mutated only through
/// `login`/`logout`, reset only by a full reload. Nothing is persisted.
#[derive(Clone, Copy)]
pub struct Session {
    authenticated: RwSignal<bool>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            authenticated: RwSignal::new(false),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    /// Synchronous credential check; never partially succeeds. A failure
    /// leaves the state untouched and the caller shows
    /// [`LOGIN_ERROR_MESSAGE`].
    pub fn login(&self, username: &str, password: &str) -> bool {
        let ok = credentials_valid(username, password);
        if ok {
            log::info!("admin session opened");
            self.authenticated.set(true);
        }
        ok
    }

    pub fn logout(&self) {
        log::info!("admin session closed");
        self.authenticated.set(false);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the session installed by `App`.
pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_configured_pair_is_accepted() {
        assert!(credentials_valid("admin", "admin"));
        assert!(!credentials_valid("admin", "wrong"));
        assert!(!credentials_valid("root", "admin"));
        assert!(!credentials_valid("Admin", "admin"));
        assert!(!credentials_valid("", ""));
    }
}
