#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "token";

/// Injected session context holding the bearer token.
///
/// The token is the only client-side session state; validity is determined
/// solely by server responses. Mutated only by login/register (set) and by
/// logout or a 401 (clear).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
}

impl SessionState {
    /// Initial session state, restored from localStorage in the browser.
    pub fn from_storage() -> Self {
        Self { token: read_token() }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Read the persisted token from localStorage.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the token to localStorage.
pub fn write_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the persisted token from localStorage.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

/// Store a freshly issued token and update the session context.
pub fn sign_in(session: RwSignal<SessionState>, token: String) {
    write_token(&token);
    session.update(|s| s.token = Some(token));
}

/// Drop the session after a logout or a 401.
///
/// The dashboard watches the session context and navigates to `/login`
/// whenever the token becomes absent, so expiring here forces
/// re-authentication.
pub fn expire(session: RwSignal<SessionState>) {
    clear_token();
    session.update(|s| s.token = None);
}
