//! Login gate and session state.
//!
//! The gate is a mock: any pair of non-empty fields is accepted and nothing
//! is checked against stored credentials.

use tracing::info;

/// Draft contents of the login form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Gate {
    identifier: String,
    secret: String,
}

impl Gate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_identifier(&mut self, identifier: impl Into<String>) {
        self.identifier = identifier.into();
    }

    pub fn set_secret(&mut self, secret: impl Into<String>) {
        self.secret = secret.into();
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Length of the secret in characters, for masked display.
    pub fn secret_len(&self) -> usize {
        self.secret.chars().count()
    }

    /// Press the login control. Calls `on_accept` once when both fields are
    /// non-empty and returns whether it did; otherwise does nothing.
    pub fn submit<F: FnOnce()>(&self, on_accept: F) -> bool {
        if self.identifier.is_empty() || self.secret.is_empty() {
            return false;
        }
        on_accept();
        true
    }
}

/// Session state. `LoggedIn` is terminal: there is no logout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    LoggedOut(Gate),
    LoggedIn,
}

impl Default for Session {
    fn default() -> Self {
        Session::LoggedOut(Gate::new())
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The login form, while logged out.
    pub fn gate_mut(&mut self) -> Option<&mut Gate> {
        match self {
            Session::LoggedOut(gate) => Some(gate),
            Session::LoggedIn => None,
        }
    }

    /// Submit the login form. Moves to `LoggedIn` when the gate accepts,
    /// dropping the draft fields. Returns whether the session is now
    /// logged in.
    pub fn submit(&mut self) -> bool {
        let accepted = match self {
            Session::LoggedOut(gate) => {
                let mut fired = false;
                gate.submit(|| fired = true);
                fired
            }
            Session::LoggedIn => return true,
        };
        if accepted {
            info!("login accepted");
            *self = Session::LoggedIn;
        }
        accepted
    }
}
