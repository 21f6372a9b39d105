//! Single-user, in-memory login gate.
//!
//! This is a placeholder gate for one interactive run. Credentials are held
//! as plain strings for the lifetime of the process and are never stored.

use std::fmt;

/// Notice shown when the repeated credentials do not match
pub const INVALID_CREDENTIALS_NOTICE: &str = "Invalid login credentials.";

/// The one registered username/password pair
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Where the gate is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    Unregistered,
    Registered,
    Authenticated,
    Rejected,
}

#[derive(Debug)]
pub struct SessionGate {
    credentials: Option<Credentials>,
    state: GateState,
}

impl Default for SessionGate {
    fn default() -> Self {
        Self {
            credentials: None,
            state: GateState::Unregistered,
        }
    }
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the credential pair, replacing any earlier registration
    pub fn register(&mut self, username: impl Into<String>, password: impl Into<String>) {
        let credentials = Credentials::new(username, password);
        tracing::debug!("Registered user {:?}", credentials.username);
        self.credentials = Some(credentials);
        self.state = GateState::Registered;
    }

    /// Check a candidate pair against the registered one
    ///
    /// Both fields must match exactly (case-sensitive). Without a prior
    /// registration every attempt is rejected.
    pub fn authenticate(&mut self, username: &str, password: &str) -> bool {
        let accepted = self
            .credentials
            .as_ref()
            .is_some_and(|c| c.matches(username, password));

        self.state = if accepted {
            GateState::Authenticated
        } else {
            tracing::warn!("Login rejected for {:?}", username);
            GateState::Rejected
        };

        accepted
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Registered username, if any
    pub fn username(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.username.as_str())
    }
}
