//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionProvider` owns the signal and is the only code that resolves the
//! startup probe. Everything else receives a `SessionHandle`, which can read
//! the identity and replace it (sign-in / sign-out) but never touch the
//! loading flag.
//!
//! LIFECYCLE
//! =========
//! `Loading -> {Authenticated, Anonymous}` on the probe, then only explicit
//! `set_identity` calls.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::{AuthUser, MeResponse};

/// Minimal authenticated principal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
}

impl Identity {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl From<&AuthUser> for Identity {
    fn from(user: &AuthUser) -> Self {
        Self::new(user.id.clone())
    }
}

/// Result of the startup identity probe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    Authenticated(Identity),
    Anonymous,
}

impl ProbeOutcome {
    /// Interpret a `/auth/me` result. Any failure means no session.
    pub fn from_probe(result: Result<MeResponse, ApiError>) -> Self {
        match result {
            Ok(me) if me.valid => ProbeOutcome::Authenticated(Identity::new(me.user_id)),
            Ok(_) => ProbeOutcome::Anonymous,
            Err(err) => {
                log::debug!("session probe failed, continuing anonymously: {err}");
                ProbeOutcome::Anonymous
            }
        }
    }
}

/// Probe the server for an existing session.
pub async fn probe<T: Transport + 'static>(client: &ApiClient<T>) -> ProbeOutcome {
    ProbeOutcome::from_probe(client.me().await)
}

/// End the server session, then drop the local identity.
///
/// The identity is cleared even when the logout call fails so the tab never
/// keeps acting as a user the server may already have forgotten.
///
/// # Errors
///
/// Returns the logout failure after the identity has been cleared.
pub async fn sign_out<T: Transport + 'static>(client: &ApiClient<T>, session: &SessionHandle) -> Result<(), ApiError> {
    let result = client.logout().await;
    if let Err(err) = &result {
        log::warn!("logout request failed: {err}");
    }
    session.set_identity(None);
    result
}

/// Current identity plus whether the startup probe is still pending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    user: Option<Identity>,
    loading: bool,
}

impl Session {
    /// Fresh session awaiting its probe.
    pub fn new() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    pub fn user(&self) -> Option<&Identity> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Resolve the probe and leave the loading state.
    pub fn apply_probe(&mut self, outcome: ProbeOutcome) {
        self.user = match outcome {
            ProbeOutcome::Authenticated(identity) => Some(identity),
            ProbeOutcome::Anonymous => None,
        };
        self.loading = false;
    }

    pub fn set_identity(&mut self, user: Option<Identity>) {
        self.user = user;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Copyable capability handed to consumers through context.
#[derive(Clone, Copy, Debug)]
pub struct SessionHandle {
    state: RwSignal<Session>,
}

impl SessionHandle {
    pub(crate) fn new() -> Self {
        Self {
            state: RwSignal::new(Session::new()),
        }
    }

    /// Snapshot of the session (tracked).
    pub fn get(&self) -> Session {
        self.state.get()
    }

    /// Current identity (tracked).
    pub fn user(&self) -> Option<Identity> {
        self.state.with(|s| s.user().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(Session::is_authenticated)
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(Session::is_loading)
    }

    /// Sign-in sets the identity, sign-out clears it.
    pub fn set_identity(&self, user: Option<Identity>) {
        self.state.update(|s| s.set_identity(user));
    }

    pub(crate) fn finish_probe(&self, outcome: ProbeOutcome) {
        self.state.update(|s| s.apply_probe(outcome));
    }
}

/// Fetch the session handle from context.
pub fn use_session() -> SessionHandle {
    expect_context::<SessionHandle>()
}
