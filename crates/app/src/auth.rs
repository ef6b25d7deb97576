use api_client::ProtocolApi;
use dioxus::prelude::*;
use shared_types::{AppError, SessionUser};

use crate::storage::Drafts;

/// Global session state. The identity also lives in the draft store so a
/// reopened app resumes the session; this signal is the live copy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub current_user: Signal<Option<SessionUser>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    /// Set the live session and persist it to the store.
    pub fn sign_in(&mut self, drafts: &Drafts, user: SessionUser) {
        if let Err(e) = drafts.save_session(&user) {
            tracing::warn!(error = %e, "session not persisted, login is memory-only");
        }
        self.current_user.set(Some(user));
    }

    /// Restore a persisted session into the live signal, if any.
    pub fn restore(&mut self, drafts: &Drafts) {
        if self.current_user.read().is_some() {
            return;
        }
        if let Some(user) = drafts.load_session() {
            self.current_user.set(Some(user));
        }
    }

    /// Drop the live session and the persisted identity.
    pub fn sign_out(&mut self, drafts: &Drafts) {
        drafts.clear_session();
        self.current_user.set(None);
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Credential check plus employee lookup, reduced to the session identity.
/// The first employee row carries the identity; an empty lookup is an error
/// because submissions need the employee id.
pub async fn sign_in_flow<A: ProtocolApi>(
    api: &A,
    username: &str,
    password: &str,
) -> Result<SessionUser, AppError> {
    let outcome = api.authenticate(username, password).await?;
    let details = api.employee_details(outcome.user_id).await?;
    let first = details.into_iter().next().ok_or_else(|| {
        AppError::authentication("No employee record is linked to this account.")
    })?;
    Ok(SessionUser {
        user_id: first.user_id,
        employee_id: first.employee_id,
        full_name: first.full_name,
        username: username.to_string(),
    })
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// Hook to access the draft store.
pub fn use_drafts() -> Drafts {
    use_context::<Drafts>()
}
