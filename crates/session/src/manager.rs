use tracing::{debug, warn};

use shared_types::{LoginRequest, LoginResponse, Role, SessionUser};

use crate::api::AuthApi;
use crate::errors::{ApiError, LoginError};
use crate::store::SessionStore;
use crate::token;

/// Where the session currently stands.
///
/// `Loading` exists only between construction and the first store read;
/// it is never re-entered.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthPhase {
    Loading,
    Authenticated(SessionUser),
    Unauthenticated,
}

/// Owns the session state machine and the persisted session pair.
///
/// Every store write in the application goes through this type; all
/// other components observe derived state. Session changes while
/// signed in go through logout + login; the login surface is kept
/// unreachable while a session is active.
pub struct SessionManager {
    store: SessionStore,
    phase: AuthPhase,
    generation: u64,
}

impl SessionManager {
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            phase: AuthPhase::Loading,
            generation: 0,
        }
    }

    /// Resolve the initial phase from whatever the store holds.
    ///
    /// A complete stored pair is adopted verbatim; the token is not
    /// re-decoded. Anything short of a complete pair reads as no
    /// session and the leftovers are cleared. Calling again after the
    /// phase has resolved is a no-op.
    pub fn init(&mut self) {
        if self.phase != AuthPhase::Loading {
            return;
        }

        match (self.store.token(), self.store.user()) {
            (Some(_), Some(user)) => {
                debug!("session restored for {}", user.email);
                self.phase = AuthPhase::Authenticated(user);
            }
            (None, None) => {
                self.phase = AuthPhase::Unauthenticated;
            }
            _ => {
                warn!("incomplete session pair in storage, clearing");
                self.store.clear_session();
                self.phase = AuthPhase::Unauthenticated;
            }
        }
    }

    /// Start a login attempt, superseding any still in flight. The
    /// returned ticket is handed back to [`SessionManager::finish_login`].
    pub fn begin_login(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Settle a login attempt.
    ///
    /// A stale ticket (a newer attempt has begun since) is discarded
    /// without touching state or store, regardless of its outcome. On
    /// success the session pair is written before the phase changes, so
    /// observers never see an authenticated state the store does not
    /// back.
    pub fn finish_login(
        &mut self,
        ticket: u64,
        outcome: Result<LoginResponse, ApiError>,
    ) -> Result<SessionUser, LoginError> {
        if ticket != self.generation {
            warn!("discarding superseded login settlement (ticket {})", ticket);
            return Err(LoginError::Superseded);
        }

        let response = outcome.map_err(LoginError::Api)?;
        if !response.status {
            let message = response
                .message
                .unwrap_or_else(|| "Login failed".to_string());
            return Err(LoginError::Rejected { message });
        }

        let token = response.access_token().ok_or(LoginError::MissingToken)?;
        let claims = token::decode(token).map_err(LoginError::BadToken)?;
        let role_name = claims.primary_role().ok_or(LoginError::MissingRole)?;

        let user = SessionUser::new(claims.sub.clone(), claims.user_id.clone(), role_name);
        self.store.write_session(token, &user);
        self.phase = AuthPhase::Authenticated(user.clone());
        debug!("session established for {}", user.email);
        Ok(user)
    }

    /// Submit credentials and settle the result in one call.
    ///
    /// Callers that cannot hold a borrow across the network await (UI
    /// signals) drive [`SessionManager::begin_login`] and
    /// [`SessionManager::finish_login`] around the call themselves.
    pub async fn login(
        &mut self,
        api: &impl AuthApi,
        request: &LoginRequest,
    ) -> Result<SessionUser, LoginError> {
        let ticket = self.begin_login();
        let outcome = api.login(request).await;
        self.finish_login(ticket, outcome)
    }

    /// Drop the session locally. Idempotent; no backend call.
    pub fn logout(&mut self) {
        self.store.clear_session();
        self.phase = AuthPhase::Unauthenticated;
        debug!("session cleared");
    }

    /// Drop the session after the backend rejected it with a 401.
    /// Never navigates; guards react to the state change.
    pub fn invalidate(&mut self) {
        warn!("session invalidated by backend response");
        self.logout();
    }

    pub fn phase(&self) -> &AuthPhase {
        &self.phase
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.phase, AuthPhase::Authenticated(_))
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<&SessionUser> {
        match &self.phase {
            AuthPhase::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// The canonical role of the signed-in user, when the stored role
    /// name maps to one.
    pub fn current_role(&self) -> Option<Role> {
        self.current_user().and_then(|u| Role::parse(u.role_name()))
    }

    /// The stored bearer token for outgoing requests.
    pub fn current_token(&self) -> Option<String> {
        if self.is_authenticated() {
            self.store.token()
        } else {
            None
        }
    }
}
